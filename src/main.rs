use clap::Parser;
use iced::{daemon::Appearance, window, Color, Theme};
use tracing_subscriber::EnvFilter;

use crate::{
    cli::Cli,
    core::{placement, Error, Scheme},
    ui::{components::notification, State},
};

pub mod cli;
pub mod core;
pub mod ui;

fn main() -> Result<(), Error> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("popnote=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let popup = cli.notification();

    tracing::info!(
        title = %popup.title,
        duration = ?popup.duration,
        native = cli.native,
        "showing notification"
    );

    if cli.native {
        return tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()?
            .block_on(notification::notification(&popup));
    }

    let theme = match popup.scheme {
        Scheme::Light => Theme::Light,
        Scheme::Dark => Theme::Dark,
    };

    iced::application(State::title, State::update, State::view)
        .subscription(State::subscription)
        .theme(move |_state| theme.clone())
        .style(|_state, _theme| Appearance {
            background_color: Color::TRANSPARENT,
            text_color: Color::BLACK,
        })
        .window(window::Settings {
            size: placement::WINDOW_SIZE,
            position: window::Position::SpecificWith(placement::bottom_right),
            resizable: false,
            decorations: false,
            transparent: true,
            level: window::Level::AlwaysOnTop,
            ..window::Settings::default()
        })
        .run_with(move || State::new(popup))?;

    Ok(())
}
