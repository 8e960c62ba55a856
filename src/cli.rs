use clap::{Parser, ValueEnum};

use crate::core::{self, Notification, Scheme};

/// Shows a short-lived notification popup in the bottom-right corner of the screen
#[derive(Parser, Debug)]
#[command(name = "popnote", version, long_about = None)]
pub struct Cli {
    /// Window title
    #[arg(long, default_value = "")]
    pub title: String,

    /// Message to display
    #[arg(long, default_value = "")]
    pub message: String,

    /// Seconds before the popup closes on its own
    ///
    /// Kept as raw text so that an unreadable value closes the popup
    /// immediately instead of aborting.
    #[arg(long, default_value_t = core::DEFAULT_DURATION_SECS.to_string(), allow_hyphen_values = true)]
    pub duration: String,

    /// Color scheme of the popup card
    #[arg(long, value_enum, default_value_t)]
    pub theme: SchemeArg,

    /// Post through the desktop notification service instead of drawing a popup
    #[arg(long)]
    pub native: bool,
}

impl Cli {
    pub fn notification(&self) -> Notification {
        Notification::new(
            self.title.clone(),
            self.message.clone(),
            core::parse_duration(&self.duration),
        )
        .with_scheme(self.theme.into())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum SchemeArg {
    #[default]
    Light,
    Dark,
}

impl From<SchemeArg> for Scheme {
    fn from(arg: SchemeArg) -> Self {
        match arg {
            SchemeArg::Light => Scheme::Light,
            SchemeArg::Dark => Scheme::Dark,
        }
    }
}
