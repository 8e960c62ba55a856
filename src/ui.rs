use std::time::{Duration, Instant};

use iced::{
    alignment::Horizontal,
    widget::{center, container, mouse_area, text},
    window, Element, Length, Subscription, Task,
};

use crate::core::{
    fade::{Animation, Fade, FADE_IN, FADE_OUT},
    Notification,
};

use style::popup::{self, Style};

pub mod components;
pub mod style;

pub struct State {
    notification: Notification,
    phase: Phase,
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Phase {
    Showing(Animation),
    Dismissing(Animation),
}

#[derive(Debug, Clone)]
pub enum Message {
    Frame(Instant),
    Dismiss,
    Expired,
}

impl State {
    pub fn new(notification: Notification) -> (Self, Task<Message>) {
        let close_after = notification.duration;

        (
            Self {
                notification,
                phase: Phase::Showing(Animation::new(FADE_IN)),
            },
            Task::perform(expire_after(close_after), |_| Message::Expired),
        )
    }

    pub fn title(&self) -> String {
        self.notification.title.clone()
    }

    pub fn label(&self) -> &str {
        &self.notification.message
    }

    pub fn opacity(&self) -> f32 {
        self.animation().opacity()
    }

    pub fn is_dismissing(&self) -> bool {
        matches!(self.phase, Phase::Dismissing(_))
    }

    fn animation(&self) -> &Animation {
        match &self.phase {
            Phase::Showing(animation) | Phase::Dismissing(animation) => animation,
        }
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Frame(now) => match &mut self.phase {
                Phase::Showing(animation) => {
                    if animation.tick(now) {
                        tracing::debug!("popup fully visible");
                    }

                    Task::none()
                }
                Phase::Dismissing(animation) => {
                    if !animation.tick(now) {
                        return Task::none();
                    }

                    tracing::info!("popup dismissed");

                    iced::exit()
                }
            },
            Message::Dismiss => {
                if self.is_dismissing() {
                    return Task::none();
                }

                // Fade out from wherever the fade in got to.
                let fade = Fade::new(self.opacity(), 0.0, FADE_OUT.duration());

                self.phase = Phase::Dismissing(Animation::new(fade));

                Task::none()
            }
            Message::Expired => {
                tracing::info!(
                    after = ?self.notification.duration,
                    "popup expired"
                );

                iced::exit()
            }
        }
    }

    pub fn subscription(&self) -> Subscription<Message> {
        if self.animation().is_running() {
            window::frames().map(Message::Frame)
        } else {
            Subscription::none()
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        let scheme = self.notification.scheme;
        let opacity = self.opacity();

        let message = text(self.label())
            .size(popup::MESSAGE_SIZE)
            .font(popup::MESSAGE_FONT)
            .color(Style::message_color(scheme, opacity))
            .align_x(Horizontal::Center)
            .wrapping(text::Wrapping::None);

        let card = container(center(message))
            .width(Length::Fill)
            .height(Length::Fill)
            .style(move |_theme| Style::card(scheme, opacity));

        container(mouse_area(card).on_press(Message::Dismiss))
            .padding(popup::CARD_MARGIN)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }
}

/// Resolves once the popup has been up for `duration`.
async fn expire_after(duration: Duration) {
    tokio::time::sleep(duration).await;
}
