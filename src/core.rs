use std::{io, time::Duration};

use thiserror::Error;

pub mod fade;
pub mod placement;

pub const DEFAULT_DURATION_SECS: u64 = 10;

/// Everything a single popup needs, resolved from the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub title: String,
    pub message: String,
    pub duration: Duration,
    pub scheme: Scheme,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Scheme {
    #[default]
    Light,
    Dark,
}

impl Notification {
    pub fn new(title: impl Into<String>, message: impl Into<String>, duration: Duration) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
            duration,
            scheme: Scheme::default(),
        }
    }

    pub fn with_scheme(mut self, scheme: Scheme) -> Self {
        self.scheme = scheme;
        self
    }
}

/// Reads a duration in whole seconds. Anything that is not a non-negative
/// integer collapses to zero, which closes the popup right away.
pub fn parse_duration(raw: &str) -> Duration {
    match raw.trim().parse::<u64>() {
        Ok(secs) => Duration::from_secs(secs),
        Err(err) => {
            tracing::warn!(raw, %err, "unreadable duration, closing immediately");

            Duration::ZERO
        }
    }
}

#[derive(Error, Debug)]
pub enum Error {
    #[error("failed to open the popup window: {0}")]
    Window(#[from] iced::Error),

    #[error("failed to deliver the system notification: {0}")]
    Notification(#[from] notify_rust::error::Error),

    #[error("failed to start the async runtime: {0}")]
    Runtime(#[from] io::Error),
}
