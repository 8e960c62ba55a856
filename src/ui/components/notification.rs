use std::time::Duration;

use notify_rust::Notification;

use crate::core::{self, Error};

pub const APP_NAME: &str = "popnote";
#[cfg(any(target_os = "linux", target_os = "windows"))]
const APP_ID: &str = "org.popnote.popnote";

/// Zero means "never expire" to notification daemons.
const SHORTEST_TIMEOUT: Duration = Duration::from_millis(1);

/// Daemons read the timeout as a signed 32-bit millisecond count.
const LONGEST_TIMEOUT: Duration = Duration::from_millis(i32::MAX as u64);

/// Hands the notification to the desktop's notification service instead of
/// drawing our own popup, and returns once it has been on screen for its
/// duration.
pub async fn notification(popup: &core::Notification) -> Result<(), Error> {
    let mut notification = Notification::new();

    notification
        .appname(APP_NAME)
        .summary(&popup.title)
        .body(&popup.message)
        .timeout(display_time(popup.duration));

    #[cfg(target_os = "linux")]
    notification.icon(APP_ID);

    #[cfg(target_os = "windows")]
    notification.app_id(APP_ID);

    #[cfg(target_os = "linux")]
    {
        let handle = notification.show_async().await?;

        tracing::debug!(id = handle.id(), "notification posted");

        tokio::time::sleep(popup.duration).await;

        handle.close();
    }

    #[cfg(not(target_os = "linux"))]
    {
        notification.show().map(|_| ())?;

        tokio::time::sleep(popup.duration).await;
    }

    Ok(())
}

fn display_time(duration: Duration) -> Duration {
    duration.clamp(SHORTEST_TIMEOUT, LONGEST_TIMEOUT)
}
