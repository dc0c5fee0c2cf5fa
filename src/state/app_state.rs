//! Application-level state.

use super::Notification;
use std::time::Duration;
use tokio::time::Instant;

/// The current view/screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Arena,
    Markets,
    Predictions,
    History,
}

impl View {
    /// Views in tab order.
    pub const ALL: [View; 4] = [View::Arena, View::Markets, View::Predictions, View::History];

    /// The view after this one, wrapping around.
    pub fn next(self) -> Self {
        match self {
            Self::Arena => Self::Markets,
            Self::Markets => Self::Predictions,
            Self::Predictions => Self::History,
            Self::History => Self::Arena,
        }
    }

    /// Tab title.
    pub fn title(self) -> &'static str {
        match self {
            Self::Arena => "Arena",
            Self::Markets => "Markets",
            Self::Predictions => "Predictions",
            Self::History => "History",
        }
    }
}

/// Global application state.
#[derive(Debug, Default)]
pub struct AppState {
    /// Current view.
    pub current_view: View,
    /// Whether to show help overlay.
    pub show_help: bool,
    /// Current notification and when it was shown.
    pub notification: Option<(Notification, Instant)>,
    /// Current error message.
    pub error: Option<String>,
    /// Whether the app should quit.
    pub should_quit: bool,
}

impl AppState {
    /// Drop the notification once it has been visible for its duration.
    pub fn expire_notification(&mut self, now: Instant) {
        if let Some((notification, shown_at)) = &self.notification
            && now.saturating_duration_since(*shown_at) >= notification.duration()
        {
            self.notification = None;
        }
    }

    /// Time left before the notification expires.
    pub fn notification_remaining(&self, now: Instant) -> Option<Duration> {
        self.notification.as_ref().map(|(notification, shown_at)| {
            notification
                .duration()
                .saturating_sub(now.saturating_duration_since(*shown_at))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_view_cycle() {
        assert_eq!(View::Arena.next(), View::Markets);
        assert_eq!(View::Markets.next(), View::Predictions);
        assert_eq!(View::History.next(), View::Arena);
    }

    #[test]
    fn test_notification_expires_after_duration() {
        let now = Instant::now();
        let mut app = AppState {
            notification: Some((Notification::info("hello"), now)),
            ..Default::default()
        };
        app.expire_notification(now + Duration::from_secs(2));
        assert!(app.notification.is_some());
        app.expire_notification(now + Duration::from_secs(3));
        assert!(app.notification.is_none());
    }

    #[test]
    fn test_notification_remaining_counts_down() {
        let now = Instant::now();
        let mut app = AppState::default();
        assert_eq!(app.notification_remaining(now), None);

        app.notification = Some((Notification::warning("low balance"), now));
        assert_eq!(
            app.notification_remaining(now + Duration::from_secs(2)),
            Some(Duration::from_secs(3))
        );
        assert_eq!(
            app.notification_remaining(now + Duration::from_secs(9)),
            Some(Duration::ZERO)
        );
    }
}
