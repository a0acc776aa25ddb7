// UI state - notifications and drop-zone feedback
use std::time::{Duration, Instant};

#[derive(Clone, Debug, PartialEq)]
pub struct Notification {
    pub text: String,
    pub is_error: bool,
    pub shown_at: Instant,
}

pub struct UIState {
    pub notification: Option<Notification>,
    /// Files are being dragged over the window
    pub drop_active: bool,
    pub path_input: String,
    message_timeout: Duration,
}

impl UIState {
    pub fn new(message_timeout_secs: u64) -> Self {
        Self {
            notification: None,
            drop_active: false,
            path_input: String::new(),
            message_timeout: Duration::from_secs(message_timeout_secs),
        }
    }

    /// Show a message, replacing whatever is currently on screen.
    pub fn show_message(&mut self, text: impl Into<String>, is_error: bool) {
        self.notification = Some(Notification {
            text: text.into(),
            is_error,
            shown_at: Instant::now(),
        });
    }

    pub fn clear_expired_messages(&mut self, now: Instant) {
        if let Some(notification) = &self.notification {
            if now.saturating_duration_since(notification.shown_at) >= self.message_timeout {
                self.notification = None;
            }
        }
    }

    /// Time left before the current notification disappears.
    pub fn remaining(&self, now: Instant) -> Option<Duration> {
        self.notification.as_ref().map(|n| {
            self.message_timeout
                .saturating_sub(now.saturating_duration_since(n.shown_at))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_message_replaces_old() {
        let mut ui = UIState::new(3);
        ui.show_message("first", false);
        ui.show_message("second", true);
        let n = ui.notification.as_ref().expect("notification");
        assert_eq!(n.text, "second");
        assert!(n.is_error);
    }

    #[test]
    fn test_message_expires_after_timeout() {
        let mut ui = UIState::new(3);
        ui.show_message("hello", false);
        let shown_at = ui.notification.as_ref().expect("notification").shown_at;

        ui.clear_expired_messages(shown_at + Duration::from_millis(2999));
        assert!(ui.notification.is_some());

        ui.clear_expired_messages(shown_at + Duration::from_secs(3));
        assert!(ui.notification.is_none());
    }

    #[test]
    fn test_remaining() {
        let mut ui = UIState::new(3);
        assert_eq!(ui.remaining(Instant::now()), None);
        ui.show_message("hello", false);
        let shown_at = ui.notification.as_ref().expect("notification").shown_at;
        assert_eq!(
            ui.remaining(shown_at + Duration::from_secs(1)),
            Some(Duration::from_secs(2))
        );
    }
}
