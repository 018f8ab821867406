use std::time::{Duration, Instant};

/// How long a message stays visible.
pub const STATUS_TTL: Duration = Duration::from_secs(6);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Info,
    Success,
    Error,
}

#[derive(Debug, Clone)]
pub struct StatusMessage {
    pub text: String,
    pub kind: StatusKind,
    pub expires_at: Instant,
}

impl StatusMessage {
    fn new(kind: StatusKind, text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind,
            expires_at: Instant::now() + STATUS_TTL,
        }
    }

    pub fn info(text: impl Into<String>) -> Self {
        Self::new(StatusKind::Info, text)
    }

    pub fn success(text: impl Into<String>) -> Self {
        Self::new(StatusKind::Success, text)
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self::new(StatusKind::Error, text)
    }
}

#[derive(Debug, Default)]
pub struct StatusLineState {
    pub message: Option<StatusMessage>,
}

impl StatusLineState {
    pub fn show(&mut self, message: StatusMessage) {
        self.message = Some(message);
    }

    /// Drops the message once its time is up.
    pub fn expire(&mut self, now: Instant) {
        if self.message.as_ref().is_some_and(|m| now >= m.expires_at) {
            self.message = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_expires_after_ttl() {
        let mut status = StatusLineState::default();
        status.show(StatusMessage::error("boom"));

        status.expire(Instant::now());
        assert!(status.message.is_some());

        status.expire(Instant::now() + STATUS_TTL + Duration::from_millis(1));
        assert!(status.message.is_none());
    }
}
