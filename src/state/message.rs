//! Transient Messages
//!
//! Short-lived success and error notifications shown in the banner.

/// How long a message stays visible
pub const MESSAGE_DISPLAY_MS: u32 = 5000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MessageKind {
    Success,
    Error,
}

impl MessageKind {
    /// CSS class applied to the banner
    pub fn class(self) -> &'static str {
        match self {
            MessageKind::Success => "success",
            MessageKind::Error => "error",
        }
    }
}

/// A banner notification
#[derive(Clone, Debug, PartialEq)]
pub struct TransientMessage {
    pub text: String,
    pub kind: MessageKind,
}

impl TransientMessage {
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: MessageKind::Success,
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: MessageKind::Error,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_classes() {
        assert_eq!(TransientMessage::success("ok").kind.class(), "success");
        assert_eq!(TransientMessage::error("bad").kind.class(), "error");
    }
}
