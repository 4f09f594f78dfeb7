//! Toast Notifications
//!
//! A single shared notification slot. A new toast evicts the current one
//! synchronously; there is no queueing or stacking.

/// How long a toast stays on screen
pub const TOAST_LIFETIME_MS: u32 = 3000;

/// Notification severity. `Info` is the fallback for anything unclassified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ToastKind {
    Success,
    Error,
    Warning,
    #[default]
    Info,
}

impl ToastKind {
    pub fn icon(self) -> &'static str {
        match self {
            ToastKind::Success => "check-circle",
            ToastKind::Error => "exclamation-circle",
            ToastKind::Warning => "exclamation-triangle",
            ToastKind::Info => "info-circle",
        }
    }

    pub fn color(self) -> &'static str {
        match self {
            ToastKind::Success => "success",
            ToastKind::Error => "danger",
            ToastKind::Warning => "warning",
            ToastKind::Info => "info",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            ToastKind::Success => "Success",
            ToastKind::Error => "Error",
            ToastKind::Warning => "Warning",
            ToastKind::Info => "Info",
        }
    }
}

/// One live notification
#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub seq: u64,
    pub message: String,
    pub kind: ToastKind,
}

/// The at-most-one-visible notification slot. Each toast carries a sequence
/// token so a stale auto-dismiss timer never removes a newer toast.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ToastState {
    seq: u64,
    current: Option<Toast>,
}

impl ToastState {
    /// Replace whatever is showing. Last call wins.
    pub fn notify(&mut self, message: impl Into<String>, kind: ToastKind) -> u64 {
        self.seq += 1;
        self.current = Some(Toast {
            seq: self.seq,
            message: message.into(),
            kind,
        });
        self.seq
    }

    /// Clear the slot, but only if `seq` still identifies the visible toast
    pub fn expire(&mut self, seq: u64) {
        if self.current.as_ref().is_some_and(|toast| toast.seq == seq) {
            self.current = None;
        }
    }

    pub fn current(&self) -> Option<&Toast> {
        self.current.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_second_notify_evicts_first() {
        let mut state = ToastState::default();
        state.notify("first", ToastKind::Success);
        state.notify("second", ToastKind::Error);

        let toast = state.current().unwrap();
        assert_eq!(toast.message, "second");
        assert_eq!(toast.kind, ToastKind::Error);
    }

    #[test]
    fn test_stale_expiry_leaves_newer_toast() {
        let mut state = ToastState::default();
        let first = state.notify("first", ToastKind::Info);
        let second = state.notify("second", ToastKind::Info);

        state.expire(first);
        assert!(state.current().is_some());

        state.expire(second);
        assert!(state.current().is_none());
    }

    #[test]
    fn test_expire_on_empty_slot_is_noop() {
        let mut state = ToastState::default();
        state.expire(7);
        assert!(state.current().is_none());
    }

    #[test]
    fn test_unclassified_kind_renders_as_info() {
        let kind = ToastKind::default();
        assert_eq!(kind.icon(), "info-circle");
        assert_eq!(kind.color(), "info");
    }
}
