//! Boundary to the hosting environment.
//!
//! Clipboard access, cursor insertion, and user notifications are owned by
//! whatever hosts the core (a launcher extension, a terminal, a test). The
//! core only ever talks to this trait.

/// Severity of a user-facing notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotifyKind {
    /// Operation completed.
    Success,
    /// Operation failed.
    Failure,
}

/// Actions the host environment performs on the core's behalf.
pub trait Host {
    /// Places `text` on the host clipboard.
    fn copy_to_clipboard(&self, text: &str);

    /// Inserts `text` at the cursor of the frontmost application.
    fn insert_at_cursor(&self, text: &str);

    /// Shows a transient notification.
    fn notify(&self, kind: NotifyKind, title: &str, message: &str);
}
