//! Terminal implementation of the host boundary.

use uds_registry::{Host, NotifyKind};

/// Host backed by the terminal.
///
/// There is no clipboard in a pipeline, so "copy" and "insert" both write the
/// text to stdout; callers compose with `pbcopy`, `wl-copy`, and friends.
/// Notifications go to stderr so they never pollute piped output.
pub struct TerminalHost;

impl Host for TerminalHost {
    fn copy_to_clipboard(&self, text: &str) {
        println!("{text}");
    }

    fn insert_at_cursor(&self, text: &str) {
        println!("{text}");
    }

    fn notify(&self, kind: NotifyKind, title: &str, message: &str) {
        match kind {
            NotifyKind::Success => eprintln!("✓ {title}: {message}"),
            NotifyKind::Failure => eprintln!("✗ {title}: {message}"),
        }
    }
}
