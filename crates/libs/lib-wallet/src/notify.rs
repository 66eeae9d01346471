//! User-visible notices.

/// Shows a blocking acknowledgment to the user (`window.alert` in the browser).
pub trait Notifier {
    fn notify(&self, message: &str);
}

/// Notifier that only logs. Used when the host has no UI to block on.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&self, message: &str) {
        log::info!("[NOTICE] {}", message);
    }
}
