//! Desktop notifications via the system notification daemon.

use notify_rust::Notification;

/// Show a desktop notification, best-effort.
///
/// Errors (no daemon, denied, headless session) are swallowed; the beep
/// is the fallback channel on such machines.
pub fn show(title: &str, body: &str) {
    let _ = Notification::new()
        .summary(title)
        .body(body)
        .appname("restbell")
        .icon("alarm-clock")
        .show();
}
