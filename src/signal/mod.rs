//! Signal emission: desktop notifications and the beep.
//!
//! Both channels are best-effort. A machine without a notification daemon
//! or an audio device stays silent; nothing here can fail the caller.

mod chime;
mod desktop;

use crate::config::TimerConfig;

pub use chime::beep;
pub use desktop::show;

/// Emits the configured signal channels for timer and reminder events.
#[derive(Debug, Clone, Copy)]
pub struct SignalSink {
    notifications: bool,
    sound: bool,
}

impl SignalSink {
    /// Build a sink from the timer configuration toggles.
    #[must_use]
    pub const fn from_config(config: &TimerConfig) -> Self {
        Self {
            notifications: config.notifications,
            sound: config.notification_sound,
        }
    }

    /// A sink with both channels muted (useful in tests).
    #[must_use]
    pub const fn muted() -> Self {
        Self {
            notifications: false,
            sound: false,
        }
    }

    /// Emit a signal: beep and/or notification per the toggles.
    pub fn emit(&self, title: &str, body: &str) {
        if self.sound {
            chime::beep();
        }
        if self.notifications {
            desktop::show(title, body);
        }
    }
}
