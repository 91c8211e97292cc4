//! Rendering of instants in the configured display timezone.

use chrono::{DateTime, Datelike, Utc};
use chrono_tz::Tz;

/// Resolved display timezone.
///
/// Falls back to UTC-labeled output when the configured IANA name is not
/// known to `chrono-tz`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayClock {
    zone: Option<Tz>,
}

impl DisplayClock {
    /// Resolves `name` (e.g. `"Europe/Berlin"`). Unknown names produce a
    /// clock in fallback mode; check [`DisplayClock::is_fallback`].
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        Self {
            zone: name.trim().parse::<Tz>().ok(),
        }
    }

    #[must_use]
    pub fn utc_fallback() -> Self {
        Self { zone: None }
    }

    #[must_use]
    pub fn is_fallback(&self) -> bool {
        self.zone.is_none()
    }

    /// `dd.mm.yyyy HH:MM` in the display zone, or `yyyy-mm-dd HH:MM UTC`
    /// in fallback mode.
    #[must_use]
    pub fn format(&self, instant: DateTime<Utc>) -> String {
        match self.zone {
            Some(tz) => instant
                .with_timezone(&tz)
                .format("%d.%m.%Y %H:%M")
                .to_string(),
            None => instant.format("%Y-%m-%d %H:%M UTC").to_string(),
        }
    }

    #[must_use]
    pub fn year(&self, instant: DateTime<Utc>) -> i32 {
        match self.zone {
            Some(tz) => instant.with_timezone(&tz).year(),
            None => instant.year(),
        }
    }
}
