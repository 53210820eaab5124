//! Timestamp normalization and duration formatting for punch records.
//!
//! Stored punch values arrive as raw text. Two encodings mean "no punch
//! recorded": an empty value and the Unix epoch placeholder written by older
//! clients. Both are normalized to [`Stamp::Unset`], and anything that fails to
//! parse is treated the same way so that a single corrupt field never breaks a
//! report.
//!
//! ## Formats
//!
//! - Clock times render as `HH:MM` (24h), or [`NO_TIME`] when unset
//! - Durations render as `HH:MM`, or [`NO_DATA`] when nothing was worked
//!
//! ## Examples
//!
//! ```rust
//! use shiftclock::libs::time::{Stamp, duration_minutes, format_duration, is_unset};
//!
//! assert!(is_unset(""));
//! assert!(is_unset("1970-01-01 00:00:00"));
//!
//! let start = Stamp::parse("2025-03-10 08:00:00");
//! let end = Stamp::parse("2025-03-10 12:30:00");
//! assert_eq!(duration_minutes(start, end), 270);
//! assert_eq!(format_duration(270), "04:30");
//! assert_eq!(format_duration(0), "--:--");
//! ```

use chrono::{DateTime, Local, NaiveDateTime, TimeZone, Timelike, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Placeholder rendered for a clock time that was never punched.
pub const NO_TIME: &str = "-";

/// Placeholder rendered for a duration with nothing recorded.
pub const NO_DATA: &str = "--:--";

/// Canonical storage format, shared with the SQLite layer.
pub const STORAGE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

const ACCEPTED_FORMATS: [&str; 4] = [STORAGE_FORMAT, "%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M", "%Y-%m-%dT%H:%M"];

/// A punch value: either a recorded instant or the "no punch" sentinel.
///
/// `Unset` is never a valid instant. Constructing a stamp from the epoch
/// placeholder yields `Unset` as well.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Stamp {
    #[default]
    Unset,
    At(NaiveDateTime),
}

impl Stamp {
    /// Wraps an instant, normalizing the epoch placeholder to `Unset`.
    pub fn at(instant: NaiveDateTime) -> Self {
        if instant == epoch() {
            Stamp::Unset
        } else {
            Stamp::At(instant)
        }
    }

    /// Parses a stored value. Never fails: sentinels and malformed input
    /// both come back as `Unset`.
    pub fn parse(raw: &str) -> Self {
        if is_unset(raw) {
            return Stamp::Unset;
        }
        match parse_instant(raw.trim()) {
            Some(instant) => Stamp::at(instant),
            None => {
                tracing::debug!(raw, "malformed punch timestamp treated as unset");
                Stamp::Unset
            }
        }
    }

    /// True when a punch was recorded.
    pub fn is_set(&self) -> bool {
        matches!(self, Stamp::At(_))
    }

    /// The recorded instant, `None` for `Unset`.
    ///
    /// Callers get the sentinel as an `Option` and cannot mistake it for a
    /// real time of day.
    pub fn instant(&self) -> Option<NaiveDateTime> {
        match self {
            Stamp::At(instant) => Some(*instant),
            Stamp::Unset => None,
        }
    }

    /// Hour and minute of the punch, if one was recorded.
    pub fn hour_minute(&self) -> Option<(u32, u32)> {
        self.instant().map(|t| (t.hour(), t.minute()))
    }

    /// Storage encoding: empty string for `Unset`.
    pub fn to_raw(&self) -> String {
        match self {
            Stamp::At(instant) => instant.format(STORAGE_FORMAT).to_string(),
            Stamp::Unset => String::new(),
        }
    }
}

impl From<NaiveDateTime> for Stamp {
    fn from(instant: NaiveDateTime) -> Self {
        Stamp::at(instant)
    }
}

impl From<Option<NaiveDateTime>> for Stamp {
    fn from(instant: Option<NaiveDateTime>) -> Self {
        instant.map_or(Stamp::Unset, Stamp::at)
    }
}

impl From<String> for Stamp {
    fn from(raw: String) -> Self {
        Stamp::parse(&raw)
    }
}

impl From<Stamp> for String {
    fn from(stamp: Stamp) -> Self {
        stamp.to_raw()
    }
}

impl fmt::Display for Stamp {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", format_clock_time(*self))
    }
}

/// True when a stored value is one of the two "no punch" encodings.
///
/// Only the sentinels count here; a malformed value is not a sentinel even
/// though [`Stamp::parse`] also maps it to `Unset`.
pub fn is_unset(raw: &str) -> bool {
    let raw = raw.trim();
    if raw.is_empty() {
        return true;
    }
    parse_instant(raw).is_some_and(|instant| instant == epoch())
}

fn epoch() -> NaiveDateTime {
    DateTime::<Utc>::UNIX_EPOCH.naive_utc()
}

fn parse_instant(raw: &str) -> Option<NaiveDateTime> {
    if let Ok(with_offset) = DateTime::parse_from_rfc3339(raw) {
        // The epoch placeholder is compared in UTC, everything else is shown in local time.
        if with_offset.timestamp() == 0 {
            return Some(epoch());
        }
        return Some(Local.from_utc_datetime(&with_offset.naive_utc()).naive_local());
    }
    ACCEPTED_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(raw, format).ok())
}

/// Renders a punch as `HH:MM`, or [`NO_TIME`] when unset.
pub fn format_clock_time(stamp: Stamp) -> String {
    match stamp {
        Stamp::At(instant) => instant.format("%H:%M").to_string(),
        Stamp::Unset => NO_TIME.to_string(),
    }
}

/// Whole minutes between two punches.
///
/// Returns 0 when either side is unset or when `end` precedes `start`; the
/// result is never negative.
pub fn duration_minutes(start: Stamp, end: Stamp) -> i64 {
    match (start, end) {
        (Stamp::At(start), Stamp::At(end)) if end >= start => end.signed_duration_since(start).num_minutes(),
        _ => 0,
    }
}

/// Renders minutes as `HH:MM`.
///
/// Zero renders as [`NO_DATA`] so that "nothing recorded" is distinguishable
/// from a punch pair of zero length.
pub fn format_duration(minutes: i64) -> String {
    if minutes <= 0 {
        return NO_DATA.to_string();
    }
    format_hours_minutes(minutes)
}

/// Renders minutes as `HH:MM` with zero shown as `00:00`. Used for totals.
pub fn format_hours_minutes(minutes: i64) -> String {
    let minutes = minutes.max(0);
    format!("{:02}:{:02}", minutes / 60, minutes % 60)
}
