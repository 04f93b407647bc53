//! Request timestamps in the format required by the gateway.

use chrono::{DateTime, FixedOffset, Offset, TimeZone, Utc};
use std::fmt;

/// `strftime` pattern of every outbound timestamp (`YYYYMMDDHHmmss`).
pub static TIMESTAMP_FORMAT: &str = "%Y%m%d%H%M%S";

/// Offset of East Africa Time, the clock the gateway validates timestamps against.
const EAT_OFFSET_SECONDS: i32 = 3 * 3600;

/// A `YYYYMMDDHHmmss` timestamp, always 14 ASCII digits.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Timestamp(String);

impl Timestamp {
    /// Current wall-clock time in East Africa Time.
    pub fn now() -> Self {
        Self::from_datetime(&Utc::now().with_timezone(&eat()))
    }

    /// Formats the given instant in its own time zone.
    pub fn from_datetime<Tz>(datetime: &DateTime<Tz>) -> Self
    where
        Tz: TimeZone,
        Tz::Offset: fmt::Display,
    {
        Self(datetime.format(TIMESTAMP_FORMAT).to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

fn eat() -> FixedOffset {
    // In range by construction
    FixedOffset::east_opt(EAT_OFFSET_SECONDS).unwrap_or_else(|| Utc.fix())
}
