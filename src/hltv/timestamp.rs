//! Millisecond-epoch timestamp decoding
//!
//! HLTV embeds match and publication times as millisecond Unix epochs in
//! data attributes. Anything that does not decode cleanly yields `None`.

use chrono::{DateTime, Utc};

/// Decodes a millisecond epoch string to a UTC instant
///
/// Absent, non-numeric or out-of-range values decode to `None`; this
/// never fails.
pub fn parse_millis(raw: Option<&str>) -> Option<DateTime<Utc>> {
    let millis: i64 = raw?.trim().parse().ok()?;
    DateTime::from_timestamp_millis(millis)
}
