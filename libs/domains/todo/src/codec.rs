//! Timestamp codec between the wire and the store.
//!
//! The wire carries an absolute `google.protobuf.Timestamp`; the `todo` table
//! stores `TIMESTAMP` without time zone, read and written as UTC wall clock.
//! The conversions here are exact to the nanosecond, but the column keeps
//! microseconds: a reminder read back equals the one written only down to
//! the microsecond (both stores truncate the rest).

use chrono::{DateTime, NaiveDateTime, Timelike};
use prost_types::Timestamp;
use thiserror::Error;

/// Seconds of `0001-01-01T00:00:00Z` relative to the Unix epoch.
pub const MIN_SECONDS: i64 = -62_135_596_800;

/// Seconds of `9999-12-31T23:59:59Z` relative to the Unix epoch.
pub const MAX_SECONDS: i64 = 253_402_300_799;

const NANOS_PER_SECOND: i64 = 1_000_000_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TimestampError {
    #[error("timestamp is missing")]
    Missing,

    #[error("timestamp seconds {0} out of range [0001-01-01, 9999-12-31]")]
    SecondsOutOfRange(i64),

    #[error("timestamp nanos {0} out of range [0, 1e9)")]
    NanosOutOfRange(i64),
}

fn validate(seconds: i64, nanos: i64) -> Result<(), TimestampError> {
    if !(MIN_SECONDS..=MAX_SECONDS).contains(&seconds) {
        return Err(TimestampError::SecondsOutOfRange(seconds));
    }
    if !(0..NANOS_PER_SECOND).contains(&nanos) {
        return Err(TimestampError::NanosOutOfRange(nanos));
    }
    Ok(())
}

/// Wire → store. A missing timestamp is malformed.
pub fn to_storage(timestamp: Option<&Timestamp>) -> Result<NaiveDateTime, TimestampError> {
    let timestamp = timestamp.ok_or(TimestampError::Missing)?;
    validate(timestamp.seconds, i64::from(timestamp.nanos))?;

    // Both bounds are checked above, so the cast cannot wrap.
    DateTime::from_timestamp(timestamp.seconds, timestamp.nanos as u32)
        .map(|dt| dt.naive_utc())
        .ok_or(TimestampError::SecondsOutOfRange(timestamp.seconds))
}

/// Store → wire.
pub fn to_wire(value: NaiveDateTime) -> Result<Timestamp, TimestampError> {
    let utc = value.and_utc();
    let seconds = utc.timestamp();
    // chrono encodes a leap second as nanos >= 1e9
    let nanos = i64::from(value.nanosecond());
    validate(seconds, nanos)?;

    Ok(Timestamp {
        seconds,
        nanos: nanos as i32,
    })
}
