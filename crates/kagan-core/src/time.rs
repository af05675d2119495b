use chrono::{DateTime, Utc};

/// Milliseconds since UNIX epoch.
pub type EpochMs = i64;

/// Returns the current time as a timezone-aware UTC value.
///
/// This is the single sanctioned clock for the crate: everything that
/// stamps a record goes through here, so time-dependent callers can be
/// tested by injecting values produced the same way.
pub fn utc_now() -> DateTime<Utc> {
    Utc::now()
}

/// Returns current unix epoch milliseconds, read from the same clock as
/// [`utc_now`].
pub fn now_ms() -> EpochMs {
    utc_now().timestamp_millis()
}
