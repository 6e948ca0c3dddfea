//! Time source used by the progress engine.
//!
//! Streaks are counted in local calendar days, so the clock reports both the
//! current instant and the local date it falls on. Tests pin both with
//! [`FixedClock`].

use std::sync::Mutex;

use chrono::{Duration, Local, NaiveDate, Utc};

use crate::types::Timestamp;

/// Source of "now" for day-granularity bookkeeping.
pub trait Clock: Send + Sync {
    /// Current instant (UTC).
    fn now(&self) -> Timestamp;

    /// Calendar date that `instant` falls on in the clock's time zone.
    fn local_date(&self, instant: Timestamp) -> NaiveDate;

    /// Today's calendar date.
    fn today(&self) -> NaiveDate {
        self.local_date(self.now())
    }
}

/// Wall clock in the server's local time zone.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Timestamp {
        Utc::now()
    }

    fn local_date(&self, instant: Timestamp) -> NaiveDate {
        instant.with_timezone(&Local).date_naive()
    }
}

/// Manually driven clock. Dates are taken in UTC so results do not depend on
/// the machine running the tests.
#[derive(Debug)]
pub struct FixedClock {
    now: Mutex<Timestamp>,
}

impl FixedClock {
    pub fn new(now: Timestamp) -> Self {
        Self {
            now: Mutex::new(now),
        }
    }

    /// Clock pinned to noon UTC on the given date.
    pub fn at_date(date: NaiveDate) -> Self {
        Self::new(noon_utc(date))
    }

    pub fn set(&self, now: Timestamp) {
        *self.now.lock().unwrap_or_else(|e| e.into_inner()) = now;
    }

    /// Move to noon UTC on `date`.
    pub fn set_date(&self, date: NaiveDate) {
        self.set(noon_utc(date));
    }

    pub fn advance(&self, by: Duration) {
        let mut guard = self.now.lock().unwrap_or_else(|e| e.into_inner());
        *guard += by;
    }
}

impl Clock for FixedClock {
    fn now(&self) -> Timestamp {
        *self.now.lock().unwrap_or_else(|e| e.into_inner())
    }

    fn local_date(&self, instant: Timestamp) -> NaiveDate {
        instant.date_naive()
    }
}

fn noon_utc(date: NaiveDate) -> Timestamp {
    date.and_hms_opt(12, 0, 0)
        .unwrap_or_default()
        .and_utc()
}
