// Clock doubles shared by the crate's tests.

use chrono::{DateTime, TimeZone};
use chrono_tz::Tz;

use crate::modules::time_logs::core::clock::{Clock, ClockError};

pub const ZONE: Tz = Tz::America__Toronto;

pub fn june_first_nine_am() -> DateTime<Tz> {
    ZONE.with_ymd_and_hms(2024, 6, 1, 9, 0, 0).unwrap()
}

pub struct FixedClock {
    instant: DateTime<Tz>,
}

impl FixedClock {
    pub fn new(instant: DateTime<Tz>) -> Self {
        Self { instant }
    }
}

impl Clock for FixedClock {
    fn now(&self) -> Result<DateTime<Tz>, ClockError> {
        Ok(self.instant)
    }
}

pub struct FailingClock;

impl Clock for FailingClock {
    fn now(&self) -> Result<DateTime<Tz>, ClockError> {
        Err(ClockError::TimezoneResolution("Nowhere/Missing".into()))
    }
}
