// Clock port and the zoned system clock.
//
// Purpose
// - Produce the current instant in the one timezone this service records in.
//
// Boundaries
// - The zone is resolved once from its IANA name; the clock itself holds no other state.

use chrono::{DateTime, SubsecRound, Utc};
use chrono_tz::Tz;
use thiserror::Error;

pub const DEFAULT_TIME_ZONE: &str = "America/Toronto";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ClockError {
    #[error("cannot resolve timezone '{0}'")]
    TimezoneResolution(String),
}

pub trait Clock {
    fn now(&self) -> Result<DateTime<Tz>, ClockError>;
}

pub fn resolve_zone(name: &str) -> Result<Tz, ClockError> {
    name.trim()
        .parse::<Tz>()
        .map_err(|_| ClockError::TimezoneResolution(name.to_string()))
}

#[derive(Debug, Clone, Copy)]
pub struct ZonedClock {
    zone: Tz,
}

impl ZonedClock {
    pub fn new(zone: Tz) -> Self {
        Self { zone }
    }
}

impl Clock for ZonedClock {
    fn now(&self) -> Result<DateTime<Tz>, ClockError> {
        Ok(to_zone_at_second(Utc::now(), self.zone))
    }
}

/// Second precision, truncated in UTC so instants in a repeated local hour are handled.
pub fn to_zone_at_second(instant: DateTime<Utc>, zone: Tz) -> DateTime<Tz> {
    instant.trunc_subsecs(0).with_timezone(&zone)
}
