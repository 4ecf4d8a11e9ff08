use chrono::{DateTime, FixedOffset, Local};

/// Source of "now" for everything time-of-day dependent.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<FixedOffset>;
}

/// Wall clock in the server's local zone.
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<FixedOffset> {
        Local::now().fixed_offset()
    }
}

#[cfg(test)]
pub struct FixedClock(pub DateTime<FixedOffset>);

#[cfg(test)]
impl FixedClock {
    /// A clock stopped at `hour:minute` on an arbitrary day, UTC-6.
    pub fn at(hour: u32, minute: u32) -> Self {
        use chrono::TimeZone;
        let zone = FixedOffset::west_opt(6 * 3600).unwrap();
        FixedClock(zone.with_ymd_and_hms(2026, 5, 4, hour, minute, 0).unwrap())
    }
}

#[cfg(test)]
impl Clock for FixedClock {
    fn now(&self) -> DateTime<FixedOffset> {
        self.0
    }
}
