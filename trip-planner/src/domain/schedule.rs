//! Periodic departure schedules.
//!
//! Every link in the network departs periodically inside a daily window.
//! Clock values are minutes since the start of the journey's first day;
//! they keep growing past midnight, and only their remainder modulo
//! [`MINUTES_PER_DAY`] matters for catching a departure.

use std::fmt;

use chrono::NaiveTime;

/// Minutes in a day. The clock wraps at this value.
pub const MINUTES_PER_DAY: u32 = 1440;

/// Error returned when a departure window is not usable.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid schedule {first}-{last}/{period}: {reason}")]
pub struct InvalidSchedule {
    first: u32,
    last: u32,
    period: u32,
    reason: &'static str,
}

/// A daily departure window: departures at `first`, `first + period`, ...
/// up to and including `last` when it falls on the grid.
///
/// # Examples
///
/// ```
/// use trip_planner::domain::Schedule;
///
/// // Hourly from 06:00 to 22:00
/// let schedule = Schedule::new(360, 1320, 60).unwrap();
///
/// // At 06:10 the next departure is 07:00
/// assert_eq!(schedule.waiting_time(370), 50);
///
/// // At 23:00 we wait for tomorrow's 06:00
/// assert_eq!(schedule.waiting_time(1380), 420);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Schedule {
    first: u32,
    last: u32,
    period: u32,
}

impl Schedule {
    /// Create a schedule, checking `first <= last` and `period > 0`.
    ///
    /// A window may run past midnight (`last >= 1440`); slots beyond the
    /// end of the day are caught from the day before.
    pub fn new(first: u32, last: u32, period: u32) -> Result<Self, InvalidSchedule> {
        let invalid = |reason| InvalidSchedule {
            first,
            last,
            period,
            reason,
        };

        if period == 0 {
            return Err(invalid("periodicity must be positive"));
        }
        if first > last {
            return Err(invalid("first departure is after last departure"));
        }

        Ok(Self {
            first,
            last,
            period,
        })
    }

    /// First departure of the day, in minutes after midnight.
    pub fn first(&self) -> u32 {
        self.first
    }

    /// Last permitted departure of the day, in minutes after midnight.
    pub fn last(&self) -> u32 {
        self.last
    }

    /// Minutes between consecutive departures.
    pub fn period(&self) -> u32 {
        self.period
    }

    /// Minutes to wait from `clock` until the next departure.
    ///
    /// For a window inside one day the result is below [`MINUTES_PER_DAY`].
    /// When the remaining grid slots of the day are past `last`, the wait
    /// runs to the next day's first departure.
    pub fn waiting_time(&self, clock: u64) -> u32 {
        // The remainder is below 1440, so it always fits.
        let h = (clock % u64::from(MINUTES_PER_DAY)) as u32;

        if h <= self.first {
            return self.first - h;
        }
        if h > self.last {
            return self.until_tomorrow(h);
        }

        let (first, period) = (u64::from(self.first), u64::from(self.period));
        let next = first + u64::from(h - self.first).div_ceil(period) * period;
        if next > u64::from(self.last) {
            return self.until_tomorrow(h);
        }
        // next <= last, so the difference fits.
        (next - u64::from(h)) as u32
    }

    fn until_tomorrow(&self, h: u32) -> u32 {
        (MINUTES_PER_DAY - h) + self.first
    }
}

impl fmt::Display for Schedule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "every {} min from {} to {}",
            self.period,
            clock_label(u64::from(self.first)),
            clock_label(u64::from(self.last))
        )
    }
}

/// Render a clock value as a time of day, e.g. `1500` as `"01:00"`.
pub fn clock_label(clock: u64) -> String {
    let minute_of_day = (clock % u64::from(MINUTES_PER_DAY)) as u32;
    NaiveTime::from_num_seconds_from_midnight_opt(minute_of_day * 60, 0)
        .map(|time| time.format("%H:%M").to_string())
        .unwrap_or_default()
}
