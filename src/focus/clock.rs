//! Tick sources and the calendar.
//!
//! The engine never sleeps. A driver loop polls [`Clock::fired`] for the one
//! repeating source the engine has armed and applies that many ticks.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use chrono::{Local, NaiveDate};

/// Identifies one armed repeating source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TickHandle(u64);

/// Source of repeating ticks and of today's date.
pub trait Clock {
    /// Arm a source that fires every `interval`.
    fn schedule_repeating(&mut self, interval: Duration) -> TickHandle;

    /// Disarm a source. Unknown or already cancelled handles are ignored.
    fn cancel(&mut self, handle: TickHandle);

    /// Number of intervals of `handle` that elapsed since the previous call.
    ///
    /// Always 0 for a cancelled handle.
    fn fired(&mut self, handle: TickHandle) -> u32;

    /// Today's calendar date.
    fn today(&self) -> NaiveDate;
}

/// Wall-clock implementation backed by [`Instant`].
#[derive(Debug, Default)]
pub struct SystemClock {
    next_id: u64,
    sources: HashMap<TickHandle, Repeating>,
}

#[derive(Debug)]
struct Repeating {
    interval: Duration,
    next_due: Instant,
}

impl SystemClock {
    /// Create a clock with nothing armed.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl Clock for SystemClock {
    fn schedule_repeating(&mut self, interval: Duration) -> TickHandle {
        self.next_id += 1;
        let handle = TickHandle(self.next_id);
        self.sources.insert(
            handle,
            Repeating {
                interval,
                next_due: Instant::now() + interval,
            },
        );
        handle
    }

    fn cancel(&mut self, handle: TickHandle) {
        self.sources.remove(&handle);
    }

    fn fired(&mut self, handle: TickHandle) -> u32 {
        let Some(source) = self.sources.get_mut(&handle) else {
            return 0;
        };

        let now = Instant::now();
        if now < source.next_due || source.interval.is_zero() {
            return 0;
        }

        let late = now.duration_since(source.next_due);
        let count = 1 + late.as_nanos() / source.interval.as_nanos();
        let count = u32::try_from(count).unwrap_or(u32::MAX);
        source.next_due += source.interval * count;
        count
    }

    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Deterministic clock driven by hand, for tests and simulations.
#[derive(Debug)]
pub struct ManualClock {
    next_id: u64,
    sources: HashMap<TickHandle, ManualSource>,
    today: NaiveDate,
}

#[derive(Debug)]
struct ManualSource {
    interval: Duration,
    pending: Duration,
}

impl ManualClock {
    /// Create a manual clock whose calendar reads `today`.
    #[must_use]
    pub fn new(today: NaiveDate) -> Self {
        Self {
            next_id: 0,
            sources: HashMap::new(),
            today,
        }
    }

    /// Let `elapsed` pass for every armed source.
    pub fn advance(&mut self, elapsed: Duration) {
        for source in self.sources.values_mut() {
            source.pending += elapsed;
        }
    }

    /// Move the calendar.
    pub fn set_today(&mut self, today: NaiveDate) {
        self.today = today;
    }

    /// Number of sources currently armed.
    #[must_use]
    pub fn active_sources(&self) -> usize {
        self.sources.len()
    }
}

impl Clock for ManualClock {
    fn schedule_repeating(&mut self, interval: Duration) -> TickHandle {
        self.next_id += 1;
        let handle = TickHandle(self.next_id);
        self.sources.insert(
            handle,
            ManualSource {
                interval,
                pending: Duration::ZERO,
            },
        );
        handle
    }

    fn cancel(&mut self, handle: TickHandle) {
        self.sources.remove(&handle);
    }

    fn fired(&mut self, handle: TickHandle) -> u32 {
        let Some(source) = self.sources.get_mut(&handle) else {
            return 0;
        };
        if source.interval.is_zero() {
            return 0;
        }

        let count = source.pending.as_nanos() / source.interval.as_nanos();
        let count = u32::try_from(count).unwrap_or(u32::MAX);
        source.pending -= source.interval * count;
        count
    }

    fn today(&self) -> NaiveDate {
        self.today
    }
}
