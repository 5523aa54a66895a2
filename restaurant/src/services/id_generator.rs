//! Wall-clock identifiers for owner-added dishes
//!
//! Identifiers are the current Unix time in milliseconds. When the clock has
//! not moved past the previous identifier (several adds inside one
//! millisecond, or the clock stepping backwards) the previous value plus one
//! is used instead, so identifiers strictly increase within a session.

use chrono::Utc;
use shared::ItemId;

use crate::traits::IdGenerator;

type Clock = Box<dyn FnMut() -> i64 + Send>;

pub struct ClockIdGenerator {
    clock: Clock,
    last: Option<i64>,
}

impl ClockIdGenerator {
    pub fn new() -> Self {
        Self::with_clock(|| Utc::now().timestamp_millis())
    }

    /// Use a custom millisecond clock
    pub fn with_clock(clock: impl FnMut() -> i64 + Send + 'static) -> Self {
        Self { clock: Box::new(clock), last: None }
    }
}

impl Default for ClockIdGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl IdGenerator for ClockIdGenerator {
    fn next_id(&mut self) -> ItemId {
        let now = (self.clock)();
        let next = match self.last {
            Some(last) if now <= last => last + 1,
            _ => now,
        };
        self.last = Some(next);
        ItemId::new(next.to_string())
    }
}
