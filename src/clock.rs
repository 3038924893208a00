//! Time source for product timestamps.
//!
//! The product actor receives an `Arc<dyn Clock>` as its context, so tests can pin or
//! rewind time without touching the system clock.

use chrono::{DateTime, Utc};
use std::sync::Arc;

/// Something that can tell the current time.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// The wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Shared handle passed to the product actor.
pub type SharedClock = Arc<dyn Clock>;

pub fn system_clock() -> SharedClock {
    Arc::new(SystemClock)
}
