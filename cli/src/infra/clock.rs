//! Infrastructure implementation of the `Clock` port.

use std::time::Duration;

use chrono::{DateTime, Utc};

use crate::application::ports::Clock;

/// Real wall clock; `sleep` blocks the current thread.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }

    fn sleep(&self, duration: Duration) {
        std::thread::sleep(duration);
    }
}
