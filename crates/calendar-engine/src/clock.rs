//! Time source capability.
//!
//! Nothing else in the crate reads the system clock. Code that needs "now"
//! takes a [`Clock`], so tests can pin it with a [`FixedClock`] or a
//! closure.

use chrono::Local;

use crate::instant::Instant;

/// A zero-argument source of the current wall-clock instant.
pub trait Clock {
    fn now(&self) -> Instant;
}

/// Reads the operating system's local wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::from_naive(Local::now().naive_local())
    }
}

/// Always reports the same instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub Instant);

impl Clock for FixedClock {
    fn now(&self) -> Instant {
        self.0
    }
}

impl<F> Clock for F
where
    F: Fn() -> Instant,
{
    fn now(&self) -> Instant {
        self()
    }
}

/// Year of `clock`'s current instant.
pub fn current_year<C: Clock + ?Sized>(clock: &C) -> i32 {
    clock.now().year()
}

/// Year of the system clock's current instant.
pub fn get_current_year() -> i32 {
    current_year(&SystemClock)
}
