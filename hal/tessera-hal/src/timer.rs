//! Blocking delay abstractions
//!
//! The display protocol depends on minimum hold times, so these delays
//! are busy-wait by contract: an implementation must not yield to other
//! work and must hold for at least the requested duration.

/// Blocking delay source
pub trait Delay {
    /// Block for at least `us` microseconds
    fn delay_us(&mut self, us: u32);

    /// Block for at least `ms` milliseconds
    fn delay_ms(&mut self, ms: u32) {
        for _ in 0..ms {
            self.delay_us(1000);
        }
    }
}
