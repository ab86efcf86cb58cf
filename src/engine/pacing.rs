//! Pacing: user speed to per-step delay
//!
//! [`Pacing`] is a cheap, cloneable handle onto a single shared speed value.
//! The emitter asks it for [`Pacing::current_delay`] at every suspend point,
//! so a speed change made by the UI thread takes effect on the very next step
//! of a run that is already in flight.
//!
//! The actual waiting is delegated to a [`Clock`], which lets tests swap the
//! wall clock for one that returns immediately.

use super::constants::{BASE_DELAY_MS, DEFAULT_SPEED, MAX_SPEED, MIN_DELAY_MS, MIN_SPEED};
use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::Arc;
use std::time::Duration;

/// Shared speed setting in `[MIN_SPEED, MAX_SPEED]`
#[derive(Debug, Clone)]
pub struct Pacing {
    speed: Arc<AtomicU8>,
}

impl Pacing {
    pub fn new(speed: u8) -> Self {
        Pacing {
            speed: Arc::new(AtomicU8::new(clamp_speed(speed))),
        }
    }

    /// Change the speed; out-of-range values are clamped
    pub fn set_speed(&self, speed: u8) {
        self.speed.store(clamp_speed(speed), Ordering::Relaxed);
    }

    pub fn speed(&self) -> u8 {
        self.speed.load(Ordering::Relaxed)
    }

    /// Delay for the next suspend point
    pub fn current_delay(&self) -> Duration {
        delay_for_speed(self.speed())
    }
}

impl Default for Pacing {
    fn default() -> Self {
        Self::new(DEFAULT_SPEED)
    }
}

fn clamp_speed(speed: u8) -> u8 {
    speed.clamp(MIN_SPEED, MAX_SPEED)
}

/// `101 - speed` milliseconds, never below one millisecond
pub fn delay_for_speed(speed: u8) -> Duration {
    let ms = BASE_DELAY_MS
        .saturating_sub(u64::from(clamp_speed(speed)))
        .max(MIN_DELAY_MS);
    Duration::from_millis(ms)
}

/// Source of suspension for the step emitter
pub trait Clock: Send + Sync {
    fn sleep(&self, duration: Duration);
}

/// Real wall-clock sleeping
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn sleep(&self, duration: Duration) {
        std::thread::sleep(duration);
    }
}

/// Clock that never waits
#[derive(Debug, Default, Clone, Copy)]
pub struct NoDelayClock;

impl Clock for NoDelayClock {
    fn sleep(&self, _duration: Duration) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delay_mapping() {
        assert_eq!(delay_for_speed(1), Duration::from_millis(100));
        assert_eq!(delay_for_speed(50), Duration::from_millis(51));
        assert_eq!(delay_for_speed(100), Duration::from_millis(1));
    }

    #[test]
    fn test_out_of_range_speed_is_clamped() {
        let pacing = Pacing::new(0);
        assert_eq!(pacing.speed(), MIN_SPEED);

        pacing.set_speed(250);
        assert_eq!(pacing.speed(), MAX_SPEED);
        assert_eq!(pacing.current_delay(), Duration::from_millis(1));
    }

    #[test]
    fn test_clones_share_the_speed() {
        let pacing = Pacing::new(10);
        let handle = pacing.clone();
        handle.set_speed(90);
        assert_eq!(pacing.current_delay(), Duration::from_millis(11));
    }

    #[test]
    fn test_delay_is_monotonically_decreasing() {
        let delays: Vec<Duration> = (MIN_SPEED..=MAX_SPEED).map(delay_for_speed).collect();
        assert!(delays.windows(2).all(|w| w[0] > w[1]));
    }
}
