//! Monotonic high-resolution clock.
//!
//! Readings are taken straight from the platform timer
//! (`clock_gettime(CLOCK_MONOTONIC)` on Unix) so that each call to
//! [`HighResolutionClock::now`] is a real read at that program point.
//! The tick frequency is probed once per process and cached.

use crate::{Error, Result};
use std::sync::OnceLock;

/// Ticks per second of the nanosecond-based platform timer.
pub const NANOS_PER_SEC: u64 = 1_000_000_000;

const MILLIS_PER_SEC: f64 = 1000.0;

static FREQUENCY: OnceLock<std::result::Result<u64, String>> = OnceLock::new();

/// Opaque monotonic timestamp. Only differences between two instants mean anything.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Instant(u64);

impl Instant {
    /// Raw tick count since an unspecified platform origin.
    #[must_use]
    pub fn ticks(self) -> u64 {
        self.0
    }
}

/// Wrapper around the monotonic platform timer.
#[derive(Debug, Clone, Copy)]
pub struct HighResolutionClock {
    frequency: u64,
}

impl HighResolutionClock {
    /// Probe the platform timer and build a clock.
    ///
    /// # Errors
    ///
    /// Returns [`Error::TimerUnavailable`] if the monotonic timer cannot be used.
    pub fn new() -> Result<Self> {
        Ok(Self {
            frequency: frequency()?,
        })
    }

    /// Read the timer.
    ///
    /// # Errors
    ///
    /// Returns [`Error::TimerUnavailable`] if the platform read fails.
    #[inline(never)]
    pub fn now(&self) -> Result<Instant> {
        read_ticks().map(Instant)
    }

    /// Ticks per second.
    #[must_use]
    pub fn frequency(&self) -> u64 {
        self.frequency
    }

    /// Milliseconds between two readings, with sub-tick precision.
    ///
    /// A `finish` taken before `start` yields `0.0`.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn elapsed_ms(&self, start: Instant, finish: Instant) -> f64 {
        let ticks = finish.0.saturating_sub(start.0);
        ticks as f64 * MILLIS_PER_SEC / self.frequency as f64
    }
}

/// Process-wide timer frequency, probed on first use.
///
/// # Errors
///
/// Returns [`Error::TimerUnavailable`] if the probe failed.
pub fn frequency() -> Result<u64> {
    FREQUENCY
        .get_or_init(probe_frequency)
        .clone()
        .map_err(Error::TimerUnavailable)
}

#[cfg(unix)]
fn probe_frequency() -> std::result::Result<u64, String> {
    let mut res = libc::timespec {
        tv_sec: 0,
        tv_nsec: 0,
    };
    // SAFETY: `res` is a valid, writable timespec for the duration of the call.
    let rc = unsafe { libc::clock_getres(libc::CLOCK_MONOTONIC, &mut res) };
    if rc != 0 {
        return Err(format!(
            "clock_getres(CLOCK_MONOTONIC): {}",
            std::io::Error::last_os_error()
        ));
    }
    tracing::debug!(
        resolution_ns = res.tv_nsec,
        resolution_s = res.tv_sec,
        "Monotonic timer available"
    );
    Ok(NANOS_PER_SEC)
}

#[cfg(unix)]
#[allow(clippy::cast_sign_loss)]
fn read_ticks() -> Result<u64> {
    let mut ts = libc::timespec {
        tv_sec: 0,
        tv_nsec: 0,
    };
    // SAFETY: `ts` is a valid, writable timespec for the duration of the call.
    let rc = unsafe { libc::clock_gettime(libc::CLOCK_MONOTONIC, &mut ts) };
    if rc != 0 {
        return Err(Error::TimerUnavailable(format!(
            "clock_gettime(CLOCK_MONOTONIC): {}",
            std::io::Error::last_os_error()
        )));
    }
    Ok(ts.tv_sec as u64 * NANOS_PER_SEC + ts.tv_nsec as u64)
}

#[cfg(not(unix))]
static EPOCH: OnceLock<std::time::Instant> = OnceLock::new();

#[cfg(not(unix))]
fn probe_frequency() -> std::result::Result<u64, String> {
    EPOCH.get_or_init(std::time::Instant::now);
    Ok(NANOS_PER_SEC)
}

#[cfg(not(unix))]
#[allow(clippy::cast_possible_truncation, clippy::unnecessary_wraps)]
fn read_ticks() -> Result<u64> {
    let epoch = EPOCH.get_or_init(std::time::Instant::now);
    Ok(epoch.elapsed().as_nanos() as u64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frequency_is_cached_and_positive() {
        let first = frequency().unwrap();
        let second = frequency().unwrap();
        assert_eq!(first, second);
        assert_eq!(first, NANOS_PER_SEC);
    }

    #[test]
    fn test_clock_reports_cached_frequency() {
        let clock = HighResolutionClock::new().unwrap();
        assert_eq!(clock.frequency(), NANOS_PER_SEC);
        assert_eq!(clock.frequency(), frequency().unwrap());
    }

    #[test]
    fn test_now_is_monotonic() {
        let clock = HighResolutionClock::new().unwrap();
        let start = clock.now().unwrap();
        let mid = clock.now().unwrap();
        let finish = clock.now().unwrap();

        assert!(mid.ticks() >= start.ticks());
        assert!(finish.ticks() >= mid.ticks());

        let to_mid = clock.elapsed_ms(start, mid);
        let to_finish = clock.elapsed_ms(start, finish);
        assert!(to_mid >= 0.0);
        assert!(to_finish >= to_mid);
    }

    #[test]
    fn test_elapsed_ms_uses_float_division() {
        let clock = HighResolutionClock::new().unwrap();
        // 1.5 microseconds must not truncate to zero
        let ms = clock.elapsed_ms(Instant(1_000), Instant(2_500));
        assert!((ms - 0.0015).abs() < 1e-12);

        let ms = clock.elapsed_ms(Instant(0), Instant(NANOS_PER_SEC));
        assert!((ms - 1000.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_elapsed_ms_same_instant_is_zero() {
        let clock = HighResolutionClock::new().unwrap();
        let t = clock.now().unwrap();
        assert!(clock.elapsed_ms(t, t).abs() < f64::EPSILON);
    }

    #[test]
    fn test_elapsed_ms_reversed_saturates() {
        let clock = HighResolutionClock::new().unwrap();
        assert!(clock.elapsed_ms(Instant(500), Instant(100)).abs() < f64::EPSILON);
    }

    #[test]
    fn test_now_advances_across_sleep() {
        let clock = HighResolutionClock::new().unwrap();
        let start = clock.now().unwrap();
        std::thread::sleep(std::time::Duration::from_millis(2));
        let finish = clock.now().unwrap();
        assert!(clock.elapsed_ms(start, finish) >= 1.0);
    }
}
