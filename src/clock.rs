use chrono::Utc;

/// Time source behind [Stopwatch](crate::Stopwatch).
///
/// One method returning the current wall-clock reading, so a test harness can
/// substitute a scripted clock without touching the production type.
pub trait Clock {
    /// Current reading in seconds since an arbitrary fixed epoch,
    /// with sub-second precision.
    fn now(&self) -> f64;
}

/// The production clock. Each call is a single chrono wall-clock read.
#[derive(Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    #[inline]
    fn now(&self) -> f64 {
        let now = Utc::now();
        return now.timestamp() as f64 + now.timestamp_subsec_micros() as f64 / 1e6;
    }
}
