//! Time one unit of work in a single call.

use log::debug;

use crate::clock::{Clock, SystemClock};
use crate::stopwatch::Stopwatch;

/// Run `f` against a fresh auto-started [Stopwatch] and return the total
/// wall-clock time it consumed, in milliseconds, paired with its return value.
///
/// # Example
///
/// ``` rust
/// use timeit::measure;
///
/// let (took_ms, sum) = measure(|| (0..1000u64).sum::<u64>());
/// assert_eq!(sum, 499500);
/// assert!(took_ms >= 0.0);
/// ```
pub fn measure<F, R>(f: F) -> (f64, R)
where
    F: FnOnce() -> R,
{
    measure_with_clock(SystemClock, f)
}

/// [measure()] on a custom [Clock], for deterministic harnesses.
pub fn measure_with_clock<C, F, R>(clock: C, f: F) -> (f64, R)
where
    C: Clock,
    F: FnOnce() -> R,
{
    let mut watch = Stopwatch::with_clock(clock);
    let result = f();
    let took = watch.stop().expect("measure() starts the watch itself");
    debug!("measured closure in {:.3} ms", took);
    return (took, result);
}
