use log::trace;

use crate::clock::{Clock, SystemClock};
use crate::error::{Error, Result};

/// A wall-clock stopwatch with a mark history.
///
/// The watch is either running or stopped. While running it answers elapsed
/// queries; each [elapsed()](Stopwatch::elapsed) /
/// [elapsed_since_start()](Stopwatch::elapsed_since_start) call records a mark
/// in the history. Instants are seconds with sub-second precision, durations
/// are milliseconds.
///
/// Each value is owned by a single caller; there is no synchronization.
///
/// # Example
///
/// ``` rust
/// use timeit::Stopwatch;
///
/// let mut watch = Stopwatch::new();
/// // ... some work ...
/// let since_start = watch.elapsed().unwrap();
/// // ... more work ...
/// let total = watch.stop().unwrap();
/// assert!(total >= since_start);
/// assert_eq!(watch.instants().len(), 1);
/// ```
pub struct Stopwatch<C: Clock = SystemClock> {
    clock: C,
    start_time: Option<f64>,
    last_instant: f64,
    instants: Vec<f64>,
}

impl Stopwatch {
    /// Construct an auto-started watch on the system clock.
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }

    /// Construct without starting. Elapsed queries fail with
    /// [Error::NotStarted] until [start()](Stopwatch::start) is called.
    pub fn unstarted() -> Self {
        Self::unstarted_with_clock(SystemClock)
    }
}

impl<C: Clock> Stopwatch<C> {
    /// Construct an auto-started watch on a custom [Clock].
    pub fn with_clock(clock: C) -> Self {
        let mut watch = Self::unstarted_with_clock(clock);
        watch.start();
        return watch;
    }

    /// Construct without starting, on a custom [Clock].
    pub fn unstarted_with_clock(clock: C) -> Self {
        Self { clock, start_time: None, last_instant: 0.0, instants: Vec::new() }
    }

    /// (Re)start the watch and return the reading taken.
    ///
    /// Overwrites the start instant and the last mark instant.
    /// The mark history is kept, even when restarting after a stop.
    pub fn start(&mut self) -> f64 {
        let now = self.clock.now();
        self.start_time = Some(now);
        self.last_instant = now;
        trace!("stopwatch started at {}", now);
        return now;
    }

    /// Whether the watch is currently running.
    #[inline]
    pub fn started(&self) -> bool {
        self.start_time.is_some()
    }

    /// Mark a tick and return the time since the previous mark, in
    /// milliseconds. Before the first mark, the start instant is the
    /// reference point.
    pub fn elapsed(&mut self) -> Result<f64> {
        self.mark(true)
    }

    /// Mark a tick and return the time since the watch started, in
    /// milliseconds, ignoring intermediate marks.
    pub fn elapsed_since_start(&mut self) -> Result<f64> {
        self.mark(false)
    }

    // One clock read per call: the reading is both the measurement point and
    // the recorded mark.
    fn mark(&mut self, relative: bool) -> Result<f64> {
        let start = self.start_time.ok_or(Error::NotStarted)?;
        let now = self.clock.now();
        let base = if relative { self.last_instant } else { start };
        self.last_instant = now;
        self.instants.push(now);
        return Ok((now - base) * 1000.0);
    }

    /// Total time since start, in milliseconds. Reads the clock but records
    /// no mark and leaves the relative reference point untouched.
    pub fn total(&self) -> Result<f64> {
        let start = self.start_time.ok_or(Error::NotStarted)?;
        return Ok((self.clock.now() - start) * 1000.0);
    }

    /// Stop the watch and return the total since start, in milliseconds.
    ///
    /// The mark history survives; a later [start()](Stopwatch::start) begins a
    /// new run on top of it.
    pub fn stop(&mut self) -> Result<f64> {
        let total = self.total()?;
        self.start_time = None;
        trace!("stopwatch stopped after {:.3} ms", total);
        return Ok(total);
    }

    /// All marks recorded so far, oldest first.
    pub fn instants(&self) -> &[f64] {
        &self.instants
    }

    /// One clock read. Records nothing.
    pub fn current_time(&self) -> f64 {
        self.clock.now()
    }
}
