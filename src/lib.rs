extern crate log;

mod clock;
mod error;
mod measure;
mod stopwatch;

pub use self::{
    clock::{Clock, SystemClock},
    error::{Error, Result},
    measure::{measure, measure_with_clock},
    stopwatch::Stopwatch,
};

#[cfg(test)]
mod tests;
