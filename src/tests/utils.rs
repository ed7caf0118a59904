use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use crate::Clock;

/// Clock yielding a scripted sequence of readings, one per call.
///
/// Clones share the script, so a test can hand one handle to the watch and
/// keep another to assert how many reads were consumed.
#[derive(Clone)]
pub struct ScriptedClock {
    readings: Rc<RefCell<VecDeque<f64>>>,
}

impl ScriptedClock {
    pub fn new(readings: &[f64]) -> Self {
        Self { readings: Rc::new(RefCell::new(readings.iter().copied().collect())) }
    }

    pub fn remaining(&self) -> usize {
        self.readings.borrow().len()
    }
}

impl Clock for ScriptedClock {
    fn now(&self) -> f64 {
        self.readings.borrow_mut().pop_front().expect("clock script exhausted")
    }
}
