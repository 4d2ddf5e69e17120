// Step-debugger navigation over a finished trace.

use crate::trace::{Step, Trace};

/// Read-only position within a [`Trace`].
///
/// The cursor starts on the initial record. Moving past either end is a no-op
/// that returns `None`, leaving the position unchanged.
#[derive(Debug, Clone, Copy)]
pub struct TraceCursor<'t> {
    trace: &'t Trace,
    index: usize,
}

impl<'t> TraceCursor<'t> {
    pub fn new(trace: &'t Trace) -> Self {
        Self { trace, index: 0 }
    }

    pub fn trace(&self) -> &'t Trace {
        self.trace
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn current(&self) -> &'t Step {
        &self.trace[self.index]
    }

    pub fn has_next(&self) -> bool {
        self.index + 1 < self.trace.len()
    }

    pub fn has_prev(&self) -> bool {
        self.index > 0
    }

    pub fn next(&mut self) -> Option<&'t Step> {
        if !self.has_next() {
            return None;
        }
        self.index += 1;
        Some(self.current())
    }

    pub fn prev(&mut self) -> Option<&'t Step> {
        if !self.has_prev() {
            return None;
        }
        self.index -= 1;
        Some(self.current())
    }

    /// Jump to `index`; out-of-range positions are rejected.
    pub fn seek(&mut self, index: usize) -> Option<&'t Step> {
        let step = self.trace.get(index)?;
        self.index = index;
        Some(step)
    }

    pub fn first(&mut self) -> &'t Step {
        self.index = 0;
        self.current()
    }

    pub fn last(&mut self) -> &'t Step {
        self.index = self.trace.len() - 1;
        self.current()
    }

    /// `(1-based position, total records)`, as shown by a step counter.
    pub fn progress(&self) -> (usize, usize) {
        (self.index + 1, self.trace.len())
    }
}

impl<'t> From<&'t Trace> for TraceCursor<'t> {
    fn from(trace: &'t Trace) -> Self {
        Self::new(trace)
    }
}
