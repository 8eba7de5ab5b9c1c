//! Count-up numbers.
//!
//! The start time is anchored on the first frame the counter runs, not when
//! it was started, so a counter started mid-frame still spans its full
//! duration.

use std::sync::Arc;

use parking_lot::Mutex;
use vitrine_core::{FrameLoop, FrameScheduler, LoopControl};

/// Counter state sampled once per frame.
#[derive(Debug, Clone, PartialEq)]
pub struct Counter {
    target: u32,
    duration: f64,
    started_at: Option<f64>,
    displayed: u32,
}

impl Counter {
    /// Creates a counter showing zero.
    #[must_use]
    pub fn new(target: u32, duration: f64) -> Self {
        Self {
            target,
            duration,
            started_at: None,
            displayed: 0,
        }
    }

    /// Samples the counter at `now`.
    ///
    /// Displays `floor(min(elapsed / duration, 1) * target)` and asks to stop
    /// once the ratio reaches 1.
    pub fn sample(&mut self, now: f64) -> LoopControl {
        let started_at = *self.started_at.get_or_insert(now);
        let elapsed = (now - started_at).max(0.0);
        let ratio = if self.duration > 0.0 {
            (elapsed / self.duration).min(1.0)
        } else {
            1.0
        };

        let value = (ratio * f64::from(self.target)).floor() as u32;
        // Never count backwards
        self.displayed = self.displayed.max(value);

        if ratio >= 1.0 {
            self.displayed = self.target;
            LoopControl::Stop
        } else {
            LoopControl::Continue
        }
    }

    /// Value currently displayed.
    #[must_use]
    pub fn displayed(&self) -> u32 {
        self.displayed
    }

    /// Final value.
    #[must_use]
    pub fn target(&self) -> u32 {
        self.target
    }

    /// Returns true once the target is displayed.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.displayed == self.target && self.started_at.is_some()
    }
}

/// A counter driven by its own frame loop.
pub struct AnimatedCounter {
    counter: Arc<Mutex<Counter>>,
    frame_loop: Option<FrameLoop>,
}

impl AnimatedCounter {
    /// Creates an idle counter.
    #[must_use]
    pub fn new(target: u32, duration: f64) -> Self {
        Self {
            counter: Arc::new(Mutex::new(Counter::new(target, duration))),
            frame_loop: None,
        }
    }

    /// Starts counting on the next frame. Later calls do nothing.
    pub fn start(&mut self, scheduler: &FrameScheduler) {
        if self.frame_loop.is_some() {
            return;
        }
        let counter = Arc::clone(&self.counter);
        self.frame_loop = Some(FrameLoop::start(scheduler, move |now| counter.lock().sample(now)));
        tracing::debug!("counter to {} started", self.counter.lock().target());
    }

    /// Returns true once [`start`](Self::start) has been called.
    #[must_use]
    pub fn is_started(&self) -> bool {
        self.frame_loop.is_some()
    }

    /// Returns true while the frame loop is still running.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.frame_loop.as_ref().is_some_and(FrameLoop::is_running)
    }

    /// Value currently displayed.
    #[must_use]
    pub fn value(&self) -> u32 {
        self.counter.lock().displayed()
    }

    /// Final value.
    #[must_use]
    pub fn target(&self) -> u32 {
        self.counter.lock().target()
    }
}
