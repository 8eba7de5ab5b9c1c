//! # Frame Scheduling
//!
//! The host's "next frame" primitive, made explicit:
//!
//! ```text
//! request_frame(cb) ──> queue ──> run_frame(now) ──> cb(now)
//!        │                                              │
//!        └──── cancel(handle) removes it ───────────────┘ (re-request = loop)
//! ```
//!
//! Callbacks requested while a frame is running are deferred to the next
//! frame, exactly like `requestAnimationFrame`. [`FrameLoop`] wraps the
//! request/re-request dance in a guard: acquire on mount, and every exit path
//! (explicit stop, drop, early return) cancels the outstanding request.
//!
//! Timestamps are seconds on the host's monotonic clock.

use std::sync::Arc;

use parking_lot::Mutex;

/// Handle to a pending frame request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FrameHandle(u64);

impl FrameHandle {
    /// Returns the raw request id.
    #[must_use]
    pub const fn id(self) -> u64 {
        self.0
    }
}

type FrameCallback = Box<dyn FnOnce(f64) + Send>;

#[derive(Default)]
struct SchedulerInner {
    /// Next request id.
    next_id: u64,
    /// Requests due on the next frame.
    queue: Vec<(u64, FrameCallback)>,
    /// Requests taken by the frame currently running and not yet invoked.
    in_flight: Vec<u64>,
    /// Frames run so far.
    frames: u64,
}

/// Cooperative per-frame scheduler.
///
/// Cloning is cheap: clones share the same queue.
#[derive(Clone, Default)]
pub struct FrameScheduler {
    inner: Arc<Mutex<SchedulerInner>>,
}

impl FrameScheduler {
    /// Creates an empty scheduler.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Requests `callback` to run on the next frame.
    pub fn request_frame<F>(&self, callback: F) -> FrameHandle
    where
        F: FnOnce(f64) + Send + 'static,
    {
        let mut inner = self.inner.lock();
        inner.next_id += 1;
        let id = inner.next_id;
        inner.queue.push((id, Box::new(callback)));
        FrameHandle(id)
    }

    /// Cancels a pending request.
    ///
    /// Returns false if the request already ran or was already cancelled.
    pub fn cancel(&self, handle: FrameHandle) -> bool {
        let mut inner = self.inner.lock();
        if let Some(index) = inner.queue.iter().position(|(id, _)| *id == handle.0) {
            // Dropped outside the lock below
            let (_, callback) = inner.queue.swap_remove(index);
            drop(inner);
            drop(callback);
            return true;
        }
        if let Some(index) = inner.in_flight.iter().position(|id| *id == handle.0) {
            inner.in_flight.swap_remove(index);
            return true;
        }
        false
    }

    /// Runs every callback that was requested before this call.
    ///
    /// Returns the number of callbacks invoked.
    pub fn run_frame(&self, now: f64) -> usize {
        let due = {
            let mut inner = self.inner.lock();
            inner.frames += 1;
            let due = std::mem::take(&mut inner.queue);
            inner.in_flight = due.iter().map(|(id, _)| *id).collect();
            due
        };

        let mut invoked = 0;
        for (id, callback) in due {
            let still_due = {
                let mut inner = self.inner.lock();
                match inner.in_flight.iter().position(|pending| *pending == id) {
                    Some(index) => {
                        inner.in_flight.swap_remove(index);
                        true
                    }
                    None => false,
                }
            };
            if still_due {
                callback(now);
                invoked += 1;
            }
        }
        invoked
    }

    /// Returns the number of requests waiting for the next frame.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.inner.lock().queue.len()
    }

    /// Returns the number of frames run so far.
    #[must_use]
    pub fn frames(&self) -> u64 {
        self.inner.lock().frames
    }
}

/// What a frame-loop task wants after running.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopControl {
    /// Run again next frame.
    Continue,
    /// Stop the loop; no further frames are requested.
    Stop,
}

struct LoopState {
    handle: Option<FrameHandle>,
    stopped: bool,
}

/// A repeating frame task owned by a guard.
///
/// Dropping the guard cancels the outstanding request synchronously, so no
/// callback fires after teardown.
pub struct FrameLoop {
    scheduler: FrameScheduler,
    state: Arc<Mutex<LoopState>>,
}

impl FrameLoop {
    /// Starts `task` on the next frame and keeps re-requesting while it
    /// returns [`LoopControl::Continue`].
    #[must_use = "dropping the FrameLoop cancels it immediately"]
    pub fn start<F>(scheduler: &FrameScheduler, task: F) -> Self
    where
        F: FnMut(f64) -> LoopControl + Send + 'static,
    {
        let state = Arc::new(Mutex::new(LoopState { handle: None, stopped: false }));
        let task = Arc::new(Mutex::new(task));
        Self::schedule(scheduler.clone(), Arc::clone(&state), task);
        Self {
            scheduler: scheduler.clone(),
            state,
        }
    }

    fn schedule<F>(scheduler: FrameScheduler, state: Arc<Mutex<LoopState>>, task: Arc<Mutex<F>>)
    where
        F: FnMut(f64) -> LoopControl + Send + 'static,
    {
        let next_scheduler = scheduler.clone();
        let next_state = Arc::clone(&state);
        let handle = scheduler.request_frame(move |now| {
            {
                let mut state = next_state.lock();
                state.handle = None;
                if state.stopped {
                    return;
                }
            }

            let control = {
                let mut task = task.lock();
                (*task)(now)
            };

            let keep_going = control == LoopControl::Continue && !next_state.lock().stopped;
            if keep_going {
                Self::schedule(next_scheduler, next_state, task);
            } else {
                next_state.lock().stopped = true;
            }
        });
        state.lock().handle = Some(handle);
    }

    /// Returns true while the loop still has a frame requested.
    #[must_use]
    pub fn is_running(&self) -> bool {
        !self.state.lock().stopped
    }

    /// Stops the loop and cancels its pending request.
    pub fn stop(&self) {
        let handle = {
            let mut state = self.state.lock();
            state.stopped = true;
            state.handle.take()
        };
        if let Some(handle) = handle {
            self.scheduler.cancel(handle);
        }
    }
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        self.stop();
    }
}
