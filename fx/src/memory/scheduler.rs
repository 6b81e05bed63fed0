//! Virtual-clock scheduler.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::time::Duration;

use crate::schedule::{FrameId, Scheduler, TimerId};

/// Nominal frame period used by [`ManualScheduler::advance_frame`].
pub const FRAME_INTERVAL: Duration = Duration::from_millis(16);

type TimerTask = Box<dyn FnOnce()>;
type FrameTask = Box<dyn FnOnce(f64)>;

#[derive(Default)]
struct Clock {
    now: Duration,
    next_id: u64,
    timers: BTreeMap<(Duration, u64), TimerTask>,
    frames: BTreeMap<u64, FrameTask>,
}

/// Scheduler whose time only moves when a test says so.
///
/// Timers fire in due order (ties in scheduling order) and observe
/// [`ManualScheduler::now`] equal to their due time. Frame callbacks run only
/// on [`ManualScheduler::run_frame`].
#[derive(Default)]
pub struct ManualScheduler {
    clock: RefCell<Clock>,
}

impl ManualScheduler {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn now(&self) -> Duration {
        self.clock.borrow().now
    }

    #[must_use]
    pub fn pending_timers(&self) -> usize {
        self.clock.borrow().timers.len()
    }

    #[must_use]
    pub fn pending_frames(&self) -> usize {
        self.clock.borrow().frames.len()
    }

    /// Move time forward by `by`, firing every timer that comes due,
    /// including timers scheduled by timers that fire along the way.
    pub fn advance(&self, by: Duration) {
        let target = self.clock.borrow().now + by;
        loop {
            let next = {
                let mut clock = self.clock.borrow_mut();
                let due = clock
                    .timers
                    .first_key_value()
                    .is_some_and(|(&(at, _), _)| at <= target);
                if due {
                    clock.timers.pop_first().map(|((at, _), task)| {
                        clock.now = at;
                        task
                    })
                } else {
                    None
                }
            };
            match next {
                Some(task) => task(),
                None => break,
            }
        }
        let mut clock = self.clock.borrow_mut();
        if clock.now < target {
            clock.now = target;
        }
    }

    pub fn advance_ms(&self, ms: u64) {
        self.advance(Duration::from_millis(ms));
    }

    /// Run the frame callbacks queued so far. Callbacks they queue wait for
    /// the next frame. Returns how many ran.
    pub fn run_frame(&self) -> usize {
        let (frames, timestamp) = {
            let mut clock = self.clock.borrow_mut();
            let frames = std::mem::take(&mut clock.frames);
            (frames, clock.now.as_secs_f64() * 1000.0)
        };
        let count = frames.len();
        for task in frames.into_values() {
            task(timestamp);
        }
        count
    }

    /// Advance one nominal frame period, then run a frame.
    pub fn advance_frame(&self) -> usize {
        self.advance(FRAME_INTERVAL);
        self.run_frame()
    }

    fn next_id(&self) -> u64 {
        let mut clock = self.clock.borrow_mut();
        clock.next_id += 1;
        clock.next_id
    }
}

impl Scheduler for ManualScheduler {
    fn set_timeout(&self, delay: Duration, task: Box<dyn FnOnce()>) -> TimerId {
        let id = self.next_id();
        let mut clock = self.clock.borrow_mut();
        let due = clock.now + delay;
        clock.timers.insert((due, id), task);
        TimerId(id)
    }

    fn clear_timeout(&self, id: TimerId) {
        self.clock
            .borrow_mut()
            .timers
            .retain(|&(_, timer), _| timer != id.0);
    }

    fn request_frame(&self, task: Box<dyn FnOnce(f64)>) -> FrameId {
        let id = self.next_id();
        self.clock.borrow_mut().frames.insert(id, task);
        FrameId(id)
    }

    fn cancel_frame(&self, id: FrameId) {
        self.clock.borrow_mut().frames.remove(&id.0);
    }
}
