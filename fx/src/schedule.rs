//! Deferred and per-frame callback scheduling.
//!
//! The browser adapter maps these onto `setTimeout` and
//! `requestAnimationFrame`; [`crate::memory::ManualScheduler`] drives them
//! from a virtual clock so timing contracts are testable to the millisecond.

use std::time::Duration;

/// Handle for a pending timeout.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerId(pub u64);

/// Handle for a pending animation-frame callback.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FrameId(pub u64);

/// Cooperative single-threaded scheduler.
///
/// Tasks run on the same thread that scheduled them, never re-entrantly
/// from inside the scheduling call.
pub trait Scheduler {
    /// Run `task` once after `delay`.
    fn set_timeout(&self, delay: Duration, task: Box<dyn FnOnce()>) -> TimerId;
    /// Cancel a pending timeout. Unknown or already fired ids are ignored.
    fn clear_timeout(&self, id: TimerId);
    /// Run `task` before the next repaint with the frame timestamp in ms.
    fn request_frame(&self, task: Box<dyn FnOnce(f64)>) -> FrameId;
    /// Cancel a pending frame callback. Unknown or already fired ids are ignored.
    fn cancel_frame(&self, id: FrameId);
}

