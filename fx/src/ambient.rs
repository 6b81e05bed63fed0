//! Idle breathing and wave motion driven by animation frames.
//!
//! Each loop is an [`AnimationTask`]: it advances a phase by a fixed step
//! every frame and hands it to a render closure until stopped. Stopping
//! cancels the pending frame (or the pending start delay), so a stopped task
//! never touches the page again.

use std::cell::Cell;
use std::rc::{Rc, Weak};
use std::time::Duration;

use crate::config::AmbientConfig;
use crate::dom::{ElementRef, px};
use crate::schedule::{FrameId, Scheduler, TimerId};

#[cfg(test)]
#[path = "ambient_test.rs"]
mod ambient_test;

type Render = Box<dyn Fn(f64)>;

struct TaskState {
    scheduler: Rc<dyn Scheduler>,
    step: f64,
    render: Render,
    phase: Cell<f64>,
    frames: Cell<u64>,
    running: Cell<bool>,
    pending_frame: Cell<Option<FrameId>>,
    pending_start: Cell<Option<TimerId>>,
}

/// Handle to a per-frame loop. The loop lives as long as the handle;
/// dropping it has the same effect as [`AnimationTask::stop`].
pub struct AnimationTask {
    state: Rc<TaskState>,
}

impl AnimationTask {
    /// Start a loop that adds `step` to its phase every frame and renders
    /// it, beginning after `delay` when one is given.
    pub fn start(
        scheduler: Rc<dyn Scheduler>,
        step: f64,
        delay: Option<Duration>,
        render: impl Fn(f64) + 'static,
    ) -> Self {
        let state = Rc::new(TaskState {
            scheduler,
            step,
            render: Box::new(render),
            phase: Cell::new(0.0),
            frames: Cell::new(0),
            running: Cell::new(true),
            pending_frame: Cell::new(None),
            pending_start: Cell::new(None),
        });

        match delay {
            Some(delay) => {
                let weak = Rc::downgrade(&state);
                let id = state.scheduler.set_timeout(
                    delay,
                    Box::new(move || {
                        if let Some(state) = weak.upgrade() {
                            state.pending_start.set(None);
                            schedule_frame(&state);
                        }
                    }),
                );
                state.pending_start.set(Some(id));
            }
            None => schedule_frame(&state),
        }
        Self { state }
    }

    /// Cancel all pending work. Idempotent.
    pub fn stop(&self) {
        let state = &self.state;
        if !state.running.replace(false) {
            return;
        }
        if let Some(id) = state.pending_frame.take() {
            state.scheduler.cancel_frame(id);
        }
        if let Some(id) = state.pending_start.take() {
            state.scheduler.clear_timeout(id);
        }
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.state.running.get()
    }

    /// Frames rendered so far.
    #[must_use]
    pub fn frames(&self) -> u64 {
        self.state.frames.get()
    }

    /// Current phase, `frames * step`.
    #[must_use]
    pub fn phase(&self) -> f64 {
        self.state.phase.get()
    }
}

impl Drop for AnimationTask {
    fn drop(&mut self) {
        self.stop();
    }
}

fn schedule_frame(state: &Rc<TaskState>) {
    if !state.running.get() {
        return;
    }
    let weak: Weak<TaskState> = Rc::downgrade(state);
    let id = state.scheduler.request_frame(Box::new(move |_timestamp| {
        let Some(state) = weak.upgrade() else {
            return;
        };
        state.pending_frame.set(None);
        if !state.running.get() {
            return;
        }
        let phase = state.phase.get() + state.step;
        state.phase.set(phase);
        state.frames.set(state.frames.get() + 1);
        (state.render)(phase);
        schedule_frame(&state);
    }));
    state.pending_frame.set(Some(id));
}

/// Hero background scale for a breathing phase.
#[must_use]
pub fn breath_scale(phase: f64, config: &AmbientConfig) -> f64 {
    1.0 + phase.sin() * config.breath_scale
}

/// Hero background opacity for a breathing phase.
#[must_use]
pub fn breath_opacity(phase: f64, config: &AmbientConfig) -> f64 {
    config.breath_opacity_base + phase.sin() * config.breath_opacity_swing
}

/// Hero title vertical offset for a wave phase.
#[must_use]
pub fn wave_offset(phase: f64, config: &AmbientConfig) -> f64 {
    phase.sin() * config.wave_amplitude_px
}

/// Slowly pulse `background`'s scale and opacity, starting next frame.
pub fn breathing(scheduler: Rc<dyn Scheduler>, background: ElementRef, config: AmbientConfig) -> AnimationTask {
    AnimationTask::start(scheduler, config.breath_step, None, move |phase| {
        background.set_style("transform", &format!("scale({})", breath_scale(phase, &config)));
        background.set_style("opacity", &breath_opacity(phase, &config).to_string());
    })
}

/// Bob `title` up and down, starting after the configured delay.
pub fn wave(scheduler: Rc<dyn Scheduler>, title: ElementRef, config: AmbientConfig) -> AnimationTask {
    AnimationTask::start(scheduler, config.wave_step, Some(config.wave_delay()), move |phase| {
        title.set_style("transform", &format!("translateY({})", px(wave_offset(phase, &config))));
    })
}
