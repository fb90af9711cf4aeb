use dioxus::prelude::*;
use gloo_timers::future::TimeoutFuture;

use super::{Animate, AnimationError, Motion, Transition};

const FRAME_MS: u32 = 16;

// an animated number owned by a component
//
// the in-flight task is kept next to the value so that starting a new
// transition can cancel the previous one before it writes another frame
#[derive(Clone, Copy, PartialEq)]
pub struct MotionValue {
    motion: Signal<Motion>,
    task: Signal<Option<Task>>,
}

pub fn use_motion_value(initial: f64) -> MotionValue {
    let motion = use_signal(|| Motion::new(initial));
    let task = use_signal(|| None);

    MotionValue { motion, task }
}

impl MotionValue {
    // subscribes the caller, so reading this in rsx re-renders every frame
    pub fn get(&self) -> f64 {
        self.motion.read().current()
    }
}

impl Animate for MotionValue {
    fn start(&mut self, target: f64, transition: Transition) -> Result<(), AnimationError> {
        let animating = {
            let mut motion = self
                .motion
                .try_write()
                .map_err(|_| AnimationError::Disposed)?;
            motion.retarget(target, transition)?;
            motion.is_animating()
        };

        let mut in_flight = self
            .task
            .try_write()
            .map_err(|_| AnimationError::Disposed)?;

        if let Some(previous) = in_flight.take() {
            previous.cancel();
        }

        if !animating {
            return Ok(());
        }

        let mut motion = self.motion;

        *in_flight = Some(spawn(async move {
            loop {
                TimeoutFuture::new(FRAME_MS).await;

                let running = match motion.try_write() {
                    Ok(mut motion) => motion.advance(FRAME_MS),
                    Err(_) => false,
                };
                if !running {
                    break;
                }
            }
        }));

        Ok(())
    }
}
