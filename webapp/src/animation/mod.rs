mod motion;
pub use motion::{MotionValue, use_motion_value};

use thiserror::Error;

pub const DEFAULT_DURATION_MS: u32 = 300;

#[derive(Clone, Copy, Debug, PartialEq, Error)]
pub enum AnimationError {
    #[error("animation target {0} is not a finite number")]
    InvalidTarget(f64),
    #[error("animated value no longer exists")]
    Disposed,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Easing {
    Linear,
    #[default]
    EaseOut,
}

impl Easing {
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::EaseOut => 1.0 - (1.0 - t).powi(3),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Transition {
    pub duration_ms: u32,
    pub easing: Easing,
}

impl Transition {
    pub fn linear(duration_ms: u32) -> Self {
        Self {
            duration_ms,
            easing: Easing::Linear,
        }
    }
}

impl Default for Transition {
    fn default() -> Self {
        Self {
            duration_ms: DEFAULT_DURATION_MS,
            easing: Easing::default(),
        }
    }
}

// a single interpolation from one value to another
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tween {
    pub from: f64,
    pub to: f64,
    pub transition: Transition,
}

impl Tween {
    pub fn new(from: f64, to: f64, transition: Transition) -> Self {
        Self {
            from,
            to,
            transition,
        }
    }

    pub fn is_finished(&self, elapsed_ms: u32) -> bool {
        elapsed_ms >= self.transition.duration_ms
    }

    pub fn sample(&self, elapsed_ms: u32) -> f64 {
        if self.is_finished(elapsed_ms) {
            return self.to;
        }

        let t = elapsed_ms as f64 / self.transition.duration_ms as f64;
        self.from + (self.to - self.from) * self.transition.easing.apply(t)
    }
}

// the displayed value plus whatever tween is currently driving it
//
// retargeting replaces the active tween outright and starts the new one from
// the value on screen, never from the old target
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Motion {
    current: f64,
    active: Option<(Tween, u32)>,
}

impl Motion {
    pub fn new(initial: f64) -> Self {
        Self {
            current: initial,
            active: None,
        }
    }

    pub fn current(&self) -> f64 {
        self.current
    }

    pub fn is_animating(&self) -> bool {
        self.active.is_some()
    }

    pub fn retarget(&mut self, target: f64, transition: Transition) -> Result<Tween, AnimationError> {
        if !target.is_finite() {
            return Err(AnimationError::InvalidTarget(target));
        }

        let tween = Tween::new(self.current, target, transition);
        if tween.is_finished(0) {
            self.current = target;
            self.active = None;
        } else {
            self.active = Some((tween, 0));
        }

        Ok(tween)
    }

    // returns true while there are frames left to play
    pub fn advance(&mut self, frame_ms: u32) -> bool {
        let Some((tween, elapsed)) = self.active.as_mut() else {
            return false;
        };

        *elapsed = elapsed.saturating_add(frame_ms);
        self.current = tween.sample(*elapsed);

        if tween.is_finished(*elapsed) {
            self.active = None;
            return false;
        }
        true
    }
}

/// Something that can be driven towards a target value.
///
/// Starting a new transition supersedes whatever transition is still in
/// flight for the same value; commands are never queued.
pub trait Animate {
    fn start(&mut self, target: f64, transition: Transition) -> Result<(), AnimationError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn retarget_mid_flight_starts_from_displayed_value() {
        let mut motion = Motion::new(0.0);
        motion.retarget(1.0, Transition::linear(100)).unwrap();

        for _ in 0..3 {
            assert!(motion.advance(16));
        }
        let displayed = motion.current();
        assert!(displayed > 0.0 && displayed < 1.0);

        let reversed = motion.retarget(0.0, Transition::linear(100)).unwrap();
        assert_eq!(reversed.from, displayed);
        assert_eq!(reversed.to, 0.0);

        // the first frame moves back towards 0, not on towards 1
        assert!(motion.advance(16));
        assert!(motion.current() < displayed);

        while motion.advance(16) {}
        assert_eq!(motion.current(), 0.0);
        assert!(!motion.is_animating());
    }

    #[test]
    fn invalid_target_leaves_motion_untouched() {
        let mut motion = Motion::new(0.5);
        motion.retarget(1.0, Transition::linear(100)).unwrap();
        motion.advance(16);
        let before = motion;

        assert!(matches!(
            motion.retarget(f64::NAN, Transition::default()),
            Err(AnimationError::InvalidTarget(t)) if t.is_nan()
        ));
        assert_eq!(motion, before);
    }

    #[test]
    fn zero_duration_retarget_settles_immediately() {
        let mut motion = Motion::new(0.0);
        motion.retarget(-185.0, Transition::linear(0)).unwrap();

        assert_eq!(motion.current(), -185.0);
        assert!(!motion.advance(16));
    }

    #[test]
    fn linear_tween_is_proportional() {
        let tween = Tween::new(0.0, -185.0, Transition::linear(200));

        assert_eq!(tween.sample(0), 0.0);
        assert_eq!(tween.sample(100), -92.5);
        assert_eq!(tween.sample(200), -185.0);
    }

    #[test]
    fn tween_holds_target_after_duration() {
        let tween = Tween::new(1.0, 0.0, Transition::default());

        assert!(tween.is_finished(DEFAULT_DURATION_MS));
        assert_eq!(tween.sample(DEFAULT_DURATION_MS * 4), 0.0);
    }

    #[test]
    fn zero_duration_jumps_to_target() {
        let tween = Tween::new(0.0, 1.0, Transition::linear(0));

        assert!(tween.is_finished(0));
        assert_eq!(tween.sample(0), 1.0);
    }

    #[test]
    fn ease_out_front_loads_progress() {
        let eased = Easing::EaseOut.apply(0.5);

        assert!(eased > 0.5);
        assert!(eased < 1.0);
        assert_eq!(Easing::EaseOut.apply(0.0), 0.0);
        assert_eq!(Easing::EaseOut.apply(1.0), 1.0);
    }
}
