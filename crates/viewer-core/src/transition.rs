use glam::Vec3;

/// Cubic ease-in-out over `t` in [0, 1]; input outside the range is clamped.
#[inline]
pub fn ease_in_out_cubic(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
    }
}

/// What happens once a transition reaches its end pose.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TransitionDone {
    ShowImage(usize),
    Nothing,
}

/// One timed camera move from a start pose to an end pose.
#[derive(Clone, Debug, PartialEq)]
pub struct Transition {
    pub start_eye: Vec3,
    pub start_target: Vec3,
    pub end_eye: Vec3,
    pub end_target: Vec3,
    pub start_ms: f64,
    pub duration_ms: f64,
    pub on_done: TransitionDone,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TransitionSample {
    pub eye: Vec3,
    pub target: Vec3,
    pub finished: bool,
}

impl Transition {
    /// Normalized time in [0, 1]; a non-positive duration is complete immediately.
    pub fn progress(&self, now_ms: f64) -> f32 {
        if self.duration_ms <= 0.0 {
            return 1.0;
        }
        (((now_ms - self.start_ms) / self.duration_ms).clamp(0.0, 1.0)) as f32
    }

    pub fn sample(&self, now_ms: f64) -> TransitionSample {
        let t = self.progress(now_ms);
        let ease = ease_in_out_cubic(t);
        TransitionSample {
            eye: self.start_eye.lerp(self.end_eye, ease),
            target: self.start_target.lerp(self.end_target, ease),
            finished: t >= 1.0,
        }
    }
}

/// At most one transition runs at a time; a new one is only accepted from `Idle`.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum TransitionState {
    #[default]
    Idle,
    Transitioning(Transition),
}

impl TransitionState {
    #[inline]
    pub fn is_busy(&self) -> bool {
        matches!(self, TransitionState::Transitioning(_))
    }

    /// Returns false (and leaves the running transition untouched) when busy.
    pub fn begin(&mut self, transition: Transition) -> bool {
        if self.is_busy() {
            return false;
        }
        *self = TransitionState::Transitioning(transition);
        true
    }

    pub fn active(&self) -> Option<&Transition> {
        match self {
            TransitionState::Transitioning(t) => Some(t),
            TransitionState::Idle => None,
        }
    }

    /// Return to `Idle`, yielding the completed transition's follow-up.
    pub fn finish(&mut self) -> Option<TransitionDone> {
        match std::mem::take(self) {
            TransitionState::Transitioning(t) => Some(t.on_done),
            TransitionState::Idle => None,
        }
    }
}
