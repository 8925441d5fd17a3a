use crate::shape::Shape;
use crate::store::ParticleStore;
use rand::rngs::StdRng;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MorphPhase {
    Idle,
    Morphing,
}

/// Outcome of one [`MorphScheduler::advance`] call.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum MorphStep {
    /// Nothing to do; positions untouched.
    Idle,
    /// Positions eased toward the targets by this smoothstep factor.
    Eased(f32),
    /// Positions snapped onto the targets; the scheduler is idle again.
    Finished,
}

#[inline]
pub fn smoothstep(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}

/// Two-state timer that drives the particle store from its current positions
/// into the next shape.
///
/// Each step re-interpolates from wherever the particles are now, so the
/// smoothstep factor compounds over the morph instead of tweening from a fixed
/// snapshot.
pub struct MorphScheduler {
    phase: MorphPhase,
    shape: Shape,
    steps: u32,
    step_sec: f32,
    duration_sec: f32,
    rng: StdRng,
}

impl MorphScheduler {
    pub fn new(duration_sec: f32, step_sec: f32, rng: StdRng) -> Self {
        Self {
            phase: MorphPhase::Idle,
            shape: Shape::Scatter,
            steps: 0,
            step_sec,
            duration_sec,
            rng,
        }
    }

    pub fn phase(&self) -> MorphPhase {
        self.phase
    }

    pub fn is_morphing(&self) -> bool {
        self.phase == MorphPhase::Morphing
    }

    pub fn shape(&self) -> Shape {
        self.shape
    }

    pub fn duration(&self) -> f32 {
        self.duration_sec
    }

    /// Seconds since the current morph started, counted in fixed steps.
    pub fn elapsed(&self) -> f32 {
        self.steps as f32 * self.step_sec
    }

    /// Start morphing into the next shape. Returns `false` and changes nothing
    /// while a morph is already running.
    pub fn request_morph(&mut self, store: &mut ParticleStore) -> bool {
        if self.is_morphing() {
            return false;
        }
        self.shape = self.shape.next();
        store.generate_targets(self.shape, &mut self.rng);
        self.steps = 0;
        self.phase = MorphPhase::Morphing;
        true
    }

    /// Advance one fixed step.
    pub fn advance(&mut self, store: &mut ParticleStore) -> MorphStep {
        if !self.is_morphing() {
            return MorphStep::Idle;
        }
        self.steps = self.steps.saturating_add(1);
        let elapsed = self.elapsed();
        if elapsed >= self.duration_sec {
            store.snap_to_targets();
            self.phase = MorphPhase::Idle;
            return MorphStep::Finished;
        }
        let s = smoothstep(elapsed / self.duration_sec);
        store.ease_towards_targets(s);
        MorphStep::Eased(s)
    }

    /// Re-randomize every particle and return to the scatter shape, idle.
    pub fn reset(&mut self, store: &mut ParticleStore) {
        store.randomize(&mut self.rng);
        self.shape = Shape::Scatter;
        self.steps = 0;
        self.phase = MorphPhase::Idle;
    }
}
