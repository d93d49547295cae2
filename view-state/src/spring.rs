//! Damped spring used to smooth pointer-driven values.
//!
//! The integrator is RK4 with fixed sub-steps, so a long gap between frames
//! (a background tab, a slow device) can't blow the simulation up.

/// Largest time step the integrator takes in one go, in seconds.
const MAX_SUBSTEP: f64 = 1.0 / 120.0;
/// Displacement and velocity below which a spring counts as at rest.
const REST_EPSILON: f64 = 0.01;
/// Longest gap simulated per call; anything beyond is dropped.
const MAX_STEP: f64 = 1.0;

#[derive(Clone, Copy, PartialEq, Debug)]
pub struct SpringConfig {
    pub stiffness: f64,
    pub damping: f64,
    pub mass: f64,
}

impl SpringConfig {
    /// Buttons and tilt cards.
    pub const SNAPPY: SpringConfig = SpringConfig {
        stiffness: 400.0,
        damping: 17.0,
        mass: 0.5,
    };

    /// The hero backdrop; slower and with less overshoot.
    pub const GENTLE: SpringConfig = SpringConfig {
        stiffness: 300.0,
        damping: 20.0,
        mass: 0.5,
    };

    pub fn new(stiffness: f64, damping: f64, mass: f64) -> Self {
        Self {
            stiffness,
            damping,
            mass,
        }
    }
}

impl Default for SpringConfig {
    fn default() -> Self {
        Self::SNAPPY
    }
}

#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Spring {
    config: SpringConfig,
    value: f64,
    velocity: f64,
    target: f64,
}

impl Spring {
    /// A spring resting at `value`.
    pub fn new(config: SpringConfig, value: f64) -> Self {
        Self {
            config,
            value,
            velocity: 0.0,
            target: value,
        }
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    /// Retargets the spring. Current velocity is kept, so an interrupted
    /// motion carries on smoothly.
    pub fn set_target(&mut self, target: f64) {
        if target.is_finite() {
            self.target = target;
        }
    }

    pub fn is_settled(&self) -> bool {
        (self.value - self.target).abs() < REST_EPSILON && self.velocity.abs() < REST_EPSILON
    }

    /// Advances the simulation by `dt` seconds and returns the new value.
    /// Non-finite or non-positive `dt` leaves the spring where it is.
    pub fn step(&mut self, dt: f64) -> f64 {
        if !(dt > 0.0) || !dt.is_finite() || self.is_settled() {
            self.settle_if_resting();
            return self.value;
        }

        let mut remaining = dt.min(MAX_STEP);
        while remaining > 0.0 {
            let h = remaining.min(MAX_SUBSTEP);
            self.rk4(h);
            remaining -= h;
            if self.is_settled() {
                break;
            }
        }
        self.settle_if_resting();
        self.value
    }

    fn settle_if_resting(&mut self) {
        if self.is_settled() {
            self.value = self.target;
            self.velocity = 0.0;
        }
    }

    fn acceleration(&self, x: f64, v: f64) -> f64 {
        let mass = self.config.mass.max(1e-3);
        (-self.config.stiffness * (x - self.target) - self.config.damping * v) / mass
    }

    fn rk4(&mut self, h: f64) {
        let (x, v) = (self.value, self.velocity);

        let k1x = v;
        let k1v = self.acceleration(x, v);

        let k2x = v + 0.5 * h * k1v;
        let k2v = self.acceleration(x + 0.5 * h * k1x, k2x);

        let k3x = v + 0.5 * h * k2v;
        let k3v = self.acceleration(x + 0.5 * h * k2x, k3x);

        let k4x = v + h * k3v;
        let k4v = self.acceleration(x + h * k3x, k4x);

        self.value = x + h / 6.0 * (k1x + 2.0 * k2x + 2.0 * k3x + k4x);
        self.velocity = v + h / 6.0 * (k1v + 2.0 * k2v + 2.0 * k3v + k4v);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(spring: &mut Spring, seconds: f64) {
        let frames = (seconds * 60.0) as usize;
        for _ in 0..frames {
            spring.step(1.0 / 60.0);
        }
    }

    #[test]
    fn default_config_matches_button_feel() {
        let c = SpringConfig::default();
        assert_eq!((c.stiffness, c.damping, c.mass), (400.0, 17.0, 0.5));
    }

    #[test]
    fn resting_spring_does_not_move() {
        let mut s = Spring::new(SpringConfig::default(), 0.0);
        assert!(s.is_settled());
        assert_eq!(s.step(0.016), 0.0);
    }

    #[test]
    fn converges_and_snaps_to_target() {
        let mut s = Spring::new(SpringConfig::default(), 0.0);
        s.set_target(30.0);
        assert!(!s.is_settled());
        s.step(1.0 / 60.0);
        assert!(s.value() > 0.0 && s.value() < 30.0);
        run(&mut s, 2.0);
        assert!(s.is_settled());
        assert_eq!(s.value(), 30.0);
        assert_eq!(s.velocity, 0.0);
    }

    #[test]
    fn one_large_step_matches_many_small_ones() {
        let mut a = Spring::new(SpringConfig::GENTLE, 0.0);
        let mut b = a;
        a.set_target(5.0);
        b.set_target(5.0);
        a.step(0.25);
        for _ in 0..30 {
            b.step(0.25 / 30.0);
        }
        assert!((a.value() - b.value()).abs() < 1e-3);
    }

    #[test]
    fn huge_frame_gap_stays_finite() {
        let mut s = Spring::new(SpringConfig::default(), -30.0);
        s.set_target(0.0);
        let v = s.step(10.0);
        assert!(v.is_finite());
        assert!(s.is_settled());
    }

    #[test]
    fn ignores_non_finite_targets_and_steps() {
        let mut s = Spring::new(SpringConfig::default(), 1.0);
        s.set_target(f64::NAN);
        assert_eq!(s.target, 1.0);
        s.set_target(2.0);
        assert_eq!(s.step(f64::NAN), 1.0);
        assert_eq!(s.step(-1.0), 1.0);
    }

    #[test]
    fn infinite_step_returns_without_moving() {
        let mut s = Spring::new(SpringConfig::default(), 0.0);
        s.set_target(30.0);
        assert_eq!(s.step(f64::INFINITY), 0.0);
        assert!(!s.is_settled());
        s.step(1.0 / 60.0);
        assert!(s.value() > 0.0);
    }

    #[test]
    fn long_gap_is_capped_and_stops_once_settled() {
        let mut s = Spring::new(SpringConfig::default(), 0.0);
        s.set_target(30.0);
        assert_eq!(s.step(1.0e12), 30.0);
        assert!(s.is_settled());
    }
}
