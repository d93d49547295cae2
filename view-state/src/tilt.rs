//! Pointer-driven 3D tilt.
//!
//! A pointer offset from an element's centre maps linearly onto a pair of
//! rotations, clamped to a fixed range. Two springs smooth the result and
//! bring it back to rest when the pointer leaves.

use crate::spring::Spring;
use crate::spring::SpringConfig;

/// Pointer position relative to an element's centre, in pixels.
#[derive(Clone, Copy, PartialEq, Debug, Default)]
pub struct PointerOffset {
    pub dx: f64,
    pub dy: f64,
}

impl PointerOffset {
    pub const ZERO: PointerOffset = PointerOffset { dx: 0.0, dy: 0.0 };

    pub fn new(dx: f64, dy: f64) -> Self {
        Self { dx, dy }
    }

    /// From a pointer position measured from the element's top-left corner.
    pub fn from_element(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            dx: x - width / 2.0,
            dy: y - height / 2.0,
        }
    }
}

/// Linear offset-to-rotation mapping.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct TiltMapping {
    /// Offset, in pixels, that produces the full `max_angle`.
    pub input_range: f64,
    /// Degrees.
    pub max_angle: f64,
}

impl TiltMapping {
    pub const CARD: TiltMapping = TiltMapping {
        input_range: 100.0,
        max_angle: 30.0,
    };

    pub const BACKDROP: TiltMapping = TiltMapping {
        input_range: 100.0,
        max_angle: 5.0,
    };

    /// Returns `(rotate_x, rotate_y)` in degrees. Moving the pointer down
    /// tips the top edge away, moving it right turns the element right.
    pub fn offset(&self, dx: f64, dy: f64) -> (f64, f64) {
        let max = self.max_angle.abs();
        let axis = |v: f64| -> f64 {
            if v.is_nan() {
                return 0.0;
            }
            let range = self.input_range.abs().max(f64::EPSILON);
            (v / range * max).clamp(-max, max)
        };
        // Adding 0.0 turns a -0.0 into 0.0.
        (-axis(dy) + 0.0, axis(dx) + 0.0)
    }
}

impl Default for TiltMapping {
    fn default() -> Self {
        Self::CARD
    }
}

#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Tilt {
    mapping: TiltMapping,
    rotate_x: Spring,
    rotate_y: Spring,
}

impl Tilt {
    pub fn new(mapping: TiltMapping, spring: SpringConfig) -> Self {
        Self {
            mapping,
            rotate_x: Spring::new(spring, 0.0),
            rotate_y: Spring::new(spring, 0.0),
        }
    }

    /// Buttons and team cards.
    pub fn card() -> Self {
        Self::new(TiltMapping::CARD, SpringConfig::SNAPPY)
    }

    /// The hero backdrop and mockup.
    pub fn backdrop() -> Self {
        Self::new(TiltMapping::BACKDROP, SpringConfig::GENTLE)
    }

    pub fn pointer_move(&mut self, offset: PointerOffset) {
        let (rx, ry) = self.mapping.offset(offset.dx, offset.dy);
        self.rotate_x.set_target(rx);
        self.rotate_y.set_target(ry);
    }

    pub fn pointer_leave(&mut self) {
        self.pointer_move(PointerOffset::ZERO);
    }

    /// Advances both springs by `dt` seconds.
    pub fn tick(&mut self, dt: f64) -> (f64, f64) {
        (self.rotate_x.step(dt), self.rotate_y.step(dt))
    }

    pub fn rotation(&self) -> (f64, f64) {
        (self.rotate_x.value(), self.rotate_y.value())
    }

    pub fn is_settled(&self) -> bool {
        self.rotate_x.is_settled() && self.rotate_y.is_settled()
    }

    /// `transform` declaration with the given perspective in pixels.
    pub fn to_css(&self, perspective: u32) -> String {
        let (rx, ry) = self.rotation();
        format!(
            "transform: perspective({perspective}px) rotateX({rx:.3}deg) rotateY({ry:.3}deg); transform-style: preserve-3d;"
        )
    }
}

impl Default for Tilt {
    fn default() -> Self {
        Self::card()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centre_maps_to_no_rotation() {
        assert_eq!(TiltMapping::CARD.offset(0.0, 0.0), (0.0, 0.0));
        assert_eq!(TiltMapping::BACKDROP.offset(0.0, 0.0), (0.0, 0.0));
    }

    #[test]
    fn mapping_is_linear_inside_the_range() {
        let m = TiltMapping::CARD;
        assert_eq!(m.offset(50.0, 0.0), (0.0, 15.0));
        assert_eq!(m.offset(0.0, 50.0), (-15.0, 0.0));
        assert_eq!(m.offset(-100.0, -100.0), (30.0, -30.0));
    }

    #[test]
    fn mapping_clamps_outside_the_range() {
        let m = TiltMapping::CARD;
        assert_eq!(m.offset(1e9, -1e9), (30.0, 30.0));
        assert_eq!(m.offset(f64::INFINITY, f64::NEG_INFINITY), (30.0, 30.0));
        assert_eq!(m.offset(f64::NAN, f64::NAN), (0.0, 0.0));
    }

    #[test]
    fn pointer_offset_from_element_coordinates() {
        let p = PointerOffset::from_element(150.0, 20.0, 200.0, 100.0);
        assert_eq!(p, PointerOffset::new(50.0, -30.0));
    }

    #[test]
    fn tilt_follows_pointer_then_returns_to_rest() {
        let mut tilt = Tilt::card();
        tilt.pointer_move(PointerOffset::new(100.0, 0.0));
        for _ in 0..120 {
            tilt.tick(1.0 / 60.0);
        }
        assert_eq!(tilt.rotation(), (0.0, 30.0));

        tilt.pointer_leave();
        assert!(!tilt.is_settled());
        for _ in 0..120 {
            tilt.tick(1.0 / 60.0);
        }
        assert!(tilt.is_settled());
        assert_eq!(tilt.rotation(), (0.0, 0.0));
    }

    #[test]
    fn css_output() {
        let tilt = Tilt::backdrop();
        assert_eq!(
            tilt.to_css(1000),
            "transform: perspective(1000px) rotateX(0.000deg) rotateY(0.000deg); transform-style: preserve-3d;"
        );
    }
}
