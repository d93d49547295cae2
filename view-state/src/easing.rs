//! Easing curves for one-shot transitions, rendered as CSS timing functions.

/// Soft "ease out" used by every reveal on the site.
pub const SOFT_EASE_OUT: Easing = Easing::CubicBezier(0.22, 1.0, 0.36, 1.0);

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Easing {
    EaseOut,
    CubicBezier(f64, f64, f64, f64),
}

impl Easing {
    /// CSS `transition-timing-function` value.
    pub fn to_css(&self) -> String {
        match *self {
            Easing::EaseOut => "ease-out".to_string(),
            Easing::CubicBezier(x1, y1, x2, y2) => {
                format!("cubic-bezier({x1}, {y1}, {x2}, {y2})")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn css_rendering() {
        assert_eq!(SOFT_EASE_OUT.to_css(), "cubic-bezier(0.22, 1, 0.36, 1)");
        assert_eq!(Easing::EaseOut.to_css(), "ease-out");
    }
}
