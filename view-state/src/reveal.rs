//! One-shot "reveal on view" animation state.
//!
//! A [`RevealBlock`] starts hidden. The host feeds it viewport intersection
//! ratios through [`RevealBlock::observe`]; the first ratio at or above the
//! threshold either reveals the block straight away or hands back a timer
//! token for the configured delay. Once visible a block never hides again.

use std::time::Duration;

use crate::easing::Easing;
use crate::easing::SOFT_EASE_OUT;
use crate::timer::TimerSlot;
pub use crate::timer::TimerToken;
use crate::ViewStateError;

pub const DEFAULT_THRESHOLD: f64 = 0.1;

/// Enter animations a content block can use.
#[derive(
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Debug,
    Default,
    strum::Display,
    strum::EnumIter,
    strum::EnumIs,
)]
#[strum(serialize_all = "kebab-case")]
pub enum AnimationVariant {
    Fade,
    #[default]
    FadeUp,
    FadeLeft,
    FadeRight,
    Scale,
    #[strum(to_string = "rotate-3d")]
    Rotate3d,
    Flip,
    /// Fades in, then follows the pointer with a spring-smoothed tilt.
    Tilt,
}

/// A snapshot of the animatable properties of a block.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct VariantStyle {
    pub opacity: f64,
    /// Pixels.
    pub x: f64,
    /// Pixels.
    pub y: f64,
    pub scale: f64,
    /// Degrees.
    pub rotate_x: f64,
    pub rotate_y: f64,
    pub rotate_z: f64,
}

impl VariantStyle {
    /// Fully shown, no offset.
    pub const IDENTITY: VariantStyle = VariantStyle {
        opacity: 1.0,
        x: 0.0,
        y: 0.0,
        scale: 1.0,
        rotate_x: 0.0,
        rotate_y: 0.0,
        rotate_z: 0.0,
    };

    const HIDDEN: VariantStyle = VariantStyle {
        opacity: 0.0,
        ..Self::IDENTITY
    };

    /// `opacity` and `transform` declarations for an inline style.
    pub fn to_css(&self) -> String {
        format!(
            "opacity: {}; transform: translate3d({}px, {}px, 0) scale({}) rotateX({}deg) rotateY({}deg) rotateZ({}deg);",
            self.opacity, self.x, self.y, self.scale, self.rotate_x, self.rotate_y, self.rotate_z
        )
    }
}

/// How a block moves from its hidden to its visible style.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Transition {
    pub duration: Duration,
    pub easing: Easing,
}

impl Transition {
    pub fn to_css(&self) -> String {
        let timing = self.easing.to_css();
        format!(
            "transition: opacity {ms}ms {timing}, transform {ms}ms {timing};",
            ms = self.duration.as_millis()
        )
    }
}

impl AnimationVariant {
    pub fn hidden_style(self) -> VariantStyle {
        let hidden = VariantStyle::HIDDEN;
        match self {
            Self::Fade | Self::Tilt => hidden,
            Self::FadeUp => VariantStyle {
                y: 30.0,
                rotate_x: 10.0,
                ..hidden
            },
            Self::FadeLeft => VariantStyle {
                x: -30.0,
                rotate_y: 30.0,
                ..hidden
            },
            Self::FadeRight => VariantStyle {
                x: 30.0,
                rotate_y: -30.0,
                ..hidden
            },
            Self::Scale => VariantStyle {
                scale: 0.9,
                rotate_x: 15.0,
                ..hidden
            },
            Self::Rotate3d => VariantStyle {
                rotate_x: 90.0,
                rotate_y: -45.0,
                rotate_z: 45.0,
                ..hidden
            },
            Self::Flip => VariantStyle {
                rotate_y: 180.0,
                ..hidden
            },
        }
    }

    pub fn visible_style(self) -> VariantStyle {
        VariantStyle::IDENTITY
    }

    pub fn transition(self) -> Transition {
        let millis = match self {
            Self::Fade | Self::Tilt => 600,
            Self::FadeUp | Self::FadeLeft | Self::FadeRight | Self::Scale => 800,
            Self::Flip => 1000,
            Self::Rotate3d => 1200,
        };
        Transition {
            duration: Duration::from_millis(millis),
            easing: SOFT_EASE_OUT,
        }
    }

    /// Whether the block keeps reacting to the pointer after it appears.
    pub fn tracks_pointer(self) -> bool {
        self.is_tilt()
    }
}

/// Per-block reveal settings.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct RevealConfig {
    delay: Duration,
    variant: AnimationVariant,
    threshold: f64,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            delay: Duration::ZERO,
            variant: AnimationVariant::default(),
            threshold: DEFAULT_THRESHOLD,
        }
    }
}

impl RevealConfig {
    /// Fails when `threshold` is outside `(0, 1]`.
    pub fn new(
        variant: AnimationVariant,
        delay: Duration,
        threshold: f64,
    ) -> Result<Self, ViewStateError> {
        if !(threshold > 0.0 && threshold <= 1.0) {
            return Err(ViewStateError::InvalidThreshold(threshold));
        }
        Ok(Self {
            delay,
            variant,
            threshold,
        })
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    pub fn variant(&self) -> AnimationVariant {
        self.variant
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, strum::EnumIs)]
pub enum RevealState {
    #[default]
    Hidden,
    Visible,
}

/// What the host must do after feeding an observation in.
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum RevealAction {
    None,
    /// The block just became visible.
    RevealNow,
    /// Call [`RevealBlock::fire`] with `token` once `delay` has passed.
    Schedule { token: TimerToken, delay: Duration },
}

#[derive(Clone, Debug, PartialEq)]
pub struct RevealBlock {
    config: RevealConfig,
    state: RevealState,
    timer: TimerSlot,
}

impl RevealBlock {
    pub fn new(config: RevealConfig) -> Self {
        Self {
            config,
            state: RevealState::Hidden,
            timer: TimerSlot::default(),
        }
    }

    pub fn config(&self) -> &RevealConfig {
        &self.config
    }

    pub fn state(&self) -> RevealState {
        self.state
    }

    pub fn is_visible(&self) -> bool {
        self.state.is_visible()
    }

    /// The style the block should currently render with.
    pub fn style(&self) -> VariantStyle {
        match self.state {
            RevealState::Hidden => self.config.variant.hidden_style(),
            RevealState::Visible => self.config.variant.visible_style(),
        }
    }

    /// Feeds one intersection ratio in. Ratios are clamped to `[0, 1]`.
    pub fn observe(&mut self, ratio: f64) -> RevealAction {
        let ratio = if ratio.is_nan() { 0.0 } else { ratio.clamp(0.0, 1.0) };

        if self.state.is_visible() || self.timer.is_pending() || ratio < self.config.threshold {
            return RevealAction::None;
        }

        if self.config.delay.is_zero() {
            self.state = RevealState::Visible;
            return RevealAction::RevealNow;
        }

        RevealAction::Schedule {
            token: self.timer.issue(),
            delay: self.config.delay,
        }
    }

    /// Completes a scheduled reveal. Returns `true` if the block became
    /// visible; stale or unknown tokens do nothing.
    pub fn fire(&mut self, token: TimerToken) -> bool {
        if !self.timer.take(token) {
            return false;
        }
        self.state = RevealState::Visible;
        true
    }

    /// Drops any pending timer. Call when the block's surface goes away.
    pub fn teardown(&mut self) {
        self.timer.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    fn block(delay_ms: u64, threshold: f64) -> RevealBlock {
        RevealBlock::new(
            RevealConfig::new(
                AnimationVariant::FadeUp,
                Duration::from_millis(delay_ms),
                threshold,
            )
            .unwrap(),
        )
    }

    #[test]
    fn rejects_out_of_range_thresholds() {
        for t in [0.0, -0.5, 1.01, f64::NAN] {
            let res = RevealConfig::new(AnimationVariant::Fade, Duration::ZERO, t);
            assert!(matches!(res, Err(ViewStateError::InvalidThreshold(_))));
        }
        assert!(RevealConfig::new(AnimationVariant::Fade, Duration::ZERO, 1.0).is_ok());
    }

    #[test]
    fn stays_hidden_below_threshold() {
        let mut b = block(0, 0.5);
        assert_eq!(b.observe(0.0), RevealAction::None);
        assert_eq!(b.observe(0.49), RevealAction::None);
        assert_eq!(b.state(), RevealState::Hidden);
        assert_eq!(b.observe(0.5), RevealAction::RevealNow);
        assert!(b.is_visible());
    }

    #[test]
    fn delayed_reveal_waits_for_its_timer() {
        let mut b = block(300, 0.1);
        let RevealAction::Schedule { token, delay } = b.observe(0.4) else {
            panic!("expected a scheduled reveal");
        };
        assert_eq!(delay, Duration::from_millis(300));
        assert!(!b.is_visible());
        // Further observations while pending don't schedule twice.
        assert_eq!(b.observe(0.9), RevealAction::None);
        assert!(b.fire(token));
        assert!(b.is_visible());
        assert!(!b.fire(token));
    }

    #[test]
    fn teardown_invalidates_pending_timer() {
        let mut b = block(100, 0.1);
        let RevealAction::Schedule { token, .. } = b.observe(1.0) else {
            panic!("expected a scheduled reveal");
        };
        b.teardown();
        assert!(!b.fire(token));
        assert_eq!(b.state(), RevealState::Hidden);
    }

    #[test]
    fn a_token_from_another_block_is_ignored() {
        let mut a = block(50, 0.1);
        let mut b = block(50, 0.1);
        let RevealAction::Schedule { token: ta, .. } = a.observe(1.0) else {
            panic!();
        };
        b.teardown();
        let RevealAction::Schedule { token: tb, .. } = b.observe(1.0) else {
            panic!();
        };
        assert_ne!(ta, tb);
        assert!(!b.fire(ta));
    }

    #[test]
    fn style_follows_state() {
        let mut b = RevealBlock::new(
            RevealConfig::new(AnimationVariant::Flip, Duration::ZERO, 0.1).unwrap(),
        );
        assert_eq!(b.style().rotate_y, 180.0);
        assert_eq!(b.style().opacity, 0.0);
        b.observe(0.2);
        assert_eq!(b.style(), VariantStyle::IDENTITY);
    }

    #[test]
    fn every_variant_starts_transparent_and_ends_at_identity() {
        for v in AnimationVariant::iter() {
            assert_eq!(v.hidden_style().opacity, 0.0, "{v}");
            assert_eq!(v.visible_style(), VariantStyle::IDENTITY, "{v}");
            assert_eq!(v.transition().easing, SOFT_EASE_OUT);
        }
        assert!(AnimationVariant::Tilt.tracks_pointer());
        assert!(!AnimationVariant::Scale.tracks_pointer());
        assert_eq!(
            AnimationVariant::Rotate3d.transition().duration,
            Duration::from_millis(1200)
        );
    }

    #[test]
    fn css_output() {
        assert_eq!(
            AnimationVariant::FadeUp.hidden_style().to_css(),
            "opacity: 0; transform: translate3d(0px, 30px, 0) scale(1) rotateX(10deg) rotateY(0deg) rotateZ(0deg);"
        );
        assert_eq!(
            AnimationVariant::Flip.transition().to_css(),
            "transition: opacity 1000ms cubic-bezier(0.22, 1, 0.36, 1), transform 1000ms cubic-bezier(0.22, 1, 0.36, 1);"
        );
    }
}
