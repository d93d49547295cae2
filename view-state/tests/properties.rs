//! Property tests for the invariants every consumer relies on.

use std::time::Duration;

use proptest::prelude::*;
use view_state::contact::ContactForm;
use view_state::contact::FormField;
use view_state::contact::FormPhase;
use view_state::reveal::AnimationVariant;
use view_state::reveal::RevealBlock;
use view_state::reveal::RevealConfig;
use view_state::reveal::RevealState;
use view_state::theme::ThemeController;
use view_state::theme::ThemeMode;
use view_state::tilt::TiltMapping;

proptest! {
    #[test]
    fn tilt_is_bounded_by_the_clamp(
        dx in proptest::num::f64::ANY,
        dy in proptest::num::f64::ANY,
        max_angle in 0.5f64..90.0,
        input_range in 1.0f64..1000.0,
    ) {
        let mapping = TiltMapping { input_range, max_angle };
        let (rx, ry) = mapping.offset(dx, dy);
        prop_assert!(rx.abs() <= max_angle);
        prop_assert!(ry.abs() <= max_angle);
    }

    #[test]
    fn reveal_never_rehides(
        threshold in 0.01f64..=1.0,
        ratios in proptest::collection::vec(0.0f64..=1.0, 0..64),
    ) {
        let config = RevealConfig::new(AnimationVariant::Scale, Duration::ZERO, threshold).unwrap();
        let mut block = RevealBlock::new(config);
        let mut seen_threshold = false;
        for ratio in ratios {
            block.observe(ratio);
            seen_threshold |= ratio >= threshold;
            let expected = if seen_threshold { RevealState::Visible } else { RevealState::Hidden };
            prop_assert_eq!(block.state(), expected);
        }
    }

    #[test]
    fn double_toggle_is_identity(dark in any::<bool>()) {
        let start = if dark { ThemeMode::Dark } else { ThemeMode::Light };
        let mut theme = ThemeController::new(start);
        theme.toggle();
        theme.toggle();
        prop_assert_eq!(theme.current(), start);
    }

    #[test]
    fn empty_fields_keep_the_form_editing(
        values in proptest::collection::vec(prop_oneof!["", " ", "[a-z]{1,8}"], 4),
    ) {
        let mut form = ContactForm::default();
        for (field, value) in FormField::ALL.into_iter().zip(&values) {
            form.set(field, value.clone()).unwrap();
        }
        let any_empty = values.iter().any(|v| v.is_empty());
        let result = form.submit();
        if any_empty {
            prop_assert!(result.is_err());
            prop_assert_eq!(form.phase(), FormPhase::Editing);
        } else {
            prop_assert!(result.is_ok());
            prop_assert_eq!(form.phase(), FormPhase::Submitting);
        }
    }
}
