//! End-to-end walks through the reveal, theme and contact form flows.

use std::time::Duration;

use view_state::contact::ContactForm;
use view_state::contact::FormField;
use view_state::contact::FormPhase;
use view_state::reveal::AnimationVariant;
use view_state::reveal::RevealAction;
use view_state::reveal::RevealBlock;
use view_state::reveal::RevealConfig;
use view_state::reveal::RevealState;
use view_state::theme::ThemeController;
use view_state::theme::ThemeMode;

#[test]
fn block_reveals_once_and_stays_revealed_after_scrolling_away() {
    let config = RevealConfig::new(AnimationVariant::FadeUp, Duration::ZERO, 0.1).unwrap();
    let mut block = RevealBlock::new(config);

    let mut reveals = 0;
    for step in 0..=10 {
        let ratio = step as f64 * 0.05;
        if block.observe(ratio) == RevealAction::RevealNow {
            reveals += 1;
        }
    }
    assert_eq!(reveals, 1);
    assert_eq!(block.state(), RevealState::Visible);

    for step in (0..=10).rev() {
        assert_eq!(block.observe(step as f64 * 0.05), RevealAction::None);
    }
    assert_eq!(block.observe(0.0), RevealAction::None);
    assert_eq!(block.state(), RevealState::Visible);
}

#[test]
fn theme_toggles_light_to_dark_and_back() {
    let mut theme = ThemeController::new(ThemeMode::Light);
    theme.toggle();
    assert_eq!(theme.current(), ThemeMode::Dark);
    theme.toggle();
    assert_eq!(theme.current(), ThemeMode::Light);
}

#[test]
fn contact_form_submits_clears_and_returns_to_editing() {
    let mut form = ContactForm::default();
    form.set(FormField::Name, "Emma Carter").unwrap();
    form.set(FormField::Email, "emma@example.com").unwrap();
    form.set(FormField::Subject, "New project").unwrap();
    form.set(FormField::Message, "Let's talk.").unwrap();

    let sending = form.submit().unwrap();
    assert_eq!(form.phase(), FormPhase::Submitting);
    assert_eq!(sending.delay, Duration::from_millis(1000));

    let notice = form.fire(sending.token).expect("notice timer");
    assert_eq!(form.phase(), FormPhase::Submitted);
    for field in FormField::ALL {
        assert_eq!(form.get(field), "");
    }
    assert_eq!(notice.delay, Duration::from_millis(5000));

    assert_eq!(form.fire(notice.token), None);
    assert_eq!(form.phase(), FormPhase::Editing);
    assert!(form.draft().is_empty());
}
