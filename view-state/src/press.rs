//! Hover and press scale feedback for buttons.

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, strum::EnumIs)]
pub enum PressState {
    #[default]
    Idle,
    Hovered,
    Pressed,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct PressFeedback {
    state: PressState,
}

impl PressFeedback {
    pub const HOVER_SCALE: f64 = 1.02;
    pub const PRESS_SCALE: f64 = 0.98;

    pub fn state(&self) -> PressState {
        self.state
    }

    pub fn pointer_enter(&mut self) {
        if self.state.is_idle() {
            self.state = PressState::Hovered;
        }
    }

    /// Leaving cancels a press as well as the hover.
    pub fn pointer_leave(&mut self) {
        self.state = PressState::Idle;
    }

    pub fn pointer_down(&mut self) {
        self.state = PressState::Pressed;
    }

    pub fn pointer_up(&mut self) {
        if self.state.is_pressed() {
            self.state = PressState::Hovered;
        }
    }

    pub fn scale(&self) -> f64 {
        match self.state {
            PressState::Idle => 1.0,
            PressState::Hovered => Self::HOVER_SCALE,
            PressState::Pressed => Self::PRESS_SCALE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hover_press_release_leave() {
        let mut p = PressFeedback::default();
        assert_eq!(p.scale(), 1.0);
        p.pointer_enter();
        assert_eq!(p.scale(), 1.02);
        p.pointer_down();
        assert_eq!(p.scale(), 0.98);
        p.pointer_up();
        assert_eq!(p.state(), PressState::Hovered);
        p.pointer_leave();
        assert_eq!(p.state(), PressState::Idle);
    }

    #[test]
    fn leaving_while_pressed_resets() {
        let mut p = PressFeedback::default();
        p.pointer_enter();
        p.pointer_down();
        p.pointer_leave();
        p.pointer_up();
        assert_eq!(p.scale(), 1.0);
    }
}
