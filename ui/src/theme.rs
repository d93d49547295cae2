//! The theme context shared by every component.

use dioxus::prelude::*;
use view_state::theme::ThemeController;
use view_state::theme::ThemeMode;

use crate::compat;

/// Reactive handle to the app's [`ThemeController`], provided once by the
/// root. Reading `current()` inside a component subscribes it to toggles.
#[derive(Clone, Copy)]
pub struct ThemeContext {
    controller: Signal<ThemeController>,
}

impl ThemeContext {
    pub fn current(&self) -> ThemeMode {
        self.controller.read().current()
    }

    pub fn toggle(&mut self) {
        let mode = self.controller.write().toggle();
        compat::store_theme(mode);
    }
}

/// Creates the controller and provides it to all descendants. The stored
/// preference wins over `default_mode`.
pub fn use_theme_provider(default_mode: ThemeMode) -> ThemeContext {
    let controller = use_signal(|| {
        let initial = compat::load_theme().unwrap_or(default_mode);
        dioxus_logger::tracing::debug!("initial theme: {initial}");
        ThemeController::new(initial)
    });
    use_context_provider(|| ThemeContext { controller })
}

pub fn use_theme() -> ThemeContext {
    use_context::<ThemeContext>()
}
