// Re-export the public API from the appropriate module
#[cfg(target_arch = "wasm32")]
pub use wasm32::*;

#[cfg(not(target_arch = "wasm32"))]
pub use non_wasm32::*;

/// `localStorage` key holding the visitor's theme choice.
pub const THEME_STORAGE_KEY: &str = "bw-theme";

#[cfg(target_arch = "wasm32")]
pub mod wasm32 {
    use std::time::Duration;
    use view_state::theme::ThemeMode;

    pub mod interval {
        use std::time::Duration;

        /// Frame pacing for spring animations. Ticks are best-effort; callers
        /// measure the real elapsed time themselves.
        pub struct Interval {
            period: Duration,
        }

        impl Interval {
            pub fn new(period: Duration) -> Self {
                Self { period }
            }

            pub async fn tick(&mut self) {
                gloo_timers::future::sleep(self.period).await;
            }
        }
    }

    pub async fn sleep(duration: Duration) {
        gloo_timers::future::sleep(duration).await;
    }

    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok()?
    }

    /// The theme stored by a previous visit, if any.
    pub fn load_theme() -> Option<ThemeMode> {
        let raw = storage()?.get_item(super::THEME_STORAGE_KEY).ok()??;
        match raw.parse() {
            Ok(mode) => Some(mode),
            Err(e) => {
                dioxus_logger::tracing::warn!("ignoring stored theme: {e}");
                None
            }
        }
    }

    pub fn store_theme(mode: ThemeMode) {
        let stored = storage()
            .map(|s| s.set_item(super::THEME_STORAGE_KEY, &mode.to_string()).is_ok())
            .unwrap_or(false);
        if !stored {
            dioxus_logger::tracing::debug!("theme not persisted: localStorage unavailable");
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub mod non_wasm32 {
    use std::time::Duration;
    use view_state::theme::ThemeMode;

    pub mod interval {
        use tokio::time::{self, Duration, MissedTickBehavior};
        pub struct Interval {
            inner: tokio::time::Interval,
        }
        impl Interval {
            pub fn new(duration: Duration) -> Self {
                let mut interval = time::interval(duration);
                interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
                Self { inner: interval }
            }
            pub async fn tick(&mut self) {
                self.inner.tick().await;
            }
        }
    }

    pub async fn sleep(duration: Duration) {
        tokio::time::sleep(duration).await;
    }

    /// Native builds keep no state between launches.
    pub fn load_theme() -> Option<ThemeMode> {
        None
    }

    pub fn store_theme(_mode: ThemeMode) {}
}
