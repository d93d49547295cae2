//! Site-wide settings.

use std::env;
use std::time::Duration;

use serde::Deserialize;
use serde::Serialize;

use crate::contact::FormTimings;
use crate::reveal::DEFAULT_THRESHOLD;
use crate::theme::ThemeMode;

/// Settings the app root reads once at start-up and shares as a context
/// value.
#[derive(Clone, Copy, PartialEq, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct SitePrefs {
    /// Theme used when nothing was stored by a previous visit.
    pub default_theme: ThemeMode,
    /// Fraction of a block that must be on screen before it reveals.
    pub reveal_threshold: f64,
    pub form_timings: FormTimings,
}

impl Default for SitePrefs {
    fn default() -> Self {
        Self {
            default_theme: ThemeMode::default(),
            reveal_threshold: DEFAULT_THRESHOLD,
            form_timings: FormTimings::default(),
        }
    }
}

impl SitePrefs {
    /// Builds the settings from environment variables, falling back to the
    /// in-code defaults for anything missing or malformed.
    ///
    /// # Environment Variables
    /// - `BW_DEFAULT_THEME`: "light" or "dark".
    /// - `BW_REVEAL_THRESHOLD`: a number in (0, 1].
    /// - `BW_SUBMIT_DELAY_MS`: simulated submission latency.
    /// - `BW_NOTICE_MS`: how long the "message sent" notice stays up.
    ///
    /// In the browser there is no environment, so the defaults apply.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let default_theme = lookup("BW_DEFAULT_THEME")
            .and_then(|s| match s.parse::<ThemeMode>() {
                Ok(mode) => Some(mode),
                Err(e) => {
                    tracing::warn!("ignoring BW_DEFAULT_THEME: {e}");
                    None
                }
            })
            .unwrap_or(defaults.default_theme);

        let reveal_threshold = lookup("BW_REVEAL_THRESHOLD")
            .and_then(|s| s.trim().parse::<f64>().ok())
            .filter(|t| *t > 0.0 && *t <= 1.0)
            .unwrap_or(defaults.reveal_threshold);

        let millis = |key: &str, fallback: Duration| {
            lookup(key)
                .and_then(|s| s.trim().parse::<u64>().ok())
                .map(Duration::from_millis)
                .unwrap_or(fallback)
        };

        Self {
            default_theme,
            reveal_threshold,
            form_timings: FormTimings {
                submit_delay: millis("BW_SUBMIT_DELAY_MS", defaults.form_timings.submit_delay),
                notice_duration: millis("BW_NOTICE_MS", defaults.form_timings.notice_duration),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn empty_environment_gives_defaults() {
        let prefs = SitePrefs::from_lookup(|_| None);
        assert_eq!(prefs, SitePrefs::default());
        assert_eq!(prefs.default_theme, ThemeMode::Light);
        assert_eq!(prefs.reveal_threshold, 0.1);
        assert_eq!(prefs.form_timings.submit_delay, Duration::from_secs(1));
        assert_eq!(prefs.form_timings.notice_duration, Duration::from_secs(5));
    }

    #[test]
    fn reads_every_variable() {
        let prefs = SitePrefs::from_lookup(lookup(&[
            ("BW_DEFAULT_THEME", "Dark"),
            ("BW_REVEAL_THRESHOLD", "0.25"),
            ("BW_SUBMIT_DELAY_MS", "250"),
            ("BW_NOTICE_MS", " 3000 "),
        ]));
        assert_eq!(prefs.default_theme, ThemeMode::Dark);
        assert_eq!(prefs.reveal_threshold, 0.25);
        assert_eq!(prefs.form_timings.submit_delay, Duration::from_millis(250));
        assert_eq!(prefs.form_timings.notice_duration, Duration::from_millis(3000));
    }

    #[test]
    fn malformed_values_fall_back() {
        let prefs = SitePrefs::from_lookup(lookup(&[
            ("BW_DEFAULT_THEME", "purple"),
            ("BW_REVEAL_THRESHOLD", "1.5"),
            ("BW_SUBMIT_DELAY_MS", "-4"),
        ]));
        assert_eq!(prefs, SitePrefs::default());
    }

    #[test]
    fn partial_json_fills_in_defaults() {
        let prefs: SitePrefs = serde_json::from_str(r#"{ "default_theme": "dark" }"#).unwrap();
        assert_eq!(prefs.default_theme, ThemeMode::Dark);
        assert_eq!(prefs.reveal_threshold, DEFAULT_THRESHOLD);
        assert_eq!(prefs.form_timings, FormTimings::default());
    }
}
