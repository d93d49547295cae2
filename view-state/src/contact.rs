//! Contact form draft and its simulated submission.
//!
//! ```text
//! Editing --submit--> Submitting --submit delay--> Submitted --notice delay--> Editing
//! ```
//!
//! No request is sent anywhere: the submit delay stands in for network
//! latency and the submission always succeeds.

use std::time::Duration;

use serde::Deserialize;
use serde::Serialize;

use crate::timer::TimerSlot;
pub use crate::timer::TimerToken;
use crate::ViewStateError;

#[derive(
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Debug,
    Serialize,
    strum::Display,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum FormField {
    Name,
    Email,
    Subject,
    Message,
}

impl FormField {
    pub const ALL: [FormField; 4] = [
        FormField::Name,
        FormField::Email,
        FormField::Subject,
        FormField::Message,
    ];

    pub fn label(self) -> &'static str {
        match self {
            FormField::Name => "Your Name",
            FormField::Email => "Your Email",
            FormField::Subject => "Subject",
            FormField::Message => "Message",
        }
    }
}

#[derive(Clone, PartialEq, Eq, Debug, Default, Serialize)]
pub struct ContactDraft {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactDraft {
    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::Email => &self.email,
            FormField::Subject => &self.subject,
            FormField::Message => &self.message,
        }
    }

    fn slot(&mut self, field: FormField) -> &mut String {
        match field {
            FormField::Name => &mut self.name,
            FormField::Email => &mut self.email,
            FormField::Subject => &mut self.subject,
            FormField::Message => &mut self.message,
        }
    }

    /// First required field that is empty, if any. Whitespace counts as
    /// content, the same as the browser's `required` check.
    pub fn first_missing(&self) -> Option<FormField> {
        FormField::ALL.into_iter().find(|f| self.get(*f).is_empty())
    }

    pub fn is_empty(&self) -> bool {
        FormField::ALL.into_iter().all(|f| self.get(f).is_empty())
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, strum::EnumIs)]
pub enum FormPhase {
    #[default]
    Editing,
    Submitting,
    Submitted,
}

/// The two simulated delays.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct FormTimings {
    /// Stand-in for request latency.
    pub submit_delay: Duration,
    /// How long the success notice stays up.
    pub notice_duration: Duration,
}

impl Default for FormTimings {
    fn default() -> Self {
        Self {
            submit_delay: Duration::from_millis(1000),
            notice_duration: Duration::from_millis(5000),
        }
    }
}

/// A timer the host must run, then hand `token` back to
/// [`ContactForm::fire`].
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct FormTimer {
    pub token: TimerToken,
    pub delay: Duration,
}

#[derive(Clone, Debug, PartialEq, Default)]
pub struct ContactForm {
    timings: FormTimings,
    phase: FormPhase,
    draft: ContactDraft,
    timer: TimerSlot,
}

impl ContactForm {
    pub fn new(timings: FormTimings) -> Self {
        Self {
            timings,
            ..Default::default()
        }
    }

    pub fn phase(&self) -> FormPhase {
        self.phase
    }

    pub fn draft(&self) -> &ContactDraft {
        &self.draft
    }

    pub fn get(&self, field: FormField) -> &str {
        self.draft.get(field)
    }

    /// Replaces one field's value. Only allowed while editing.
    pub fn set(&mut self, field: FormField, value: impl Into<String>) -> Result<(), ViewStateError> {
        if !self.phase.is_editing() {
            return Err(ViewStateError::NotEditing);
        }
        *self.draft.slot(field) = value.into();
        Ok(())
    }

    /// Starts the simulated submission. Every field must be non-empty.
    pub fn submit(&mut self) -> Result<FormTimer, ViewStateError> {
        if !self.phase.is_editing() {
            return Err(ViewStateError::NotEditing);
        }
        if let Some(field) = self.draft.first_missing() {
            return Err(ViewStateError::MissingField(field));
        }

        tracing::info!(draft = ?self.draft, "contact form submitted");
        self.phase = FormPhase::Submitting;
        Ok(FormTimer {
            token: self.timer.issue(),
            delay: self.timings.submit_delay,
        })
    }

    /// Advances the form when a timer completes. Returns the next timer to
    /// run, if any. Stale tokens change nothing.
    pub fn fire(&mut self, token: TimerToken) -> Option<FormTimer> {
        if !self.timer.take(token) {
            return None;
        }
        match self.phase {
            FormPhase::Submitting => {
                self.draft = ContactDraft::default();
                self.phase = FormPhase::Submitted;
                Some(FormTimer {
                    token: self.timer.issue(),
                    delay: self.timings.notice_duration,
                })
            }
            FormPhase::Submitted => {
                self.phase = FormPhase::Editing;
                None
            }
            FormPhase::Editing => None,
        }
    }

    /// Drops pending timers. Call when the form's surface goes away.
    pub fn teardown(&mut self) {
        self.timer.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactForm {
        let mut form = ContactForm::default();
        form.set(FormField::Name, "Ada").unwrap();
        form.set(FormField::Email, "ada@example.com").unwrap();
        form.set(FormField::Subject, "Hello").unwrap();
        form.set(FormField::Message, "Hi there").unwrap();
        form
    }

    #[test]
    fn any_empty_field_blocks_submission() {
        for missing in FormField::ALL {
            let mut form = filled();
            form.set(missing, "").unwrap();
            assert_eq!(form.submit(), Err(ViewStateError::MissingField(missing)));
            assert_eq!(form.phase(), FormPhase::Editing);
        }
    }

    #[test]
    fn whitespace_only_field_counts_as_filled() {
        let mut form = filled();
        form.set(FormField::Subject, " ").unwrap();
        assert!(form.submit().is_ok());
        assert!(form.phase().is_submitting());
    }

    #[test]
    fn edits_and_resubmits_are_rejected_while_busy() {
        let mut form = filled();
        form.submit().unwrap();
        assert_eq!(form.set(FormField::Name, "Bob"), Err(ViewStateError::NotEditing));
        assert_eq!(form.submit(), Err(ViewStateError::NotEditing));
        assert_eq!(form.get(FormField::Name), "Ada");
    }

    #[test]
    fn full_cycle_uses_configured_delays() {
        let timings = FormTimings {
            submit_delay: Duration::from_millis(10),
            notice_duration: Duration::from_millis(20),
        };
        let mut form = ContactForm::new(timings);
        for field in FormField::ALL {
            form.set(field, field.to_string()).unwrap();
        }
        let first = form.submit().unwrap();
        assert_eq!(first.delay, Duration::from_millis(10));
        let second = form.fire(first.token).unwrap();
        assert_eq!(second.delay, Duration::from_millis(20));
        assert!(form.phase().is_submitted());
        assert!(form.draft().is_empty());
        assert_eq!(form.fire(second.token), None);
        assert!(form.phase().is_editing());
    }

    #[test]
    fn stale_and_torn_down_timers_do_nothing() {
        let mut form = filled();
        let timer = form.submit().unwrap();
        form.teardown();
        assert_eq!(form.fire(timer.token), None);
        assert!(form.phase().is_submitting());
        assert_eq!(form.get(FormField::Message), "Hi there");
    }

    #[test]
    fn field_names_and_labels() {
        assert_eq!(FormField::Message.to_string(), "message");
        assert_eq!(FormField::Email.label(), "Your Email");
    }
}
