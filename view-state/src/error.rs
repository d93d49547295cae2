use crate::contact::FormField;

/// Errors raised by the view-state constructors, parsers and form handling.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ViewStateError {
    #[error("reveal threshold must be within (0, 1], got {0}")]
    InvalidThreshold(f64),

    #[error("unknown theme '{0}', expected 'light' or 'dark'")]
    UnknownTheme(String),

    #[error("required field '{0}' is empty")]
    MissingField(FormField),

    #[error("the form is not accepting input right now")]
    NotEditing,
}
