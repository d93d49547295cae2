//! Platform-free view state for the Black And White site.
//!
//! Everything in here is plain data plus small state machines. The `ui`
//! crate owns the event loop and timers; it feeds events in and renders
//! whatever these types say.

pub mod contact;
pub mod easing;
pub mod error;
pub mod prefs;
pub mod press;
pub mod reveal;
pub mod spring;
pub mod style;
pub mod theme;
pub mod tilt;
mod timer;

pub use error::ViewStateError;
