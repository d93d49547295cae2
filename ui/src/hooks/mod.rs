pub mod use_reveal;
pub mod use_scrolled;
pub mod use_tilt;
