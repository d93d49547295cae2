pub mod animated_element;
pub mod button;
pub mod icon;
pub mod layout;
