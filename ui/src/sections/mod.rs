pub mod about;
pub mod contact;
pub mod features;
pub mod footer;
pub mod header;
pub mod hero;
pub mod team;
