pub mod catalog;
pub mod mentorship;
pub mod profile;
