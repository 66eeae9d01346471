//! Page modules

pub mod about;
pub mod status;

pub use about::AboutPage;
pub use status::StatusPage;
