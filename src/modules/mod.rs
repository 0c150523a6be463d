pub mod auth;
pub mod resume;
