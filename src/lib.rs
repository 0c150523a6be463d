pub mod modules;
pub use modules::auth;
pub use modules::resume;
pub mod app_state;
pub mod shared;

pub use app_state::{bootstrap, AppState};

#[cfg(test)]
mod tests;
