pub(crate) mod app_state_builder;
pub(crate) mod fixtures;
pub(crate) mod mocks;
