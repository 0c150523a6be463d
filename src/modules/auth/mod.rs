//! Account subsystem boundary. Only the owner identity is modelled here; accounts
//! themselves live outside this crate.
pub mod application;
