//! Résumé ingestion: lifecycle aggregate, candidate matching, and the ports the
//! lifecycle is driven through.
pub mod adapter;
pub mod application;
pub mod domain;
