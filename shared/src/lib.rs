//! Shared types and agronomy logic for the Greenfield Advisor garden assistant
//!
//! This crate contains the models and the pure derived-metric functions shared
//! between the backend, the browser client (via WASM), and other components.
//! Nothing in here performs I/O; every function is deterministic in its inputs.

pub mod agronomy;
pub mod models;
pub mod types;
pub mod validation;

pub use agronomy::*;
pub use models::*;
pub use types::*;
pub use validation::*;
