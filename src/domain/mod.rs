//! Domain layer: credential records, their invariants and errors.
//!
//! Nothing in here performs I/O.

pub mod errors;
pub mod models;

pub use errors::{CredentialError, CredentialResult};
