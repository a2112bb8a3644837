//! Shared domain types and rules for the ViaPro inventory platform
//!
//! This crate has no I/O. It holds the data model, the document-code
//! algorithm and the stock ledger rules used by the backend.

pub mod codes;
pub mod ledger;
pub mod models;
pub mod validation;

pub use codes::*;
pub use ledger::*;
pub use models::*;
pub use validation::*;
