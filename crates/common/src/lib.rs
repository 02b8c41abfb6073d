//! Shared plumbing for the bus tracker crates: logging setup, runtime
//! environment checks and small wire types.

pub mod types;
pub mod utils;
pub mod env;
