//! Shared plumbing for the inventory workspace: logging setup and
//! filesystem sanity checks used by the binary and the CLI crate.

pub mod env;
pub mod utils;
