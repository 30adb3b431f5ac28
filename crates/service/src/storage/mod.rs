//! Storage abstractions for the service layer
//!
//! Contains the file-backed map used to persist the inventory as JSON.

pub mod json_map_store;
