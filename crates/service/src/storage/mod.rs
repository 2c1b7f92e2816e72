//! Storage abstractions for service layer
//!
//! Contains the reusable in-memory store that hands out sequence keys, so
//! record-specific stores only deal with their own types.

pub mod seq_map_store;
