//! Service layer for the items API.
//! - Domain types and the validation rules applied to raw JSON input.
//! - The `ItemStore` abstraction and its in-memory implementation.
//! - A single error type shared with the HTTP layer.

pub mod errors;
pub mod items;
pub mod storage;
