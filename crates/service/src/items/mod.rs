//! Items: domain records, the store abstraction and its in-memory backend.

pub mod domain;
pub mod memory;
pub mod store;

pub use domain::{Item, ItemPatch, NewItem};
pub use memory::InMemoryItemStore;
pub use store::ItemStore;
