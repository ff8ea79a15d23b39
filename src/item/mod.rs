//! Item domain: the record type, id assignment, validation, and the store.

pub mod error;
pub mod id;
pub mod seed;
pub mod store;
pub mod types;
pub mod validation;

pub use error::ItemError;
pub use id::{IdAllocator, IdPolicy};
pub use seed::seed_items;
pub use store::ItemStore;
pub use types::{
    CreateItemOptions, CreateItemRequest, Item, MessageBody, UpdateItemOptions, UpdateItemRequest,
};
pub use validation::{validate_create, validate_update};
