//! One module per route handler.

pub mod health;
pub mod item_create;
pub mod item_delete;
pub mod item_list;
pub mod item_read;
pub mod item_update;
