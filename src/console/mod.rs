//! Items console: the client side of the items API.

pub mod api;
pub mod client;
pub mod command;
pub mod error;
pub mod render;
pub mod state;

pub use api::ItemsApi;
pub use client::{ItemsClient, DEFAULT_BASE_URL};
pub use command::{parse_command, Command};
pub use error::ConsoleError;
pub use render::{render_edit, render_items};
pub use state::{ConsoleState, ItemDraft, LoadPhase};
