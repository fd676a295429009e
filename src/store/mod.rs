//! Persistence module
//!
//! Document-store implementations and the user repository built on
//! them:
//! - `json_file` - JSON object file on disk (the CLI's store)
//! - `memory` - volatile map for tests and embedding
//! - `users` - the [`crate::core::traits::UserRepository`] implementation

pub mod json_file;
pub mod memory;
pub mod users;

pub use json_file::JsonFileStore;
pub use memory::MemoryStore;
pub use users::{UserStore, CURRENT_USER_KEY, USERS_KEY};
