//! Key-value slot storage
//!
//! Durable and session-scoped string slots addressed by key, the way a page
//! sees `localStorage` and `sessionStorage`.

pub mod filesystem;
pub mod memory;
pub mod slot;
pub mod validation;

pub use filesystem::FileStorage;
pub use memory::MemoryStorage;
pub use slot::KeyValueStorage;
