pub mod auth;
pub mod config;
pub mod console;
pub mod error;
pub mod portal;
pub mod protocol;
pub mod storage;
pub mod utils;
pub mod view;

pub use portal::{FilePortal, Portal};
