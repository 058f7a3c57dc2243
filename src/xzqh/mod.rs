//! Core region reader module

pub mod catalog;
pub mod format;
pub mod prompt;
pub mod reader;
pub mod resolve;
pub mod search;
pub mod types;
mod utils;
#[cfg(feature = "wasm")]
pub mod wasm;

pub use catalog::Catalog;
pub use format::{Data, Region, Regions};
pub use reader::XzqhReader;
pub use search::{search, search_by_code, search_with, Match, Search};
pub use types::error::{XzqhError, Result};
