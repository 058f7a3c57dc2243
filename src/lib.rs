//! # xzqh-reader
//!
//! A zero-copy reader for binary administrative-region datasets
//! (province → city → county).
//!
//! Regions are read straight out of one verified byte buffer: by name with
//! [`search`], or by position with [`resolve`](xzqh::resolve::resolve) and
//! the [`Catalog`] listing surface.
pub mod xzqh;

// Re-export the main types for convenience
pub use xzqh::{
    Catalog,
    Data,
    Match,
    Region,
    Regions,
    Result,
    XzqhError,
    XzqhReader,
    search,
    search_by_code,
    search_with,
    format::{builder::{DataBuilder, RegionNode}, get_root, verify},
    prompt::PromptOptions,
    resolve::resolve,
    types::models::{Level, Point, RegionInfo, RegionSummary},
};
