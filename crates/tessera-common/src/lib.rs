//! Common utilities for tessera.
//!
//! This crate provides shared infrastructure used by all tessera crates:
//! - **Warning System** - deduplicated, colored diagnostics on stderr
//! - **Data URLs** - decoding of base64 `data:image/...` sources
//! - **URL helpers** - classification and joining of image sources

pub mod data_url;
pub mod url;
pub mod warning;

pub use data_url::{DataUrl, DataUrlError};
