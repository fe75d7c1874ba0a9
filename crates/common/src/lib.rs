//! Shared types used across the catalog, order intake and API crates.

pub mod types;

pub use types::{ProductId, ProductIdParseError, Version};
