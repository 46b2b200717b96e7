//! Pixelforged-Common: Shared types and utilities.
//!
//! This crate provides common functionality used across pixelforged:
//!
//! - **Path Utilities**: Functions to detect convertible image files by extension
//! - **Natural Ordering**: A sort key that compares embedded numbers numerically
//! - **Error Handling**: Common error types and result aliases
//!
//! # Examples
//!
//! ```
//! use pixelforged_common::{Error, NaturalKey, Result};
//! use pixelforged_common::paths::is_source_image;
//! use std::path::Path;
//!
//! // Check file types
//! assert!(is_source_image(Path::new("photo.png")));
//!
//! // Natural ordering of numbered names
//! assert!(NaturalKey::new("img2") < NaturalKey::new("img10"));
//!
//! // Use common error types
//! fn example() -> Result<()> {
//!     Err(Error::invalid_input("bad quality"))
//! }
//! ```

pub mod error;
pub mod paths;
pub mod sort;

pub use error::{Error, Result};
pub use sort::NaturalKey;
