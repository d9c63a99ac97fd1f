// likeness-embed - Embedding API for likeness
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! # likeness-embed
//!
//! Moves data between Rust, JSON and likeness values so host code can
//! compare and dispatch on its own types.
//!
//! ## Quick Start
//!
//! ```rust
//! use likeness_embed::{eq, from_json, to_value};
//!
//! let from_rust = to_value(vec![3, 1, 2]);
//! let from_doc = from_json(&serde_json::json!([1, 2, 3]));
//! assert!(eq(&from_rust, &from_doc));
//! ```
//!
//! ## Options and Results
//!
//! ```rust
//! use likeness_embed::{from_value, match_option, to_value};
//!
//! let value = to_value(Some(21i64));
//! let doubled = match_option(&value, |n| from_value::<i64>(n).map(|n| n * 2), || Ok(0));
//! assert_eq!(doubled.unwrap().unwrap(), 42);
//! assert_eq!(from_value::<Option<i64>>(&to_value(None::<i64>)).unwrap(), None);
//! ```

mod convert;
mod json;

pub use convert::{FromValue, IntoValue, from_value, to_value};
pub use json::{from_json, parse_json, pattern_from_json, to_json};

// Re-export the engine for convenience
pub use likeness_core::*;
