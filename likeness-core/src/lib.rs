// likeness-core - Structural equality and pattern dispatch
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! # likeness-core
//!
//! Structural equality and pattern dispatch over `likeness-value` values.
//! Compares values by content, by shape, or against wildcard patterns, and
//! selects the first matching arm of a dispatch.

pub mod cmp;
pub mod dispatch;
pub mod error;
pub mod limits;
pub mod pattern;
pub mod variant;

pub use cmp::{Comparator, Outcome, compare, eq, same_shape};
pub use dispatch::{
    Arm, Dispatch, MatchOutcome, Thunk, branch, if_let, if_let_else, match_value, match_with,
};
pub use error::{Error, Result};
pub use limits::{DEFAULT_MAX_DEPTH, Limits, max_depth, set_max_depth};
pub use pattern::{satisfies, satisfies_if};
pub use variant::{
    and_then, err_option, is_err, is_none, is_ok, is_some, is_variant, map_variant, match_option,
    match_result, ok_option, ok_or, unwrap_or, unwrap_variant, variant_pattern,
};

// Re-export the value model for convenience
pub use likeness_value::{
    Callable, CallableFn, Class, DateTime, ERR, Kind, NONE, OK, PAYLOAD_FIELD, Pending, Record,
    SOME, Utc, VARIANT_FIELD, Value, Vector,
};
