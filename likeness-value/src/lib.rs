// likeness-value - Value model for the likeness comparison engine
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! # likeness-value
//!
//! The value model compared and dispatched on by `likeness-core`:
//! [`Value`], its [`Kind`] discriminant, [`Record`]s and tagged variants.

pub mod kind;
pub mod record;
pub mod value;
pub mod variant;

pub use chrono::{DateTime, Utc};
pub use im::Vector;
pub use kind::{Class, Kind};
pub use record::Record;
pub use value::{Callable, CallableFn, Pending, Value, int_eq_float};
pub use variant::{ERR, NONE, OK, PAYLOAD_FIELD, SOME, VARIANT_FIELD};
