//! Common imports for code built on the Luna definitions.
//!
//! ```rust
//! use luna_defines::prelude::*;
//! ```
//!
//! This imports the short type names, the truth and sentinel constants,
//! the unit and comparison helpers, the platform selectors, and the
//! [`Slice`] view type: the vocabulary most Luna modules open with.

// Fixed-width type names
pub use crate::types::{f32, f64, i16, i32, i64, i8, s16, s32, s64, s8, u16, u32, u64, u8};

// Constants
pub use crate::consts::{null, FALSE, TRUE, U8_MAX};

// Byte-size units
pub use crate::units::{gigabytes, kilobytes, megabytes};

// Comparison
pub use crate::cmp::{max, min};

// Arrays and views
pub use crate::array::array_length;
pub use crate::slice::{Slice, SliceError};

// Platform
pub use crate::platform::{current_dir, Platform, LINUX, WINDOWS};

// Source locations
pub use crate::file_name;
pub use crate::macros::basename;
