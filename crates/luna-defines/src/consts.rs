//! Boolean, null, and integer-limit constants.
//!
//! The short constant names used across Luna, typed. The boolean pair are
//! real `bool`s rather than integers, and `null` is the standard library's
//! pointer constructor re-exported so the short name stays available.

pub use std::ptr::null;

/// Boolean false.
pub const FALSE: bool = false;

/// Boolean true, defined as the negation of [`FALSE`].
pub const TRUE: bool = !FALSE;

/// Maximum value representable in an unsigned 8-bit integer.
pub const U8_MAX: u8 = 255;
