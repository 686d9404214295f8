//! Fixed-width numeric type names.
//!
//! Luna source spells integer widths the short way: `u8`/`u16`/`u32`/`u64`
//! for unsigned, `s8`…`s64` and `i8`…`i64` for signed, `f32`/`f64` for
//! floats. Rust's primitives already carry most of those names with the
//! guaranteed widths, so this module re-exports them and adds the `s*`
//! family as aliases; a glob import provides the complete set:
//!
//! ```
//! use luna_defines::types::*;
//!
//! let offset: s32 = -7;
//! let mask: u64 = 0xffff_0000_0000_ffff;
//! assert_eq!(offset as i32, -7);
//! # let _ = mask;
//! ```
//!
//! The `s*` and `i*` families name the same types; both are kept so either
//! spelling from existing Luna code keeps working.

#![allow(non_camel_case_types)]

pub use std::primitive::{f32, f64, i16, i32, i64, i8, u16, u32, u64, u8};

/// Signed 8-bit integer (`i8` under its `s`-prefixed name).
pub type s8 = i8;

/// Signed 16-bit integer (`i16` under its `s`-prefixed name).
pub type s16 = i16;

/// Signed 32-bit integer (`i32` under its `s`-prefixed name).
pub type s32 = i32;

/// Signed 64-bit integer (`i64` under its `s`-prefixed name).
pub type s64 = i64;

// Width guarantees, checked at compile time.
const _: () = {
    assert!(std::mem::size_of::<u8>() == 1);
    assert!(std::mem::size_of::<u16>() == 2);
    assert!(std::mem::size_of::<u32>() == 4);
    assert!(std::mem::size_of::<u64>() == 8);
    assert!(std::mem::size_of::<s8>() == 1);
    assert!(std::mem::size_of::<s16>() == 2);
    assert!(std::mem::size_of::<s32>() == 4);
    assert!(std::mem::size_of::<s64>() == 8);
    assert!(std::mem::size_of::<i8>() == 1);
    assert!(std::mem::size_of::<i16>() == 2);
    assert!(std::mem::size_of::<i32>() == 4);
    assert!(std::mem::size_of::<i64>() == 8);
    assert!(std::mem::size_of::<f32>() == 4);
    assert!(std::mem::size_of::<f64>() == 8);
};
