//! Foundational definitions shared across the Luna codebase.
//!
//! This is the leaf crate with zero internal dependencies. Everything above
//! it in the Luna workspace pulls its primitive vocabulary from here:
//! fixed-width numeric names, boolean/null constants, the target-platform
//! selection, byte-unit conversions, ordering helpers, the array-extent
//! helper, and the non-owning [`Slice`] view.
//!
//! # Facets
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`types`] | Fixed-width numeric names (`u8`…`u64`, `s8`…`s64`, `i8`…`i64`, floats) |
//! | [`consts`] | `TRUE`/`FALSE`, `null`, `U8_MAX` |
//! | [`platform`] | OS-family selection, `WINDOWS`/`LINUX`, `current_dir` |
//! | [`units`] | `kilobytes`/`megabytes`/`gigabytes` (1024-based, `u64`) |
//! | [`cmp`] | `min`/`max` with strict-comparison tie-breaking |
//! | [`array`] | `array_length` over compile-time-extent arrays |
//! | [`slice`] | `Slice<'a, T>`: pointer + `u32` count view |
//! | [`macros`] | `file_name!` source-basename helper |
//! | [`prelude`] | Glob-import surface for all of the above |
//!
//! Only the Windows and Linux families build; anything else is rejected
//! with a compile-time diagnostic (see [`platform`]).
//!
//! ```
//! use luna_defines::prelude::*;
//!
//! // A 64 MB scratch budget, clamped to a gigabyte.
//! let budget = min(megabytes(64), gigabytes(1));
//! assert_eq!(budget, 64 * 1024 * 1024);
//!
//! let table = [3u16, 1, 4, 1, 5];
//! assert_eq!(array_length(&table), 5);
//!
//! let view = Slice::try_from(&table[..]).unwrap();
//! assert_eq!(view.len(), 5);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(unsafe_code)]

pub mod array;
pub mod cmp;
pub mod consts;
pub mod macros;
pub mod platform;
pub mod prelude;
pub mod slice;
pub mod types;
pub mod units;

// Public re-exports for the primary API surface.
pub use array::array_length;
pub use cmp::{max, min};
pub use consts::{null, FALSE, TRUE, U8_MAX};
pub use macros::basename;
pub use platform::{current_dir, Platform, LINUX, WINDOWS};
pub use slice::{Slice, SliceError};
pub use units::{gigabytes, kilobytes, megabytes};
