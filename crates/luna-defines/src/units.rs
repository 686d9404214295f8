//! Byte-size unit conversions.
//!
//! Binary (1024-based) multiples yielding `u64` byte counts. These are
//! `const fn`s rather than textual macros, so each argument is evaluated
//! once, the result type is fixed, and the conversions are usable where a
//! constant is required:
//!
//! ```
//! use luna_defines::units::kilobytes;
//!
//! const SCRATCH: usize = kilobytes(4) as usize;
//! let buf = [0u8; SCRATCH];
//! assert_eq!(buf.len(), 4096);
//! ```
//!
//! The multiplications are plain `u64` arithmetic: an overflowing count is
//! a compile error in const position, a panic in debug builds, and wraps in
//! release builds.

/// Number of bytes in `count` kilobytes (1 KB = 1024 bytes).
#[inline]
pub const fn kilobytes(count: u64) -> u64 {
    count * 1024
}

/// Number of bytes in `count` megabytes (1 MB = 1024 KB).
#[inline]
pub const fn megabytes(count: u64) -> u64 {
    count * 1024 * 1024
}

/// Number of bytes in `count` gigabytes (1 GB = 1024 MB).
#[inline]
pub const fn gigabytes(count: u64) -> u64 {
    count * 1024 * 1024 * 1024
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn unit_values() {
        assert_eq!(kilobytes(1), 1024);
        assert_eq!(megabytes(1), 1024 * 1024);
        assert_eq!(gigabytes(1), 1024 * 1024 * 1024);
    }

    #[test]
    fn zero_is_zero() {
        assert_eq!(kilobytes(0), 0);
        assert_eq!(megabytes(0), 0);
        assert_eq!(gigabytes(0), 0);
    }

    #[test]
    fn usable_in_const_context() {
        const SEGMENT: u64 = megabytes(64);
        assert_eq!(SEGMENT, 64 * 1024 * 1024);
    }

    proptest! {
        #[test]
        fn kilobytes_multiplies_by_1024(n in 0u64..(u64::MAX / 1024)) {
            prop_assert_eq!(kilobytes(n), n * 1024);
        }

        #[test]
        fn megabytes_multiplies_by_1024_squared(n in 0u64..(u64::MAX / (1024 * 1024))) {
            prop_assert_eq!(megabytes(n), n * 1024 * 1024);
        }

        #[test]
        fn gigabytes_multiplies_by_1024_cubed(n in 0u64..(u64::MAX / (1024 * 1024 * 1024))) {
            prop_assert_eq!(gigabytes(n), n * 1024 * 1024 * 1024);
        }

        #[test]
        fn units_compose(n in 0u64..4096) {
            prop_assert_eq!(megabytes(n), kilobytes(n) * 1024);
            prop_assert_eq!(gigabytes(n), megabytes(n) * 1024);
        }
    }
}
