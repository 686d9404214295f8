//! Minimum and maximum selection.
//!
//! Generic replacements for the comparison macros used across the Luna
//! sources. Unlike [`std::cmp::min`] and [`std::cmp::max`], these require
//! only [`PartialOrd`] and use a strict comparison, so when the operands
//! compare equal the second operand is returned. Callers that pass values
//! carrying identity beyond the ordering key rely on that choice.
//!
//! Because the bound is `PartialOrd`, floats are accepted. An unordered
//! comparison (either operand NaN) fails the strict test and also yields
//! the second operand.

/// Returns the smaller of two values, or `b` when neither is strictly
/// smaller.
///
/// ```
/// use luna_defines::cmp::min;
///
/// assert_eq!(min(3, 7), 3);
/// assert_eq!(min(7.5, 2.5), 2.5);
/// ```
#[inline]
pub fn min<T: PartialOrd>(a: T, b: T) -> T {
    if a < b {
        a
    } else {
        b
    }
}

/// Returns the larger of two values, or `b` when neither is strictly
/// larger.
///
/// ```
/// use luna_defines::cmp::max;
///
/// assert_eq!(max(3, 7), 7);
/// assert_eq!(max(7.5, 2.5), 7.5);
/// ```
#[inline]
pub fn max<T: PartialOrd>(a: T, b: T) -> T {
    if a > b {
        a
    } else {
        b
    }
}
