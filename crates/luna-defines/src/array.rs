//! Array element counting.

/// Returns the number of elements in an array.
///
/// The length is taken from the array type itself, so this only accepts
/// references to true arrays `[T; N]`. Slices and pointers, whose extent
/// is not known to the type system, are rejected at compile time rather
/// than silently producing a wrong count:
///
/// ```compile_fail
/// use luna_defines::array::array_length;
///
/// let bytes: &[u8] = &[1, 2, 3];
/// array_length(bytes);
/// ```
///
/// ```
/// use luna_defines::array::array_length;
///
/// let table = [0u32; 12];
/// assert_eq!(array_length(&table), 12);
/// ```
#[inline]
pub const fn array_length<T, const N: usize>(_array: &[T; N]) -> usize {
    N
}
