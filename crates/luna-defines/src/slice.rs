//! Non-owning element views.
//!
//! [`Slice`] pairs an element pointer with a `u32` count, mirroring the
//! two-field view records Luna passes across subsystem boundaries. One
//! generic type covers every element type; the backing storage is borrowed,
//! never owned, and dropping a view never frees anything.
//!
//! Construction is safe and passive: neither the `TryFrom<&[T]>` impl nor
//! [`Slice::from_raw_parts`] inspects memory. All trust is concentrated in
//! [`Slice::unchecked_as_slice`], the single `unsafe` crossing back into a
//! native slice. [`Slice::validate`] checks the pointer invariants that can
//! be checked without dereferencing.

#![allow(unsafe_code)]

use std::fmt;
use std::marker::PhantomData;
use std::mem;

/// Reasons a [`Slice`] cannot be treated as a native slice.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SliceError {
    /// The element pointer is null.
    NullPointer,
    /// The element pointer is not aligned for the element type.
    Misaligned {
        /// Required alignment in bytes.
        align: usize,
    },
    /// The source holds more elements than the `u32` count can record.
    CountOverflow {
        /// Element count of the rejected source.
        len: usize,
    },
}

impl fmt::Display for SliceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NullPointer => write!(f, "slice view has a null element pointer"),
            Self::Misaligned { align } => {
                write!(f, "slice view pointer is not aligned to {align} bytes")
            }
            Self::CountOverflow { len } => {
                write!(f, "source length {len} exceeds the u32 element count")
            }
        }
    }
}

impl std::error::Error for SliceError {}

/// A borrowed view of `len` elements starting at `elems`.
///
/// The layout is `#[repr(C)]` with exactly two fields, pointer first, so
/// the view can sit in records shared with foreign code unchanged. The
/// lifetime ties the view to the borrowed storage; the count is deliberately
/// `u32`, which keeps the record at two pointer widths on 64-bit targets.
///
/// ```
/// use luna_defines::slice::Slice;
///
/// let samples = [10u16, 20, 30];
/// let view = Slice::try_from(&samples[..]).unwrap();
/// assert_eq!(view.len(), 3);
/// // SAFETY: the view was built from a live borrow of `samples`.
/// assert_eq!(unsafe { view.unchecked_as_slice() }, &samples);
/// ```
#[repr(C)]
pub struct Slice<'a, T> {
    elems: *const T,
    len: u32,
    _marker: PhantomData<&'a [T]>,
}

impl<'a, T> Slice<'a, T> {
    /// Builds a view from a raw pointer and element count.
    ///
    /// This is safe because nothing is read: the parts are stored as given
    /// and only [`Slice::unchecked_as_slice`] asserts they describe live
    /// memory. Use [`Slice::validate`] to reject obviously bad pointers
    /// early.
    #[inline]
    pub const fn from_raw_parts(elems: *const T, len: u32) -> Self {
        Self {
            elems,
            len,
            _marker: PhantomData,
        }
    }

    /// The element pointer.
    #[inline]
    pub const fn as_ptr(&self) -> *const T {
        self.elems
    }

    /// Number of elements in the view.
    #[inline]
    pub const fn len(&self) -> u32 {
        self.len
    }

    /// Whether the view covers zero elements.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Checks the pointer invariants that do not require dereferencing.
    ///
    /// Rejects null and misaligned element pointers. Passing does not prove
    /// the view is safe to read; provenance and liveness remain the
    /// caller's obligation at [`Slice::unchecked_as_slice`].
    pub fn validate(&self) -> Result<(), SliceError> {
        if self.elems.is_null() {
            return Err(SliceError::NullPointer);
        }
        let align = mem::align_of::<T>();
        if self.elems as usize % align != 0 {
            return Err(SliceError::Misaligned { align });
        }
        Ok(())
    }

    /// Reinterprets the view as a native slice without any checks.
    ///
    /// # Safety
    ///
    /// The caller must guarantee that `elems` points to `len` initialized
    /// elements of `T`, valid for reads for the lifetime `'a`, and that the
    /// memory is not mutated through another path while the slice exists.
    /// [`Slice::validate`] covers null and alignment but cannot establish
    /// provenance or liveness.
    #[inline]
    pub unsafe fn unchecked_as_slice(&self) -> &'a [T] {
        // SAFETY: the caller upholds the contract above; views built by
        // `TryFrom<&[T]>` uphold it by construction.
        unsafe { std::slice::from_raw_parts(self.elems, self.len as usize) }
    }
}

// Unconditional impls; deriving these would bound `T` as well.
impl<T> Clone for Slice<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Slice<'_, T> {}

impl<T> fmt::Debug for Slice<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Slice")
            .field("elems", &self.elems)
            .field("len", &self.len)
            .finish()
    }
}

impl<'a, T> TryFrom<&'a [T]> for Slice<'a, T> {
    type Error = SliceError;

    /// Borrows a native slice as a view, failing only when the source
    /// holds more elements than the `u32` count can record.
    fn try_from(source: &'a [T]) -> Result<Self, Self::Error> {
        let len = u32::try_from(source.len()).map_err(|_| SliceError::CountOverflow {
            len: source.len(),
        })?;
        Ok(Self {
            elems: source.as_ptr(),
            len,
            _marker: PhantomData,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn view_over_an_array_round_trips() {
        let samples = [3u64, 1, 4, 1, 5];
        let view = Slice::try_from(&samples[..]).unwrap();
        assert_eq!(view.len(), 5);
        assert!(!view.is_empty());
        assert_eq!(view.as_ptr(), samples.as_ptr());
        view.validate().unwrap();
        // SAFETY: `view` borrows `samples`, which outlives this scope.
        assert_eq!(unsafe { view.unchecked_as_slice() }, &samples);
    }

    #[test]
    fn empty_views_are_accepted() {
        let none: [u8; 0] = [];
        let view = Slice::try_from(&none[..]).unwrap();
        assert_eq!(view.len(), 0);
        assert!(view.is_empty());
        view.validate().unwrap();
        // SAFETY: zero-length views read nothing.
        assert_eq!(unsafe { view.unchecked_as_slice() }, &[] as &[u8]);
    }

    #[test]
    fn null_pointers_fail_validation() {
        let view: Slice<'static, u32> = Slice::from_raw_parts(std::ptr::null(), 0);
        assert_eq!(view.validate(), Err(SliceError::NullPointer));
    }

    #[test]
    fn misaligned_pointers_fail_validation() {
        let words = [0u32; 2];
        let skewed = (words.as_ptr() as *const u8).wrapping_add(1) as *const u32;
        let view: Slice<'_, u32> = Slice::from_raw_parts(skewed, 1);
        assert_eq!(view.validate(), Err(SliceError::Misaligned { align: 4 }));
    }

    #[cfg(target_pointer_width = "64")]
    #[test]
    fn oversized_sources_are_rejected() {
        // Zero-sized elements make the oversized source allocation-free.
        let huge = vec![(); u32::MAX as usize + 1];
        let err = Slice::try_from(&huge[..]).unwrap_err();
        assert_eq!(
            err,
            SliceError::CountOverflow {
                len: u32::MAX as usize + 1
            }
        );
    }

    #[test]
    fn layout_is_pointer_then_count() {
        assert_eq!(mem::offset_of!(Slice<'static, u8>, elems), 0);
        assert_eq!(
            mem::offset_of!(Slice<'static, u8>, len),
            mem::size_of::<*const u8>()
        );
        assert_eq!(
            mem::size_of::<Slice<'static, u8>>(),
            2 * mem::size_of::<*const u8>()
        );
    }

    #[test]
    fn errors_name_the_failure() {
        assert_eq!(
            SliceError::NullPointer.to_string(),
            "slice view has a null element pointer"
        );
        assert_eq!(
            SliceError::Misaligned { align: 8 }.to_string(),
            "slice view pointer is not aligned to 8 bytes"
        );
        assert_eq!(
            SliceError::CountOverflow { len: 5_000_000_000 }.to_string(),
            "source length 5000000000 exceeds the u32 element count"
        );
    }

    proptest! {
        #[test]
        fn arbitrary_contents_survive_the_view(data in prop::collection::vec(any::<u8>(), 0..256)) {
            let view = Slice::try_from(&data[..]).unwrap();
            prop_assert_eq!(view.len() as usize, data.len());
            view.validate().unwrap();
            // SAFETY: `view` borrows `data`, which outlives this scope.
            let back = unsafe { view.unchecked_as_slice() };
            prop_assert_eq!(back, &data[..]);
        }
    }
}
