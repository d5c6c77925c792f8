// Copyright (c) 2025-2026 The hush developers
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Sequences (`[T]`, `[T; N]`, `Vec<T>`, `String`, `str`) and the record
//! helpers used by derived implementations.

use alloc::string::String;
use alloc::vec::Vec;
use core::mem;
use core::sync::atomic::{Ordering, compiler_fence};

use super::traits::{FastZeroizable, ZeroizationProbe, ZeroizeMetadata};

/// Coerces `&mut T` into `&mut dyn FastZeroizable`.
///
/// Lets derived code put heterogeneous fields in one array.
#[inline(always)]
pub fn to_fast_zeroizable_dyn_mut<'a, T: FastZeroizable>(
    x: &'a mut T,
) -> &'a mut (dyn FastZeroizable + 'a) {
    x
}

/// Coerces `&T` into `&dyn ZeroizationProbe`.
#[inline(always)]
pub fn to_zeroization_probe_dyn_ref<'a, T: ZeroizationProbe>(
    x: &'a T,
) -> &'a (dyn ZeroizationProbe + 'a) {
    x
}

/// Clears every item yielded by the iterator, in order.
pub fn zeroize_collection(collection_iter: &mut dyn Iterator<Item = &mut dyn FastZeroizable>) {
    for z in collection_iter {
        z.fast_zeroize();
        compiler_fence(Ordering::SeqCst);
    }
}

/// Returns `true` if every item yielded by the iterator is zeroized.
pub fn collection_zeroed(collection_iter: &mut dyn Iterator<Item = &dyn ZeroizationProbe>) -> bool {
    for z in collection_iter {
        if !z.is_zeroized() {
            return false;
        }
    }

    true
}

// [T]

/// Clears a slice either with one memset (`fast`) or element by element in
/// index order.
///
/// Both paths are reachable from tests regardless of `T`.
#[inline(always)]
pub(crate) fn slice_fast_zeroize<T: FastZeroizable + ZeroizeMetadata>(slice: &mut [T], fast: bool) {
    if fast {
        // SAFETY: only reached with `fast == T::CAN_BE_BULK_ZEROIZED`, which
        // promises all-zero bytes form a valid `T`; tests pass scalar types.
        unsafe { hush_util::zeroize_slice_bytes(slice) };
    } else {
        for elem in slice.iter_mut() {
            elem.fast_zeroize();
            compiler_fence(Ordering::SeqCst);
        }
    }
}

impl<T: ZeroizeMetadata> ZeroizeMetadata for [T] {
    const CAN_BE_BULK_ZEROIZED: bool = T::CAN_BE_BULK_ZEROIZED;
}

impl<T: FastZeroizable + ZeroizeMetadata> FastZeroizable for [T] {
    #[inline(always)]
    fn fast_zeroize(&mut self) {
        slice_fast_zeroize(self, T::CAN_BE_BULK_ZEROIZED);
    }
}

impl<T: ZeroizationProbe> ZeroizationProbe for [T] {
    fn is_zeroized(&self) -> bool {
        self.iter().all(ZeroizationProbe::is_zeroized)
    }
}

// [T; N]

impl<T: ZeroizeMetadata, const N: usize> ZeroizeMetadata for [T; N] {
    const CAN_BE_BULK_ZEROIZED: bool = T::CAN_BE_BULK_ZEROIZED;
}

impl<T: FastZeroizable + ZeroizeMetadata, const N: usize> FastZeroizable for [T; N] {
    #[inline(always)]
    fn fast_zeroize(&mut self) {
        slice_fast_zeroize(self.as_mut_slice(), T::CAN_BE_BULK_ZEROIZED);
    }
}

impl<T: ZeroizationProbe, const N: usize> ZeroizationProbe for [T; N] {
    fn is_zeroized(&self) -> bool {
        self.as_slice().is_zeroized()
    }
}

// str

impl ZeroizeMetadata for str {
    const CAN_BE_BULK_ZEROIZED: bool = true;
}

impl FastZeroizable for str {
    fn fast_zeroize(&mut self) {
        // SAFETY: NUL bytes are valid UTF-8, so the `str` stays well-formed.
        let bytes = unsafe { self.as_bytes_mut() };
        hush_util::zeroize_scalars(bytes);
    }
}

impl ZeroizationProbe for str {
    fn is_zeroized(&self) -> bool {
        hush_util::is_slice_zeroized(self.as_bytes())
    }
}

// Vec<T>

/// Wipes a vector without releasing its buffer.
///
/// Elements are cleared (one memset when `fast`), dropped, and then the whole
/// allocation, now spare capacity, is overwritten. The vector ends empty
/// with its capacity intact.
#[inline(always)]
pub(crate) fn vec_fast_zeroize<T: FastZeroizable + ZeroizeMetadata>(vec: &mut Vec<T>, fast: bool) {
    if !fast {
        slice_fast_zeroize(vec.as_mut_slice(), false);
    }

    vec.clear();
    hush_util::zeroize_spare_capacity(vec);
}

impl<T: ZeroizeMetadata> ZeroizeMetadata for Vec<T> {
    const CAN_BE_BULK_ZEROIZED: bool = false;
}

impl<T: FastZeroizable + ZeroizeMetadata> FastZeroizable for Vec<T> {
    /// Wipes the buffer, then detaches it: the vector is left empty and
    /// unallocated.
    fn fast_zeroize(&mut self) {
        vec_fast_zeroize(self, T::CAN_BE_BULK_ZEROIZED);
        drop(mem::take(self));
        compiler_fence(Ordering::SeqCst);
    }
}

impl<T> ZeroizationProbe for Vec<T> {
    /// A vector is in zero form only once it holds nothing and owns no buffer;
    /// an emptied vector may still carry stale bytes in its capacity.
    fn is_zeroized(&self) -> bool {
        self.is_empty() && self.capacity() == 0
    }
}

// String

impl ZeroizeMetadata for String {
    const CAN_BE_BULK_ZEROIZED: bool = false;
}

impl FastZeroizable for String {
    fn fast_zeroize(&mut self) {
        // `into_bytes` reuses the allocation, so the wipe covers the original buffer.
        let mut bytes = mem::take(self).into_bytes();
        bytes.fast_zeroize();
    }
}

impl ZeroizationProbe for String {
    fn is_zeroized(&self) -> bool {
        self.is_empty() && self.capacity() == 0
    }
}
