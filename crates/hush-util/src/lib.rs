// Copyright (c) 2025-2026 The hush developers
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Memory-wiping primitives shared by the hush crates.
//!
//! Every write in this crate is followed by a volatile read or a compiler
//! fence so the optimizer cannot elide a store to memory that is about to be
//! released.
//!
//! ## License
//!
//! GPL-3.0-only

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]
#![warn(unsafe_op_in_unsafe_fn)]

extern crate alloc;

use alloc::vec::Vec;
use core::mem::{self, MaybeUninit};
use core::ptr;
use core::sync::atomic::{Ordering, compiler_fence};

mod sealed {
    pub trait Sealed {}
}

/// Scalar types whose all-zero bit pattern is a valid value.
///
/// Sealed: only primitive integers, floats, `bool` and `char` qualify.
pub trait Scalar: Copy + sealed::Sealed {}

macro_rules! impl_scalar {
    ($($ty:ty),* $(,)?) => {
        $(
            impl sealed::Sealed for $ty {}
            impl Scalar for $ty {}
        )*
    };
}

impl_scalar!(
    u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize, f32, f64, bool, char,
);

/// Overwrites a scalar with its zero value using a volatile write.
///
/// Integers become `0`, floats `0.0`, `bool` becomes `false` and `char`
/// becomes `'\0'`.
///
/// # Example
///
/// ```
/// use hush_util::zeroize_scalar;
///
/// let mut pin = 4821u32;
/// zeroize_scalar(&mut pin);
/// assert_eq!(pin, 0);
///
/// let mut flag = true;
/// zeroize_scalar(&mut flag);
/// assert!(!flag);
/// ```
#[inline(always)]
pub fn zeroize_scalar<T: Scalar>(val: &mut T) {
    // SAFETY: `Scalar` is sealed to types for which all-zero bytes are a valid value.
    unsafe {
        ptr::write_volatile(val, mem::zeroed());
    }
    compiler_fence(Ordering::SeqCst);
}

/// Bulk-zeroizes a slice of scalars with a single memset.
///
/// # Example
///
/// ```
/// use hush_util::zeroize_scalars;
///
/// let mut key = [0xA5u8; 32];
/// zeroize_scalars(&mut key);
/// assert!(key.iter().all(|b| *b == 0));
/// ```
#[inline(always)]
pub fn zeroize_scalars<T: Scalar>(slice: &mut [T]) {
    // SAFETY: `Scalar` guarantees all-zero bytes are valid for every element.
    unsafe { zeroize_slice_bytes(slice) }
}

/// Writes zero bytes over every element of `slice`.
///
/// Uses `write_bytes` followed by a volatile read so the memset survives
/// dead-store elimination.
///
/// # Safety
///
/// The all-zero bit pattern must be a valid value of `T`. Types holding
/// references, `NonNull`, `Box` or any other non-nullable pointer must never
/// be passed here.
#[inline(always)]
pub unsafe fn zeroize_slice_bytes<T>(slice: &mut [T]) {
    if slice.is_empty() {
        return;
    }

    let byte_len = mem::size_of_val(slice);
    // SAFETY: the range is exactly the slice's memory and the caller guarantees
    // all-zero is a valid `T`.
    unsafe {
        ptr::write_bytes(slice.as_mut_ptr().cast::<u8>(), 0, byte_len);
        ptr::read_volatile(slice.as_ptr().cast::<u8>());
    }
    compiler_fence(Ordering::SeqCst);
}

/// Zeroizes the spare capacity of a `Vec<T>` (the region between `len` and
/// `capacity`), leaving live elements untouched.
///
/// Spare capacity is uninitialized memory from the point of view of `T`, so
/// this is sound for every element type.
///
/// # Example
///
/// ```
/// use hush_util::{is_spare_capacity_zeroized, zeroize_spare_capacity};
///
/// let mut token = b"bearer abcdef".to_vec();
/// token.truncate(6);
/// assert!(!is_spare_capacity_zeroized(&token));
///
/// zeroize_spare_capacity(&mut token);
/// assert!(is_spare_capacity_zeroized(&token));
/// assert_eq!(&token, b"bearer");
/// ```
#[inline(always)]
pub fn zeroize_spare_capacity<T>(vec: &mut Vec<T>) {
    let spare = vec.spare_capacity_mut();
    if spare.is_empty() {
        return;
    }

    let byte_len = mem::size_of_val(spare);
    let base = spare.as_mut_ptr().cast::<u8>();
    // SAFETY: `base` points at `byte_len` bytes owned by the vector and not
    // covered by any live element; writing bytes to `MaybeUninit` is always valid.
    unsafe {
        ptr::write_bytes(base, 0, byte_len);
        ptr::read_volatile(base);
    }
    compiler_fence(Ordering::SeqCst);
}

/// Returns `true` if every byte of the spare capacity is zero (or there is
/// no spare capacity).
///
/// Only meaningful after the spare region has been written, e.g. by
/// [`zeroize_spare_capacity`]: a fresh allocation's spare bytes are
/// indeterminate.
#[inline(never)]
pub fn is_spare_capacity_zeroized<T>(vec: &Vec<T>) -> bool {
    let len_bytes = vec.len() * mem::size_of::<T>();
    let cap_bytes = vec.capacity() * mem::size_of::<T>();

    if cap_bytes == len_bytes {
        return true;
    }

    // SAFETY: the allocation is valid for `cap_bytes` bytes; we only read bytes
    // past the live elements and never materialize a `T`.
    let spare = unsafe {
        core::slice::from_raw_parts(
            vec.as_ptr().cast::<MaybeUninit<u8>>().add(len_bytes),
            cap_bytes - len_bytes,
        )
    };

    // SAFETY: see the function documentation; callers probe after wiping.
    spare.iter().all(|b| unsafe { b.assume_init() } == 0)
}

/// Returns `true` if every byte of `slice` is zero.
///
/// # Example
///
/// ```
/// use hush_util::is_slice_zeroized;
///
/// assert!(is_slice_zeroized(&[0u8; 16]));
/// assert!(!is_slice_zeroized(b"\0\0k\0"));
/// ```
#[inline(always)]
pub fn is_slice_zeroized(slice: &[u8]) -> bool {
    slice.iter().all(|&b| b == 0)
}

/// Returns `true` if the whole allocation of a `Vec<u8>`, live bytes and
/// spare capacity alike, is zero.
///
/// # Example
///
/// ```
/// use hush_util::{is_vec_fully_zeroized, zeroize_scalars, zeroize_spare_capacity};
///
/// let mut password = b"correct horse".to_vec();
/// password.truncate(7);
///
/// zeroize_scalars(&mut password);
/// // "horse" still sits in spare capacity.
/// assert!(!is_vec_fully_zeroized(&password));
///
/// zeroize_spare_capacity(&mut password);
/// assert!(is_vec_fully_zeroized(&password));
/// ```
#[inline(never)]
pub fn is_vec_fully_zeroized(vec: &Vec<u8>) -> bool {
    is_slice_zeroized(vec) && is_spare_capacity_zeroized(vec)
}
