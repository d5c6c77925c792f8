// Copyright (c) 2025-2026 The hush developers
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Scalars, raw pointers and atomics.

use core::marker::PhantomData;
use core::ptr;
use core::sync::atomic::{
    AtomicBool, AtomicI8, AtomicI16, AtomicI32, AtomicI64, AtomicIsize, AtomicU8, AtomicU16,
    AtomicU32, AtomicU64, AtomicUsize, Ordering, compiler_fence,
};

use crate::traits::{FastZeroizable, SharedZeroizable, ZeroizationProbe, ZeroizeMetadata};

macro_rules! impl_scalar {
    ($($ty:ty => |$v:ident| $probe:expr),* $(,)?) => {
        $(
            impl ZeroizeMetadata for $ty {
                const CAN_BE_BULK_ZEROIZED: bool = true;
            }

            impl FastZeroizable for $ty {
                #[inline(always)]
                fn fast_zeroize(&mut self) {
                    hush_util::zeroize_scalar(self);
                }
            }

            impl ZeroizationProbe for $ty {
                #[inline(always)]
                fn is_zeroized(&self) -> bool {
                    let $v = *self;
                    $probe
                }
            }
        )*
    };
}

impl_scalar!(
    u8 => |v| v == 0,
    u16 => |v| v == 0,
    u32 => |v| v == 0,
    u64 => |v| v == 0,
    u128 => |v| v == 0,
    usize => |v| v == 0,
    i8 => |v| v == 0,
    i16 => |v| v == 0,
    i32 => |v| v == 0,
    i64 => |v| v == 0,
    i128 => |v| v == 0,
    isize => |v| v == 0,
    // Bit compare: `-0.0 == 0.0` but its sign bit is set.
    f32 => |v| v.to_bits() == 0,
    f64 => |v| v.to_bits() == 0,
    bool => |v| !v,
    char => |v| v == '\0',
);

// ()

impl ZeroizeMetadata for () {
    const CAN_BE_BULK_ZEROIZED: bool = true;
}

impl FastZeroizable for () {
    #[inline(always)]
    fn fast_zeroize(&mut self) {}
}

impl ZeroizationProbe for () {
    #[inline(always)]
    fn is_zeroized(&self) -> bool {
        true
    }
}

// PhantomData<T>

impl<T: ?Sized> ZeroizeMetadata for PhantomData<T> {
    const CAN_BE_BULK_ZEROIZED: bool = false;
}

impl<T: ?Sized> FastZeroizable for PhantomData<T> {
    #[inline(always)]
    fn fast_zeroize(&mut self) {}
}

impl<T: ?Sized> ZeroizationProbe for PhantomData<T> {
    #[inline(always)]
    fn is_zeroized(&self) -> bool {
        true
    }
}

// *mut T / *const T

impl<T> ZeroizeMetadata for *mut T {
    const CAN_BE_BULK_ZEROIZED: bool = false;
}

impl<T> FastZeroizable for *mut T {
    #[inline(always)]
    fn fast_zeroize(&mut self) {
        // SAFETY: `self` is a valid, aligned `&mut *mut T`.
        unsafe {
            ptr::write_volatile(self, ptr::null_mut());
        }
        compiler_fence(Ordering::SeqCst);
    }
}

impl<T> ZeroizationProbe for *mut T {
    #[inline(always)]
    fn is_zeroized(&self) -> bool {
        self.is_null()
    }
}

impl<T> ZeroizeMetadata for *const T {
    const CAN_BE_BULK_ZEROIZED: bool = false;
}

impl<T> FastZeroizable for *const T {
    #[inline(always)]
    fn fast_zeroize(&mut self) {
        // SAFETY: `self` is a valid, aligned `&mut *const T`.
        unsafe {
            ptr::write_volatile(self, ptr::null());
        }
        compiler_fence(Ordering::SeqCst);
    }
}

impl<T> ZeroizationProbe for *const T {
    #[inline(always)]
    fn is_zeroized(&self) -> bool {
        self.is_null()
    }
}

// Atomics

macro_rules! impl_atomic {
    ($($ty:ty => $zero:expr),* $(,)?) => {
        $(
            impl ZeroizeMetadata for $ty {
                const CAN_BE_BULK_ZEROIZED: bool = false;
            }

            impl FastZeroizable for $ty {
                #[inline(always)]
                fn fast_zeroize(&mut self) {
                    *self.get_mut() = $zero;
                    compiler_fence(Ordering::SeqCst);
                }
            }

            impl SharedZeroizable for $ty {
                #[inline(always)]
                fn fast_zeroize_shared(&self) {
                    self.store($zero, Ordering::SeqCst);
                }
            }

            impl ZeroizationProbe for $ty {
                #[inline(always)]
                fn is_zeroized(&self) -> bool {
                    self.load(Ordering::SeqCst) == $zero
                }
            }
        )*
    };
}

impl_atomic!(
    AtomicBool => false,
    AtomicU8 => 0,
    AtomicU16 => 0,
    AtomicU32 => 0,
    AtomicU64 => 0,
    AtomicUsize => 0,
    AtomicI8 => 0,
    AtomicI16 => 0,
    AtomicI32 => 0,
    AtomicI64 => 0,
    AtomicIsize => 0,
);
