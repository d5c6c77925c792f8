// Copyright (c) 2025-2026 The hush developers
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! # hush-zero-core
//!
//! The clearing engine: recursive, ownership-aware zeroization of value graphs.
//!
//! A value is cleared by walking everything it exclusively owns:
//!
//! | Shape | Rule |
//! |---|---|
//! | scalars, raw pointers, atomics | overwritten with zero / null |
//! | `[T; N]`, `[T]` | one memset for scalar elements, otherwise each element in index order |
//! | `Vec<T>`, `String` | elements cleared, whole allocation wiped, then detached (empty, unallocated) |
//! | `BTreeMap`, `HashMap`, sets | values cleared in place, entries drained, owned keys cleared |
//! | records (`#[derive(HushZero)]`), tuples | visible fields in declaration order |
//! | `Box<T>` | target cleared |
//! | `Option<T>` | target cleared, then set to `None` |
//! | `Rc<T>`, `Arc<T>` over a cell | cleared through the shared handle; every holder sees zero |
//! | `Cell`, `RefCell`, `Mutex`, `RwLock` | guarded value cleared |
//!
//! Anything else has no [`FastZeroizable`] implementation and is rejected at
//! compile time. Failures that can only be seen at runtime (a cell that is
//! already borrowed, a lock that is held) abort through [`fatal`].
//!
//! ```rust
//! use std::collections::BTreeMap;
//!
//! use hush_zero_core::{ZeroizationProbe, zeroize};
//!
//! let mut vault: BTreeMap<String, Option<Box<Vec<u8>>>> = BTreeMap::new();
//! vault.insert("db".into(), Some(Box::new(b"hunter2".to_vec())));
//!
//! zeroize(&mut vault);
//! assert!(vault.is_empty());
//! assert!(vault.is_zeroized());
//! ```
//!
//! ## License
//!
//! GPL-3.0-only

#![cfg_attr(not(any(test, feature = "std")), no_std)]
#![warn(missing_docs)]
#![warn(unsafe_op_in_unsafe_fn)]

extern crate alloc;

#[cfg(test)]
mod tests;

mod error;
mod indirections;
mod maps;
mod primitives;
mod traits;
mod tuples;
mod zeroize_on_drop_sentinel;

pub mod assert;
pub mod collections;

pub use error::{ZeroizeError, fatal};
pub use traits::{
    AssertZeroizeOnDrop, FastZeroizable, FastZeroize, SelfZeroize, SharedZeroizable,
    ZeroizationProbe, ZeroizeMetadata,
};
pub use zeroize_on_drop_sentinel::ZeroizeOnDropSentinel;

/// Clears `value` and everything it exclusively owns.
///
/// Returns immediately when `value` is already in zero form, so calling it
/// twice is harmless.
///
/// # Panics
///
/// Panics through [`fatal`] when part of the graph cannot be cleared.
#[track_caller]
pub fn zeroize<T: FastZeroizable + ZeroizationProbe + ?Sized>(value: &mut T) {
    if value.is_zeroized() {
        return;
    }

    value.fast_zeroize();
}
