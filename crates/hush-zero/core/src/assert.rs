// Copyright (c) 2025-2026 The hush developers
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Test helpers for verifying zeroization behavior.

use super::traits::AssertZeroizeOnDrop;

/// Asserts that `value` clears itself when dropped.
///
/// Clones the value's sentinel, resets it, drops the value and checks that the
/// clone saw the clear.
///
/// # Panics
///
/// Panics if dropping `value` did not clear it.
pub fn assert_zeroize_on_drop<T: AssertZeroizeOnDrop>(value: T) {
    let mut sentinel = value.clone_sentinel();
    sentinel.reset();

    assert!(!sentinel.is_zeroized());
    drop(value);
    assert!(
        sentinel.is_zeroized(),
        "`{}` was dropped without being zeroized",
        core::any::type_name::<T>()
    );
}
