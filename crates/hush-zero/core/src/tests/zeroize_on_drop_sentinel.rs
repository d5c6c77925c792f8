// Copyright (c) 2025-2026 The hush developers
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::traits::FastZeroizable;
use crate::zeroize_on_drop_sentinel::ZeroizeOnDropSentinel;

#[test]
fn test_sentinel_clear_is_shared_by_clones() {
    let mut sentinel = ZeroizeOnDropSentinel::default();
    let observer = sentinel.clone();

    assert!(!observer.is_zeroized());
    sentinel.fast_zeroize();
    assert!(sentinel.is_zeroized());
    assert!(observer.is_zeroized());
}

#[test]
fn test_sentinel_is_not_zeroized_by_drop() {
    let sentinel = ZeroizeOnDropSentinel::default();
    let observer = sentinel.clone();

    drop(sentinel);

    assert!(!observer.is_zeroized());
}

#[test]
fn test_sentinel_reset() {
    let mut sentinel = ZeroizeOnDropSentinel::default();
    let observer = sentinel.clone();

    sentinel.fast_zeroize();
    sentinel.reset();

    assert!(!observer.is_zeroized());
}

#[test]
fn test_sentinel_partial_eq_compares_state() {
    let mut a = ZeroizeOnDropSentinel::default();
    let mut b = ZeroizeOnDropSentinel::default();
    assert_eq!(a, b);

    a.fast_zeroize();
    assert_ne!(a, b);

    b.fast_zeroize();
    assert_eq!(a, b);
}
