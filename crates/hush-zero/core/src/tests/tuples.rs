// Copyright (c) 2025-2026 The hush developers
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::traits::{FastZeroizable, ZeroizationProbe};

#[test]
fn test_pair() {
    let mut pair = (7u8, String::from("salt"));
    assert!(!pair.is_zeroized());

    pair.fast_zeroize();

    assert!(pair.is_zeroized());
    assert_eq!(pair.0, 0);
    assert_eq!(pair.1.capacity(), 0);
}

#[test]
fn test_partially_cleared_tuple_is_not_zero_form() {
    let pair = (0u8, 1u8);
    assert!(!pair.is_zeroized());
}

#[test]
fn test_arity_eight() {
    let mut wide = (
        1u8,
        2u16,
        3u32,
        4u64,
        vec![5u8],
        Some(Box::new(6i32)),
        [7u8; 4],
        String::from("8"),
    );

    wide.fast_zeroize();

    assert!(wide.is_zeroized());
    assert!(wide.5.is_none());
}
