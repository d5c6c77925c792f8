// Copyright (c) 2025-2026 The hush developers
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use std::cell::Cell;

use crate::traits::{FastZeroizable, ZeroizationProbe, ZeroizeMetadata};
use crate::zeroize;

// Counts clears so the short-circuit is observable.
struct Counted<'a> {
    value: u32,
    clears: &'a Cell<usize>,
}

impl ZeroizeMetadata for Counted<'_> {
    const CAN_BE_BULK_ZEROIZED: bool = false;
}

impl FastZeroizable for Counted<'_> {
    fn fast_zeroize(&mut self) {
        self.clears.set(self.clears.get() + 1);
        self.value.fast_zeroize();
    }
}

impl ZeroizationProbe for Counted<'_> {
    fn is_zeroized(&self) -> bool {
        self.value.is_zeroized()
    }
}

#[test]
fn test_zeroize_is_idempotent_and_short_circuits() {
    let clears = Cell::new(0);
    let mut value = Counted {
        value: 31337,
        clears: &clears,
    };

    zeroize(&mut value);
    zeroize(&mut value);
    zeroize(&mut value);

    assert!(value.is_zeroized());
    assert_eq!(clears.get(), 1);
}

#[test]
fn test_zeroize_skips_values_already_in_zero_form() {
    let clears = Cell::new(0);
    let mut value = Counted {
        value: 0,
        clears: &clears,
    };

    zeroize(&mut value);

    assert_eq!(clears.get(), 0);
}

#[test]
fn test_zeroize_unsized_slice() {
    let mut backing = [9u8; 24];
    let slice: &mut [u8] = &mut backing;

    zeroize(slice);

    assert!(backing.is_zeroized());
}

#[test]
fn test_zeroize_record_graph() {
    let mut graph: Vec<(String, Option<Box<Vec<u64>>>)> = vec![
        ("alpha".into(), Some(Box::new(vec![1, 2, 3]))),
        ("beta".into(), None),
    ];

    zeroize(&mut graph);

    assert!(graph.is_zeroized());
    assert_eq!(graph.capacity(), 0);
}
