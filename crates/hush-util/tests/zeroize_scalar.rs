// Copyright (c) 2025-2026 The hush developers
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use hush_util::{zeroize_scalar, zeroize_scalars};

#[test]
fn test_zeroize_scalar_integers() {
    let mut a = u8::MAX;
    let mut b = 0xBEEFu16;
    let mut c = -7i32;
    let mut d = u64::MAX;
    let mut e = i128::MIN;
    let mut f = 424242usize;

    zeroize_scalar(&mut a);
    zeroize_scalar(&mut b);
    zeroize_scalar(&mut c);
    zeroize_scalar(&mut d);
    zeroize_scalar(&mut e);
    zeroize_scalar(&mut f);

    assert_eq!((a, b, c, d, e, f), (0, 0, 0, 0, 0, 0));
}

#[test]
fn test_zeroize_scalar_floats_bool_char() {
    let mut x = 3.5f32;
    let mut y = -1.25f64;
    let mut flag = true;
    let mut ch = 'k';

    zeroize_scalar(&mut x);
    zeroize_scalar(&mut y);
    zeroize_scalar(&mut flag);
    zeroize_scalar(&mut ch);

    assert_eq!(x, 0.0);
    assert_eq!(y, 0.0);
    assert!(!flag);
    assert_eq!(ch, '\0');
}

#[test]
fn test_zeroize_scalars_bulk() {
    let mut words = [0xDEAD_BEEFu32; 64];
    zeroize_scalars(&mut words);
    assert!(words.iter().all(|w| *w == 0));

    let mut empty: [u64; 0] = [];
    zeroize_scalars(&mut empty);
}
