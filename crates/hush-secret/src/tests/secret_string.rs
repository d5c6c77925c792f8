// Copyright (c) 2025-2026 The hush developers
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use hush_zero::{AssertZeroizeOnDrop, ZeroizationProbe};

use crate::error::SecretError;
use crate::marker::DEFAULT_LEAK_MARKER;
use crate::secret_string::SecretString;
use crate::traits::ExposeSecret;

#[test]
fn test_mysecret_scenario() {
    let mut secret = SecretString::from("mysecret");

    assert_eq!(format!("{secret}"), DEFAULT_LEAK_MARKER);
    assert_eq!(secret.expose(), "mysecret");

    secret.zeroize_now();

    assert!(secret.expose_bytes().is_empty());
    assert_eq!(secret.len(), 0);
    assert!(secret.is_zeroized());
}

#[test]
fn test_from_string_reuses_allocation() {
    let text = String::from("reuse-me");
    let ptr = text.as_ptr();

    let secret = SecretString::from(text);

    assert_eq!(secret.expose_bytes().as_ptr(), ptr);
}

#[test]
fn test_expose_is_zero_copy_view() {
    let secret = SecretString::from("view");

    assert_eq!(secret.expose().as_ptr(), secret.expose_bytes().as_ptr());
    assert_eq!(secret.expose_secret(), "view");
}

#[test]
fn test_from_utf8() {
    let secret = SecretString::from_utf8("pässwörd".as_bytes().to_vec()).expect("valid UTF-8");

    assert_eq!(secret.expose(), "pässwörd");
    assert_eq!(secret.len(), "pässwörd".len());
    assert!(!secret.is_empty());
}

#[test]
fn test_from_utf8_rejects_invalid_bytes() {
    let result = SecretString::from_utf8(vec![b'o', b'k', 0xFF, b'!']);

    assert_eq!(
        result.err(),
        Some(SecretError::InvalidUtf8 { valid_up_to: 2 })
    );
}

#[test]
fn test_debug() {
    let secret = SecretString::from("mysecret");
    let expected = "<!SECRET_LEAKED!> SecretString(******)";

    assert_eq!(format!("{secret:?}"), expected);
    assert_eq!(format!("{secret:#?}"), expected);
}

#[test]
fn test_expose_owned() {
    let secret = SecretString::from("copy");

    assert_eq!(secret.expose_owned(), "copy");
}

#[test]
fn test_default_is_empty() {
    let secret = SecretString::default();

    assert!(secret.is_empty());
    assert_eq!(secret.expose(), "");
}

#[test]
fn test_zeroizes_on_drop() {
    SecretString::from("mysecret").assert_zeroize_on_drop();
}

#[test]
fn test_disable_zeroize_on_drop() {
    let mut secret = SecretString::from("keep");
    secret.disable_zeroize_on_drop();
    assert!(!secret.is_zeroize_on_drop_enabled());

    let observer = secret.clone_sentinel();
    drop(secret);
    assert!(!observer.is_zeroized());

    let mut secret = SecretString::from("clear");
    secret.disable_zeroize_on_drop();
    secret.enable_zeroize_on_drop();
    secret.assert_zeroize_on_drop();
}
