// Copyright (c) 2025-2026 The hush developers
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use std::collections::HashMap;

use hush_zero::{AssertZeroizeOnDrop, FastZeroizable, HushZero, ZeroizationProbe};

use crate::marker::DEFAULT_LEAK_MARKER;
use crate::secret::Secret;
use crate::traits::ExposeSecret;

#[test]
fn test_new_and_expose() {
    let secret = Secret::new(String::from("mysecret"));

    assert_eq!(secret.expose(), "mysecret");
    assert_eq!(secret.expose_secret(), "mysecret");
    assert!(secret.is_zeroize_on_drop_enabled());
}

#[test]
fn test_expose_owned_returns_independent_copy() {
    let secret = Secret::new(vec![1u8, 2, 3]);

    let mut copy = secret.expose_owned();
    copy.fast_zeroize();

    assert_eq!(secret.expose(), &vec![1u8, 2, 3]);
}

#[test]
fn test_expose_mut() {
    let mut secret = Secret::new(vec![1u8, 2, 3]);

    secret.expose_mut().push(4);

    assert_eq!(secret.expose(), &vec![1u8, 2, 3, 4]);
}

#[test]
fn test_from_mut_clears_source() {
    let mut api_key = String::from("sk_live_abc");
    let secret = Secret::from_mut(&mut api_key);

    assert!(api_key.is_zeroized());
    assert_eq!(secret.expose(), "sk_live_abc");
}

#[test]
fn test_replace_clears_old_value_and_source() {
    let mut secret = Secret::new(0xDEAD_BEEFu64);
    let mut next = 0xCAFE_BABEu64;

    secret.replace(&mut next);

    assert_eq!(next, 0);
    assert_eq!(*secret.expose(), 0xCAFE_BABE);
}

#[test]
fn test_display_is_leak_marker() {
    let secret = Secret::new(String::from("mysecret"));

    assert_eq!(format!("{secret}"), DEFAULT_LEAK_MARKER);
    assert_eq!(format!("{secret:>40}"), DEFAULT_LEAK_MARKER);
    assert_eq!(secret.to_string(), DEFAULT_LEAK_MARKER);
}

#[test]
fn test_debug_names_type_but_not_value() {
    let secret = Secret::new(String::from("mysecret"));
    let expected = "<!SECRET_LEAKED!> Secret<String>(******)";

    assert_eq!(format!("{secret:?}"), expected);
    assert_eq!(format!("{secret:#?}"), expected);
    assert!(!format!("{secret:#?}").contains("mysecret"));
}

#[test]
fn test_debug_inside_derived_debug() {
    #[derive(Debug)]
    struct Config {
        host: &'static str,
        password: Secret<String>,
    }

    let config = Config {
        host: "db",
        password: Secret::new("hunter2".into()),
    };

    let rendered = format!("{config:?}");
    assert!(rendered.contains("<!SECRET_LEAKED!> Secret<String>(******)"));
    assert!(!rendered.contains("hunter2"));
}

#[test]
fn test_zeroize_now() {
    let mut secret = Secret::new(String::from("mysecret"));
    let observer = secret.clone_sentinel();

    secret.zeroize_now();

    assert!(secret.expose().is_empty());
    assert_eq!(secret.expose().capacity(), 0);
    assert!(secret.is_zeroized());
    assert!(observer.is_zeroized());
}

#[test]
fn test_zeroize_now_ignores_disabled_drop() {
    let mut secret = Secret::new(vec![9u8; 16]);
    secret.disable_zeroize_on_drop();

    secret.zeroize_now();

    assert!(secret.is_zeroized());
}

#[test]
fn test_zeroizes_on_drop() {
    let secret = Secret::new(String::from("mysecret"));

    secret.assert_zeroize_on_drop();
}

#[test]
fn test_disabled_drop_skips_zeroization() {
    let mut secret = Secret::new(String::from("mysecret"));
    secret.disable_zeroize_on_drop();
    assert!(!secret.is_zeroize_on_drop_enabled());

    let observer = secret.clone_sentinel();
    drop(secret);

    assert!(!observer.is_zeroized());
}

#[test]
fn test_reenabled_drop_zeroizes() {
    let mut secret = Secret::new(String::from("mysecret"));
    secret.disable_zeroize_on_drop();
    secret.enable_zeroize_on_drop();

    secret.assert_zeroize_on_drop();
}

#[test]
fn test_wrapped_map_is_cleared() {
    let mut secret = Secret::new(HashMap::from([
        ("1".to_string(), 1u32),
        ("2".to_string(), 2),
        ("3".to_string(), 3),
    ]));

    secret.zeroize_now();

    assert!(secret.expose().is_empty());
}

#[test]
fn test_default_and_from() {
    let empty: Secret<Vec<u8>> = Secret::default();
    assert!(empty.is_zeroized());

    let from: Secret<u32> = 7.into();
    assert_eq!(*from.expose(), 7);
}

#[derive(HushZero)]
struct Account {
    id: u64,
    password: Secret<String>,
    #[fast_zeroize(skip)]
    region: &'static str,
}

#[test]
fn test_secret_nested_in_record() {
    let mut account = Account {
        id: 9,
        password: Secret::new("pw".into()),
        region: "eu",
    };

    account.fast_zeroize();

    assert!(account.is_zeroized());
    assert!(account.password.expose().is_empty());
    assert_eq!(account.region, "eu");
}
