// Copyright (c) 2025-2026 The hush developers
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use std::collections::HashMap;

use hush_secret::{Secret, SecretString};
use hush_zero::{AssertZeroizeOnDrop, FastZeroizable, HushZero, ZeroizationProbe};

#[derive(HushZero)]
#[fast_zeroize(drop)]
struct Credentials {
    user: String,
    password: SecretString,
    api_keys: Secret<HashMap<String, Vec<u8>>>,
    __sentinel: hush_zero::ZeroizeOnDropSentinel,
}

impl Credentials {
    fn new() -> Self {
        Self {
            user: "ada".into(),
            password: SecretString::from("hunter2"),
            api_keys: Secret::new(HashMap::from([
                ("billing".to_string(), b"k-billing".to_vec()),
                ("search".to_string(), b"k-search".to_vec()),
            ])),
            __sentinel: Default::default(),
        }
    }
}

#[test]
fn test_record_with_secrets_clears_everything() {
    let mut creds = Credentials::new();

    creds.fast_zeroize();

    assert!(creds.is_zeroized());
    assert!(creds.user.is_empty());
    assert!(creds.password.is_empty());
    assert!(creds.api_keys.expose().is_empty());
}

#[test]
fn test_record_zeroizes_on_drop() {
    Credentials::new().assert_zeroize_on_drop();
}

#[test]
fn test_secrets_redacted_inside_record_debug() {
    #[derive(Debug)]
    struct Wrapper<'a> {
        password: &'a SecretString,
        keys: &'a Secret<HashMap<String, Vec<u8>>>,
    }

    let creds = Credentials::new();
    let rendered = format!(
        "{:?}",
        Wrapper {
            password: &creds.password,
            keys: &creds.api_keys,
        }
    );

    assert!(!rendered.contains("hunter2"));
    assert!(!rendered.contains("k-billing"));
    assert!(rendered.contains("SecretString(******)"));
    assert!(rendered.contains("Secret<HashMap<String, Vec<u8>>>(******)"));
}

#[test]
fn test_cleared_map_empty_through_second_handle() {
    use std::cell::RefCell;
    use std::rc::Rc;

    let backing = Rc::new(RefCell::new(HashMap::from([
        ("1".to_string(), 1u32),
        ("2".to_string(), 2),
        ("3".to_string(), 3),
    ])));
    let second = Rc::clone(&backing);
    let mut secret = Secret::new(backing);

    secret.zeroize_now();

    assert!(second.borrow().is_empty());
    assert_eq!(second.borrow().capacity(), 0);
    assert!(second.is_zeroized());
}
