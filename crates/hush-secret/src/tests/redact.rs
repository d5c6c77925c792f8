// Copyright (c) 2025-2026 The hush developers
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use std::collections::HashMap;

use crate::redact::short_type_name;

#[test]
fn test_short_type_name_strips_module_paths() {
    assert_eq!(short_type_name::<String>(), "String");
    assert_eq!(short_type_name::<Vec<String>>(), "Vec<String>");
    assert_eq!(
        short_type_name::<HashMap<String, Vec<u8>>>(),
        "HashMap<String, Vec<u8>>"
    );
}

#[test]
fn test_short_type_name_keeps_primitives_and_shapes() {
    assert_eq!(short_type_name::<u64>(), "u64");
    assert_eq!(short_type_name::<[u8; 32]>(), "[u8; 32]");
    assert_eq!(short_type_name::<&str>(), "&str");
    assert_eq!(short_type_name::<(u8, Option<Box<i32>>)>(), "(u8, Option<Box<i32>>)");
}
