// Copyright (c) 2025-2026 The hush developers
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Redacted rendering shared by every container.

use core::any::type_name;
use core::fmt;

use crate::marker::leak_marker;

/// Placeholder standing in for the value in debug output.
pub(crate) const PLACEHOLDER: &str = "******";

/// `type_name::<T>()` with module paths stripped:
/// `alloc::vec::Vec<alloc::string::String>` becomes `Vec<String>`.
pub(crate) fn short_type_name<T: ?Sized>() -> String {
    let full = type_name::<T>();
    let mut out = String::with_capacity(full.len());
    let mut segment_start = 0;
    let mut chars = full.chars().peekable();

    while let Some(c) = chars.next() {
        if c == ':' && chars.peek() == Some(&':') {
            chars.next();
            out.truncate(segment_start);
        } else {
            out.push(c);
            if !(c.is_alphanumeric() || c == '_') {
                segment_start = out.len();
            }
        }
    }

    out
}

/// Writes the leak marker alone.
pub(crate) fn write_marker(f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(leak_marker())
}

/// Writes `<marker> <label>(******)`, ignoring every formatter flag so that
/// `{:#?}` and friends cannot change the shape.
pub(crate) fn write_debug(f: &mut fmt::Formatter<'_>, label: fmt::Arguments<'_>) -> fmt::Result {
    write!(f, "{} {}({})", leak_marker(), label, PLACEHOLDER)
}
