// Copyright (c) 2025-2026 The hush developers
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Process-wide leak marker.
//!
//! Every implicit output path of a secret (`Display`, `Debug`, serialization)
//! prints this marker instead of the value. It is fixed on first use and
//! constant for the rest of the process, so log scanners can grep for it.
//!
//! Resolution order:
//! 1. [`set_leak_marker`], if called before first use;
//! 2. the `HUSH_LEAK_MARKER` environment variable, read once on first use;
//! 3. [`DEFAULT_LEAK_MARKER`].

use std::env::{self, VarError};
use std::sync::OnceLock;

use crate::error::SecretError;

/// Marker used when no override is configured.
pub const DEFAULT_LEAK_MARKER: &str = "<!SECRET_LEAKED!>";

/// Environment variable overriding the marker for a deployment.
pub const LEAK_MARKER_ENV: &str = "HUSH_LEAK_MARKER";

static LEAK_MARKER: OnceLock<&'static str> = OnceLock::new();

/// Returns the marker in effect, fixing it on first call.
pub fn leak_marker() -> &'static str {
    LEAK_MARKER.get_or_init(marker_from_env)
}

/// Fixes the marker for the rest of the process.
///
/// Must run before anything formats a secret. Later calls, and calls after
/// first use, fail with [`SecretError::LeakMarkerAlreadySet`].
///
/// # Example
///
/// ```rust
/// use hush_secret::{Secret, leak_marker, set_leak_marker};
///
/// set_leak_marker("[[hush]]").expect("first configuration");
///
/// let secret = Secret::new(42u32);
/// assert_eq!(secret.to_string(), "[[hush]]");
/// assert_eq!(leak_marker(), "[[hush]]");
/// assert!(set_leak_marker("other").is_err());
/// ```
pub fn set_leak_marker(marker: &'static str) -> Result<(), SecretError> {
    if marker.is_empty() {
        return Err(SecretError::EmptyLeakMarker);
    }

    LEAK_MARKER
        .set(marker)
        .map_err(|_| SecretError::LeakMarkerAlreadySet {
            current: leak_marker(),
        })?;

    log::debug!("leak marker configured programmatically: {marker:?}");
    Ok(())
}

fn marker_from_env() -> &'static str {
    match env::var(LEAK_MARKER_ENV) {
        Ok(value) if !value.is_empty() => {
            log::debug!("leak marker configured from {LEAK_MARKER_ENV}: {value:?}");
            // Lives for the rest of the process by definition.
            Box::leak(value.into_boxed_str())
        }
        Ok(_) => {
            log::warn!("{LEAK_MARKER_ENV} is empty, using {DEFAULT_LEAK_MARKER:?}");
            DEFAULT_LEAK_MARKER
        }
        Err(VarError::NotUnicode(_)) => {
            log::warn!("{LEAK_MARKER_ENV} is not valid unicode, using {DEFAULT_LEAK_MARKER:?}");
            DEFAULT_LEAK_MARKER
        }
        Err(VarError::NotPresent) => DEFAULT_LEAK_MARKER,
    }
}
