// Copyright (c) 2025-2026 The hush developers
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Error types for secret construction and leak-marker configuration.

/// Errors returned by `hush-secret`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SecretError {
    /// Bytes handed to [`SecretString::from_utf8`](crate::SecretString::from_utf8)
    /// were not UTF-8. The rejected buffer has already been cleared.
    #[error("secret text is not valid UTF-8 (valid up to byte {valid_up_to})")]
    InvalidUtf8 {
        /// Length of the longest valid UTF-8 prefix.
        valid_up_to: usize,
    },

    /// The process-wide leak marker was already fixed, either by an earlier
    /// call or by first use.
    #[error("leak marker is already set to {current:?}")]
    LeakMarkerAlreadySet {
        /// Marker in effect for the rest of the process.
        current: &'static str,
    },

    /// An empty leak marker would make leaks invisible to log scanners.
    #[error("leak marker must not be empty")]
    EmptyLeakMarker,
}
