// Copyright (c) 2025-2026 The hush developers
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

/// Read access to the real value behind a redacting container.
///
/// Implemented by [`Secret<T>`](crate::Secret) (exposing `T`) and
/// [`SecretString`](crate::SecretString) (exposing `str`). Generic code, such
/// as [`SerializableSecret`](crate::SerializableSecret), uses it to reach the
/// value without knowing the container.
pub trait ExposeSecret {
    /// Type of the exposed value.
    type Exposed: ?Sized;

    /// Borrows the real value. The borrow must not outlive the read.
    fn expose_secret(&self) -> &Self::Exposed;
}
