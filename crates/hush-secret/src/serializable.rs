// Copyright (c) 2025-2026 The hush developers
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Opt-in adapter that serializes the real value.

use core::fmt;

use hush_zero::{FastZeroizable, ZeroizationProbe, ZeroizeMetadata};

use crate::redact::{short_type_name, write_debug, write_marker};
use crate::traits::ExposeSecret;

/// Wraps a secret container so that serialization emits the real value.
///
/// Choosing this type is the explicit "persist the secret" decision, for
/// example when writing to a protected secret store. Serializing encodes
/// [`ExposeSecret::expose_secret`]; deserializing decodes into the wrapped
/// container. `Display` and `Debug` still print the leak marker.
///
/// ```rust
/// # #[cfg(feature = "serde")] {
/// use hush_secret::{SecretString, SerializableSecret};
///
/// let token = SerializableSecret::new(SecretString::from("tok_123"));
///
/// assert_eq!(serde_json::to_string(&token).unwrap(), "\"tok_123\"");
/// assert_eq!(token.to_string(), "<!SECRET_LEAKED!>");
///
/// let decoded: SerializableSecret<SecretString> =
///     serde_json::from_str("\"tok_123\"").unwrap();
/// assert_eq!(decoded.expose_secret(), "tok_123");
/// # }
/// ```
pub struct SerializableSecret<E> {
    inner: E,
}

impl<E> SerializableSecret<E> {
    /// Wraps `inner`.
    pub fn new(inner: E) -> Self {
        Self { inner }
    }

    /// Returns the wrapped container.
    pub fn into_inner(self) -> E {
        self.inner
    }

    /// Borrows the wrapped container.
    pub fn inner(&self) -> &E {
        &self.inner
    }

    /// Mutably borrows the wrapped container.
    pub fn inner_mut(&mut self) -> &mut E {
        &mut self.inner
    }
}

impl<E: ExposeSecret> SerializableSecret<E> {
    /// Borrows the real value.
    pub fn expose_secret(&self) -> &E::Exposed {
        self.inner.expose_secret()
    }
}

impl<E: ExposeSecret> ExposeSecret for SerializableSecret<E> {
    type Exposed = E::Exposed;

    fn expose_secret(&self) -> &E::Exposed {
        self.inner.expose_secret()
    }
}

impl<E> From<E> for SerializableSecret<E> {
    fn from(inner: E) -> Self {
        Self::new(inner)
    }
}

impl<E: Default> Default for SerializableSecret<E> {
    fn default() -> Self {
        Self::new(E::default())
    }
}

impl<E> ZeroizeMetadata for SerializableSecret<E> {
    const CAN_BE_BULK_ZEROIZED: bool = false;
}

impl<E: FastZeroizable> FastZeroizable for SerializableSecret<E> {
    fn fast_zeroize(&mut self) {
        self.inner.fast_zeroize();
    }
}

impl<E: ZeroizationProbe> ZeroizationProbe for SerializableSecret<E> {
    fn is_zeroized(&self) -> bool {
        self.inner.is_zeroized()
    }
}

impl<E> fmt::Display for SerializableSecret<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_marker(f)
    }
}

impl<E> fmt::Debug for SerializableSecret<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_debug(
            f,
            format_args!("SerializableSecret<{}>", short_type_name::<E>()),
        )
    }
}
