// Copyright (c) 2025-2026 The hush developers
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! `serde` integration.
//!
//! | Type | Serialize | Deserialize |
//! |---|---|---|
//! | [`Secret<T>`] | leak marker string | plain `T` |
//! | [`SecretString`] | leak marker string | plain string |
//! | [`SerializableSecret<E>`] | real value | plain value into `E` |
//!
//! For a single field, [`exposed`] serializes the real value of a plain
//! container without changing its type.

use ::serde::{Deserialize, Deserializer, Serialize, Serializer};
use hush_zero::{FastZeroizable, ZeroizationProbe};

use crate::marker::leak_marker;
use crate::secret::Secret;
use crate::secret_string::SecretString;
use crate::serializable::SerializableSecret;
use crate::traits::ExposeSecret;

impl<T> Serialize for Secret<T>
where
    T: FastZeroizable + ZeroizationProbe,
{
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(leak_marker())
    }
}

impl<'de, T> Deserialize<'de> for Secret<T>
where
    T: FastZeroizable + ZeroizationProbe + Deserialize<'de>,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        T::deserialize(deserializer).map(Secret::new)
    }
}

impl Serialize for SecretString {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(leak_marker())
    }
}

impl<'de> Deserialize<'de> for SecretString {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        String::deserialize(deserializer).map(SecretString::from)
    }
}

impl<E> Serialize for SerializableSecret<E>
where
    E: ExposeSecret,
    E::Exposed: Serialize,
{
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.expose_secret().serialize(serializer)
    }
}

impl<'de, E> Deserialize<'de> for SerializableSecret<E>
where
    E: Deserialize<'de>,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        E::deserialize(deserializer).map(SerializableSecret::new)
    }
}

/// Field-level "serialize the real value".
///
/// ```rust
/// use hush_secret::{Secret, SecretString};
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Serialize, Deserialize)]
/// struct StoredCredential {
///     user: String,
///     #[serde(with = "hush_secret::serde::exposed")]
///     password: SecretString,
///     // Stays redacted.
///     session: Secret<String>,
/// }
///
/// let credential = StoredCredential {
///     user: "ada".into(),
///     password: SecretString::from("hunter2"),
///     session: Secret::new("s-1".into()),
/// };
///
/// let json = serde_json::to_string(&credential).unwrap();
/// assert_eq!(
///     json,
///     r#"{"user":"ada","password":"hunter2","session":"<!SECRET_LEAKED!>"}"#
/// );
/// ```
pub mod exposed {
    use ::serde::{Deserialize, Deserializer, Serialize, Serializer};

    use crate::traits::ExposeSecret;

    /// Serializes the real value of `secret`.
    pub fn serialize<E, S>(secret: &E, serializer: S) -> Result<S::Ok, S::Error>
    where
        E: ExposeSecret,
        E::Exposed: Serialize,
        S: Serializer,
    {
        secret.expose_secret().serialize(serializer)
    }

    /// Decodes a plain value into the container.
    pub fn deserialize<'de, E, D>(deserializer: D) -> Result<E, D::Error>
    where
        E: Deserialize<'de>,
        D: Deserializer<'de>,
    {
        E::deserialize(deserializer)
    }
}
