// Copyright (c) 2025-2026 The hush developers
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! # hush-secret
//!
//! Containers that keep secrets out of logs and clear them at end of life.
//!
//! - [`Secret<T>`]: owns any clearable value. Every implicit output path
//!   (`Display`, `Debug`, serialization) prints the process-wide
//!   [leak marker](leak_marker) instead of the value.
//! - [`SecretString`]: text stored as a clearable byte buffer, read through a
//!   zero-copy `&str` view.
//! - [`SerializableSecret<E>`]: explicit opt-in to serialize the real value.
//!
//! Clearing is done by the `hush-zero` engine, so secrets nest inside any
//! `#[derive(HushZero)]` record.
//!
//! ```rust
//! use hush_secret::{Secret, SecretString};
//! use hush_zero::{FastZeroizable, HushZero, ZeroizationProbe};
//!
//! #[derive(HushZero)]
//! struct Connection {
//!     host: String,
//!     password: SecretString,
//!     tokens: Secret<Vec<String>>,
//! }
//!
//! let mut conn = Connection {
//!     host: "db.internal".into(),
//!     password: SecretString::from("hunter2"),
//!     tokens: Secret::new(vec!["t1".into()]),
//! };
//!
//! assert_eq!(format!("{}", conn.password), "<!SECRET_LEAKED!>");
//!
//! conn.fast_zeroize();
//! assert!(conn.is_zeroized());
//! ```
//!
//! ## Configuration
//!
//! The leak marker defaults to [`DEFAULT_LEAK_MARKER`] and may be overridden
//! once per process through the [`LEAK_MARKER_ENV`] environment variable or
//! [`set_leak_marker`].
//!
//! ## Features
//!
//! - `serde` (default): `Serialize`/`Deserialize` implementations and the
//!   [`serde::exposed`] field helper.
//!
//! ## License
//!
//! GPL-3.0-only

#![warn(missing_docs)]
#![warn(unsafe_op_in_unsafe_fn)]

#[cfg(test)]
mod tests;

mod error;
mod marker;
mod redact;
mod secret;
mod secret_string;
mod serializable;
mod traits;

#[cfg(feature = "serde")]
pub mod serde;

pub use error::SecretError;
pub use marker::{DEFAULT_LEAK_MARKER, LEAK_MARKER_ENV, leak_marker, set_leak_marker};
pub use secret::Secret;
pub use secret_string::SecretString;
pub use serializable::SerializableSecret;
pub use traits::ExposeSecret;
