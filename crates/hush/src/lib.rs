// Copyright (c) 2025-2026 The hush developers
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! <p align="center"><em>Secrets that stay out of logs and leave nothing behind.</em></p>
//!
//! ---
//!
//! Hush keeps sensitive values in containers that print a fixed leak marker
//! on every implicit output path and wipe the whole reachable value graph
//! when they go out of scope.
//!
//! # Features
//!
//! - **Redaction everywhere**: `Display`, `Debug` (including `{:#?}`) and
//!   serialization print the leak marker, never the value.
//! - **Recursive clearing**: nested records, collections, maps, boxes,
//!   options and shared cells are walked and wiped, buffers before they are
//!   released.
//! - **One derive**: `#[derive(HushZero)]` makes any struct clearable, with
//!   compile-time rejection of fields the engine cannot see.
//! - **Explicit persistence**: serializing the real value requires choosing
//!   [`secret::SerializableSecret`] or the [`secret::serde::exposed`] helper.
//!
//! # Quick Start
//!
//! ```rust
//! use hush::secret::{Secret, SecretString};
//! use hush::zero::{FastZeroizable, HushZero, ZeroizationProbe};
//!
//! #[derive(HushZero)]
//! struct DbCredentials {
//!     host: String,
//!     password: SecretString,
//!     replicas: Secret<Vec<String>>,
//! }
//!
//! let mut creds = DbCredentials {
//!     host: "db.internal".into(),
//!     password: SecretString::from("hunter2"),
//!     replicas: Secret::new(vec!["r1".into(), "r2".into()]),
//! };
//!
//! // Logs only ever see the marker.
//! assert_eq!(format!("{}", creds.password), "<!SECRET_LEAKED!>");
//! assert_eq!(
//!     format!("{:?}", creds.replicas),
//!     "<!SECRET_LEAKED!> Secret<Vec<String>>(******)"
//! );
//!
//! // Reads are explicit.
//! assert_eq!(creds.password.expose(), "hunter2");
//!
//! // Everything reachable is wiped.
//! creds.fast_zeroize();
//! assert!(creds.is_zeroized());
//! ```
//!
//! # Crates
//!
//! | Module | Crate | Contents |
//! |---|---|---|
//! | [`zero`] | `hush-zero` | clearing engine, `#[derive(HushZero)]`, drop sentinels |
//! | [`secret`] | `hush-secret` | `Secret<T>`, `SecretString`, `SerializableSecret<E>`, leak marker |
//! | [`util`] | `hush-util` | volatile and bulk wiping primitives |
//!
//! # Configuration
//!
//! The leak marker defaults to `<!SECRET_LEAKED!>`. Override it per
//! deployment with the `HUSH_LEAK_MARKER` environment variable, or in code
//! with [`secret::set_leak_marker`] before any secret is formatted.
//!
//! # License
//!
//! GPL-3.0-only

pub use hush_secret as secret;
pub use hush_util as util;
pub use hush_zero as zero;
