// Copyright (c) 2025-2026 The hush developers
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! # hush-zero
//!
//! Recursive, ownership-aware zeroization of value graphs.
//!
//! Combines the clearing engine from `hush-zero-core` with
//! `#[derive(HushZero)]` from `hush-zero-derive`.
//!
//! ```rust
//! use hush_zero::{FastZeroizable, HushZero, ZeroizationProbe, ZeroizeOnDropSentinel, zeroize};
//!
//! #[derive(HushZero)]
//! #[fast_zeroize(drop)]
//! struct DbConfig {
//!     url: String,
//!     password: Option<Box<String>>,
//!     replicas: Vec<String>,
//!     __sentinel: ZeroizeOnDropSentinel,
//! }
//!
//! let mut config = DbConfig {
//!     url: "postgres://db".into(),
//!     password: Some(Box::new("s3cr3t".into())),
//!     replicas: vec!["r1".into(), "r2".into()],
//!     __sentinel: ZeroizeOnDropSentinel::default(),
//! };
//!
//! zeroize(&mut config);
//!
//! assert!(config.is_zeroized());
//! assert!(config.password.is_none());
//! ```
//!
//! ## License
//!
//! GPL-3.0-only

#![cfg_attr(not(any(test, feature = "std")), no_std)]

#[cfg(test)]
mod tests;

pub use hush_zero_core::*;
pub use hush_zero_derive::*;
