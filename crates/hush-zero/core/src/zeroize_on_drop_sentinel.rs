// Copyright (c) 2025-2026 The hush developers
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Drop-time verification flag.

use alloc::sync::Arc;
use core::sync::atomic::{AtomicBool, Ordering};

use crate::{FastZeroizable, ZeroizeMetadata};

/// Shared flag recording whether the owning value was cleared.
///
/// Holds an `Arc<AtomicBool>` that starts "pristine". Clearing the sentinel
/// flips it, and every clone observes the flip. A test clones the sentinel,
/// drops the owner and then asks the clone whether clearing happened.
///
/// Dropping a sentinel does not mark it cleared.
///
/// ```rust
/// use hush_zero_core::{FastZeroizable, ZeroizeOnDropSentinel};
///
/// let mut sentinel = ZeroizeOnDropSentinel::default();
/// let observer = sentinel.clone();
///
/// assert!(!observer.is_zeroized());
/// sentinel.fast_zeroize();
/// assert!(observer.is_zeroized());
/// ```
#[derive(Clone, Debug)]
pub struct ZeroizeOnDropSentinel(Arc<AtomicBool>);

impl ZeroizeOnDropSentinel {
    /// Puts the sentinel (and all clones) back into the pristine state.
    pub fn reset(&mut self) {
        self.0.store(true, Ordering::SeqCst);
    }

    /// Returns `true` once the sentinel was cleared.
    pub fn is_zeroized(&self) -> bool {
        !self.0.load(Ordering::SeqCst)
    }
}

impl Default for ZeroizeOnDropSentinel {
    fn default() -> Self {
        Self(Arc::new(AtomicBool::new(true)))
    }
}

impl PartialEq for ZeroizeOnDropSentinel {
    fn eq(&self, other: &Self) -> bool {
        self.is_zeroized() == other.is_zeroized()
    }
}

impl Eq for ZeroizeOnDropSentinel {}

impl ZeroizeMetadata for ZeroizeOnDropSentinel {
    const CAN_BE_BULK_ZEROIZED: bool = false;
}

impl FastZeroizable for ZeroizeOnDropSentinel {
    fn fast_zeroize(&mut self) {
        self.0.store(false, Ordering::SeqCst);
    }
}
