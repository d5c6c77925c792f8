// Copyright (c) 2025-2026 The hush developers
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Runtime clearing failures.

/// A part of the value graph could not be cleared.
///
/// Never returned to callers of the engine: a clear either completes or
/// panics through [`fatal`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ZeroizeError {
    /// A `RefCell` on the path was already borrowed. Either a borrow is still
    /// alive elsewhere or the graph loops back into a cell being cleared.
    #[error("cannot clear `{type_name}`: cell is already borrowed (outstanding borrow or reference cycle)")]
    AlreadyBorrowed {
        /// Type guarded by the cell.
        type_name: &'static str,
    },

    /// A `Mutex` or `RwLock` on the path could not be acquired without blocking.
    #[error("cannot clear `{type_name}`: lock is held (outstanding guard or reference cycle)")]
    Locked {
        /// Type guarded by the lock.
        type_name: &'static str,
    },
}

impl ZeroizeError {
    /// Builds [`ZeroizeError::AlreadyBorrowed`] for a cell guarding `T`.
    pub fn already_borrowed<T: ?Sized>() -> Self {
        Self::AlreadyBorrowed {
            type_name: core::any::type_name::<T>(),
        }
    }

    /// Builds [`ZeroizeError::Locked`] for a lock guarding `T`.
    pub fn locked<T: ?Sized>() -> Self {
        Self::Locked {
            type_name: core::any::type_name::<T>(),
        }
    }
}

/// Aborts the current clear. There is no partial mode.
#[cold]
#[inline(never)]
#[track_caller]
pub fn fatal(err: ZeroizeError) -> ! {
    panic!("hush: zeroization failed: {err}")
}
