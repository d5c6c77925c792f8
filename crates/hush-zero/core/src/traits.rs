// Copyright (c) 2025-2026 The hush developers
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Core traits of the clearing engine.

use super::zeroize_on_drop_sentinel::ZeroizeOnDropSentinel;

/// Trait for checking whether a value is already in its zero form.
///
/// The engine uses this to short-circuit repeated clears, and tests use it to
/// verify that no sensitive data remains reachable.
///
/// # Example
///
/// ```rust
/// use hush_zero_core::{FastZeroizable, ZeroizationProbe};
///
/// let mut session = vec![7u8; 16];
/// assert!(!session.is_zeroized());
///
/// session.fast_zeroize();
/// assert!(session.is_zeroized());
/// assert!(session.is_empty());
/// ```
pub trait ZeroizationProbe {
    /// Returns `true` if every reachable cell is zero and every variable-length
    /// container is empty.
    fn is_zeroized(&self) -> bool;
}

/// Trait for types that verify zeroization happened before drop.
///
/// Types implementing this trait contain a [`ZeroizeOnDropSentinel`]. It is
/// typically derived with `#[derive(HushZero)]`.
pub trait AssertZeroizeOnDrop {
    /// Clones the internal [`ZeroizeOnDropSentinel`] for verification.
    fn clone_sentinel(&self) -> ZeroizeOnDropSentinel;

    /// Asserts that zeroization happens when this value is dropped.
    ///
    /// # Panics
    ///
    /// Panics if the value was dropped without being zeroized.
    fn assert_zeroize_on_drop(self);
}

/// Metadata about the zeroization strategy of a type.
///
/// **Note:** not dyn-compatible (associated constant). Use [`FastZeroizable`]
/// for trait objects.
pub trait ZeroizeMetadata {
    /// Whether a slice of this type may be cleared with a single memset.
    ///
    /// Setting this to `true` is a promise that the all-zero bit pattern is a
    /// valid value of the type and that the type owns no memory elsewhere.
    const CAN_BE_BULK_ZEROIZED: bool;
}

/// Clears a value and everything it exclusively owns, in place.
///
/// Dyn-compatible, so heterogeneous fields can be walked as
/// `&mut dyn FastZeroizable`.
///
/// After `fast_zeroize` returns:
/// - every scalar cell holds its zero value,
/// - variable-length containers are empty and their old buffers were wiped
///   before being released,
/// - nullable indirections (`Option`) are `None` and their targets were
///   cleared first.
///
/// # Panics
///
/// Implementations panic (see [`fatal`](crate::fatal)) when part of the graph
/// cannot be cleared at all. There is no partial mode.
pub trait FastZeroizable {
    /// Zeroizes the value in place.
    fn fast_zeroize(&mut self);
}

/// Combined trait for types with both zeroization metadata and runtime zeroization.
///
/// Most types get it through `#[derive(HushZero)]`; a manual implementation
/// looks like:
///
/// ```rust
/// use hush_zero_core::{FastZeroizable, ZeroizeMetadata};
///
/// struct ApiKey {
///     secret: Vec<u8>,
/// }
///
/// impl ZeroizeMetadata for ApiKey {
///     const CAN_BE_BULK_ZEROIZED: bool = false;
/// }
///
/// impl FastZeroizable for ApiKey {
///     fn fast_zeroize(&mut self) {
///         self.secret.fast_zeroize();
///     }
/// }
/// ```
pub trait FastZeroize: ZeroizeMetadata + FastZeroizable {}

impl<T: ZeroizeMetadata + FastZeroizable> FastZeroize for T {}

/// Self-clearing capability for records holding state the engine cannot walk.
///
/// A record whose fields include foreign types without a [`FastZeroizable`]
/// implementation marks those fields `#[fast_zeroize(opaque)]` and declares
/// `#[fast_zeroize(self_zeroize)]`. The derived `fast_zeroize` then calls
/// [`self_zeroize`](SelfZeroize::self_zeroize) before walking the visible
/// fields. A record with opaque fields and no such declaration does not
/// compile.
///
/// The derived `is_zeroized` also requires
/// [`is_self_zeroized`](SelfZeroize::is_self_zeroized), so [`zeroize`](crate::zeroize)
/// never short-circuits past opaque state that still holds data.
///
/// # Example
///
/// ```rust
/// use hush_zero_core::{FastZeroizable, SelfZeroize};
///
/// // Foreign handle with its own wipe routine.
/// struct Hsm {
///     slot: [u8; 8],
/// }
///
/// impl Hsm {
///     fn wipe(&mut self) {
///         self.slot = [0; 8];
///     }
///
///     fn is_wiped(&self) -> bool {
///         self.slot == [0; 8]
///     }
/// }
///
/// struct Session {
///     hsm: Hsm,
///     nonce: u64,
/// }
///
/// impl SelfZeroize for Session {
///     fn self_zeroize(&mut self) {
///         self.hsm.wipe();
///     }
///
///     fn is_self_zeroized(&self) -> bool {
///         self.hsm.is_wiped()
///     }
/// }
///
/// let mut session = Session { hsm: Hsm { slot: [9; 8] }, nonce: 3 };
/// assert!(!session.is_self_zeroized());
///
/// session.self_zeroize();
/// session.nonce.fast_zeroize();
/// assert!(session.is_self_zeroized());
/// assert_eq!(session.hsm.slot, [0; 8]);
/// ```
pub trait SelfZeroize {
    /// Clears the state the engine cannot see.
    fn self_zeroize(&mut self);

    /// Returns `true` once the state the engine cannot see is in zero form.
    fn is_self_zeroized(&self) -> bool;
}

/// Clearing through a shared handle.
///
/// Implemented by interior-mutable cells (`RefCell`, `Mutex`, `RwLock`, ...).
/// It lets `Rc<T>` and `Arc<T>` be cleared while other handles exist: every
/// holder of the shared memory observes the zeroed value afterwards.
pub trait SharedZeroizable {
    /// Zeroizes the guarded value through `&self`.
    ///
    /// # Panics
    ///
    /// Panics if the cell is already borrowed or locked, which also catches
    /// reference cycles that lead back into a cell being cleared.
    fn fast_zeroize_shared(&self);
}
