// Copyright (c) 2025-2026 The hush developers
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Generic secret container.

use core::fmt;
use core::mem;

use hush_zero::{FastZeroizable, HushZero, ZeroizationProbe, ZeroizeOnDropSentinel};

use crate::redact::{short_type_name, write_debug, write_marker};
use crate::traits::ExposeSecret;

/// Owns a sensitive value, redacts it from every implicit output path and
/// clears it when dropped.
///
/// - `Display` prints the leak marker; `Debug` prints
///   `<marker> Secret<T>(******)`.
/// - Serializing a `Secret` emits the leak marker; deserializing decodes a
///   plain `T` into the container (`serde` feature).
/// - Dropping clears the value through the engine unless
///   [`disable_zeroize_on_drop`](Secret::disable_zeroize_on_drop) was called.
///   Drop runs at scope exit, so the timing is deterministic.
///
/// There is no `Clone`, `Deref` or `PartialEq`: every read goes through
/// [`expose`](Secret::expose).
///
/// ```rust
/// use hush_secret::Secret;
///
/// let password = Secret::new(String::from("mysecret"));
///
/// assert_eq!(format!("{password}"), "<!SECRET_LEAKED!>");
/// assert_eq!(
///     format!("{password:?}"),
///     "<!SECRET_LEAKED!> Secret<String>(******)"
/// );
/// assert_eq!(password.expose(), "mysecret");
/// ```
///
/// Exposed borrows must not be held across the container's drop, and the
/// container must not be dropped on one thread while another reads it; the
/// borrow checker enforces both for safe code.
#[derive(HushZero)]
pub struct Secret<T>
where
    T: FastZeroizable + ZeroizationProbe,
{
    inner: T,
    #[fast_zeroize(skip)]
    zeroize_on_drop: bool,
    __sentinel: ZeroizeOnDropSentinel,
}

impl<T> Secret<T>
where
    T: FastZeroizable + ZeroizationProbe,
{
    /// Takes ownership of `value`.
    pub fn new(value: T) -> Self {
        Self {
            inner: value,
            zeroize_on_drop: true,
            __sentinel: ZeroizeOnDropSentinel::default(),
        }
    }

    /// Moves the value out of the caller's slot and clears the slot, so the
    /// caller keeps no copy.
    ///
    /// ```rust
    /// use hush_secret::Secret;
    ///
    /// let mut pin = 4821u32;
    /// let secret = Secret::from_mut(&mut pin);
    ///
    /// assert_eq!(pin, 0);
    /// assert_eq!(*secret.expose(), 4821);
    /// ```
    pub fn from_mut(value: &mut T) -> Self
    where
        T: Default,
    {
        let mut secret = Self::new(T::default());
        secret.replace(value);
        secret
    }

    /// Clears the current value, moves `value` in and clears the caller's slot.
    pub fn replace(&mut self, value: &mut T) {
        self.inner.fast_zeroize();
        mem::swap(&mut self.inner, value);
        value.fast_zeroize();
    }

    /// Borrows the real value.
    #[inline]
    pub fn expose(&self) -> &T {
        &self.inner
    }

    /// Mutably borrows the real value.
    #[inline]
    pub fn expose_mut(&mut self) -> &mut T {
        &mut self.inner
    }

    /// Returns a copy of the real value.
    ///
    /// The copy lives outside the container: nothing clears it.
    pub fn expose_owned(&self) -> T
    where
        T: Clone,
    {
        self.inner.clone()
    }

    /// Clears the value now, whatever the end-of-life setting.
    ///
    /// Use it for a deterministic "clear at this point" when the container
    /// itself lives on.
    pub fn zeroize_now(&mut self) {
        self.fast_zeroize();
    }

    /// Stops the container from clearing its value when dropped.
    pub fn disable_zeroize_on_drop(&mut self) {
        log::debug!(
            "end-of-life zeroization disabled for Secret<{}>",
            short_type_name::<T>()
        );
        self.zeroize_on_drop = false;
    }

    /// Restores clearing on drop (the default).
    pub fn enable_zeroize_on_drop(&mut self) {
        self.zeroize_on_drop = true;
    }

    /// Whether dropping the container clears its value.
    pub fn is_zeroize_on_drop_enabled(&self) -> bool {
        self.zeroize_on_drop
    }
}

impl<T> Drop for Secret<T>
where
    T: FastZeroizable + ZeroizationProbe,
{
    fn drop(&mut self) {
        if self.zeroize_on_drop {
            self.fast_zeroize();
        } else {
            log::trace!(
                "dropping Secret<{}> without zeroization (disabled)",
                short_type_name::<T>()
            );
        }
    }
}

impl<T> Default for Secret<T>
where
    T: FastZeroizable + ZeroizationProbe + Default,
{
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T> From<T> for Secret<T>
where
    T: FastZeroizable + ZeroizationProbe,
{
    fn from(value: T) -> Self {
        Self::new(value)
    }
}

impl<T> ExposeSecret for Secret<T>
where
    T: FastZeroizable + ZeroizationProbe,
{
    type Exposed = T;

    fn expose_secret(&self) -> &T {
        &self.inner
    }
}

impl<T> fmt::Display for Secret<T>
where
    T: FastZeroizable + ZeroizationProbe,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_marker(f)
    }
}

impl<T> fmt::Debug for Secret<T>
where
    T: FastZeroizable + ZeroizationProbe,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_debug(f, format_args!("Secret<{}>", short_type_name::<T>()))
    }
}

