// Copyright (c) 2025-2026 The hush developers
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Text secrets stored as a clearable byte buffer.

use core::fmt;
use core::str;

use hush_zero::assert::assert_zeroize_on_drop;
use hush_zero::{AssertZeroizeOnDrop, FastZeroizable, HushZero, ZeroizeOnDropSentinel};

use crate::error::SecretError;
use crate::redact::{write_debug, write_marker};
use crate::secret::Secret;
use crate::traits::ExposeSecret;

/// Secret text.
///
/// The text lives in a `Secret<Vec<u8>>` that always holds valid UTF-8. Reads
/// go through [`expose`](SecretString::expose), a zero-copy `&str` view of
/// that buffer; clearing wipes the buffer itself.
///
/// ```rust
/// use hush_secret::SecretString;
///
/// let mut password = SecretString::from("mysecret");
/// assert_eq!(password.to_string(), "<!SECRET_LEAKED!>");
/// assert_eq!(password.expose(), "mysecret");
///
/// password.zeroize_now();
/// assert!(password.expose_bytes().is_empty());
/// ```
#[derive(HushZero)]
pub struct SecretString {
    bytes: Secret<Vec<u8>>,
}

impl SecretString {
    /// Wraps UTF-8 bytes without copying them.
    ///
    /// On failure the rejected buffer is cleared before the error is returned.
    pub fn from_utf8(bytes: Vec<u8>) -> Result<Self, SecretError> {
        match String::from_utf8(bytes) {
            Ok(text) => Ok(Self::from(text)),
            Err(err) => {
                let valid_up_to = err.utf8_error().valid_up_to();
                let mut rejected = err.into_bytes();
                rejected.fast_zeroize();

                log::debug!("rejected non UTF-8 secret text (valid up to byte {valid_up_to})");
                Err(SecretError::InvalidUtf8 { valid_up_to })
            }
        }
    }

    /// Zero-copy view of the text.
    pub fn expose(&self) -> &str {
        // SAFETY: `bytes` only ever holds valid UTF-8: it is built from a
        // `String` or a validated buffer, no mutable access is handed out, and
        // clearing leaves it empty.
        unsafe { str::from_utf8_unchecked(self.bytes.expose()) }
    }

    /// The underlying bytes.
    pub fn expose_bytes(&self) -> &[u8] {
        self.bytes.expose()
    }

    /// Copy of the text; nothing clears it.
    pub fn expose_owned(&self) -> String {
        self.expose().to_owned()
    }

    /// Length in bytes.
    pub fn len(&self) -> usize {
        self.bytes.expose().len()
    }

    /// Whether the text is empty.
    pub fn is_empty(&self) -> bool {
        self.bytes.expose().is_empty()
    }

    /// Clears the text now.
    pub fn zeroize_now(&mut self) {
        self.bytes.zeroize_now();
    }

    /// See [`Secret::disable_zeroize_on_drop`].
    pub fn disable_zeroize_on_drop(&mut self) {
        self.bytes.disable_zeroize_on_drop();
    }

    /// See [`Secret::enable_zeroize_on_drop`].
    pub fn enable_zeroize_on_drop(&mut self) {
        self.bytes.enable_zeroize_on_drop();
    }

    /// See [`Secret::is_zeroize_on_drop_enabled`].
    pub fn is_zeroize_on_drop_enabled(&self) -> bool {
        self.bytes.is_zeroize_on_drop_enabled()
    }
}

impl From<String> for SecretString {
    /// Takes over the string's allocation; no copy is made.
    fn from(text: String) -> Self {
        Self {
            bytes: Secret::new(text.into_bytes()),
        }
    }
}

impl From<&str> for SecretString {
    /// Copies the text into a buffer owned by the secret. The borrowed source
    /// is not cleared.
    fn from(text: &str) -> Self {
        Self::from(text.to_owned())
    }
}

impl Default for SecretString {
    fn default() -> Self {
        Self::from(String::new())
    }
}

impl ExposeSecret for SecretString {
    type Exposed = str;

    fn expose_secret(&self) -> &str {
        self.expose()
    }
}

impl AssertZeroizeOnDrop for SecretString {
    fn clone_sentinel(&self) -> ZeroizeOnDropSentinel {
        self.bytes.clone_sentinel()
    }

    fn assert_zeroize_on_drop(self) {
        assert_zeroize_on_drop(self);
    }
}

impl fmt::Display for SecretString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_marker(f)
    }
}

impl fmt::Debug for SecretString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_debug(f, format_args!("SecretString"))
    }
}
