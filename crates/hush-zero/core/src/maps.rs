// Copyright (c) 2025-2026 The hush developers
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Mappings and sets.
//!
//! Values are cleared where they sit, then every entry is drained so owned
//! keys can be cleared too. The container ends empty and releases its
//! storage.
//!
//! Keys are immutable while stored, so clearing a key happens after it was
//! moved out of the container. Memory the key owns (a `String` buffer, a
//! `Vec`) is wiped; the inline bytes of the key left behind in the freed
//! bucket or node are not.

use alloc::collections::{BTreeMap, BTreeSet};
use core::mem;
use core::sync::atomic::{Ordering, compiler_fence};

use crate::traits::{FastZeroizable, ZeroizationProbe, ZeroizeMetadata};

impl<K, V> ZeroizeMetadata for BTreeMap<K, V> {
    const CAN_BE_BULK_ZEROIZED: bool = false;
}

impl<K: FastZeroizable, V: FastZeroizable> FastZeroizable for BTreeMap<K, V> {
    fn fast_zeroize(&mut self) {
        for value in self.values_mut() {
            value.fast_zeroize();
            compiler_fence(Ordering::SeqCst);
        }

        for (mut key, mut value) in mem::take(self) {
            key.fast_zeroize();
            value.fast_zeroize();
        }
        compiler_fence(Ordering::SeqCst);
    }
}

impl<K, V> ZeroizationProbe for BTreeMap<K, V> {
    fn is_zeroized(&self) -> bool {
        self.is_empty()
    }
}

impl<T> ZeroizeMetadata for BTreeSet<T> {
    const CAN_BE_BULK_ZEROIZED: bool = false;
}

impl<T: FastZeroizable> FastZeroizable for BTreeSet<T> {
    fn fast_zeroize(&mut self) {
        for mut item in mem::take(self) {
            item.fast_zeroize();
        }
        compiler_fence(Ordering::SeqCst);
    }
}

impl<T> ZeroizationProbe for BTreeSet<T> {
    fn is_zeroized(&self) -> bool {
        self.is_empty()
    }
}

#[cfg(feature = "std")]
mod hashed {
    use core::hash::BuildHasher;
    use core::mem;
    use core::sync::atomic::{Ordering, compiler_fence};
    use std::collections::{HashMap, HashSet};

    use crate::traits::{FastZeroizable, ZeroizationProbe, ZeroizeMetadata};

    impl<K, V, S> ZeroizeMetadata for HashMap<K, V, S> {
        const CAN_BE_BULK_ZEROIZED: bool = false;
    }

    impl<K, V, S> FastZeroizable for HashMap<K, V, S>
    where
        K: FastZeroizable,
        V: FastZeroizable,
        S: BuildHasher + Default,
    {
        fn fast_zeroize(&mut self) {
            for value in self.values_mut() {
                value.fast_zeroize();
                compiler_fence(Ordering::SeqCst);
            }

            for (mut key, mut value) in mem::take(self) {
                key.fast_zeroize();
                value.fast_zeroize();
            }
            compiler_fence(Ordering::SeqCst);
        }
    }

    impl<K, V, S> ZeroizationProbe for HashMap<K, V, S> {
        fn is_zeroized(&self) -> bool {
            self.is_empty() && self.capacity() == 0
        }
    }

    impl<T, S> ZeroizeMetadata for HashSet<T, S> {
        const CAN_BE_BULK_ZEROIZED: bool = false;
    }

    impl<T, S> FastZeroizable for HashSet<T, S>
    where
        T: FastZeroizable,
        S: BuildHasher + Default,
    {
        fn fast_zeroize(&mut self) {
            for mut item in mem::take(self) {
                item.fast_zeroize();
            }
            compiler_fence(Ordering::SeqCst);
        }
    }

    impl<T, S> ZeroizationProbe for HashSet<T, S> {
        fn is_zeroized(&self) -> bool {
            self.is_empty() && self.capacity() == 0
        }
    }
}
