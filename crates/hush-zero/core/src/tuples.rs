// Copyright (c) 2025-2026 The hush developers
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Tuples up to arity 8, cleared field by field in positional order.

use core::sync::atomic::{Ordering, compiler_fence};

use crate::traits::{FastZeroizable, ZeroizationProbe, ZeroizeMetadata};

macro_rules! impl_tuple {
    ($($name:ident . $idx:tt),+) => {
        impl<$($name),+> ZeroizeMetadata for ($($name,)+) {
            const CAN_BE_BULK_ZEROIZED: bool = false;
        }

        impl<$($name: FastZeroizable),+> FastZeroizable for ($($name,)+) {
            fn fast_zeroize(&mut self) {
                $(
                    self.$idx.fast_zeroize();
                    compiler_fence(Ordering::SeqCst);
                )+
            }
        }

        impl<$($name: ZeroizationProbe),+> ZeroizationProbe for ($($name,)+) {
            fn is_zeroized(&self) -> bool {
                $(self.$idx.is_zeroized())&&+
            }
        }
    };
}

impl_tuple!(A.0);
impl_tuple!(A.0, B.1);
impl_tuple!(A.0, B.1, C.2);
impl_tuple!(A.0, B.1, C.2, D.3);
impl_tuple!(A.0, B.1, C.2, D.3, E.4);
impl_tuple!(A.0, B.1, C.2, D.3, E.4, F.5);
impl_tuple!(A.0, B.1, C.2, D.3, E.4, F.5, G.6);
impl_tuple!(A.0, B.1, C.2, D.3, E.4, F.5, G.6, H.7);
