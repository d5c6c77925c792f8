// Copyright (c) 2025-2026 The hush developers
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Indirections: `Box`, `Option`, shared handles and interior-mutable cells.

use alloc::boxed::Box;
use alloc::rc::Rc;
use alloc::sync::Arc;
use core::cell::{Cell, RefCell};
use core::sync::atomic::{Ordering, compiler_fence};

use crate::error::{ZeroizeError, fatal};
use crate::traits::{FastZeroizable, SharedZeroizable, ZeroizationProbe, ZeroizeMetadata};

// Box<T>

impl<T: ?Sized> ZeroizeMetadata for Box<T> {
    const CAN_BE_BULK_ZEROIZED: bool = false;
}

impl<T: FastZeroizable + ?Sized> FastZeroizable for Box<T> {
    #[inline(always)]
    fn fast_zeroize(&mut self) {
        (**self).fast_zeroize();
    }
}

impl<T: ZeroizationProbe + ?Sized> ZeroizationProbe for Box<T> {
    #[inline(always)]
    fn is_zeroized(&self) -> bool {
        (**self).is_zeroized()
    }
}

// Option<T>

impl<T> ZeroizeMetadata for Option<T> {
    const CAN_BE_BULK_ZEROIZED: bool = false;
}

impl<T: FastZeroizable> FastZeroizable for Option<T> {
    /// Clears the target first, then nulls the option.
    fn fast_zeroize(&mut self) {
        if let Some(inner) = self.as_mut() {
            inner.fast_zeroize();
            compiler_fence(Ordering::SeqCst);
        }

        drop(self.take());
    }
}

impl<T> ZeroizationProbe for Option<T> {
    #[inline(always)]
    fn is_zeroized(&self) -> bool {
        self.is_none()
    }
}

// Rc<T> / Arc<T>

impl<T: ?Sized> ZeroizeMetadata for Rc<T> {
    const CAN_BE_BULK_ZEROIZED: bool = false;
}

impl<T: SharedZeroizable + ?Sized> FastZeroizable for Rc<T> {
    /// Clears the shared value in place. Every other handle observes the
    /// zeroed value; the handle itself stays valid.
    fn fast_zeroize(&mut self) {
        (**self).fast_zeroize_shared();
    }
}

impl<T: ZeroizationProbe + ?Sized> ZeroizationProbe for Rc<T> {
    fn is_zeroized(&self) -> bool {
        (**self).is_zeroized()
    }
}

impl<T: ?Sized> ZeroizeMetadata for Arc<T> {
    const CAN_BE_BULK_ZEROIZED: bool = false;
}

impl<T: SharedZeroizable + ?Sized> FastZeroizable for Arc<T> {
    fn fast_zeroize(&mut self) {
        (**self).fast_zeroize_shared();
    }
}

impl<T: ZeroizationProbe + ?Sized> ZeroizationProbe for Arc<T> {
    fn is_zeroized(&self) -> bool {
        (**self).is_zeroized()
    }
}

// Cell<T>

impl<T> ZeroizeMetadata for Cell<T> {
    const CAN_BE_BULK_ZEROIZED: bool = false;
}

impl<T: FastZeroizable> FastZeroizable for Cell<T> {
    fn fast_zeroize(&mut self) {
        self.get_mut().fast_zeroize();
    }
}

impl<T: FastZeroizable + Copy> SharedZeroizable for Cell<T> {
    fn fast_zeroize_shared(&self) {
        let mut value = self.get();
        value.fast_zeroize();
        self.set(value);
        compiler_fence(Ordering::SeqCst);
    }
}

impl<T: ZeroizationProbe + Copy> ZeroizationProbe for Cell<T> {
    fn is_zeroized(&self) -> bool {
        self.get().is_zeroized()
    }
}

// RefCell<T>

impl<T: ?Sized> ZeroizeMetadata for RefCell<T> {
    const CAN_BE_BULK_ZEROIZED: bool = false;
}

impl<T: FastZeroizable + ?Sized> FastZeroizable for RefCell<T> {
    fn fast_zeroize(&mut self) {
        self.get_mut().fast_zeroize();
    }
}

impl<T: FastZeroizable + ?Sized> SharedZeroizable for RefCell<T> {
    #[track_caller]
    fn fast_zeroize_shared(&self) {
        match self.try_borrow_mut() {
            Ok(mut guard) => guard.fast_zeroize(),
            Err(_) => fatal(ZeroizeError::already_borrowed::<T>()),
        }
    }
}

impl<T: ZeroizationProbe + ?Sized> ZeroizationProbe for RefCell<T> {
    /// A cell that is mutably borrowed cannot be inspected and reports `false`.
    fn is_zeroized(&self) -> bool {
        self.try_borrow()
            .map(|value| value.is_zeroized())
            .unwrap_or(false)
    }
}

#[cfg(feature = "std")]
mod locks {
    use std::sync::{Mutex, PoisonError, RwLock, TryLockError};

    use crate::error::{ZeroizeError, fatal};
    use crate::traits::{FastZeroizable, SharedZeroizable, ZeroizationProbe, ZeroizeMetadata};

    // A poisoned lock still guards the secret; it is cleared like any other.

    impl<T: ?Sized> ZeroizeMetadata for Mutex<T> {
        const CAN_BE_BULK_ZEROIZED: bool = false;
    }

    impl<T: FastZeroizable + ?Sized> FastZeroizable for Mutex<T> {
        fn fast_zeroize(&mut self) {
            self.get_mut()
                .unwrap_or_else(PoisonError::into_inner)
                .fast_zeroize();
        }
    }

    impl<T: FastZeroizable + ?Sized> SharedZeroizable for Mutex<T> {
        #[track_caller]
        fn fast_zeroize_shared(&self) {
            match self.try_lock() {
                Ok(mut guard) => guard.fast_zeroize(),
                Err(TryLockError::Poisoned(poisoned)) => poisoned.into_inner().fast_zeroize(),
                Err(TryLockError::WouldBlock) => fatal(ZeroizeError::locked::<T>()),
            }
        }
    }

    impl<T: ZeroizationProbe + ?Sized> ZeroizationProbe for Mutex<T> {
        fn is_zeroized(&self) -> bool {
            match self.try_lock() {
                Ok(guard) => guard.is_zeroized(),
                Err(TryLockError::Poisoned(poisoned)) => poisoned.into_inner().is_zeroized(),
                Err(TryLockError::WouldBlock) => false,
            }
        }
    }

    impl<T: ?Sized> ZeroizeMetadata for RwLock<T> {
        const CAN_BE_BULK_ZEROIZED: bool = false;
    }

    impl<T: FastZeroizable + ?Sized> FastZeroizable for RwLock<T> {
        fn fast_zeroize(&mut self) {
            self.get_mut()
                .unwrap_or_else(PoisonError::into_inner)
                .fast_zeroize();
        }
    }

    impl<T: FastZeroizable + ?Sized> SharedZeroizable for RwLock<T> {
        #[track_caller]
        fn fast_zeroize_shared(&self) {
            match self.try_write() {
                Ok(mut guard) => guard.fast_zeroize(),
                Err(TryLockError::Poisoned(poisoned)) => poisoned.into_inner().fast_zeroize(),
                Err(TryLockError::WouldBlock) => fatal(ZeroizeError::locked::<T>()),
            }
        }
    }

    impl<T: ZeroizationProbe + ?Sized> ZeroizationProbe for RwLock<T> {
        fn is_zeroized(&self) -> bool {
            match self.try_read() {
                Ok(guard) => guard.is_zeroized(),
                Err(TryLockError::Poisoned(poisoned)) => poisoned.into_inner().is_zeroized(),
                Err(TryLockError::WouldBlock) => false,
            }
        }
    }
}
