//! Zero-initialized integer storage.

use core::sync::atomic::{AtomicI32, Ordering};

/// A signed 32-bit integer with static storage duration.
///
/// `StaticInt::zeroed()` is a `const fn` whose result is the all-zero bit
/// pattern, so a `static` declared with it is emitted into `.bss` rather than
/// `.data`. Interior mutability comes from an atomic, which is what makes the
/// type usable as a plain (non-`mut`) `static`.
#[derive(Debug)]
#[repr(transparent)]
pub struct StaticInt(AtomicI32);

impl StaticInt {
    /// Storage that reads as zero until first assigned.
    pub const fn zeroed() -> Self {
        Self(AtomicI32::new(0))
    }

    pub fn get(&self) -> i32 {
        self.0.load(Ordering::Relaxed)
    }

    pub fn set(&self, value: i32) {
        self.0.store(value, Ordering::Relaxed);
    }

    /// True while the cell still holds its initial value.
    pub fn is_zero(&self) -> bool {
        self.get() == 0
    }
}

impl Default for StaticInt {
    fn default() -> Self {
        Self::zeroed()
    }
}
