//! Lock shim shared by the `std` and `alloc` builds.
//!
//! Engine state sits behind this `Mutex` so a [`Game`](crate::Game) can be
//! shared by reference. A poisoned lock is recovered rather than propagated:
//! every critical section leaves the guarded value consistent.

#[cfg(feature = "std")]
#[derive(Debug, Default)]
pub struct Mutex<T>(std::sync::Mutex<T>);

#[cfg(feature = "std")]
impl<T> Mutex<T> {
    pub const fn new(value: T) -> Self {
        Self(std::sync::Mutex::new(value))
    }

    pub fn lock(&self) -> std::sync::MutexGuard<'_, T> {
        self.0
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}

#[cfg(all(not(feature = "std"), feature = "alloc"))]
pub use spin::Mutex;
