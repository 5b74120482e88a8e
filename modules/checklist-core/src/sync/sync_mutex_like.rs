use core::ops::DerefMut;

/// Blocking lock guarding one piece of checklist state.
///
/// Implementations must hand out exclusive access for the lifetime of the guard; every read and
/// write of check marks and listener registries goes through it.
pub trait SyncMutexLike<T> {
  /// Exclusive access to the guarded value, released on drop.
  type Guard<'a>: DerefMut<Target = T>
  where
    Self: 'a,
    T: 'a;

  /// Wraps `value` in a fresh, unlocked mutex.
  fn new(value: T) -> Self;

  /// Blocks until the lock is acquired.
  fn lock(&self) -> Self::Guard<'_>;
}

impl<T> SyncMutexLike<T> for spin::Mutex<T> {
  type Guard<'a>
    = spin::MutexGuard<'a, T>
  where
    T: 'a;

  fn new(value: T) -> Self {
    spin::Mutex::new(value)
  }

  fn lock(&self) -> Self::Guard<'_> {
    spin::Mutex::lock(self)
  }
}
