use super::SyncMutexLike;

/// Type-level family of mutexes.
///
/// A checklist guards more than one piece of state (its check marks and, for the observable
/// variant, the listener registry). The family lets a single type parameter pick the lock
/// implementation for all of them.
pub trait SyncMutexFamily: 'static {
  /// Mutex guarding a value of type `T`.
  type Mutex<T>: SyncMutexLike<T>;
}

/// Family backed by [`spin::Mutex`], usable without the standard library.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SpinMutexFamily;

impl SyncMutexFamily for SpinMutexFamily {
  type Mutex<T> = spin::Mutex<T>;
}
