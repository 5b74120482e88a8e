#[cfg(test)]
mod tests;

use std::sync::{Mutex, MutexGuard};

use checklist_core_rs::SyncMutexLike;

/// `std::sync::Mutex` that shrugs off poisoning.
///
/// A custom [`ReadyHook::prepare`](checklist_core_rs::ReadyHook::prepare) panicking inside the
/// critical section poisons the lock, but the marks it guards were already fully updated; the
/// checklist keeps working instead of propagating the poison to every later caller.
#[derive(Debug, Default)]
pub struct StdSyncMutex<T>(Mutex<T>);

impl<T> SyncMutexLike<T> for StdSyncMutex<T> {
  type Guard<'a>
    = MutexGuard<'a, T>
  where
    T: 'a;

  fn new(value: T) -> Self {
    Self(Mutex::new(value))
  }

  fn lock(&self) -> Self::Guard<'_> {
    self.0.lock().unwrap_or_else(|err| err.into_inner())
  }
}
