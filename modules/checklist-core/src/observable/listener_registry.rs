use alloc::{sync::Arc, vec::Vec};

use super::ReadyListener;
use crate::{
  checklist::ReadyHook,
  sync::{SyncMutexFamily, SyncMutexLike},
};

/// Registered listeners of one observable checklist, with set semantics.
pub(crate) struct ListenerRegistry<M>
where
  M: SyncMutexFamily, {
  listeners: M::Mutex<Vec<ReadyListener>>,
}

impl<M> ListenerRegistry<M>
where
  M: SyncMutexFamily,
{
  pub(crate) fn new() -> Self {
    Self { listeners: <M::Mutex<Vec<ReadyListener>> as SyncMutexLike<Vec<ReadyListener>>>::new(Vec::new()) }
  }

  /// Adds `listener` unless it is already present. Returns `true` when it was added.
  pub(crate) fn insert(&self, listener: &ReadyListener) -> bool {
    let mut guard = self.listeners.lock();
    if guard.iter().any(|entry| entry.same_listener(listener)) {
      return false;
    }
    guard.push(listener.clone());
    true
  }

  /// Removes `listener`. Returns `true` when it was present.
  pub(crate) fn remove(&self, listener: &ReadyListener) -> bool {
    let mut guard = self.listeners.lock();
    match guard.iter().position(|entry| entry.same_listener(listener)) {
      | Some(index) => {
        guard.swap_remove(index);
        true
      },
      | None => false,
    }
  }

  pub(crate) fn len(&self) -> usize {
    self.listeners.lock().len()
  }

  pub(crate) fn snapshot(&self) -> Vec<ReadyListener> {
    self.listeners.lock().clone()
  }
}

/// Completion hook of an observable checklist: snapshot the registry under the checks lock, then
/// notify every listener in the snapshot.
pub(crate) struct ListenerFanOut<M>
where
  M: SyncMutexFamily, {
  registry: Arc<ListenerRegistry<M>>,
}

impl<M> ListenerFanOut<M>
where
  M: SyncMutexFamily,
{
  pub(crate) const fn new(registry: Arc<ListenerRegistry<M>>) -> Self {
    Self { registry }
  }
}

impl<M> ReadyHook for ListenerFanOut<M>
where
  M: SyncMutexFamily,
{
  type Notice = Vec<ReadyListener>;

  fn prepare(&self) -> Self::Notice {
    self.registry.snapshot()
  }

  fn deliver(&self, notice: Self::Notice) {
    for listener in notice {
      listener.notify();
    }
  }
}
