use alloc::sync::Arc;

use super::{listener_registry::ListenerRegistry, ReadyListener};
use crate::sync::{SpinMutexFamily, SyncMutexFamily};

/// Registration handle returned by
/// [`ObservableChecklist::subscribe`](super::ObservableChecklist::subscribe).
///
/// Unregisters the listener when dropped, unless the listener was already registered before the
/// subscription was taken; a redundant subscription never removes a registration it did not make.
/// A fan-out that already took its snapshot may still deliver one last notification.
#[must_use = "dropping the subscription unregisters the listener"]
pub struct ReadySubscription<M = SpinMutexFamily>
where
  M: SyncMutexFamily, {
  pub(super) registry: Arc<ListenerRegistry<M>>,
  pub(super) listener: ReadyListener,
  pub(super) owned:    bool,
}

impl<M> ReadySubscription<M>
where
  M: SyncMutexFamily,
{
  /// The subscribed listener.
  #[must_use]
  pub fn listener(&self) -> &ReadyListener {
    &self.listener
  }
}

impl<M> Drop for ReadySubscription<M>
where
  M: SyncMutexFamily,
{
  fn drop(&mut self) {
    if self.owned {
      self.registry.remove(&self.listener);
    }
  }
}
