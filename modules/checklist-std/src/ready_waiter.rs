
use std::{fmt::Debug, sync::Arc};

use checklist_core_rs::ReadyListener;
use tokio::sync::Notify;

use crate::{ObservableChecklist, ReadySubscription};

/// Future-friendly view of an [`ObservableChecklist`]'s readiness.
///
/// The waiter subscribes as soon as it is created, so a transition that happens between
/// construction and [`wait`](ReadyWaiter::wait) is not lost. A waiter created on a checklist that
/// is already ready resolves immediately.
pub struct ReadyWaiter {
  notify:        Arc<Notify>,
  _subscription: ReadySubscription,
}

impl ReadyWaiter {
  /// Subscribes to `checklist`.
  #[must_use]
  pub fn new<K>(checklist: &ObservableChecklist<K>) -> Self
  where
    K: PartialEq + Debug, {
    let notify = Arc::new(Notify::new());
    let signal = notify.clone();
    let subscription = checklist.subscribe(ReadyListener::new(move || signal.notify_one()));
    Self { notify, _subscription: subscription }
  }

  /// Resolves once the checklist has been ready since this waiter was created, then
  /// unsubscribes.
  pub async fn wait(self) {
    self.notify.notified().await;
  }
}

impl Debug for ReadyWaiter {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("ReadyWaiter").finish()
  }
}
