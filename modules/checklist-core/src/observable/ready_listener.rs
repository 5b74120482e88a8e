use alloc::sync::Arc;

type ReadyListenerFn = dyn Fn() + Send + Sync;

/// Shared callback notified when an [`ObservableChecklist`](super::ObservableChecklist) becomes
/// ready.
///
/// Identity is the identity of the shared closure: clones of a listener are the same listener,
/// while two listeners built from equal closures are distinct.
#[derive(Clone)]
pub struct ReadyListener {
  inner: Arc<ReadyListenerFn>,
}

impl ReadyListener {
  /// Wraps a closure as a listener.
  #[must_use]
  pub fn new<F>(listener: F) -> Self
  where
    F: Fn() + Send + Sync + 'static, {
    Self { inner: Arc::new(listener) }
  }

  /// Invokes the callback on the current thread.
  pub fn notify(&self) {
    (self.inner)()
  }

  /// Returns `true` when both handles refer to the same listener.
  #[must_use]
  pub fn same_listener(&self, other: &Self) -> bool {
    core::ptr::addr_eq(Arc::as_ptr(&self.inner), Arc::as_ptr(&other.inner))
  }
}

impl core::fmt::Debug for ReadyListener {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    f.debug_struct("ReadyListener").field("id", &Arc::as_ptr(&self.inner).cast::<()>()).finish()
  }
}
