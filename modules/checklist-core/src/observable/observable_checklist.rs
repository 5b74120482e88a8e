use alloc::{sync::Arc, vec::Vec};
use core::{borrow::Borrow, fmt::Debug};

use super::{
  listener_registry::{ListenerFanOut, ListenerRegistry},
  ReadyListener, ReadySubscription,
};
use crate::{
  check_set::{CheckItem, CheckSet},
  checklist::{Checklist, ChecklistConfig},
  error::ChecklistError,
  sync::{SpinMutexFamily, SyncMutexFamily},
};

/// Checklist that notifies every registered [`ReadyListener`] when it becomes ready.
///
/// Registration and the fan-out snapshot are both serialized with check-state changes, so each
/// registered listener hears about each transition exactly once: either from the transition's
/// fan-out or, when it registers after the transition, from the immediate notification at
/// registration. Callbacks run outside every lock and may register, unregister or query the
/// checklist.
///
/// A listener unregistered while a fan-out is in flight may receive that one last notification
/// if the fan-out snapshot was taken before the removal; it never receives a later one.
pub struct ObservableChecklist<K, M = SpinMutexFamily>
where
  M: SyncMutexFamily, {
  checklist: Checklist<K, ListenerFanOut<M>, M>,
  registry:  Arc<ListenerRegistry<M>>,
}

impl<K, M> Clone for ObservableChecklist<K, M>
where
  M: SyncMutexFamily,
{
  fn clone(&self) -> Self {
    Self { checklist: self.checklist.clone(), registry: self.registry.clone() }
  }
}

impl<K, M> Debug for ObservableChecklist<K, M>
where
  K: Debug,
  M: SyncMutexFamily,
{
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    f.debug_struct("ObservableChecklist")
      .field("checklist", &self.checklist)
      .field("listeners", &self.registry.len())
      .finish()
  }
}

impl<K, M> ObservableChecklist<K, M>
where
  K: PartialEq + Debug,
  M: SyncMutexFamily,
{
  /// Creates an observable checklist over `checks` with no listeners.
  ///
  /// # Errors
  ///
  /// Returns [`ChecklistError::InvalidArgument`] when `checks` is empty or contains duplicates.
  pub fn new<I>(checks: I) -> Result<Self, ChecklistError>
  where
    I: IntoIterator<Item = K>, {
    Self::new_with_config(checks, ChecklistConfig::default())
  }

  /// Creates an observable checklist over `checks` using the supplied configuration.
  ///
  /// # Errors
  ///
  /// Returns [`ChecklistError::InvalidArgument`] when `checks` is empty or contains duplicates.
  pub fn new_with_config<I>(checks: I, config: ChecklistConfig) -> Result<Self, ChecklistError>
  where
    I: IntoIterator<Item = K>, {
    Ok(Self::from_check_set(CheckSet::new(checks)?, config))
  }

  /// Creates an observable checklist over an already validated check set.
  #[must_use]
  pub fn from_check_set(check_set: CheckSet<K>, config: ChecklistConfig) -> Self {
    let registry = Arc::new(ListenerRegistry::new());
    let checklist = Checklist::from_check_set(check_set, ListenerFanOut::new(registry.clone()), config);
    Self { checklist, registry }
  }

  /// Registers `listener`.
  ///
  /// When the checklist is already ready, `listener` (and only `listener`) is notified on the
  /// calling thread before this returns. Registering a listener that is already registered is a
  /// no-op and triggers no notification. Returns `true` when the listener was added.
  pub fn register_listener(&self, listener: &ReadyListener) -> bool {
    let (added, ready) = self.checklist.with_readiness(|ready| (self.registry.insert(listener), ready));
    if added {
      tracing::debug!(checklist = self.checklist.config().label(), ready, "listener registered");
      if ready {
        listener.notify();
      }
    }
    added
  }

  /// Removes `listener`. Returns `true` when it was registered.
  pub fn unregister_listener(&self, listener: &ReadyListener) -> bool {
    let removed = self.registry.remove(listener);
    if removed {
      tracing::debug!(checklist = self.checklist.config().label(), "listener unregistered");
    }
    removed
  }

  /// Registers `listener` and returns a handle that unregisters it on drop.
  ///
  /// Follows the same immediate-notification rule as
  /// [`register_listener`](Self::register_listener). When `listener` is already registered the
  /// handle does not own that registration and dropping it leaves the listener in place.
  pub fn subscribe(&self, listener: ReadyListener) -> ReadySubscription<M> {
    let owned = self.register_listener(&listener);
    ReadySubscription { registry: self.registry.clone(), listener, owned }
  }

  /// Number of registered listeners.
  #[must_use]
  pub fn listener_count(&self) -> usize {
    self.registry.len()
  }

  /// Sets `check` and notifies every registered listener if this completes the checklist.
  ///
  /// Returns `true` when this call observed the transition to ready.
  ///
  /// # Errors
  ///
  /// Returns [`ChecklistError::UnknownCheck`] when `check` is not part of the check set.
  pub fn check<Q>(&self, check: &Q) -> Result<bool, ChecklistError>
  where
    K: Borrow<Q>,
    Q: PartialEq + Debug + ?Sized, {
    self.checklist.check(check)
  }

  /// Clears `check`. Never notifies.
  ///
  /// # Errors
  ///
  /// Returns [`ChecklistError::UnknownCheck`] when `check` is not part of the check set.
  pub fn uncheck<Q>(&self, check: &Q) -> Result<(), ChecklistError>
  where
    K: Borrow<Q>,
    Q: PartialEq + Debug + ?Sized, {
    self.checklist.uncheck(check)
  }

  /// Clears every check at once. Never notifies.
  pub fn reset(&self) {
    self.checklist.reset();
  }

  /// Notifies listeners if the checklist is ready and the current ready period has not been
  /// announced yet. Returns `true` when a notification went out.
  pub fn recheck(&self) -> bool {
    self.checklist.recheck()
  }

  /// Returns whether `check` is currently set.
  ///
  /// # Errors
  ///
  /// Returns [`ChecklistError::UnknownCheck`] when `check` is not part of the check set.
  pub fn is_checked<Q>(&self, check: &Q) -> Result<bool, ChecklistError>
  where
    K: Borrow<Q>,
    Q: PartialEq + Debug + ?Sized, {
    self.checklist.is_checked(check)
  }

  /// Returns `true` when every check is currently set.
  #[must_use]
  pub fn is_ready(&self) -> bool {
    self.checklist.is_ready()
  }

  /// Number of checks currently set.
  #[must_use]
  pub fn checked_count(&self) -> usize {
    self.checklist.checked_count()
  }

  /// Number of checks in the checklist.
  #[must_use]
  pub fn len(&self) -> usize {
    self.checklist.len()
  }

  /// Always `false`: a checklist holds at least one check.
  #[must_use]
  pub fn is_empty(&self) -> bool {
    self.checklist.is_empty()
  }

  /// The universe of checks this checklist was built over.
  #[must_use]
  pub fn check_set(&self) -> &CheckSet<K> {
    self.checklist.check_set()
  }

  /// Configuration the checklist was built with.
  #[must_use]
  pub fn config(&self) -> &ChecklistConfig {
    self.checklist.config()
  }
}

impl<K, M> ObservableChecklist<K, M>
where
  K: Clone + PartialEq + Debug,
  M: SyncMutexFamily,
{
  /// Creates an observable checklist over every variant of `K`.
  ///
  /// # Errors
  ///
  /// Returns [`ChecklistError::InvalidArgument`] when [`CheckItem::ALL`] is empty or repeats a
  /// variant.
  pub fn for_items() -> Result<Self, ChecklistError>
  where
    K: CheckItem, {
    Ok(Self::from_check_set(CheckSet::of_items()?, ChecklistConfig::default()))
  }

  /// Checks that are not set yet, in check set order.
  #[must_use]
  pub fn pending(&self) -> Vec<K> {
    self.checklist.pending()
  }
}
