use alloc::{sync::Arc, vec::Vec};
use core::{borrow::Borrow, fmt::Debug};

use super::{check_marks::CheckMarks, ChecklistConfig, ReadyHook};
use crate::{
  check_set::{CheckItem, CheckSet},
  error::ChecklistError,
  sync::{SpinMutexFamily, SyncMutexFamily, SyncMutexLike},
};

struct ChecklistInner<K, H, M>
where
  M: SyncMutexFamily, {
  check_set: CheckSet<K>,
  marks:     M::Mutex<CheckMarks>,
  hook:      H,
  config:    ChecklistConfig,
}

/// Fixed set of named checks that fires a completion hook when all of them are set.
///
/// Handles are cheap to clone and every clone refers to the same checklist, so one instance can
/// be shared by any number of threads. Each state change, the readiness scan that follows it and
/// the detection of the NOT_READY -> READY edge happen inside one critical section; the hook
/// fires exactly once per such edge, on the thread whose call produced it.
///
/// The hook runs after the lock is released: hooks of consecutive transitions may overlap on
/// different threads, and a hook may already find the checklist not ready again.
pub struct Checklist<K, H, M = SpinMutexFamily>
where
  M: SyncMutexFamily, {
  inner: Arc<ChecklistInner<K, H, M>>,
}

impl<K, H, M> Clone for Checklist<K, H, M>
where
  M: SyncMutexFamily,
{
  fn clone(&self) -> Self {
    Self { inner: self.inner.clone() }
  }
}

impl<K, H, M> Debug for Checklist<K, H, M>
where
  K: Debug,
  M: SyncMutexFamily,
{
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    f.debug_struct("Checklist")
      .field("label", &self.inner.config.label())
      .field("checks", &self.inner.check_set)
      .finish()
  }
}

impl<K, H, M> Checklist<K, H, M>
where
  K: PartialEq + Debug,
  H: ReadyHook,
  M: SyncMutexFamily,
{
  /// Creates a checklist over `checks` with every check unset.
  ///
  /// # Errors
  ///
  /// Returns [`ChecklistError::InvalidArgument`] when `checks` is empty or contains duplicates.
  pub fn new<I>(checks: I, hook: H) -> Result<Self, ChecklistError>
  where
    I: IntoIterator<Item = K>, {
    Self::new_with_config(checks, hook, ChecklistConfig::default())
  }

  /// Creates a checklist over `checks` using the supplied configuration.
  ///
  /// # Errors
  ///
  /// Returns [`ChecklistError::InvalidArgument`] when `checks` is empty or contains duplicates.
  pub fn new_with_config<I>(checks: I, hook: H, config: ChecklistConfig) -> Result<Self, ChecklistError>
  where
    I: IntoIterator<Item = K>, {
    Ok(Self::from_check_set(CheckSet::new(checks)?, hook, config))
  }

  /// Creates a checklist over an already validated check set.
  #[must_use]
  pub fn from_check_set(check_set: CheckSet<K>, hook: H, config: ChecklistConfig) -> Self {
    let marks = <M::Mutex<CheckMarks> as SyncMutexLike<CheckMarks>>::new(CheckMarks::new(check_set.len()));
    Self { inner: Arc::new(ChecklistInner { check_set, marks, hook, config }) }
  }

  /// Sets `check` and fires the hook if this completes the checklist.
  ///
  /// Returns `true` when this call observed the transition to ready and ran the hook. Setting a
  /// check that is already set changes nothing, and a checklist that is already ready does not
  /// fire again.
  ///
  /// # Errors
  ///
  /// Returns [`ChecklistError::UnknownCheck`] when `check` is not part of the check set; the
  /// state is left untouched.
  pub fn check<Q>(&self, check: &Q) -> Result<bool, ChecklistError>
  where
    K: Borrow<Q>,
    Q: PartialEq + Debug + ?Sized, {
    let index = self.inner.check_set.index_of(check)?;
    tracing::trace!(checklist = self.inner.config.label(), check = ?check, "check set");
    Ok(self.settle(|marks| marks.set(index, true)))
  }

  /// Clears `check`. Never fires the hook.
  ///
  /// # Errors
  ///
  /// Returns [`ChecklistError::UnknownCheck`] when `check` is not part of the check set; the
  /// state is left untouched.
  pub fn uncheck<Q>(&self, check: &Q) -> Result<(), ChecklistError>
  where
    K: Borrow<Q>,
    Q: PartialEq + Debug + ?Sized, {
    let index = self.inner.check_set.index_of(check)?;
    tracing::trace!(checklist = self.inner.config.label(), check = ?check, "check cleared");
    self.inner.marks.lock().set(index, false);
    Ok(())
  }

  /// Clears every check at once. Never fires the hook.
  pub fn reset(&self) {
    tracing::trace!(checklist = self.inner.config.label(), "checklist reset");
    self.inner.marks.lock().clear();
  }

  /// Fires the hook if the checklist is ready and the current ready period has not been
  /// announced yet, without changing any check.
  ///
  /// Returns `true` when the hook ran.
  pub fn recheck(&self) -> bool {
    self.settle(|_| {})
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
    let index = self.inner.check_set.index_of(check)?;
    Ok(self.inner.marks.lock().get(index))
  }

  /// Returns `true` when every check is currently set.
  #[must_use]
  pub fn is_ready(&self) -> bool {
    self.inner.marks.lock().all_checked()
  }

  /// Number of checks currently set.
  #[must_use]
  pub fn checked_count(&self) -> usize {
    self.inner.marks.lock().checked_count()
  }

  /// Number of checks in the checklist.
  #[must_use]
  pub fn len(&self) -> usize {
    self.inner.check_set.len()
  }

  /// Always `false`: a checklist holds at least one check.
  #[must_use]
  pub fn is_empty(&self) -> bool {
    self.inner.check_set.is_empty()
  }

  /// The universe of checks this checklist was built over.
  #[must_use]
  pub fn check_set(&self) -> &CheckSet<K> {
    &self.inner.check_set
  }

  /// Configuration the checklist was built with.
  #[must_use]
  pub fn config(&self) -> &ChecklistConfig {
    &self.inner.config
  }

  /// Runs `f` with the current readiness while the check state is locked.
  ///
  /// No check can change and no transition can be detected until `f` returns.
  pub(crate) fn with_readiness<R>(&self, f: impl FnOnce(bool) -> R) -> R {
    let marks = self.inner.marks.lock();
    f(marks.all_checked())
  }

  fn settle(&self, mutate: impl FnOnce(&mut CheckMarks)) -> bool {
    let notice = {
      let mut marks = self.inner.marks.lock();
      mutate(&mut marks);
      if marks.take_transition() {
        Some(self.inner.hook.prepare())
      } else {
        None
      }
    };
    match notice {
      | Some(notice) => {
        tracing::debug!(checklist = self.inner.config.label(), checks = self.len(), "checklist ready");
        self.inner.hook.deliver(notice);
        true
      },
      | None => false,
    }
  }
}

impl<K, H, M> Checklist<K, H, M>
where
  K: Clone + PartialEq + Debug,
  H: ReadyHook,
  M: SyncMutexFamily,
{
  /// Creates a checklist over every variant of `K`.
  ///
  /// # Errors
  ///
  /// Returns [`ChecklistError::InvalidArgument`] when [`CheckItem::ALL`] is empty or repeats a
  /// variant.
  pub fn for_items(hook: H) -> Result<Self, ChecklistError>
  where
    K: CheckItem, {
    Ok(Self::from_check_set(CheckSet::of_items()?, hook, ChecklistConfig::default()))
  }

  /// Checks that are not set yet, in check set order.
  #[must_use]
  pub fn pending(&self) -> Vec<K> {
    let marks = self.inner.marks.lock();
    self
      .inner
      .check_set
      .iter()
      .zip(marks.iter())
      .filter(|(_, checked)| !checked)
      .map(|(check, _)| check.clone())
      .collect()
  }
}
