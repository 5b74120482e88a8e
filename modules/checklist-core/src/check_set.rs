
mod check_item;

use alloc::{format, vec::Vec};
use core::{borrow::Borrow, fmt::Debug};

pub use check_item::CheckItem;

use crate::error::{ChecklistError, InvalidCheckSet};

/// Fixed, ordered universe of check identifiers.
///
/// Membership is decided by `PartialEq`, so identifiers only need to be comparable; a closed
/// enumeration and a validated set of strings are both supported. The set is immutable once
/// built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckSet<K> {
  items: Vec<K>,
}

impl<K> CheckSet<K>
where
  K: PartialEq + Debug,
{
  /// Builds a check set from the supplied identifiers, preserving their order.
  ///
  /// # Errors
  ///
  /// Returns [`ChecklistError::InvalidArgument`] when `checks` is empty or yields the same
  /// identifier twice. Duplicates are rejected rather than merged.
  pub fn new<I>(checks: I) -> Result<Self, ChecklistError>
  where
    I: IntoIterator<Item = K>, {
    let mut items: Vec<K> = Vec::new();
    for check in checks {
      if items.contains(&check) {
        return Err(InvalidCheckSet::Duplicate(format!("{check:?}")).into());
      }
      items.push(check);
    }
    if items.is_empty() {
      return Err(InvalidCheckSet::Empty.into());
    }
    Ok(Self { items })
  }

  /// Returns the position of `check` within the set.
  ///
  /// # Errors
  ///
  /// Returns [`ChecklistError::UnknownCheck`] when `check` is not a member.
  pub fn index_of<Q>(&self, check: &Q) -> Result<usize, ChecklistError>
  where
    K: Borrow<Q>,
    Q: PartialEq + Debug + ?Sized, {
    self
      .items
      .iter()
      .position(|item| Borrow::<Q>::borrow(item) == check)
      .ok_or_else(|| ChecklistError::UnknownCheck(format!("{check:?}")))
  }

  /// Returns `true` when `check` is a member of the set.
  #[must_use]
  pub fn contains<Q>(&self, check: &Q) -> bool
  where
    K: Borrow<Q>,
    Q: PartialEq + ?Sized, {
    self.items.iter().any(|item| Borrow::<Q>::borrow(item) == check)
  }
}

impl<K> CheckSet<K>
where
  K: CheckItem + Clone + PartialEq + Debug,
{
  /// Builds a check set from every variant of a closed enumeration.
  ///
  /// # Errors
  ///
  /// Returns [`ChecklistError::InvalidArgument`] when [`CheckItem::ALL`] is empty or repeats a
  /// variant.
  pub fn of_items() -> Result<Self, ChecklistError> {
    Self::new(K::ALL.iter().cloned())
  }
}

impl<K> CheckSet<K> {
  /// Number of checks in the set.
  #[must_use]
  pub fn len(&self) -> usize {
    self.items.len()
  }

  /// Always `false`: empty sets are rejected at construction.
  #[must_use]
  pub fn is_empty(&self) -> bool {
    self.items.is_empty()
  }

  /// Returns the identifier stored at `index`.
  #[must_use]
  pub fn get(&self, index: usize) -> Option<&K> {
    self.items.get(index)
  }

  /// Iterates over the identifiers in construction order.
  pub fn iter(&self) -> core::slice::Iter<'_, K> {
    self.items.iter()
  }
}

impl<'a, K> IntoIterator for &'a CheckSet<K> {
  type IntoIter = core::slice::Iter<'a, K>;
  type Item = &'a K;

  fn into_iter(self) -> Self::IntoIter {
    self.iter()
  }
}
