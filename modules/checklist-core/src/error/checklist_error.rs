use alloc::string::String;

use super::InvalidCheckSet;

/// Errors reported synchronously by checklist operations.
///
/// A failing call never mutates the check state or the listener registry.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ChecklistError {
  /// The universe of checks supplied at construction was unusable.
  #[error("invalid check set: {0}")]
  InvalidArgument(#[from] InvalidCheckSet),
  /// The identifier is not a member of the checklist's check set.
  #[error("unknown check `{0}`")]
  UnknownCheck(String),
}

impl ChecklistError {
  /// Returns `true` for [`ChecklistError::UnknownCheck`].
  #[must_use]
  pub const fn is_unknown_check(&self) -> bool {
    matches!(self, Self::UnknownCheck(_))
  }
}
