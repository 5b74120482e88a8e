use alloc::string::String;

/// Reasons a check universe is rejected at construction time.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidCheckSet {
  /// No checks were supplied.
  #[error("a checklist needs at least one check")]
  Empty,
  /// The same identifier was supplied more than once.
  #[error("check `{0}` appears more than once")]
  Duplicate(String),
}
