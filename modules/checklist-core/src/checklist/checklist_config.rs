use alloc::borrow::Cow;

const DEFAULT_LABEL: &str = "checklist";

/// Construction-time settings for a checklist.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChecklistConfig {
  label: Option<Cow<'static, str>>,
}

impl ChecklistConfig {
  /// Creates a configuration with default settings.
  #[must_use]
  pub fn new() -> Self {
    Self::default()
  }

  /// Sets the label attached to log records emitted by the checklist.
  pub fn set_label(&mut self, label: impl Into<Cow<'static, str>>) {
    self.label = Some(label.into());
  }

  /// Returns the configuration with the given label (builder form).
  #[must_use]
  pub fn with_label(mut self, label: impl Into<Cow<'static, str>>) -> Self {
    self.set_label(label);
    self
  }

  /// Label used in log records, `"checklist"` unless configured.
  #[must_use]
  pub fn label(&self) -> &str {
    self.label.as_deref().unwrap_or(DEFAULT_LABEL)
  }
}
