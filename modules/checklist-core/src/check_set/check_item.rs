/// Closed enumeration whose variants form a check universe.
///
/// ```
/// use checklist_core_rs::CheckItem;
///
/// #[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// enum Startup {
///   Config,
///   Database,
/// }
///
/// impl CheckItem for Startup {
///   const ALL: &'static [Self] = &[Startup::Config, Startup::Database];
/// }
/// ```
pub trait CheckItem: Sized + 'static {
  /// Every variant, each listed once.
  const ALL: &'static [Self];
}
