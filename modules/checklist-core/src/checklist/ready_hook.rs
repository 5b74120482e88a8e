/// Completion hook invoked when a checklist becomes ready.
///
/// Delivery is split in two phases. [`prepare`](ReadyHook::prepare) runs inside the critical
/// section that observed the transition, so whatever it captures is consistent with that exact
/// transition. [`deliver`](ReadyHook::deliver) runs right after the lock is released, on the
/// thread whose call completed the checklist, and may take arbitrary time or call back into the
/// checklist.
///
/// `prepare` must not call back into the checklist that owns the hook.
///
/// Every `Fn()` closure is a hook with an empty preparation step.
pub trait ReadyHook {
  /// Value captured under the lock and handed to [`deliver`](ReadyHook::deliver).
  type Notice;

  /// Captures what the delivery needs while the checklist state is locked.
  fn prepare(&self) -> Self::Notice;

  /// Performs the notification.
  fn deliver(&self, notice: Self::Notice);
}

impl<F> ReadyHook for F
where
  F: Fn(),
{
  type Notice = ();

  fn prepare(&self) -> Self::Notice {}

  fn deliver(&self, _notice: Self::Notice) {
    self()
  }
}
