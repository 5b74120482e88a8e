#![deny(missing_docs)]
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used))]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(unsafe_op_in_unsafe_fn)]
#![deny(clippy::missing_errors_doc)]
#![deny(clippy::missing_panics_doc)]
#![deny(clippy::redundant_clone)]
#![deny(clippy::needless_borrow)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
#![deny(clippy::print_stdout)]
#![deny(clippy::dbg_macro)]
#![deny(clippy::must_use_candidate)]

//! Checklist barrier for std runtimes.
//!
//! This crate binds the primitives defined in `checklist_core_rs` to `std::sync::Mutex` and adds
//! a Tokio-based [`ReadyWaiter`] for async callers. The aliases exported here are what
//! applications normally use.

/// Tokio-based asynchronous readiness waiting.
pub mod ready_waiter;
/// std mutex bindings for the core mutex abstractions.
pub mod sync;

pub use checklist_core_rs::{
  CheckItem, CheckSet, ChecklistConfig, ChecklistError, InvalidCheckSet, ReadyHook, ReadyListener,
};
pub use ready_waiter::ReadyWaiter;
pub use sync::{StdMutexFamily, StdSyncMutex};

/// Checklist guarded by `std::sync::Mutex`.
///
/// Fires `H` once every time all checks become set.
pub type Checklist<K, H> = checklist_core_rs::Checklist<K, H, StdMutexFamily>;

/// Observable checklist guarded by `std::sync::Mutex`.
pub type ObservableChecklist<K> = checklist_core_rs::ObservableChecklist<K, StdMutexFamily>;

/// Listener registration handle for [`ObservableChecklist`].
pub type ReadySubscription = checklist_core_rs::ReadySubscription<StdMutexFamily>;

/// Prelude module that re-exports commonly used types and traits.
pub mod prelude {
  pub use crate::{
    CheckItem, CheckSet, Checklist, ChecklistConfig, ChecklistError, ObservableChecklist, ReadyHook, ReadyListener,
    ReadySubscription, ReadyWaiter,
  };
}
