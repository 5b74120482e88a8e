#![cfg_attr(not(test), no_std)]
#![deny(missing_docs)]
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used, clippy::panic))]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(unsafe_op_in_unsafe_fn)]
#![deny(clippy::missing_errors_doc)]
#![deny(clippy::missing_panics_doc)]
#![deny(clippy::redundant_clone)]
#![deny(clippy::redundant_field_names)]
#![deny(clippy::needless_borrow)]
#![deny(clippy::manual_let_else)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
#![deny(clippy::print_stdout)]
#![deny(clippy::dbg_macro)]
#![deny(clippy::must_use_candidate)]
#![deny(clippy::len_without_is_empty)]
#![deny(clippy::wrong_self_convention)]
#![deny(clippy::bool_comparison)]
#![deny(clippy::needless_bool)]

//! Checklist barrier primitives.
//!
//! A checklist tracks a fixed set of named checks and invokes a completion hook exactly once each
//! time the whole set becomes checked. [`ObservableChecklist`] fans that completion out to any
//! number of registered [`ReadyListener`]s and lets late joiners catch up on readiness that has
//! already been reached.
//!
//! Everything here is generic over a [`SyncMutexFamily`]; the default uses `spin` locks so the
//! crate works on `no_std` targets, and `checklist-std-rs` binds it to `std::sync::Mutex`.

extern crate alloc;

/// Validated universe of check identifiers.
pub mod check_set;
/// Checklist state machine and its completion hook.
pub mod checklist;
/// Error types shared by every checklist operation.
pub mod error;
/// Listener registry layered over [`Checklist`].
pub mod observable;
/// Mutex abstractions the checklist is generic over.
pub mod sync;

pub use check_set::{CheckItem, CheckSet};
pub use checklist::{Checklist, ChecklistConfig, ReadyHook};
pub use error::{ChecklistError, InvalidCheckSet};
pub use observable::{ObservableChecklist, ReadyListener, ReadySubscription};
pub use sync::{SpinMutexFamily, SyncMutexFamily, SyncMutexLike};
