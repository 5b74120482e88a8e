
mod check_marks;
mod checklist_config;
mod checklist_impl;
mod ready_hook;

pub use checklist_config::ChecklistConfig;
pub use checklist_impl::Checklist;
pub use ready_hook::ReadyHook;
