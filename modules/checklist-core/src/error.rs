mod checklist_error;
mod invalid_check_set;

pub use checklist_error::ChecklistError;
pub use invalid_check_set::InvalidCheckSet;
