use alloc::{vec, vec::Vec};

/// Mutable per-instance state guarded by the checklist mutex.
///
/// Invariant: `announced` implies every mark is set.
pub(crate) struct CheckMarks {
  marks:     Vec<bool>,
  announced: bool,
}

impl CheckMarks {
  pub(crate) fn new(len: usize) -> Self {
    Self { marks: vec![false; len], announced: false }
  }

  pub(crate) fn set(&mut self, index: usize, value: bool) {
    self.marks[index] = value;
    if !value {
      self.announced = false;
    }
  }

  pub(crate) fn get(&self, index: usize) -> bool {
    self.marks[index]
  }

  pub(crate) fn clear(&mut self) {
    self.marks.iter_mut().for_each(|mark| *mark = false);
    self.announced = false;
  }

  pub(crate) fn all_checked(&self) -> bool {
    self.marks.iter().all(|mark| *mark)
  }

  pub(crate) fn checked_count(&self) -> usize {
    self.marks.iter().filter(|mark| **mark).count()
  }

  pub(crate) fn iter(&self) -> impl Iterator<Item = bool> + '_ {
    self.marks.iter().copied()
  }

  /// Latches the NOT_READY -> READY edge. Returns `true` only for the call that observes it.
  pub(crate) fn take_transition(&mut self) -> bool {
    if self.announced || !self.all_checked() {
      return false;
    }
    self.announced = true;
    true
  }
}
