use std::{
  panic::{catch_unwind, AssertUnwindSafe},
  sync::{
    atomic::{AtomicBool, AtomicUsize, Ordering},
    Arc,
  },
};

use super::*;
use crate::{Checklist, ReadyHook};

struct FlakyHook {
  failed:    AtomicBool,
  delivered: Arc<AtomicUsize>,
}

impl ReadyHook for FlakyHook {
  type Notice = ();

  fn prepare(&self) -> Self::Notice {
    if !self.failed.swap(true, Ordering::SeqCst) {
      std::panic::panic_any("prepare failed while the marks lock was held");
    }
  }

  fn deliver(&self, _notice: Self::Notice) {
    self.delivered.fetch_add(1, Ordering::SeqCst);
  }
}

#[test]
fn checklist_survives_panic_inside_critical_section() {
  let delivered = Arc::new(AtomicUsize::new(0));
  let hook = FlakyHook { failed: AtomicBool::new(false), delivered: delivered.clone() };
  let checklist: Checklist<u8, FlakyHook> = Checklist::new([1, 2], hook).unwrap();
  checklist.check(&1).unwrap();

  let outcome = catch_unwind(AssertUnwindSafe(|| checklist.check(&2)));
  assert!(outcome.is_err());

  assert!(checklist.is_ready());
  assert_eq!(checklist.is_checked(&2), Ok(true));
  assert!(!checklist.recheck());
  assert_eq!(delivered.load(Ordering::SeqCst), 0);

  checklist.reset();
  assert_eq!(checklist.checked_count(), 0);
  checklist.check(&1).unwrap();
  assert_eq!(checklist.check(&2), Ok(true));
  assert_eq!(delivered.load(Ordering::SeqCst), 1);
}

#[test]
fn lock_recovers_after_poisoning() {
  let mutex = <StdSyncMutex<Vec<u8>> as SyncMutexLike<Vec<u8>>>::new(vec![1]);
  let outcome = catch_unwind(AssertUnwindSafe(|| {
    let mut guard = mutex.lock();
    guard.push(2);
    std::panic::panic_any("poison the lock");
  }));
  assert!(outcome.is_err());

  mutex.lock().push(3);
  assert_eq!(*mutex.lock(), vec![1, 2, 3]);
}
