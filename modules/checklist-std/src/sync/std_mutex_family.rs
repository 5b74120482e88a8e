use checklist_core_rs::SyncMutexFamily;

use super::StdSyncMutex;

/// Mutex family backed by [`StdSyncMutex`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StdMutexFamily;

impl SyncMutexFamily for StdMutexFamily {
  type Mutex<T> = StdSyncMutex<T>;
}
