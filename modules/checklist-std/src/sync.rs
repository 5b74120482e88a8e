mod std_mutex_family;
mod std_sync_mutex;

pub use std_mutex_family::StdMutexFamily;
pub use std_sync_mutex::StdSyncMutex;
