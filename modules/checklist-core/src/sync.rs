mod mutex_family;
mod sync_mutex_like;

pub use mutex_family::{SpinMutexFamily, SyncMutexFamily};
pub use sync_mutex_like::SyncMutexLike;
