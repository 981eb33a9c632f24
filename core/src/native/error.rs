use thiserror::Error;

use crate::native::id::NativeId;

/// Errors that can occur while talking to the engine service.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NativeError {
    /// The engine service lock was poisoned by an earlier panic.
    #[error("engine service lock is poisoned; a previous caller panicked while holding it")]
    LockPoisoned,

    /// The engine refused to allocate an object of this kind.
    #[error("the engine refused to allocate a {kind} object")]
    AllocationRefused { kind: &'static str },

    /// An operation named an id the engine no longer knows.
    #[error("{id} is no longer known to the engine")]
    NotAlive { id: NativeId },
}
