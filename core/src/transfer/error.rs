use thiserror::Error;

use crate::native::NativeId;

/// Errors that can occur while transferring native ownership across a host
/// reconstruction pass.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransferError {
    /// The replacement object the host handed back is not of the captured
    /// type. Indicates a bug in the host integration; the replacement is
    /// left detached and will allocate a fresh native instead of crashing.
    #[error("transfer abandoned: replacement object could not be downcast to {expected}")]
    DowncastFailed { expected: &'static str },

    /// The replacement already owns a different native object. Assigning the
    /// captured one would orphan it.
    #[error("{target}: refusing to adopt {offered}; a different native {bound} is already owned")]
    TargetAlreadyLive {
        target: &'static str,
        bound: NativeId,
        offered: NativeId,
    },

    /// Adoption was attempted outside a play context.
    #[error("{target}: cannot adopt a native outside a play context")]
    NoPlayContext { target: &'static str },
}
