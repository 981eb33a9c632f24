use thiserror::Error;

use crate::native::NativeError;

/// Errors that can occur during synchronized-entity lifecycle operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EntityError {
    /// A native-requiring operation was called on a template that has no
    /// instance, outside a play context. The caller skipped the required
    /// instance-creation step; retrying once a play context exists recovers.
    #[error("{entity}: native-requiring operation called on a template with no instance outside a play context")]
    NoPlayContext { entity: &'static str },

    /// `create_native` was called while a native object is already bound.
    #[error("{entity}: a native object is already bound; release it before creating another")]
    NativeAlreadyBound { entity: &'static str },

    #[error(transparent)]
    Native(#[from] NativeError),
}
