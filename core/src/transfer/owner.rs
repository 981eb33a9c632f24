use crate::entity::RuntimeContext;
use crate::native::{NativeId, NativeService};
use crate::transfer::error::TransferError;

/// Result of applying a transfer record to a replacement object.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TransferOutcome {
    /// The replacement adopted the captured native.
    Adopted,
    /// The replacement already owned the captured native; nothing was done.
    /// The host is known to invoke the apply step more than once for one
    /// logical transfer, so this is an expected outcome, not a failure.
    AlreadyApplied,
}

/// The ownership surface the transfer protocol moves a native across.
///
/// Implemented once, generically, for [`Synced`](crate::entity::Synced);
/// every concrete entity type reaches it through its inner `Synced` value.
pub trait NativeOwner<S: NativeService + ?Sized> {
    fn kind_name(&self) -> &'static str;

    fn has_native(&self) -> bool;

    fn native_address(&self) -> Option<NativeId>;

    /// Gives up ownership of the native object without releasing it, leaving
    /// this owner detached. Called on the owner immediately before the host
    /// destroys it; the returned id is the only thing that survives.
    fn surrender_native(&mut self) -> Option<NativeId>;

    /// Takes ownership of an already-live native object, without allocating
    /// and without pushing field values — the surviving native state is
    /// authoritative. Idempotent when `id` is already owned.
    fn adopt_native(
        &mut self,
        id: NativeId,
        context: &RuntimeContext<S>,
    ) -> Result<TransferOutcome, TransferError>;
}
