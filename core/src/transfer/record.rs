use std::any::Any;
use std::ops::DerefMut;

use log::{error, info};

use crate::entity::{EntityData, RuntimeContext, Synced};
use crate::native::{NativeId, NativeService};
use crate::transfer::error::TransferError;
use crate::transfer::owner::{NativeOwner, TransferOutcome};

type DowncastFn<S> = for<'a> fn(&'a mut dyn Any) -> Option<&'a mut dyn NativeOwner<S>>;

/// The one thing that survives a host reconstruction pass.
///
/// When the host announces it is about to destroy-and-recreate an object
/// graph, [`capture`](Self::capture) extracts the dying instance's native
/// ownership into this record; the wrapper object and all its other state
/// are then discarded. After the host constructs the replacement,
/// [`apply_to`](Self::apply_to) hands the native over — re-pointing, never
/// reallocating, so the engine object itself lives straight through the
/// discontinuity.
///
/// The record holds the native id as a plain value together with the context
/// needed to rebind, plus a downcasting function captured from the concrete
/// type. The downcaster is caller-supplied because at apply time the host
/// hands back nothing more specific than `&mut dyn Any`.
pub struct NativeTransferRecord<S: NativeService + ?Sized + 'static> {
    kind_name: &'static str,
    address: NativeId,
    context: RuntimeContext<S>,
    downcast: DowncastFn<S>,
}

impl<S: NativeService + ?Sized + 'static> NativeTransferRecord<S> {
    /// Extracts native ownership from `source`, leaving it detached.
    /// Returns `None` when `source` owns no native — then there is nothing
    /// to carry across and the replacement will simply allocate afresh.
    pub fn capture<T, D>(source: &mut T, context: &RuntimeContext<S>) -> Option<Self>
    where
        T: Any + DerefMut<Target = Synced<D>>,
        D: EntityData<Service = S>,
    {
        let address = source.surrender_native()?;
        info!(
            "{}: captured {} for transfer across reconstruction",
            D::kind_name(),
            address
        );
        Some(Self {
            kind_name: D::kind_name(),
            address,
            context: context.clone(),
            downcast: downcast_owner::<T, D>,
        })
    }

    pub fn kind_name(&self) -> &'static str {
        self.kind_name
    }

    pub fn address(&self) -> NativeId {
        self.address
    }

    /// Hands the captured native to the replacement object.
    ///
    /// Applying the same record to the same replacement twice is a no-op
    /// (`AlreadyApplied`) — the host is observed to do exactly that. A
    /// replacement that already owns a *different* native, or that is not of
    /// the captured type, is refused and left as it was.
    pub fn apply_to(&self, target: &mut dyn Any) -> Result<TransferOutcome, TransferError> {
        let Some(owner) = (self.downcast)(target) else {
            error!(
                "Transfer of {} abandoned: replacement object is not a {}",
                self.address, self.kind_name
            );
            return Err(TransferError::DowncastFailed {
                expected: self.kind_name,
            });
        };
        owner.adopt_native(self.address, &self.context)
    }
}

fn downcast_owner<T, D>(any: &mut dyn Any) -> Option<&mut dyn NativeOwner<D::Service>>
where
    T: Any + DerefMut<Target = Synced<D>>,
    D: EntityData,
{
    any.downcast_mut::<T>()
        .map(|wrapper| &mut **wrapper as &mut dyn NativeOwner<D::Service>)
}
