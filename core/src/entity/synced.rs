use log::{debug, error, info, warn};

use crate::entity::context::RuntimeContext;
use crate::entity::data::EntityData;
use crate::entity::error::EntityError;
use crate::entity::residence::{Residence, TemplateId};
use crate::native::{NativeBinding, NativeId, NativeRef, NativeService};
use crate::transfer::{NativeOwner, TransferError, TransferOutcome};

/// One synchronized entity: a data shape, its residence tier, and the
/// possibly-absent native side.
///
/// The same type is both the design-time template and the per-session
/// runtime instance; [`Residence`] says which one a given value is. A
/// template owns its instance, so every operation here can route itself to
/// the right tier and callers never need to know which one they hold:
///
/// - Setters always write the routed target's stored field, and additionally
///   the native object when one is bound.
/// - Getters read from the native object when the live instance has one
///   (the engine may clamp or integrate values every step, so once live the
///   native — not the stored field — is authoritative), and from the stored
///   field otherwise.
/// - Native-requiring operations called on a template transparently forward
///   to the instance, creating it first when the context allows.
pub struct Synced<D: EntityData> {
    data: D,
    residence: Residence<D>,
    native: NativeRef<D::Service>,
}

impl<D: EntityData> Synced<D> {
    /// Creates a design-time template. Templates never touch the engine.
    pub fn template(data: D) -> Self {
        Self {
            data,
            residence: Residence::Template {
                id: TemplateId::next(),
                instance: None,
            },
            native: NativeRef::detached(),
        }
    }

    // Tier queries

    pub fn is_instance(&self) -> bool {
        self.residence.is_instance()
    }

    pub fn is_template(&self) -> bool {
        self.residence.is_template()
    }

    pub fn template_id(&self) -> TemplateId {
        match &self.residence {
            Residence::Template { id, .. } => *id,
            Residence::Instance { template } => *template,
        }
    }

    /// The runtime instance owned by this template, if one exists.
    pub fn instance(&self) -> Option<&Synced<D>> {
        match &self.residence {
            Residence::Template { instance, .. } => instance.as_deref(),
            Residence::Instance { .. } => None,
        }
    }

    pub fn instance_mut(&mut self) -> Option<&mut Synced<D>> {
        match &mut self.residence {
            Residence::Template { instance, .. } => instance.as_deref_mut(),
            Residence::Instance { .. } => None,
        }
    }

    // Stored-field access (this tier, unrouted)

    pub fn data(&self) -> &D {
        &self.data
    }

    /// Direct access to this tier's stored fields, bypassing the routed
    /// setter surface. This is the reflection path: the host writes fields
    /// directly, then the dispatcher re-pushes them through the setters.
    pub fn data_mut(&mut self) -> &mut D {
        &mut self.data
    }

    // Routing

    /// The tier that reads and writes should land on: the runtime instance
    /// when one exists, otherwise this value itself.
    pub fn target(&self) -> &Synced<D> {
        match &self.residence {
            Residence::Template {
                instance: Some(instance),
                ..
            } => instance,
            _ => self,
        }
    }

    pub fn target_mut(&mut self) -> &mut Synced<D> {
        // Checked first to keep the borrow local to one branch.
        if matches!(
            &self.residence,
            Residence::Template {
                instance: Some(_),
                ..
            }
        ) {
            match &mut self.residence {
                Residence::Template {
                    instance: Some(instance),
                    ..
                } => instance,
                _ => unreachable!(),
            }
        } else {
            self
        }
    }

    /// Routed read: native value when live, stored value otherwise.
    pub fn read<V>(
        &self,
        local: impl FnOnce(&D) -> V,
        native: impl FnOnce(&NativeBinding<D::Service>) -> Option<V>,
    ) -> V {
        let target = self.target();
        if let Some(binding) = target.native.binding() {
            if let Some(value) = native(binding) {
                return value;
            }
            warn!(
                "{}: native read from {} returned nothing; falling back to the stored value",
                D::kind_name(),
                binding.id()
            );
        }
        local(&target.data)
    }

    /// Routed write: always the stored field, plus the native when bound.
    pub fn write<V: Clone>(
        &mut self,
        value: V,
        local: impl FnOnce(&mut D, V),
        native: impl FnOnce(&NativeBinding<D::Service>, V),
    ) {
        let target = self.target_mut();
        local(&mut target.data, value.clone());
        if let Some(binding) = target.native.binding() {
            native(binding, value);
        }
    }

    // Native queries (routed)

    pub fn has_native(&self) -> bool {
        self.target().native.is_bound()
    }

    pub fn native_address(&self) -> Option<NativeId> {
        self.target().native.id()
    }

    pub fn native_binding(&self) -> Option<&NativeBinding<D::Service>> {
        self.target().native.binding()
    }

    // Lifecycle

    /// Returns the runtime instance, creating it from this template's field
    /// values on first runtime access.
    ///
    /// Returns `None` outside a play context. That is not an error to the
    /// caller — it signals "no live instance available yet"; the surrounding
    /// host code retries once a play context exists.
    pub fn get_or_create_instance(
        &mut self,
        context: &RuntimeContext<D::Service>,
    ) -> Option<&mut Synced<D>> {
        if self.is_instance() {
            return Some(self);
        }
        let Residence::Template { id, instance } = &mut self.residence else {
            unreachable!()
        };
        if instance.is_none() {
            if !context.is_play() {
                debug!(
                    "{}: no play context; instance creation deferred",
                    D::kind_name()
                );
                return None;
            }
            debug!("{}: creating runtime instance", D::kind_name());
            *instance = Some(Box::new(Synced {
                data: self.data.clone(),
                residence: Residence::Instance { template: *id },
                native: NativeRef::detached(),
            }));
        }
        instance.as_deref_mut()
    }

    /// Allocates the native object and pushes every field's current value
    /// into it, so that a freshly allocated native always reflects the
    /// entity's last-known values.
    ///
    /// Called on a template this forwards to the instance, creating one
    /// first if the context allows. A template with neither an instance nor
    /// a play context is a usage error: logged loudly, nothing allocated.
    pub fn create_native(
        &mut self,
        context: &RuntimeContext<D::Service>,
    ) -> Result<(), EntityError> {
        if !self.is_instance() {
            let kind = D::kind_name();
            let Some(instance) = self.get_or_create_instance(context) else {
                error!(
                    "{}: create_native called on a template with no instance outside a play \
                     context; call get_or_create_instance from a valid context first",
                    kind
                );
                return Err(EntityError::NoPlayContext { entity: kind });
            };
            return instance.create_native(context);
        }
        if self.native.is_bound() {
            error!(
                "{}: create_native called while a native object is already bound",
                D::kind_name()
            );
            return Err(EntityError::NativeAlreadyBound {
                entity: D::kind_name(),
            });
        }
        let id = self.data.allocate_native(context.bridge())?;
        self.attach_binding(NativeBinding::new(context.bridge().clone(), id));
        let Some(binding) = self.native.binding() else {
            unreachable!()
        };
        self.data.write_native(binding);
        info!(
            "{}: allocated {} and pushed a full resync",
            D::kind_name(),
            id
        );
        Ok(())
    }

    /// Like [`create_native`](Self::create_native), but a no-op when a
    /// native object is already bound.
    pub fn get_or_create_native(
        &mut self,
        context: &RuntimeContext<D::Service>,
    ) -> Result<(), EntityError> {
        if self.has_native() {
            return Ok(());
        }
        self.create_native(context)
    }

    /// Destroys the native object. Returns whether there was one.
    pub fn release_native(&mut self) -> bool {
        let target = self.target_mut();
        let Some(binding) = target.native.take() else {
            return false;
        };
        target.data.unbind_sub_entities();
        let id = binding.id();
        binding.release();
        info!("{}: released {}", D::kind_name(), id);
        true
    }

    /// Releases the current native object (if any) and allocates a fresh
    /// one, with a full resync from the stored fields. For engine operations
    /// that invalidate a native wholesale.
    pub fn recreate_native(
        &mut self,
        context: &RuntimeContext<D::Service>,
    ) -> Result<(), EntityError> {
        if !self.is_instance() {
            let kind = D::kind_name();
            let Some(instance) = self.get_or_create_instance(context) else {
                error!("{}: recreate_native called outside a play context", kind);
                return Err(EntityError::NoPlayContext { entity: kind });
            };
            return instance.recreate_native(context);
        }
        self.release_native();
        self.create_native(context)
    }

    /// Drops the runtime instance, releasing its native object first.
    /// The end-of-play-session path. Returns whether there was one.
    pub fn clear_instance(&mut self) -> bool {
        let Residence::Template { instance, .. } = &mut self.residence else {
            return false;
        };
        let Some(mut instance) = instance.take() else {
            return false;
        };
        instance.release_native();
        true
    }

    /// Binds `binding` and re-fetches every sub-entity's handle from it.
    ///
    /// This is the only code path that does so. Initial creation, adoption
    /// of a transferred native, and wholesale recreation all come through
    /// here, which is what keeps the three sites behaviorally identical.
    fn attach_binding(&mut self, binding: NativeBinding<D::Service>) {
        self.data.bind_sub_entities(&binding);
        self.native.bind(binding);
    }
}

impl<D: EntityData> NativeOwner<D::Service> for Synced<D> {
    fn kind_name(&self) -> &'static str {
        D::kind_name()
    }

    fn has_native(&self) -> bool {
        Synced::has_native(self)
    }

    fn native_address(&self) -> Option<NativeId> {
        Synced::native_address(self)
    }

    fn surrender_native(&mut self) -> Option<NativeId> {
        let target = self.target_mut();
        let binding = target.native.take()?;
        target.data.unbind_sub_entities();
        Some(binding.id())
        // The binding is dropped here without releasing the engine object;
        // the transfer record now owns it.
    }

    fn adopt_native(
        &mut self,
        id: NativeId,
        context: &RuntimeContext<D::Service>,
    ) -> Result<TransferOutcome, TransferError> {
        if !self.is_instance() {
            let kind = D::kind_name();
            let Some(instance) = self.get_or_create_instance(context) else {
                error!(
                    "{}: cannot adopt {} on a template outside a play context",
                    kind, id
                );
                return Err(TransferError::NoPlayContext { target: kind });
            };
            return instance.adopt_native(id, context);
        }
        match self.native.id() {
            // The host is known to apply the same transfer more than once
            // for one logical event; an address match means this is the
            // repeat and there is nothing left to do.
            Some(existing) if existing == id => return Ok(TransferOutcome::AlreadyApplied),
            Some(existing) => {
                error!(
                    "{}: refusing to adopt {}; {} is already owned",
                    D::kind_name(),
                    id,
                    existing
                );
                return Err(TransferError::TargetAlreadyLive {
                    target: D::kind_name(),
                    bound: existing,
                    offered: id,
                });
            }
            None => {}
        }
        if !context.bridge().with(|service| service.has(id)) {
            warn!(
                "{}: adopting {} although the engine no longer reports it alive",
                D::kind_name(),
                id
            );
        }
        // No reallocation and no field push: the surviving native object is
        // authoritative. Only the sub-entity handles are re-fetched.
        self.attach_binding(NativeBinding::new(context.bridge().clone(), id));
        info!("{}: adopted {} without reallocating", D::kind_name(), id);
        Ok(TransferOutcome::Adopted)
    }
}
