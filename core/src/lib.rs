//! # Rigbridge Core
//! Generic template/instance/native synchronization machinery, shared by the
//! concrete entity crates.
//!
//! Every simulated object the plugin exposes to the host exists in up to
//! three representations at once: a design-time template edited and
//! serialized by the host, a per-play-session runtime instance cloned from
//! it, and a native object inside the external engine. This crate owns the
//! correspondence between the three:
//!
//! - [`Synced`] is the triad itself, with the routed getter/setter surface
//!   and the instance/native creation operations.
//! - [`DispatchRegistry`] routes the host's field-changed notifications to
//!   incremental native updates.
//! - [`NativeTransferRecord`] carries native ownership across the host's
//!   destroy-and-recreate reconstruction passes.
//! - [`SubEntity`] composes controller sub-entities whose native objects are
//!   sub-objects of a parent's handle.

#![deny(trivial_numeric_casts, unstable_features, unused_import_braces)]

pub mod arena;
pub mod dispatch;
pub mod entity;
pub mod native;
pub mod transfer;

mod types;

pub use arena::{Arena, ArenaKey};
pub use dispatch::{
    DispatchConfig, DispatchOutcome, DispatchRegistry, FieldId, PropertyDispatcher,
};
pub use entity::{
    EntityData, EntityError, Residence, RuntimeContext, SubEntity, SubEntityData, Synced,
    TemplateId,
};
pub use native::{NativeBinding, NativeBridge, NativeError, NativeId, NativeRef, NativeService};
pub use transfer::{NativeOwner, NativeTransferRecord, TransferError, TransferOutcome};
pub use types::WorldKind;

// Used by the expansion of `synced_entity!`; not part of the public API.
#[doc(hidden)]
pub use paste;
