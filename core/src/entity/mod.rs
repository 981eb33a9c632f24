pub mod context;
pub mod data;
pub mod error;
pub mod residence;
pub mod sub_entity;
pub mod synced;

mod macros;

pub use context::RuntimeContext;
pub use data::{EntityData, SubEntityData};
pub use error::EntityError;
pub use residence::{Residence, TemplateId};
pub use sub_entity::SubEntity;
pub use synced::Synced;
