pub mod config;
pub mod dispatcher;
pub mod registry;

pub use config::DispatchConfig;
pub use dispatcher::{DispatchOutcome, FieldId, PropertyDispatcher};
pub use registry::DispatchRegistry;
