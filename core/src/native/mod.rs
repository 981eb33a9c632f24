pub mod binding;
pub mod bridge;
pub mod error;
pub mod id;
pub mod service;

pub use binding::{NativeBinding, NativeRef};
pub use bridge::NativeBridge;
pub use error::NativeError;
pub use id::NativeId;
pub use service::NativeService;
