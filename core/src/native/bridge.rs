use std::sync::{Arc, RwLock};

use crate::native::error::NativeError;
use crate::native::service::NativeService;

/// Shared access to the one engine service behind all native objects.
///
/// All mutation happens on the host's main thread; the lock exists because
/// every binding, context and transfer record holds a clone of this bridge,
/// not because of concurrent writers.
pub struct NativeBridge<S: NativeService + ?Sized> {
    service: Arc<RwLock<S>>,
}

impl<S: NativeService + ?Sized> NativeBridge<S> {
    pub fn new(service: Arc<RwLock<S>>) -> Self {
        Self { service }
    }

    /// Runs `f` with shared access to the engine service.
    pub fn with<R>(&self, f: impl FnOnce(&S) -> R) -> R {
        let Ok(service) = self.service.as_ref().read() else {
            panic!("Engine service lock poisoned");
        };
        f(&service)
    }

    /// Runs `f` with exclusive access to the engine service.
    pub fn with_mut<R>(&self, f: impl FnOnce(&mut S) -> R) -> R {
        let Ok(mut service) = self.service.as_ref().write() else {
            panic!("Engine service lock poisoned");
        };
        f(&mut service)
    }

    // Try versions that return Result instead of panicking

    pub fn try_with<R>(&self, f: impl FnOnce(&S) -> R) -> Result<R, NativeError> {
        let service = self
            .service
            .as_ref()
            .read()
            .map_err(|_| NativeError::LockPoisoned)?;
        Ok(f(&service))
    }

    pub fn try_with_mut<R>(&self, f: impl FnOnce(&mut S) -> R) -> Result<R, NativeError> {
        let mut service = self
            .service
            .as_ref()
            .write()
            .map_err(|_| NativeError::LockPoisoned)?;
        Ok(f(&mut service))
    }
}

impl<S: NativeService + ?Sized> Clone for NativeBridge<S> {
    fn clone(&self) -> Self {
        Self {
            service: Arc::clone(&self.service),
        }
    }
}
