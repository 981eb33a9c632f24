use std::fmt;

use log::warn;

use crate::entity::data::SubEntityData;
use crate::native::{NativeBinding, NativeId, NativeRef};

/// A controller sub-entity composed inside a parent synchronized entity.
///
/// Its native object is a sub-object of the parent's handle, fetched rather
/// than allocated, and re-fetched whenever the parent's native changes
/// identity. Inside a template it is permanently detached, like everything
/// else design-time.
pub struct SubEntity<C: SubEntityData> {
    data: C,
    native: NativeRef<C::Service>,
}

impl<C: SubEntityData> SubEntity<C> {
    pub fn new(data: C) -> Self {
        Self {
            data,
            native: NativeRef::detached(),
        }
    }

    pub fn data(&self) -> &C {
        &self.data
    }

    pub fn data_mut(&mut self) -> &mut C {
        &mut self.data
    }

    pub fn has_native(&self) -> bool {
        self.native.is_bound()
    }

    pub fn native_address(&self) -> Option<NativeId> {
        self.native.id()
    }

    pub fn binding(&self) -> Option<&NativeBinding<C::Service>> {
        self.native.binding()
    }

    /// Fetches this sub-entity's handle from `parent` and binds to it.
    /// Safe to call again after the parent's native changes identity.
    pub fn bind(&mut self, parent: &NativeBinding<C::Service>) {
        match C::fetch_native(parent) {
            Some(id) => {
                self.native
                    .rebind(NativeBinding::new(parent.bridge().clone(), id));
            }
            None => {
                warn!(
                    "{}: parent {} has no such sub-object; leaving detached",
                    C::kind_name(),
                    parent.id()
                );
                self.native.clear();
            }
        }
    }

    pub fn unbind(&mut self) {
        self.native.clear();
    }

    /// Pushes every field into the bound native. No-op while detached.
    pub fn write_native(&self) {
        if let Some(binding) = self.native.binding() {
            self.data.write_native(binding);
        }
    }
}

// A clone is always detached: field values copy, ownership of a native
// object never does.
impl<C: SubEntityData> Clone for SubEntity<C> {
    fn clone(&self) -> Self {
        Self {
            data: self.data.clone(),
            native: NativeRef::detached(),
        }
    }
}

impl<C: SubEntityData + Default> Default for SubEntity<C> {
    fn default() -> Self {
        Self::new(C::default())
    }
}

impl<C: SubEntityData + fmt::Debug> fmt::Debug for SubEntity<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SubEntity")
            .field("data", &self.data)
            .field("native", &self.native.id())
            .finish()
    }
}
