use std::fmt;

use crate::arena::ArenaKey;

/// Identity of one object inside the external engine.
///
/// This is the "native address" of the synchronization model: a stable arena
/// index, not a pointer. It is meaningful for as long as the engine-side slot
/// exists, survives the destruction of any wrapper object that refers to it,
/// and is what a [`NativeTransferRecord`](crate::transfer::NativeTransferRecord)
/// carries across a host reconstruction pass.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, PartialOrd, Ord)]
pub struct NativeId(u64);

impl NativeId {
    pub fn from_u64(value: u64) -> Self {
        Self(value)
    }

    pub fn to_u64(self) -> u64 {
        self.0
    }
}

impl ArenaKey for NativeId {
    fn from_u64(value: u64) -> Self {
        NativeId(value)
    }

    fn to_u64(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for NativeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "native#{}", self.0)
    }
}
