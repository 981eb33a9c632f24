use std::sync::atomic::{AtomicU64, Ordering};

use crate::entity::data::EntityData;
use crate::entity::synced::Synced;

static NEXT_TEMPLATE_ID: AtomicU64 = AtomicU64::new(1);

/// Identity of a template, held by every instance cloned from it.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct TemplateId(u64);

impl TemplateId {
    pub(crate) fn next() -> Self {
        Self(NEXT_TEMPLATE_ID.fetch_add(1, Ordering::Relaxed))
    }

    pub fn to_u64(self) -> u64 {
        self.0
    }
}

/// Which tier of the triad a [`Synced`] value is.
///
/// A `Template` is the design-time record: editable, serializable by the
/// host, never in contact with the engine. It owns the runtime instance
/// cloned from it, when one exists. An `Instance` is that per-session clone;
/// the back-reference to its template is carried by construction, so
/// "am I an instance" is a single pattern match and can never disagree with
/// "am I a template".
pub enum Residence<D: EntityData> {
    Template {
        id: TemplateId,
        instance: Option<Box<Synced<D>>>,
    },
    Instance {
        template: TemplateId,
    },
}

impl<D: EntityData> Residence<D> {
    pub fn is_instance(&self) -> bool {
        matches!(self, Residence::Instance { .. })
    }

    pub fn is_template(&self) -> bool {
        matches!(self, Residence::Template { .. })
    }
}
