/// Tuning knobs for the dispatch registry.
#[derive(Clone, Debug)]
pub struct DispatchConfig {
    /// Log (at debug level) field-changed notifications that no handler
    /// claims. Unhandled fields are a normal state — many fields have no
    /// incremental side effect — so this is off by default and mostly useful
    /// when wiring up a new entity type.
    pub log_unhandled: bool,
}

impl Default for DispatchConfig {
    fn default() -> Self {
        Self {
            log_unhandled: false,
        }
    }
}
