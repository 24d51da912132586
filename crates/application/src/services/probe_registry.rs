use super::ProbeUnit;
use ferrous_sidecar_domain::DomainError;
use std::collections::HashMap;
use std::sync::Arc;

/// Probe units indexed by label. Built once at startup and only read after.
#[derive(Default)]
pub struct ProbeRegistry {
    units: Vec<Arc<ProbeUnit>>,
    by_label: HashMap<String, Arc<ProbeUnit>>,
}

impl ProbeRegistry {
    pub fn new(units: Vec<ProbeUnit>) -> Result<Self, DomainError> {
        let mut registry = Self::default();
        for unit in units {
            let unit = Arc::new(unit);
            if registry
                .by_label
                .insert(unit.label().to_string(), Arc::clone(&unit))
                .is_some()
            {
                return Err(DomainError::DuplicateProbeLabel(unit.label().to_string()));
            }
            registry.units.push(unit);
        }
        Ok(registry)
    }

    pub fn get(&self, label: &str) -> Option<&Arc<ProbeUnit>> {
        self.by_label.get(label)
    }

    /// Units in configuration order.
    pub fn units(&self) -> &[Arc<ProbeUnit>] {
        &self.units
    }

    pub fn len(&self) -> usize {
        self.units.len()
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }
}
