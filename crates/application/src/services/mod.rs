mod probe_registry;
mod probe_unit;

pub use probe_registry::ProbeRegistry;
pub use probe_unit::ProbeUnit;
