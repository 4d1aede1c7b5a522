//! Linear unit conversion over the registry

use crate::registry::{UnitRegistry, REGISTRY};
use physgen_core::PhysgenError;

/// Stateless conversion service over a unit registry
///
/// Instances are cheap, copyable, and interchangeable; every method reads the
/// borrowed registry and touches no other state, so one converter can be
/// shared across threads freely.
#[derive(Debug, Clone, Copy)]
pub struct UnitConverter<'r> {
    registry: &'r UnitRegistry,
}

impl UnitConverter<'static> {
    /// Converter over the standard registry
    pub fn new() -> Self {
        UnitConverter {
            registry: &REGISTRY,
        }
    }
}

impl Default for UnitConverter<'static> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'r> UnitConverter<'r> {
    /// Converter over a custom registry
    pub fn with_registry(registry: &'r UnitRegistry) -> Self {
        UnitConverter { registry }
    }

    pub fn registry(&self) -> &'r UnitRegistry {
        self.registry
    }

    /// Converts a value between any two registered symbols
    ///
    /// Scans every category; when a symbol appears in several, the
    /// latest-registered entry wins. The two symbols may resolve in different
    /// categories, so callers keep the freedom (and the hazard) of converting
    /// across dimensions. Use `convert_strict` to rule that out.
    pub fn convert(&self, value: f64, from: &str, to: &str) -> Result<f64, PhysgenError> {
        let mut from_rate = None;
        let mut to_rate = None;
        for category in self.registry.categories() {
            if let Some(entry) = category.get(from) {
                from_rate = Some(entry.rate);
            }
            if let Some(entry) = category.get(to) {
                to_rate = Some(entry.rate);
            }
        }
        match (from_rate, to_rate) {
            (Some(from_rate), Some(to_rate)) => {
                let converted = value * from_rate / to_rate;
                tracing::trace!(value, from, to, converted, "converted");
                Ok(converted)
            }
            _ => Err(PhysgenError::unsupported_conversion(from, to)),
        }
    }

    /// Like `convert`, but both symbols must live in one shared category
    ///
    /// The latest-registered category containing both wins, consistent with
    /// `convert`.
    pub fn convert_strict(&self, value: f64, from: &str, to: &str) -> Result<f64, PhysgenError> {
        for category in self.registry.categories().iter().rev() {
            if let (Some(from_entry), Some(to_entry)) = (category.get(from), category.get(to)) {
                return Ok(value * from_entry.rate / to_entry.rate);
            }
        }
        Err(PhysgenError::unsupported_conversion(from, to))
    }
}
