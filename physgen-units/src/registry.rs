//! Unit tables organized by category
//!
//! Rates are linear factors to each category's base unit
//! (value-in-base-unit = value × rate), so the base unit always carries
//! rate 1.0. Categories keep their registration order; when a symbol appears
//! in more than one category, lookups resolve to the latest-registered entry.

use physgen_core::SampleRange;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::f64::consts::PI;
use std::sync::LazyLock;

/// Standard registry every converter built with `UnitConverter::new` reads
pub static REGISTRY: LazyLock<UnitRegistry> = LazyLock::new(UnitRegistry::standard);

/// One unit inside a category
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct UnitEntry {
    /// Factor to the category's base unit
    pub rate: f64,
    /// Default interval randomized draws sample from; units without one
    /// require a caller-supplied range
    pub range: Option<SampleRange>,
}

/// Named dimension group
#[derive(Debug, Clone)]
pub struct UnitCategory {
    name: String,
    units: HashMap<String, UnitEntry>,
}

impl UnitCategory {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn get(&self, symbol: &str) -> Option<&UnitEntry> {
        self.units.get(symbol)
    }

    pub fn contains(&self, symbol: &str) -> bool {
        self.units.contains_key(symbol)
    }

    /// Symbols in this category, sorted for stable listings
    pub fn symbols(&self) -> Vec<&str> {
        let mut symbols: Vec<&str> = self.units.keys().map(|s| s.as_str()).collect();
        symbols.sort_unstable();
        symbols
    }

    pub fn len(&self) -> usize {
        self.units.len()
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }
}

/// Ordered collection of unit categories
#[derive(Debug)]
pub struct UnitRegistry {
    categories: Vec<UnitCategory>,
}

impl UnitRegistry {
    /// Empty registry; build custom tables with the `with_*` methods
    pub fn new() -> Self {
        UnitRegistry {
            categories: Vec::new(),
        }
    }

    /// The standard problem-generation table
    pub fn standard() -> Self {
        let mut registry = UnitRegistry::new();
        registry.register_length_units();
        registry.register_weight_units();
        registry.register_speed_units();
        registry.register_time_units();
        registry.register_pressure_units();
        registry.register_force_units();
        registry.register_energy_units();
        registry.register_power_units();
        registry.register_angle_units();
        tracing::debug!(
            categories = registry.categories.len(),
            symbols = registry.symbols().len(),
            "standard unit registry built"
        );
        registry
    }

    /// Adds a unit without a default range, creating the category on first use
    pub fn with_unit(mut self, category: &str, symbol: &str, rate: f64) -> Self {
        self.register(category, symbol, UnitEntry { rate, range: None });
        self
    }

    /// Adds a unit with a default sampling range
    pub fn with_ranged_unit(
        mut self,
        category: &str,
        symbol: &str,
        rate: f64,
        range: SampleRange,
    ) -> Self {
        self.register(
            category,
            symbol,
            UnitEntry {
                rate,
                range: Some(range),
            },
        );
        self
    }

    /// Finds a symbol across every category; the last category containing it
    /// wins
    pub fn find(&self, symbol: &str) -> Option<(&UnitCategory, &UnitEntry)> {
        let mut found = None;
        for category in &self.categories {
            if let Some(entry) = category.get(symbol) {
                found = Some((category, entry));
            }
        }
        found
    }

    pub fn category(&self, name: &str) -> Option<&UnitCategory> {
        self.categories.iter().find(|c| c.name == name)
    }

    /// Categories in registration order
    pub fn categories(&self) -> &[UnitCategory] {
        &self.categories
    }

    /// Every registered symbol, sorted and deduplicated
    pub fn symbols(&self) -> Vec<&str> {
        let mut symbols: Vec<&str> = self
            .categories
            .iter()
            .flat_map(|c| c.units.keys().map(|s| s.as_str()))
            .collect();
        symbols.sort_unstable();
        symbols.dedup();
        symbols
    }

    fn register(&mut self, category: &str, symbol: &str, entry: UnitEntry) {
        debug_assert!(entry.rate > 0.0, "rate for '{symbol}' must be positive");
        debug_assert!(
            entry.range.map_or(true, |r| r.validate().is_ok()),
            "default range for '{symbol}' must be valid"
        );
        let index = match self.categories.iter().position(|c| c.name == category) {
            Some(index) => index,
            None => {
                self.categories.push(UnitCategory {
                    name: category.to_string(),
                    units: HashMap::new(),
                });
                self.categories.len() - 1
            }
        };
        self.categories[index].units.insert(symbol.to_string(), entry);
    }

    fn unit(&mut self, category: &str, symbol: &str, rate: f64) {
        self.register(category, symbol, UnitEntry { rate, range: None });
    }

    fn ranged(&mut self, category: &str, symbol: &str, rate: f64, min: f64, max: f64) {
        self.register(
            category,
            symbol,
            UnitEntry {
                rate,
                range: Some(SampleRange::new(min, max)),
            },
        );
    }

    fn register_length_units(&mut self) {
        // SI length units
        self.ranged("length", "m", 1.0, 1.0, 100.0);
        self.ranged("length", "km", 1000.0, 1.0, 50.0);
        self.ranged("length", "cm", 0.01, 1.0, 100.0);
        self.ranged("length", "mm", 0.001, 1.0, 1000.0);
        self.unit("length", "µm", 1e-6);
        self.unit("length", "nm", 1e-9);

        // Imperial/US length units
        self.ranged("length", "miles", 1609.34, 1.0, 30.0);
        self.ranged("length", "ft", 0.3048, 1.0, 100.0);
        self.ranged("length", "inches", 0.0254, 1.0, 36.0);
    }

    fn register_weight_units(&mut self) {
        self.ranged("weight", "kilograms", 1.0, 1.0, 100.0);
        self.ranged("weight", "grams", 0.001, 10.0, 1000.0);
        self.ranged("weight", "pounds", 0.45359237, 1.0, 200.0);
    }

    fn register_speed_units(&mut self) {
        self.ranged("speed", "m/s", 1.0, 1.0, 50.0);
        self.ranged("speed", "km/h", 1.0 / 3.6, 10.0, 130.0);
        self.ranged("speed", "mph", 0.44704, 10.0, 80.0);
        self.ranged("speed", "ft/s", 0.3048, 1.0, 150.0);
    }

    fn register_time_units(&mut self) {
        self.ranged("time", "seconds", 1.0, 1.0, 120.0);
        self.ranged("time", "minutes", 60.0, 1.0, 60.0);
        self.ranged("time", "hours", 3600.0, 1.0, 24.0);
    }

    fn register_pressure_units(&mut self) {
        self.ranged("pressure", "Pa", 1.0, 100.0, 100_000.0);
        self.ranged("pressure", "kPa", 1000.0, 1.0, 1000.0);
        self.ranged("pressure", "MPa", 1e6, 1.0, 100.0);
        self.unit("pressure", "GPa", 1e9);
        self.ranged("pressure", "psi", 6894.76, 1.0, 150.0);
        self.ranged("pressure", "bar", 1e5, 1.0, 10.0);
        self.ranged("pressure", "atm", 101_325.0, 1.0, 5.0);
        self.unit("pressure", "Torr", 133.322);
        self.ranged("pressure", "mmHg", 133.322, 100.0, 800.0);
    }

    fn register_force_units(&mut self) {
        self.ranged("force", "N", 1.0, 1.0, 1000.0);
        self.ranged("force", "kN", 1000.0, 1.0, 100.0);
        self.ranged("force", "lbf", 4.44822, 1.0, 200.0);
        self.unit("force", "MN", 1e6);
    }

    fn register_energy_units(&mut self) {
        self.ranged("energy", "J", 1.0, 10.0, 10_000.0);
        self.ranged("energy", "kJ", 1000.0, 1.0, 500.0);
        self.ranged("energy", "cal", 4.184, 10.0, 5000.0);
        self.ranged("energy", "kcal", 4184.0, 1.0, 100.0);
        self.ranged("energy", "BTU", 1055.06, 1.0, 100.0);
        self.ranged("energy", "ftlb", 1.35582, 10.0, 1000.0);
    }

    fn register_power_units(&mut self) {
        self.ranged("power", "W", 1.0, 10.0, 5000.0);
        self.ranged("power", "kW", 1000.0, 1.0, 100.0);
        self.unit("power", "MW", 1e6);
        self.ranged("power", "HP", 745.7, 1.0, 300.0);
    }

    fn register_angle_units(&mut self) {
        self.ranged("angles", "rad", 1.0, 0.0, 2.0 * PI);
        self.ranged("angles", "deg", PI / 180.0, 0.0, 360.0);
    }
}

impl Default for UnitRegistry {
    fn default() -> Self {
        Self::new()
    }
}
