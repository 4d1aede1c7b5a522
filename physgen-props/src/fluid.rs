//! Fluid property database
//!
//! Base values are SI: specific gravity relative to water, dynamic viscosity
//! in Pa·s, specific heat in kJ/(kg·K), phase-change temperatures in °C,
//! latent heat in J/kg. The accessor converts a copy per unit system and
//! never writes back into the table.

use crate::helpers::{
    normalize_name, KG_PER_M3_PER_SG, LATENT_HEAT_TO_IMPERIAL, LB_PER_FT3_PER_SG,
    SPECIFIC_HEAT_TO_IMPERIAL, VISCOSITY_TO_IMPERIAL,
};
use physgen_core::{round_to_digits, UnitSystem};
use serde::Serialize;
use std::collections::HashMap;
use std::sync::LazyLock;

/// One fluid row
#[derive(Debug, Clone)]
pub struct FluidData {
    pub name: &'static str,
    pub specific_gravity: f64,
    pub viscosity: f64,
    pub specific_heat: f64,
    pub freezing_point: f64,
    pub boiling_point: f64,
    pub latent_heat: Option<f64>,
    pub aliases: &'static [&'static str],
}

/// The fluid property database
static FLUIDS: LazyLock<HashMap<String, FluidData>> = LazyLock::new(|| {
    let entries = vec![
        FluidData { name: "water", specific_gravity: 1.0, viscosity: 0.001,
            specific_heat: 1.0, freezing_point: 0.0, boiling_point: 100.0,
            latent_heat: None, aliases: &[] },
        FluidData { name: "gasoline", specific_gravity: 0.72, viscosity: 0.00029,
            specific_heat: 2.22, freezing_point: -50.0, boiling_point: 150.0,
            latent_heat: None, aliases: &["petrol"] },
        FluidData { name: "diesel", specific_gravity: 0.8, viscosity: 0.0022,
            specific_heat: 2.05, freezing_point: -60.0, boiling_point: 300.0,
            latent_heat: None, aliases: &["diesel fuel"] },
        FluidData { name: "benzene", specific_gravity: 0.88, viscosity: 0.0006,
            specific_heat: 1.19, freezing_point: 5.5, boiling_point: 80.0,
            latent_heat: None, aliases: &[] },
        FluidData { name: "ethanol", specific_gravity: 0.79, viscosity: 0.0012,
            specific_heat: 2.4, freezing_point: -114.0, boiling_point: 78.4,
            latent_heat: None, aliases: &["ethyl alcohol"] },
        FluidData { name: "acetone", specific_gravity: 0.78, viscosity: 0.003,
            specific_heat: 2.15, freezing_point: -95.0, boiling_point: 56.0,
            latent_heat: None, aliases: &[] },
        FluidData { name: "corn oil", specific_gravity: 0.92, viscosity: 0.02,
            specific_heat: 1.9, freezing_point: -11.0, boiling_point: 245.0,
            latent_heat: None, aliases: &[] },
        FluidData { name: "glycerine", specific_gravity: 1.26, viscosity: 0.95,
            specific_heat: 2.43, freezing_point: 17.8, boiling_point: 290.0,
            latent_heat: None, aliases: &["glycerin", "glycerol"] },
        FluidData { name: "honey", specific_gravity: 1.4, viscosity: 10.0,
            specific_heat: 2.52, freezing_point: -10.0, boiling_point: 80.0,
            latent_heat: None, aliases: &[] },
    ];

    let mut map = HashMap::new();
    for entry in entries {
        let normalized = normalize_name(entry.name);
        for alias in entry.aliases {
            let normalized_alias = normalize_name(alias);
            if !map.contains_key(&normalized_alias) {
                map.insert(normalized_alias, entry.clone());
            }
        }
        map.insert(normalized, entry);
    }
    tracing::debug!(fluids = map.len(), "fluid property table built");
    map
});

/// Fluid properties expressed in one unit system
///
/// SI: density kg/m³, viscosity Pa·s, specific heat kJ/(kg·K), latent heat
/// J/kg. Imperial: density lb/ft³, viscosity lb/(ft·s), specific heat
/// BTU/(lb·°F), latent heat BTU/lb. Temperatures stay in °C in both systems.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FluidProperties {
    pub specific_gravity: f64,
    pub density: f64,
    pub viscosity: f64,
    pub specific_heat: f64,
    pub freezing_point: f64,
    pub boiling_point: f64,
    pub latent_heat: Option<f64>,
}

/// Looks up the raw SI table row for a fluid
pub fn lookup_fluid(name: &str) -> Option<&'static FluidData> {
    FLUIDS.get(&normalize_name(name))
}

/// All unique fluid names, sorted
pub fn all_fluid_names() -> Vec<&'static str> {
    let mut seen = std::collections::HashSet::new();
    let mut names: Vec<&'static str> = FLUIDS
        .values()
        .filter_map(|f| if seen.insert(f.name) { Some(f.name) } else { None })
        .collect();
    names.sort();
    names
}

/// Properties of a fluid converted into the requested unit system
///
/// Returns a computed copy; the table itself is never modified. Specific
/// heat is rounded to two decimals in imperial, matching the precision the
/// generators print.
pub fn fluid_properties(name: &str, system: UnitSystem) -> Option<FluidProperties> {
    let fluid = lookup_fluid(name)?;
    Some(match system {
        UnitSystem::Si => FluidProperties {
            specific_gravity: fluid.specific_gravity,
            density: fluid.specific_gravity * KG_PER_M3_PER_SG,
            viscosity: fluid.viscosity,
            specific_heat: fluid.specific_heat,
            freezing_point: fluid.freezing_point,
            boiling_point: fluid.boiling_point,
            latent_heat: fluid.latent_heat,
        },
        UnitSystem::Imperial => FluidProperties {
            specific_gravity: fluid.specific_gravity,
            density: fluid.specific_gravity * LB_PER_FT3_PER_SG,
            viscosity: fluid.viscosity * VISCOSITY_TO_IMPERIAL,
            specific_heat: round_to_digits(fluid.specific_heat * SPECIFIC_HEAT_TO_IMPERIAL, 2),
            freezing_point: fluid.freezing_point,
            boiling_point: fluid.boiling_point,
            latent_heat: fluid.latent_heat.map(|lh| lh * LATENT_HEAT_TO_IMPERIAL),
        },
    })
}
