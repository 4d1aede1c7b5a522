//! Solid material property database
//!
//! Base values are SI: specific gravity, elastic modulus range in GPa,
//! ultimate tensile strength range in MPa, linear expansion in µm/(m·°C),
//! specific heat in kJ/(kg·K), latent heat of fusion in J/kg. Moduli and
//! strengths are ranges because alloys vary by temper; generators sample a
//! point inside them.

use crate::helpers::{
    normalize_name, ELASTIC_MODULUS_TO_IMPERIAL, LATENT_HEAT_TO_IMPERIAL,
    SPECIFIC_HEAT_TO_IMPERIAL, TENSILE_STRENGTH_TO_IMPERIAL,
};
use physgen_core::{round_to_digits, SampleRange, UnitSystem};
use serde::Serialize;
use std::collections::HashMap;
use std::sync::LazyLock;

/// One material row
#[derive(Debug, Clone)]
pub struct MaterialData {
    pub name: &'static str,
    pub specific_gravity: f64,
    pub elastic_modulus: SampleRange,
    pub ultimate_tensile_strength: SampleRange,
    pub linear_expansion: f64,
    pub poissons_ratio: f64,
    pub specific_heat: f64,
    pub latent_heat: Option<f64>,
    pub aliases: &'static [&'static str],
}

/// The material property database
static MATERIALS: LazyLock<HashMap<String, MaterialData>> = LazyLock::new(|| {
    let entries = vec![
        MaterialData { name: "aluminum alloy", specific_gravity: 2.7,
            elastic_modulus: SampleRange::new(70.0, 80.0),
            ultimate_tensile_strength: SampleRange::new(310.0, 550.0),
            linear_expansion: 23.0, poissons_ratio: 0.33, specific_heat: 0.9,
            latent_heat: None, aliases: &["aluminum", "aluminium", "aluminium alloy"] },
        MaterialData { name: "steel alloy", specific_gravity: 7.7,
            elastic_modulus: SampleRange::new(195.0, 210.0),
            ultimate_tensile_strength: SampleRange::new(550.0, 1400.0),
            linear_expansion: 12.0, poissons_ratio: 0.30, specific_heat: 0.42,
            latent_heat: None, aliases: &["steel"] },
        MaterialData { name: "copper", specific_gravity: 8.96,
            elastic_modulus: SampleRange::new(110.0, 128.0),
            ultimate_tensile_strength: SampleRange::new(210.0, 360.0),
            linear_expansion: 17.0, poissons_ratio: 0.34, specific_heat: 0.386,
            latent_heat: None, aliases: &[] },
        MaterialData { name: "brass", specific_gravity: 8.4,
            elastic_modulus: SampleRange::new(96.0, 110.0),
            ultimate_tensile_strength: SampleRange::new(300.0, 590.0),
            linear_expansion: 20.0, poissons_ratio: 0.34, specific_heat: 0.380,
            latent_heat: None, aliases: &[] },
        // Phase-change problems need the latent heat of fusion
        MaterialData { name: "ice", specific_gravity: 0.917,
            elastic_modulus: SampleRange::new(9.0, 9.8),
            ultimate_tensile_strength: SampleRange::new(1.0, 2.0),
            linear_expansion: 51.0, poissons_ratio: 0.33, specific_heat: 2.108,
            latent_heat: Some(334_000.0), aliases: &[] },
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
    tracing::debug!(materials = map.len(), "material property table built");
    map
});

/// Material properties expressed in one unit system
///
/// SI: moduli in GPa, strengths in MPa, specific heat kJ/(kg·K), latent heat
/// J/kg. Imperial: moduli in Mpsi, strengths in ksi, specific heat
/// BTU/(lb·°F), latent heat BTU/lb. Specific gravity and linear expansion
/// are left as stored.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MaterialProperties {
    pub specific_gravity: f64,
    pub elastic_modulus: SampleRange,
    pub ultimate_tensile_strength: SampleRange,
    pub linear_expansion: f64,
    pub poissons_ratio: f64,
    pub specific_heat: f64,
    pub latent_heat: Option<f64>,
}

impl MaterialProperties {
    /// Shear modulus for an elastic modulus sampled from this material's
    /// range, in the same unit as the sample
    pub fn shear_modulus(&self, elastic_modulus: f64) -> f64 {
        elastic_modulus / (2.0 * (1.0 + self.poissons_ratio))
    }
}

/// Looks up the raw SI table row for a material
pub fn lookup_material(name: &str) -> Option<&'static MaterialData> {
    MATERIALS.get(&normalize_name(name))
}

/// All unique material names, sorted
pub fn all_material_names() -> Vec<&'static str> {
    let mut seen = std::collections::HashSet::new();
    let mut names: Vec<&'static str> = MATERIALS
        .values()
        .filter_map(|m| if seen.insert(m.name) { Some(m.name) } else { None })
        .collect();
    names.sort();
    names
}

/// Properties of a material converted into the requested unit system
///
/// Returns a computed copy; the table itself is never modified.
pub fn material_properties(name: &str, system: UnitSystem) -> Option<MaterialProperties> {
    let material = lookup_material(name)?;
    Some(match system {
        UnitSystem::Si => MaterialProperties {
            specific_gravity: material.specific_gravity,
            elastic_modulus: material.elastic_modulus,
            ultimate_tensile_strength: material.ultimate_tensile_strength,
            linear_expansion: material.linear_expansion,
            poissons_ratio: material.poissons_ratio,
            specific_heat: material.specific_heat,
            latent_heat: material.latent_heat,
        },
        UnitSystem::Imperial => MaterialProperties {
            specific_gravity: material.specific_gravity,
            elastic_modulus: material.elastic_modulus.scaled(ELASTIC_MODULUS_TO_IMPERIAL),
            ultimate_tensile_strength: material
                .ultimate_tensile_strength
                .scaled(TENSILE_STRENGTH_TO_IMPERIAL),
            linear_expansion: material.linear_expansion,
            poissons_ratio: material.poissons_ratio,
            specific_heat: round_to_digits(
                material.specific_heat * SPECIFIC_HEAT_TO_IMPERIAL,
                2,
            ),
            latent_heat: material.latent_heat.map(|lh| lh * LATENT_HEAT_TO_IMPERIAL),
        },
    })
}
