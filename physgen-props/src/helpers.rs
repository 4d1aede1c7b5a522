//! Shared lookup helpers and imperial conversion factors

/// Density in kg/m³ per unit of specific gravity
pub(crate) const KG_PER_M3_PER_SG: f64 = 1000.0;

/// Density in lb/ft³ per unit of specific gravity
pub(crate) const LB_PER_FT3_PER_SG: f64 = 62.4;

/// Dynamic viscosity, Pa·s to lb/(ft·s)
pub(crate) const VISCOSITY_TO_IMPERIAL: f64 = 0.672;

/// Specific heat, kJ/(kg·K) to BTU/(lb·°F)
pub(crate) const SPECIFIC_HEAT_TO_IMPERIAL: f64 = 0.239;

/// Latent heat, J/kg to BTU/lb
pub(crate) const LATENT_HEAT_TO_IMPERIAL: f64 = 0.000430209214;

/// Elastic modulus, GPa to Mpsi
pub(crate) const ELASTIC_MODULUS_TO_IMPERIAL: f64 = 145037.737734e-6;

/// Tensile strength, MPa to ksi
pub(crate) const TENSILE_STRENGTH_TO_IMPERIAL: f64 = 145.037738e-3;

/// Normalizes a fluid or material name for table lookup
pub fn normalize_name(name: &str) -> String {
    name.trim()
        .to_lowercase()
        .replace('-', " ")
        .replace('_', " ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_name() {
        assert_eq!(normalize_name("  Corn Oil "), "corn oil");
        assert_eq!(normalize_name("aluminum-alloy"), "aluminum alloy");
        assert_eq!(normalize_name("steel_alloy"), "steel alloy");
    }
}
