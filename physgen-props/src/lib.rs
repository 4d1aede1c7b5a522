//! Physgen Props - Fluid and material property tables
//!
//! Static reference data problem generators pull physical constants from:
//! nine common fluids and five solid materials, each with a unit-system-aware
//! accessor that converts a copy of the row into SI or imperial values. For
//! direct unit conversions use `physgen-units`.

mod fluid;
mod helpers;
mod material;

pub use fluid::{all_fluid_names, fluid_properties, lookup_fluid, FluidData, FluidProperties};
pub use helpers::normalize_name;
pub use material::{
    all_material_names, lookup_material, material_properties, MaterialData, MaterialProperties,
};
