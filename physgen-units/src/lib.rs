//! Physgen Units - Unit registry, conversion, and randomized draws
//!
//! The registry maps unit symbols to linear rates inside ordered categories;
//! the converter turns values between any two registered symbols and draws
//! randomized values scoped to a unit's sampling range. Conversion is
//! deliberately permissive (symbols from different categories still convert)
//! because existing generators rely on it; `convert_strict` is there for
//! callers who want the guard.

mod converter;
mod random;
mod registry;

pub use converter::UnitConverter;
pub use random::{RandomValue, Relationship};
pub use registry::{UnitCategory, UnitEntry, UnitRegistry, REGISTRY};
