//! Unit-system selection
//!
//! Generators present each problem in either SI or imperial quantities and
//! usually flip between the two at random.

use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Unit system a generated problem presents its quantities in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnitSystem {
    #[default]
    Si,
    Imperial,
}

impl UnitSystem {
    /// Even coin flip between the two systems
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        if rng.random_range(0..2) == 0 {
            UnitSystem::Si
        } else {
            UnitSystem::Imperial
        }
    }

    pub fn is_si(&self) -> bool {
        matches!(self, UnitSystem::Si)
    }
}

impl fmt::Display for UnitSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UnitSystem::Si => write!(f, "si"),
            UnitSystem::Imperial => write!(f, "imperial"),
        }
    }
}
