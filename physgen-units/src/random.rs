//! Randomized unit-scoped value draws
//!
//! A draw asks the converter for one value (or an ordered pair) expressed in
//! a registered unit, sampled from the unit's default range or a caller
//! override. The RNG is always supplied by the caller.

use crate::UnitConverter;
use physgen_core::{PhysgenError, SampleRange};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Ordering constraint on a drawn pair
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Relationship {
    /// Single value, no ordering
    #[default]
    None,
    /// First value below the second
    Smaller,
    /// First value above the second
    Larger,
}

impl FromStr for Relationship {
    type Err = PhysgenError;

    /// Accepts the spellings generators pass: `"None"` (legacy capitalized
    /// form) or `"none"`, `"smaller"`, `"larger"`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "None" | "none" => Ok(Relationship::None),
            "smaller" => Ok(Relationship::Smaller),
            "larger" => Ok(Relationship::Larger),
            other => Err(PhysgenError::InvalidRelationship(other.to_string())),
        }
    }
}

impl fmt::Display for Relationship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Relationship::None => write!(f, "none"),
            Relationship::Smaller => write!(f, "smaller"),
            Relationship::Larger => write!(f, "larger"),
        }
    }
}

/// Result of a randomized draw
///
/// Untagged so a pair serializes as a two-element array and a single value as
/// a bare number.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RandomValue {
    Single(f64),
    Pair(f64, f64),
}

impl RandomValue {
    pub fn as_single(&self) -> Option<f64> {
        match self {
            RandomValue::Single(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_pair(&self) -> Option<(f64, f64)> {
        match self {
            RandomValue::Pair(a, b) => Some((*a, *b)),
            _ => None,
        }
    }
}

impl UnitConverter<'_> {
    /// Draws a randomized value (or ordered pair) for a registered unit
    ///
    /// A supplied `custom_range` is validated first and overrides the unit's
    /// default range. With `Relationship::None` the first draw comes back
    /// alone; with `Smaller` or `Larger` two draws come back swapped into the
    /// requested order.
    pub fn random_value_for_unit<R: Rng + ?Sized>(
        &self,
        unit: &str,
        relationship: Relationship,
        custom_range: Option<SampleRange>,
        rng: &mut R,
    ) -> Result<RandomValue, PhysgenError> {
        if let Some(range) = &custom_range {
            range.validate()?;
        }
        let (_, entry) = self
            .registry()
            .find(unit)
            .ok_or_else(|| PhysgenError::UnsupportedUnit(unit.to_string()))?;
        let range = match custom_range.or(entry.range) {
            Some(range) => range,
            None => return Err(PhysgenError::MissingRange(unit.to_string())),
        };

        let value_1 = range.sample(rng);
        let value_2 = range.sample(rng);

        Ok(match relationship {
            Relationship::None => RandomValue::Single(value_1),
            Relationship::Smaller => {
                if value_1 > value_2 {
                    RandomValue::Pair(value_2, value_1)
                } else {
                    RandomValue::Pair(value_1, value_2)
                }
            }
            Relationship::Larger => {
                if value_1 < value_2 {
                    RandomValue::Pair(value_2, value_1)
                } else {
                    RandomValue::Pair(value_1, value_2)
                }
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_single_draw_uses_default_range() {
        let converter = UnitConverter::new();
        let default = converter.registry().find("m").unwrap().1.range.unwrap();
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..1000 {
            let value = converter
                .random_value_for_unit("m", Relationship::None, None, &mut rng)
                .unwrap()
                .as_single()
                .unwrap();
            assert!(default.contains(value));
        }
    }

    #[test]
    fn test_smaller_orders_every_pair() {
        let converter = UnitConverter::new();
        let mut rng = StdRng::seed_from_u64(2);
        for _ in 0..1000 {
            let (a, b) = converter
                .random_value_for_unit("km/h", Relationship::Smaller, None, &mut rng)
                .unwrap()
                .as_pair()
                .unwrap();
            assert!(a < b);
        }
    }

    #[test]
    fn test_larger_orders_every_pair() {
        let converter = UnitConverter::new();
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..1000 {
            let (a, b) = converter
                .random_value_for_unit("seconds", Relationship::Larger, None, &mut rng)
                .unwrap()
                .as_pair()
                .unwrap();
            assert!(a > b);
        }
    }

    #[test]
    fn test_custom_range_overrides_default() {
        let converter = UnitConverter::new();
        let custom = SampleRange::new(1000.0, 2000.0);
        let mut rng = StdRng::seed_from_u64(4);
        for _ in 0..200 {
            let (a, b) = converter
                .random_value_for_unit("m", Relationship::Smaller, Some(custom), &mut rng)
                .unwrap()
                .as_pair()
                .unwrap();
            assert!(custom.contains(a) && custom.contains(b));
        }
    }

    #[test]
    fn test_reversed_custom_range_is_rejected() {
        let converter = UnitConverter::new();
        let mut rng = StdRng::seed_from_u64(5);
        let err = converter.random_value_for_unit(
            "m",
            Relationship::None,
            Some(SampleRange::new(10.0, 5.0)),
            &mut rng,
        );
        assert!(matches!(err, Err(PhysgenError::InvalidRange(_))));
    }

    #[test]
    fn test_range_validation_runs_before_unit_lookup() {
        let converter = UnitConverter::new();
        let mut rng = StdRng::seed_from_u64(6);
        let err = converter.random_value_for_unit(
            "not_a_unit",
            Relationship::None,
            Some(SampleRange::new(10.0, 5.0)),
            &mut rng,
        );
        assert!(matches!(err, Err(PhysgenError::InvalidRange(_))));
    }

    #[test]
    fn test_unknown_unit_is_rejected_even_with_custom_range() {
        let converter = UnitConverter::new();
        let mut rng = StdRng::seed_from_u64(7);
        let err = converter.random_value_for_unit(
            "not_a_unit",
            Relationship::None,
            Some(SampleRange::new(1.0, 2.0)),
            &mut rng,
        );
        assert_eq!(
            err,
            Err(PhysgenError::UnsupportedUnit("not_a_unit".to_string()))
        );
    }

    #[test]
    fn test_rangeless_unit_needs_a_custom_range() {
        let converter = UnitConverter::new();
        let mut rng = StdRng::seed_from_u64(8);
        let err = converter.random_value_for_unit("nm", Relationship::None, None, &mut rng);
        assert_eq!(err, Err(PhysgenError::MissingRange("nm".to_string())));

        let ok = converter.random_value_for_unit(
            "nm",
            Relationship::None,
            Some(SampleRange::new(100.0, 700.0)),
            &mut rng,
        );
        assert!(ok.is_ok());
    }

    #[test]
    fn test_same_seed_reproduces_draws() {
        let converter = UnitConverter::new();
        let a = converter
            .random_value_for_unit(
                "psi",
                Relationship::Larger,
                None,
                &mut StdRng::seed_from_u64(77),
            )
            .unwrap();
        let b = converter
            .random_value_for_unit(
                "psi",
                Relationship::Larger,
                None,
                &mut StdRng::seed_from_u64(77),
            )
            .unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_relationship_parsing() {
        assert_eq!("None".parse::<Relationship>(), Ok(Relationship::None));
        assert_eq!("none".parse::<Relationship>(), Ok(Relationship::None));
        assert_eq!("smaller".parse::<Relationship>(), Ok(Relationship::Smaller));
        assert_eq!("larger".parse::<Relationship>(), Ok(Relationship::Larger));
        assert_eq!(
            "bigger".parse::<Relationship>(),
            Err(PhysgenError::InvalidRelationship("bigger".to_string()))
        );
    }

    #[test]
    fn test_relationship_display_round_trips() {
        for relationship in [
            Relationship::None,
            Relationship::Smaller,
            Relationship::Larger,
        ] {
            let parsed: Relationship = relationship.to_string().parse().unwrap();
            assert_eq!(parsed, relationship);
        }
    }

    #[test]
    fn test_random_value_serializes_untagged() {
        assert_eq!(
            serde_json::to_string(&RandomValue::Single(2.5)).unwrap(),
            "2.5"
        );
        assert_eq!(
            serde_json::to_string(&RandomValue::Pair(1.0, 2.0)).unwrap(),
            "[1.0,2.0]"
        );
    }

    #[test]
    fn test_accessors_reject_other_variant() {
        assert_eq!(RandomValue::Single(1.0).as_pair(), None);
        assert_eq!(RandomValue::Pair(1.0, 2.0).as_single(), None);
    }
}
