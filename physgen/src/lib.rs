//! Physgen - Support core for physics word-problem generators
//!
//! One dependency that rolls up the whole workspace:
//!
//! - Typed errors, sampling ranges, rounding, and the problem-instance
//!   contract from `physgen-core`
//! - The unit registry, converter, and per-unit random draws from
//!   `physgen-units`
//! - Shuffles, permutations, and masks from `physgen-random`
//! - Fluid and material reference tables from `physgen-props`
//!
//! A generator composes these pieces in a fixed rhythm: pick a unit system,
//! draw parameter values scoped to the units the problem mentions, convert
//! between the symbols that appear in the prompt, compute the answer, round
//! it, and pack everything into a [`ProblemInstance`].

pub use physgen_core::{
    round_to_digits, round_to_sigfigs, GeneratorMeta, GeneratorRegistry, ParamValue,
    PhysgenError, ProblemGenerator, ProblemInstance, SampleRange, UnitSystem,
};
pub use physgen_props::{
    all_fluid_names, all_material_names, fluid_properties, lookup_fluid, lookup_material,
    material_properties, FluidData, FluidProperties, MaterialData, MaterialProperties,
};
pub use physgen_random::{
    random_int, random_mask, random_permutation, random_permutation_of_range, shuffle,
};
pub use physgen_units::{
    RandomValue, Relationship, UnitCategory, UnitConverter, UnitEntry, UnitRegistry, REGISTRY,
};

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rand::rngs::StdRng;
    use rand::{RngCore, SeedableRng};

    fn init_logging() {
        let _ = tracing_subscriber::fmt().with_test_writer().try_init();
    }

    /// A small but realistic generator: a vehicle brakes to a stop and the
    /// student solves for the stopping distance d = v^2 / (2 * mu * g).
    struct BrakingDistance;

    impl ProblemGenerator for BrakingDistance {
        fn meta(&self) -> GeneratorMeta {
            GeneratorMeta {
                name: "braking_distance",
                description: "Stopping distance of a braking vehicle on a flat road",
                topic: "kinematics",
            }
        }

        fn generate(&self, rng: &mut dyn RngCore) -> Result<ProblemInstance, PhysgenError> {
            let converter = UnitConverter::new();
            let system = UnitSystem::random(rng);
            let (speed_unit, base_speed_unit, distance_unit, gravity) = match system {
                UnitSystem::Si => ("km/h", "m/s", "m", 9.81),
                UnitSystem::Imperial => ("mph", "ft/s", "ft", 32.2),
            };

            let speed = converter
                .random_value_for_unit(speed_unit, Relationship::None, None, rng)?
                .as_single()
                .unwrap_or_default();
            let friction = round_to_digits(SampleRange::new(0.3, 0.8).sample(rng), 2);

            let v = converter.convert(speed, speed_unit, base_speed_unit)?;
            let distance = v * v / (2.0 * friction * gravity);

            Ok(ProblemInstance::new(2, 3)
                .with_param("v1", round_to_digits(speed, 1))
                .with_param("mu", friction)
                .with_param("unitsSpeed", speed_unit)
                .with_param("unitsDistance", distance_unit)
                .with_rounded_answer("d", distance))
        }
    }

    mod generator_pipeline_tests {
        use super::*;

        #[test]
        fn test_registered_generator_produces_instance() {
            init_logging();
            let registry = GeneratorRegistry::new().with_generator(BrakingDistance);
            let mut rng = StdRng::seed_from_u64(7);

            let instance = registry.generate("braking_distance", &mut rng).unwrap();

            let distance = instance.answer("d").unwrap();
            assert!(distance > 0.0);
            assert!(instance.param("v1").and_then(ParamValue::as_number).is_some());
            assert!(instance.param("mu").and_then(ParamValue::as_number).is_some());
            let unit = instance
                .param("unitsSpeed")
                .and_then(ParamValue::as_text)
                .unwrap();
            assert!(unit == "km/h" || unit == "mph");
        }

        #[test]
        fn test_same_seed_reproduces_instance() {
            let registry = GeneratorRegistry::new().with_generator(BrakingDistance);

            let mut first_rng = StdRng::seed_from_u64(99);
            let mut second_rng = StdRng::seed_from_u64(99);
            let first = registry.generate("Braking_Distance", &mut first_rng).unwrap();
            let second = registry.generate("braking_distance", &mut second_rng).unwrap();

            assert_eq!(first.params, second.params);
            assert_eq!(first.correct_answers, second.correct_answers);
        }

        #[test]
        fn test_instance_serializes_with_contract_keys() {
            let registry = GeneratorRegistry::new().with_generator(BrakingDistance);
            let mut rng = StdRng::seed_from_u64(3);

            let instance = registry.generate("braking_distance", &mut rng).unwrap();
            let json = serde_json::to_value(&instance).unwrap();

            assert!(json["params"].is_object());
            assert!(json["correct_answers"].is_object());
            assert_eq!(json["nDigits"], 2);
            assert_eq!(json["sigfigs"], 3);
        }

        #[test]
        fn test_unknown_generator_is_reported() {
            let registry = GeneratorRegistry::new().with_generator(BrakingDistance);
            let mut rng = StdRng::seed_from_u64(0);

            let err = registry.generate("orbital_period", &mut rng).unwrap_err();
            assert_eq!(err, PhysgenError::UnknownGenerator("orbital_period".into()));
        }
    }

    mod cross_crate_tests {
        use super::*;

        #[test]
        fn test_draw_convert_round_pipeline() {
            let converter = UnitConverter::new();
            let mut rng = StdRng::seed_from_u64(11);

            let (slow, fast) = converter
                .random_value_for_unit("km/h", Relationship::Smaller, None, &mut rng)
                .unwrap()
                .as_pair()
                .unwrap();
            assert!(slow < fast);

            // Positive rates keep the ordering through a conversion.
            let slow_ms = converter.convert(slow, "km/h", "m/s").unwrap();
            let fast_ms = converter.convert(fast, "km/h", "m/s").unwrap();
            assert!(slow_ms < fast_ms);

            let rounded = round_to_sigfigs(fast_ms, 3);
            assert!((rounded - fast_ms).abs() <= fast_ms * 0.01);
        }

        #[test]
        fn test_pressure_units_agree_with_material_strength_factor() {
            // Tensile strengths are tabulated in MPa and reported in ksi on
            // the imperial side. The same ratio must fall out of the unit
            // registry's Pa-based rates.
            let converter = UnitConverter::new();
            let mpa_to_ksi = converter.convert(1.0, "MPa", "psi").unwrap() / 1000.0;
            assert_relative_eq!(mpa_to_ksi, 145.037738e-3, epsilon = 1e-6);
        }

        #[test]
        fn test_material_range_feeds_sampler() {
            let mut rng = StdRng::seed_from_u64(5);
            let steel = material_properties("steel", UnitSystem::Si).unwrap();

            let modulus = steel.elastic_modulus.sample(&mut rng);
            assert!(steel.elastic_modulus.contains(modulus));

            let shear = steel.shear_modulus(modulus);
            assert!(shear > 0.0 && shear < modulus);
        }

        #[test]
        fn test_fluid_table_and_masked_selection() {
            let mut rng = StdRng::seed_from_u64(21);
            let mut names = all_fluid_names();
            shuffle(&mut names, &mut rng);

            let mask = random_mask(names.len(), 3, 4, &mut rng);
            assert_eq!(mask.iter().filter(|&&on| on).count(), 3);

            for (name, keep) in names.iter().zip(&mask) {
                if *keep {
                    let props = fluid_properties(name, UnitSystem::Si).unwrap();
                    assert!(props.density > 0.0);
                }
            }
        }

        #[test]
        fn test_distractor_units_from_registry_symbols() {
            let mut rng = StdRng::seed_from_u64(8);
            let category = REGISTRY.category("pressure").unwrap();

            let distractors = random_permutation(&category.symbols(), &mut rng);
            assert_eq!(distractors.len(), category.len());
            assert!(distractors.contains(&"psi"));
        }
    }
}
