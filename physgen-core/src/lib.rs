//! Physgen Core - Fundamental types
//!
//! This crate provides the types shared by every Physgen crate:
//! - `PhysgenError`: one error taxonomy for conversion, draws, and dispatch
//! - `SampleRange`: half-open interval randomized draws sample from
//! - `UnitSystem`: SI versus imperial parameter sets
//! - `ProblemInstance` / `ParamValue`: the contract external generators fill
//! - `ProblemGenerator` / `GeneratorRegistry`: the plugin seam those
//!   generators register through

mod error;
mod generator;
mod problem;
mod round;
mod sample;
mod system;

pub use error::PhysgenError;
pub use generator::{GeneratorMeta, GeneratorRegistry, ProblemGenerator};
pub use problem::{ParamValue, ProblemInstance};
pub use round::{round_to_digits, round_to_sigfigs};
pub use sample::SampleRange;
pub use system::UnitSystem;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{
        round_to_digits, round_to_sigfigs, GeneratorMeta, GeneratorRegistry, ParamValue,
        PhysgenError, ProblemGenerator, ProblemInstance, SampleRange, UnitSystem,
    };
}
