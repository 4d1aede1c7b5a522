//! Physgen Random - Randomization utilities
//!
//! Small draws problem generators vary their structure with: in-place
//! shuffles, value-returning permutations, bounded integer draws, and boolean
//! masks. Every function takes the RNG as a parameter so a seeded run
//! reproduces its sequence exactly, and all of them follow the never-panic
//! philosophy: out-of-domain inputs degrade to well-defined results.

mod draw;
mod permute;

pub use draw::{random_int, random_mask};
pub use permute::{random_permutation, random_permutation_of_range, shuffle};
