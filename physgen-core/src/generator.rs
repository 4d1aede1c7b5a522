//! Generator plugin seam
//!
//! Problem generators live outside this workspace. Each one implements
//! `ProblemGenerator` and gets registered by name; the registry dispatches
//! with a caller-supplied RNG so a seeded run reproduces every draw.

use crate::{PhysgenError, ProblemInstance};
use rand::RngCore;
use serde::Serialize;
use std::collections::HashMap;
use std::sync::Arc;

/// Metadata describing a registered generator
#[derive(Debug, Clone, Serialize)]
pub struct GeneratorMeta {
    pub name: &'static str,
    pub description: &'static str,
    pub topic: &'static str,
}

/// A source of randomized problem instances
pub trait ProblemGenerator: Send + Sync {
    fn meta(&self) -> GeneratorMeta;
    fn generate(&self, rng: &mut dyn RngCore) -> Result<ProblemInstance, PhysgenError>;
}

/// Name-keyed registry of problem generators
pub struct GeneratorRegistry {
    generators: HashMap<String, Arc<dyn ProblemGenerator>>,
}

impl GeneratorRegistry {
    pub fn new() -> Self {
        Self {
            generators: HashMap::new(),
        }
    }

    pub fn with_generator<G: ProblemGenerator + 'static>(mut self, g: G) -> Self {
        let name = g.meta().name.to_lowercase();
        self.generators.insert(name, Arc::new(g));
        self
    }

    pub fn get(&self, name: &str) -> Option<&dyn ProblemGenerator> {
        self.generators.get(&name.to_lowercase()).map(|g| g.as_ref())
    }

    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.generators.keys().map(|k| k.as_str()).collect();
        names.sort_unstable();
        names
    }

    /// Metadata for every registered generator, sorted by name
    pub fn metas(&self) -> Vec<GeneratorMeta> {
        let mut metas: Vec<GeneratorMeta> = self.generators.values().map(|g| g.meta()).collect();
        metas.sort_by_key(|m| m.name);
        metas
    }

    pub fn len(&self) -> usize {
        self.generators.len()
    }

    pub fn is_empty(&self) -> bool {
        self.generators.is_empty()
    }

    /// Runs the named generator with the supplied RNG
    pub fn generate(
        &self,
        name: &str,
        rng: &mut dyn RngCore,
    ) -> Result<ProblemInstance, PhysgenError> {
        let generator = self
            .get(name)
            .ok_or_else(|| PhysgenError::UnknownGenerator(name.to_string()))?;
        tracing::debug!(generator = generator.meta().name, "generating problem instance");
        generator.generate(rng)
    }
}

impl Default for GeneratorRegistry {
    fn default() -> Self {
        Self::new()
    }
}
