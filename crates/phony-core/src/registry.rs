//! The generator registry and the resolver handed to generators.

use crate::clock::{Clock, SystemClock};
use crate::error::GeneratorError;
use crate::generators;
use crate::wordlist::WordList;
use chrono::{DateTime, Utc};
use rand::{Rng, RngCore};
use rand_distr::{Distribution, StandardNormal};
use std::collections::{BTreeSet, HashMap};
use std::fmt;
use std::sync::Arc;

/// Maximum nesting of generator-calls-generator before a lookup fails.
///
/// Builtin compositions are at most three levels deep (`email` -> `domain`
/// -> `domain.tld`); the limit only trips on cyclic user registrations.
pub const MAX_COMPOSITION_DEPTH: usize = 32;

/// A value-producing function stored in the registry.
///
/// `args` is `None` when the placeholder carried no `:` suffix, and
/// `Some(..)` with the comma-split tokens otherwise.
pub type GeneratorFn = Arc<
    dyn Fn(&mut Resolver<'_>, Option<&[String]>) -> Result<String, GeneratorError> + Send + Sync,
>;

/// Mapping from generator name to generator function.
#[derive(Clone)]
pub struct Registry {
    generators: HashMap<String, GeneratorFn>,
    clock: Arc<dyn Clock>,
}

impl Registry {
    /// Create an empty registry backed by the system clock.
    pub fn new() -> Self {
        Self {
            generators: HashMap::new(),
            clock: Arc::new(SystemClock),
        }
    }

    /// Create a registry holding every builtin generator plus one generator
    /// per word-list category.
    pub fn builtin(words: &WordList) -> Self {
        let mut registry = Self::new();
        generators::register_builtins(&mut registry);
        registry.register_wordlist(words);
        registry
    }

    /// Replace the clock used by time-based generators.
    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Arc::new(clock);
        self
    }

    /// Add or overwrite the generator registered under `name`.
    pub fn register<F>(&mut self, name: impl Into<String>, generator: F)
    where
        F: Fn(&mut Resolver<'_>, Option<&[String]>) -> Result<String, GeneratorError>
            + Send
            + Sync
            + 'static,
    {
        self.generators.insert(name.into(), Arc::new(generator));
    }

    /// Register one generator per word-list category, each picking a
    /// uniformly random entry.
    pub fn register_wordlist(&mut self, words: &WordList) {
        for (category, entries) in words.iter() {
            let category = category.to_string();
            let entries: Arc<[String]> = entries.into();
            let name = category.clone();
            self.register(name, move |resolver, _args| {
                if entries.is_empty() {
                    return Err(GeneratorError::EmptyWordList {
                        category: category.clone(),
                    });
                }
                let idx = resolver.below(entries.len());
                Ok(entries[idx].clone())
            });
        }
    }

    /// Whether a generator is registered under `name`.
    pub fn contains(&self, name: &str) -> bool {
        self.generators.contains_key(name)
    }

    /// Every registered generator name, sorted.
    pub fn list(&self) -> BTreeSet<&str> {
        self.generators.keys().map(String::as_str).collect()
    }

    /// Start a resolution session drawing randomness from `rng`.
    pub fn resolver<'a>(&'a self, rng: &'a mut dyn RngCore) -> Resolver<'a> {
        Resolver {
            registry: self,
            rng,
            depth: 0,
        }
    }

    /// Generate a value for `name` without arguments.
    pub fn get<R: RngCore>(&self, rng: &mut R, name: &str) -> Result<String, GeneratorError> {
        self.resolver(rng).get(name)
    }

    /// Generate a value for `name`, passing `args` through to the generator.
    pub fn get_with_args<R: RngCore>(
        &self,
        rng: &mut R,
        name: &str,
        args: Option<&[String]>,
    ) -> Result<String, GeneratorError> {
        self.resolver(rng).get_with_args(name, args)
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Registry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registry")
            .field("generators", &self.list())
            .finish_non_exhaustive()
    }
}

/// Handle passed to every generator call.
///
/// Gives generators access to the shared RNG and clock, and lets composed
/// generators look up other generators by name.
pub struct Resolver<'a> {
    registry: &'a Registry,
    rng: &'a mut dyn RngCore,
    depth: usize,
}

impl Resolver<'_> {
    /// Generate a value for `name` without arguments.
    pub fn get(&mut self, name: &str) -> Result<String, GeneratorError> {
        self.get_with_args(name, None)
    }

    /// Generate a value for `name`, passing `args` through to the generator.
    pub fn get_with_args(
        &mut self,
        name: &str,
        args: Option<&[String]>,
    ) -> Result<String, GeneratorError> {
        let registry = self.registry;
        let generator = registry
            .generators
            .get(name)
            .ok_or_else(|| GeneratorError::unknown(name))?;

        if self.depth >= MAX_COMPOSITION_DEPTH {
            return Err(GeneratorError::CompositionTooDeep {
                name: name.to_string(),
                limit: MAX_COMPOSITION_DEPTH,
            });
        }

        self.depth += 1;
        let result = generator(self, args);
        self.depth -= 1;
        result
    }

    /// Uniform integer in `[0, n)`. `n` must be non-zero.
    pub fn below(&mut self, n: usize) -> usize {
        self.rng.random_range(0..n)
    }

    /// Uniform float in `[0, 1)`.
    pub fn unit(&mut self) -> f64 {
        self.rng.random::<f64>()
    }

    /// Sample from the standard normal distribution.
    pub fn standard_normal(&mut self) -> f64 {
        StandardNormal.sample(&mut self.rng)
    }

    /// Current instant according to the registry's clock.
    pub fn now(&self) -> DateTime<Utc> {
        self.registry.clock.now()
    }
}
