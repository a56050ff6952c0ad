//! Per-render random line selection.

use crate::template::{Render, Template};
use crate::TemplateError;
use phony_core::{GeneratorError, Registry};
use rand::{Rng, RngCore};

/// A set of one-line templates; each render picks one uniformly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Choice {
    lines: Vec<Template>,
}

impl Choice {
    /// Compile every line on its own, with a `\n` appended to each.
    pub fn compile<I, S>(lines: I) -> Result<Self, TemplateError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let lines: Vec<Template> = lines
            .into_iter()
            .map(|line| Template::compile(&format!("{}\n", line.as_ref())))
            .collect();

        if lines.is_empty() {
            return Err(TemplateError::NoLines);
        }

        Ok(Self { lines })
    }

    /// The compiled lines, in input order.
    pub fn lines(&self) -> &[Template] {
        &self.lines
    }
}

impl Render for Choice {
    fn render(&self, registry: &Registry, rng: &mut dyn RngCore) -> Result<String, GeneratorError> {
        let idx = rng.random_range(0..self.lines.len());
        self.lines[idx].render(registry, rng)
    }
}
