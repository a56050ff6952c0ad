//! Placeholder template compiler for phony.
//!
//! A template is arbitrary text containing `{{ generator }}` placeholders.
//! Compiling scans the text once and records where every placeholder sits;
//! rendering walks the compiled segments and asks the [`Registry`] for a
//! fresh value for each placeholder.
//!
//! ```text
//! "Hello {{ name }}, your id is {{id}}\n"
//!        │
//!        ▼  Template::compile
//! [Literal("Hello "), Placeholder(name), Literal(", your id is "),
//!  Placeholder(id), Literal("\n")]
//!        │
//!        ▼  render(&registry, &mut rng)
//! "Hello Ada Lovelace, your id is q3ZfA09kLm\n"
//! ```
//!
//! # Placeholder syntax
//!
//! `{{`, optional spaces, a generator name, an optional `:`-prefixed
//! comma-separated argument list, optional spaces, `}}`. Names are one or
//! more alphanumeric segments, each optionally followed by a single
//! `.segment`. Anything between braces that does not fit this shape is left
//! in the output untouched.
//!
//! # Example
//!
//! ```rust
//! use phony_core::{Registry, WordList};
//! use phony_template::{Render, Template};
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//!
//! let words = WordList::from_yaml("name.first: [Ada]\nname.last: [Lovelace]\n").unwrap();
//! let registry = Registry::builtin(&words);
//! let mut rng = StdRng::seed_from_u64(42);
//!
//! let template = Template::compile("Hello {{ name }}!");
//! assert_eq!(template.render(&registry, &mut rng).unwrap(), "Hello Ada Lovelace!");
//! ```

pub mod choice;
pub mod placeholder;
pub mod template;

// Re-exports for convenience
pub use choice::Choice;
pub use placeholder::Placeholder;
pub use template::{Render, Template};

use phony_core::Registry;

/// Error type for template compilation.
#[derive(Debug, thiserror::Error)]
pub enum TemplateError {
    /// A line choice was compiled from zero lines
    #[error("cannot choose a line from an empty template")]
    NoLines,
}

/// Names referenced by `template` that `registry` cannot resolve.
///
/// Rendering would fail on the first of these; callers can use this to
/// report problems before the first render.
pub fn unresolved<'t>(template: &'t Template, registry: &Registry) -> Vec<&'t str> {
    template
        .placeholders()
        .map(Placeholder::name)
        .filter(|name| !registry.contains(name))
        .collect()
}
