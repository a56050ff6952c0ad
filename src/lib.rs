//! phony
//!
//! Renders a text template full of `{{ generator }}` placeholders over and
//! over, each time with freshly generated fake data, on a fixed schedule.
//!
//! # Crates
//!
//! - `phony_core` - the generator registry, builtin generators and word lists
//! - `phony_template` - the placeholder compiler and line chooser
//! - this crate - CLI options, tick parsing and the emission loop
//!
//! # CLI Usage
//!
//! ```bash
//! # output names
//! echo '{{ name }}' | phony
//!
//! # output names every 1s
//! echo '{{ name }}' | phony --tick 1s
//!
//! # output a single name
//! echo '{{ name }}' | phony --max 1
//!
//! # pick one line per tick
//! printf 'GET /users/{{ id }}\nPOST {{ email }}\n' | phony --choice-line
//! ```

pub mod config;
pub mod emit;

pub use config::PhonyOpts;
pub use emit::{emit, Schedule};

use phony_template::{Choice, Render, Template};

/// Compile raw template input into a renderer.
///
/// With `choice_line`, every line of `text` becomes a separate candidate; a
/// final line terminator does not produce an extra empty candidate.
pub fn compile(text: &str, choice_line: bool) -> anyhow::Result<Box<dyn Render>> {
    if choice_line {
        Ok(Box::new(Choice::compile(text.lines())?))
    } else {
        Ok(Box::new(Template::compile(text)))
    }
}

/// Format generator names the way `--list` prints them.
pub fn format_list<'a>(names: impl IntoIterator<Item = &'a str>) -> String {
    let mut out = String::from("\n");
    for name in names {
        out.push_str("  ");
        out.push_str(name);
        out.push('\n');
    }
    out.push('\n');
    out
}
