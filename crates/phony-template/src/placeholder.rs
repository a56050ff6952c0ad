//! Placeholder token matching.

use regex::{Captures, Regex};
use std::sync::LazyLock;

/// Matches `{{ name }}`, `{{name.first}}`, `{{ id:5 }}`, `{{ x:a,b }}`.
pub(crate) static PLACEHOLDER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"\{\{ *(?P<name>(?:[a-zA-Z0-9]+(?:\.[a-zA-Z0-9]+)?)+)(?::(?P<args>[a-zA-Z0-9,]+))? *\}\}",
    )
    .expect("placeholder pattern is valid")
});

/// A parsed `{{ ... }}` token: generator name plus optional arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placeholder {
    name: String,
    args: Option<Vec<String>>,
}

impl Placeholder {
    pub(crate) fn from_captures(caps: &Captures<'_>) -> Self {
        let name = caps["name"].to_string();
        let args = caps
            .name("args")
            .map(|args| args.as_str().split(',').map(str::to_string).collect());
        Self { name, args }
    }

    /// Parse a single token. Returns `None` unless the whole of `token` is
    /// one well-formed placeholder.
    pub fn parse(token: &str) -> Option<Self> {
        let caps = PLACEHOLDER.captures(token)?;
        let whole = caps.get(0)?;
        if whole.start() != 0 || whole.end() != token.len() {
            return None;
        }
        Some(Self::from_captures(&caps))
    }

    /// The dotted generator name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Arguments after `:`, split on commas. `None` when no `:` was given.
    pub fn args(&self) -> Option<&[String]> {
        self.args.as_deref()
    }
}
