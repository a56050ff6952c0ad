//! Error types for generator lookups and word-list loading.

/// Error type for generator operations.
#[derive(Debug, thiserror::Error)]
pub enum GeneratorError {
    /// No generator is registered under this name
    #[error("unknown generator: {name}")]
    UnknownGenerator { name: String },

    /// A word-list category was registered without any entries
    #[error("word list '{category}' is empty")]
    EmptyWordList { category: String },

    /// Nested generator calls went deeper than the registry allows
    #[error("generator '{name}' exceeded the composition depth limit of {limit}")]
    CompositionTooDeep { name: String, limit: usize },

    /// The clock reported an instant that does not fit in i64 nanoseconds
    #[error("current time cannot be represented as nanoseconds since the Unix epoch")]
    ClockOutOfRange,
}

impl GeneratorError {
    /// Shorthand for an unknown generator error.
    pub fn unknown(name: impl Into<String>) -> Self {
        Self::UnknownGenerator { name: name.into() }
    }
}

/// Error type for loading word lists.
#[derive(Debug, thiserror::Error)]
pub enum WordListError {
    /// Error reading the word-list file
    #[error("Failed to read word list file: {0}")]
    IoError(#[from] std::io::Error),

    /// Error parsing YAML
    #[error("Failed to parse word list YAML: {0}")]
    YamlError(#[from] serde_yaml::Error),
}
