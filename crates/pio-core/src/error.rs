//! Error types for pio-core

/// Result type for pio-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while building or reading a project configuration
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A root or `extra_configs` document could not be found
    #[error("Configuration source not found: {path}")]
    MissingSource { path: String },

    /// A secondary document failed to parse
    #[error("Failed to parse {path}: {source}")]
    DocumentParse {
        path: String,
        #[source]
        source: pio_ini::Error,
    },

    #[error("Section not found: [{section}]")]
    SectionNotFound { section: String },

    #[error("Option not found: {option} in [{section}]")]
    OptionNotFound { section: String, option: String },

    /// `items`/`options` need exactly one of a section or an environment
    #[error("Ambiguous arguments: pass exactly one of a section or an environment name")]
    AmbiguousSelector,

    #[error("No environments are declared in the project configuration")]
    NoEnvironments,

    #[error("Unknown environment names '{}'. Valid names are '{}'", .names.join(", "), .known.join(", "))]
    UnknownEnvironments {
        names: Vec<String>,
        known: Vec<String>,
    },

    /// `${section.option}` names something that does not exist
    #[error("Undefined reference ${{{section}.{option}}}")]
    UndefinedReference { section: String, option: String },

    /// Interpolation revisited an option that is still being resolved
    #[error("Circular reference: {}", .chain.join(" -> "))]
    CircularReference { chain: Vec<String> },

    // Transparent wrappers for underlying crate errors
    /// Filesystem error from pio-fs
    #[error(transparent)]
    Fs(#[from] pio_fs::Error),

    /// Parse error from pio-ini
    #[error(transparent)]
    Ini(#[from] pio_ini::Error),

    /// JSON serialization error
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Missing sources, missing lookups and bad selector arguments.
    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            Self::MissingSource { .. }
                | Self::SectionNotFound { .. }
                | Self::OptionNotFound { .. }
                | Self::AmbiguousSelector
                | Self::NoEnvironments
                | Self::UnknownEnvironments { .. }
        )
    }

    /// Undefined or circular `${...}` references.
    pub fn is_interpolation_error(&self) -> bool {
        matches!(
            self,
            Self::UndefinedReference { .. } | Self::CircularReference { .. }
        )
    }

    /// Malformed document text.
    pub fn is_parse_error(&self) -> bool {
        matches!(self, Self::DocumentParse { .. } | Self::Ini(_))
    }
}
