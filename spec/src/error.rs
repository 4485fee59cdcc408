//! Error types for operator descriptions.

/// Errors raised while loading or validating a generation request.
///
/// Every variant is detected before any fragment is built.
#[derive(Debug, thiserror::Error)]
pub enum SpecError {
    /// An attribute is not a plain tag from the allowed vocabulary.
    #[error("attribute '{name}': unsupported attribute kind: {kind}")]
    UnsupportedAttributeKind { name: String, kind: String },

    /// An attribute, input or output entry is not a well-formed name/type pair.
    #[error("malformed {section} entry: {detail}")]
    MalformedSpecEntry { section: &'static str, detail: String },

    /// A shape rule does not fit the declared inputs/outputs.
    #[error("inconsistent shape rule for output {output}: {detail}")]
    InconsistentShapeRule { output: usize, detail: String },

    /// The spec file could not be read.
    #[error("failed to read spec file: {0}")]
    Read(#[from] std::io::Error),

    /// The spec file is not valid YAML or does not have the expected layout.
    #[error("failed to parse spec file: {0}")]
    Parse(#[from] serde_yaml::Error),
}

impl SpecError {
    pub(crate) fn malformed(section: &'static str, detail: impl Into<String>) -> Self {
        SpecError::MalformedSpecEntry { section, detail: detail.into() }
    }

    pub(crate) fn shape(output: usize, detail: impl Into<String>) -> Self {
        SpecError::InconsistentShapeRule { output, detail: detail.into() }
    }
}
