//! Generator configuration, loaded from YAML or built with [`Default`].
//!
//! # YAML Format
//! ```yaml
//! framework_headers:
//!   - tensorflow/core/framework/op.h
//!   - tensorflow/core/framework/shape_inference.h
//!   - tensorflow/core/framework/op_kernel.h
//! namespace: tensorflow
//! strict_shape_rules: false
//! placeholder: Kernel implementation goes here
//! ```
//! Every field is optional. A header written as `<name>` is included with
//! angle brackets.

use std::path::Path;

use opgen_ops::DEFAULT_PLACEHOLDER;
use opgen_spec::ShapePolicy;

use crate::GenerateError;

/// Configuration shared by every request a [`Generator`](crate::Generator) handles.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GeneratorConfig {
    /// Framework headers included first, in order.
    #[serde(default = "default_framework_headers")]
    pub framework_headers: Vec<String>,
    /// Namespace brought in with `using namespace`.
    #[serde(default = "default_namespace")]
    pub namespace: String,
    /// Reject repeated output indices in shape rules.
    #[serde(default)]
    pub strict_shape_rules: bool,
    /// Comment text placed in the generated compute body.
    #[serde(default = "default_placeholder")]
    pub placeholder: String,
}

fn default_framework_headers() -> Vec<String> {
    [
        "tensorflow/core/framework/op.h",
        "tensorflow/core/framework/shape_inference.h",
        "tensorflow/core/framework/op_kernel.h",
    ]
    .into_iter()
    .map(String::from)
    .collect()
}

fn default_namespace() -> String {
    "tensorflow".to_string()
}

fn default_placeholder() -> String {
    DEFAULT_PLACEHOLDER.to_string()
}

impl GeneratorConfig {
    /// Loads configuration from a YAML file.
    pub fn from_file(path: &Path) -> Result<Self, GenerateError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            GenerateError::Config(format!("cannot read config '{}': {e}", path.display()))
        })?;
        Self::from_yaml(&content)
    }

    /// Parses configuration from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self, GenerateError> {
        serde_yaml::from_str(yaml)
            .map_err(|e| GenerateError::Config(format!("YAML parse error: {e}")))
    }

    /// Serialises configuration to YAML.
    pub fn to_yaml(&self) -> Result<String, GenerateError> {
        serde_yaml::to_string(self)
            .map_err(|e| GenerateError::Config(format!("YAML serialise error: {e}")))
    }

    pub fn shape_policy(&self) -> ShapePolicy {
        if self.strict_shape_rules {
            ShapePolicy::Strict
        } else {
            ShapePolicy::Permissive
        }
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            framework_headers: default_framework_headers(),
            namespace: default_namespace(),
            strict_shape_rules: false,
            placeholder: default_placeholder(),
        }
    }
}
