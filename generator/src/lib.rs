//! # opgen_generator
//!
//! Validates a [`GenerationRequest`], builds its fragments and renders the
//! C++ source registering the operator and its kernel skeleton.
//!
//! Generation is pure: the same request and configuration always give
//! byte-identical text, and a failed request produces no text at all. The
//! only side effect is the optional final write to a [`Destination`].
//!
//! # Example
//! ```
//! use opgen_generator::Generator;
//! use opgen_spec::{GenerationRequest, KernelBinding, OperatorSpec, ShapeRule};
//!
//! let request = GenerationRequest::new(
//!     OperatorSpec::new("Zero").input("to_zero", "int32").output("zeroed", "int32"),
//! )
//! .with_shape_rule(ShapeRule::fixed(0, [1000]))
//! .with_kernel(KernelBinding::new("ZeroOp"));
//!
//! let source = Generator::default().generate(&request).unwrap();
//! assert!(source.contains("REGISTER_OP(\"Zero\")"));
//! ```

mod config;
mod error;
pub mod module;

use std::io::Write;
use std::path::PathBuf;

use opgen_core::Fragment;
use opgen_ops::{emit_kernel_class_with, kernel_registration_for, registration_for};
use opgen_spec::{
    validate_request, GenerationRequest, KernelBinding, OperatorSpec, ShapeRule, ValidatedSpec,
};

pub use config::GeneratorConfig;
pub use error::GenerateError;
pub use module::{assemble_module, render_module, ModuleParts};

/// Where generated source goes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Destination {
    Stdout,
    File(PathBuf),
}

/// Turns requests into source text under one configuration.
///
/// Holds no state between requests, so one generator can serve many
/// threads at once.
#[derive(Debug, Clone, Default)]
pub struct Generator {
    config: GeneratorConfig,
}

impl Generator {
    pub fn new(config: GeneratorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Validate `request` and build its module fragment
    pub fn build(&self, request: &GenerationRequest) -> Result<Fragment, GenerateError> {
        let spec = validate_request(request, self.config.shape_policy())?;
        let parts = self.parts(&spec);
        tracing::debug!(
            op = %spec.name,
            kernel = spec.kernel.as_ref().map(|k| k.class_name.as_str()),
            "fragments built",
        );
        Ok(assemble_module(parts, &self.config))
    }

    /// Validate `request` and render it to source text
    pub fn generate(&self, request: &GenerationRequest) -> Result<String, GenerateError> {
        let text = self.build(request)?.render();
        tracing::debug!(op = %request.spec.name, bytes = text.len(), "module rendered");
        Ok(text)
    }

    /// Generate and write to `destination`; nothing is written on failure
    pub fn generate_to(
        &self,
        request:     &GenerationRequest,
        destination: &Destination,
    ) -> Result<(), GenerateError> {
        let text = self.generate(request)?;
        emit(&text, destination)
    }

    fn parts(&self, spec: &ValidatedSpec) -> ModuleParts {
        let kernel = spec.kernel.as_ref();
        ModuleParts {
            headers:             kernel.map(|k| k.headers.clone()).unwrap_or_default(),
            registration:        registration_for(spec),
            kernel_class:        kernel.map(|k| emit_kernel_class_with(&k.class_name, &self.config.placeholder)),
            kernel_registration: kernel_registration_for(spec),
        }
    }
}

/// Write rendered text to `destination`
pub fn emit(text: &str, destination: &Destination) -> Result<(), GenerateError> {
    match destination {
        Destination::Stdout => {
            let mut out = std::io::stdout().lock();
            out.write_all(text.as_bytes())
                .and_then(|()| out.flush())
                .map_err(GenerateError::Stdout)
        }
        Destination::File(path) => {
            std::fs::write(path, text).map_err(|source| GenerateError::Write {
                path: path.clone(),
                source,
            })?;
            tracing::info!(path = %path.display(), bytes = text.len(), "source written");
            Ok(())
        }
    }
}

/// One-call generation with the default configuration.
///
/// Attributes, inputs and outputs are `(name, type tag)` pairs in
/// declaration order; shape rules are `(output index, dims)` pairs.
pub fn generate(
    op_name:             &str,
    attributes:          &[(&str, &str)],
    inputs:              &[(&str, &str)],
    outputs:             &[(&str, &str)],
    shape_rules:         &[(usize, Vec<u64>)],
    kernel_class_name:   &str,
    implementing_header: Option<&str>,
) -> Result<String, GenerateError> {
    let spec = attributes.iter().fold(OperatorSpec::new(op_name), |s, (n, t)| s.attr(*n, *t));
    let spec = inputs.iter().fold(spec, |s, (n, t)| s.input(*n, *t));
    let spec = outputs.iter().fold(spec, |s, (n, t)| s.output(*n, *t));

    let kernel = implementing_header
        .into_iter()
        .fold(KernelBinding::new(kernel_class_name), |k, h| k.with_header(h));

    let request = GenerationRequest::new(spec)
        .with_shape_rules(shape_rules.iter().map(|(output, dims)| ShapeRule::fixed(*output, dims.clone())))
        .with_kernel(kernel);

    Generator::default().generate(&request)
}
