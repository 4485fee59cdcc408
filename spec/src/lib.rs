//! # opgen_spec
//!
//! Operator descriptions consumed by the generator, and their validation.
//!
//! - [`OperatorSpec`]: name, attributes, inputs and outputs of one operator.
//! - [`ShapeRule`]: how the shape function fills one output slot.
//! - [`KernelBinding`]: which kernel class is registered for the operator.
//! - [`GenerationRequest`]: the three above, as one unit of work. It can be
//!   built in code or loaded from a YAML spec file.
//!
//! [`validate_request`] turns a request into a [`ValidatedSpec`] or fails
//! with the first [`SpecError`] it finds.
//!
//! # Example
//! ```
//! use opgen_spec::{GenerationRequest, KernelBinding, OperatorSpec, ShapePolicy, ShapeRule};
//!
//! let request = GenerationRequest::new(
//!     OperatorSpec::new("Zero")
//!         .input("to_zero", "int32")
//!         .output("zeroed", "int32"),
//! )
//! .with_shape_rule(ShapeRule::fixed(0, [1000]))
//! .with_kernel(KernelBinding::new("ZeroOp"));
//!
//! let validated = opgen_spec::validate_request(&request, ShapePolicy::Permissive).unwrap();
//! assert_eq!(validated.outputs.len(), 1);
//! ```

mod error;
mod manifest;
mod validate;

use std::fmt;

use derive_more::From;

pub use core_types::{Device, TypeClass, TypeTag, ALLOWED_TYPE_TAGS};
pub use error::SpecError;
pub use validate::{
    validate_args, validate_attributes, validate_request, validate_shape_rules, Attribute,
    ShapePolicy, ValidatedAttributes, ValidatedSpec,
};

/// Composite attribute declarations this generator does not support yet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Composite {
    List,
    Tensor,
    Shape,
    Constraint,
}

impl Composite {
    pub fn as_str(self) -> &'static str {
        match self {
            Composite::List       => "list",
            Composite::Tensor     => "tensor",
            Composite::Shape      => "shape",
            Composite::Constraint => "constraint",
        }
    }

    /// Keyword used for this kind in spec files
    pub fn from_keyword(keyword: &str) -> Option<Composite> {
        match keyword {
            "list"       => Some(Composite::List),
            "tensor"     => Some(Composite::Tensor),
            "shape"      => Some(Composite::Shape),
            "constraint" => Some(Composite::Constraint),
            _ => None,
        }
    }
}

impl fmt::Display for Composite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Declared kind of an attribute, before validation
#[derive(Debug, Clone, PartialEq, Eq, From)]
pub enum AttrKind {
    /// A plain type tag, checked against the vocabulary on validation
    Scalar(String),
    /// Always rejected by validation
    Unsupported(Composite),
}

impl From<&str> for AttrKind {
    fn from(tag: &str) -> Self {
        AttrKind::Scalar(tag.to_string())
    }
}

impl From<TypeTag> for AttrKind {
    fn from(tag: TypeTag) -> Self {
        AttrKind::Scalar(tag.as_str().to_string())
    }
}

/// A named input or output. The type tag is passed through untouched.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ArgSpec {
    pub name:     String,
    pub type_tag: String,
}

impl ArgSpec {
    pub fn new(name: impl Into<String>, type_tag: impl Into<String>) -> Self {
        Self { name: name.into(), type_tag: type_tag.into() }
    }
}

/// Declarative description of one operator.
///
/// Attribute, input and output order is kept exactly as declared.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperatorSpec {
    pub name:       String,
    pub attributes: Vec<(String, AttrKind)>,
    pub inputs:     Vec<ArgSpec>,
    pub outputs:    Vec<ArgSpec>,
}

impl OperatorSpec {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name:       name.into(),
            attributes: Vec::new(),
            inputs:     Vec::new(),
            outputs:    Vec::new(),
        }
    }

    pub fn attr(mut self, name: impl Into<String>, kind: impl Into<AttrKind>) -> Self {
        self.attributes.push((name.into(), kind.into()));
        self
    }

    pub fn input(mut self, name: impl Into<String>, type_tag: impl Into<String>) -> Self {
        self.inputs.push(ArgSpec::new(name, type_tag));
        self
    }

    pub fn output(mut self, name: impl Into<String>, type_tag: impl Into<String>) -> Self {
        self.outputs.push(ArgSpec::new(name, type_tag));
        self
    }
}

/// Where an output's shape comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputShape {
    /// Literal dimension sizes; an empty list is a scalar
    Fixed(Vec<u64>),
    /// Same shape as the input at this index
    SameAsInput(usize),
}

/// Shape assignment for one output slot
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShapeRule {
    pub output: usize,
    pub shape:  OutputShape,
}

impl ShapeRule {
    pub fn fixed(output: usize, dims: impl Into<Vec<u64>>) -> Self {
        Self { output, shape: OutputShape::Fixed(dims.into()) }
    }

    pub fn same_as_input(output: usize, input: usize) -> Self {
        Self { output, shape: OutputShape::SameAsInput(input) }
    }
}

/// Kernel class registered for an operator
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KernelBinding {
    pub class_name: String,
    pub device:     Device,
    /// Headers declaring the implementing function, included in order
    pub headers:    Vec<String>,
}

impl KernelBinding {
    pub fn new(class_name: impl Into<String>) -> Self {
        Self { class_name: class_name.into(), device: Device::Cpu, headers: Vec::new() }
    }

    pub fn with_header(mut self, header: impl Into<String>) -> Self {
        self.headers.push(header.into());
        self
    }
}

/// Everything needed to emit one operator source file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    pub spec:        OperatorSpec,
    pub shape_rules: Vec<ShapeRule>,
    pub kernel:      Option<KernelBinding>,
}

impl GenerationRequest {
    pub fn new(spec: OperatorSpec) -> Self {
        Self { spec, shape_rules: Vec::new(), kernel: None }
    }

    pub fn with_shape_rule(mut self, rule: ShapeRule) -> Self {
        self.shape_rules.push(rule);
        self
    }

    pub fn with_shape_rules(mut self, rules: impl IntoIterator<Item = ShapeRule>) -> Self {
        self.shape_rules.extend(rules);
        self
    }

    pub fn with_kernel(mut self, kernel: KernelBinding) -> Self {
        self.kernel = Some(kernel);
        self
    }
}
