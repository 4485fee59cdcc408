//! YAML spec files.
//!
//! # Format
//! ```yaml
//! name: Zero
//! attributes:          # ordered mapping, name -> type tag
//!   axis: int32
//! inputs:              # ordered list of `name: type` pairs
//!   - to_zero: int32
//! outputs:
//!   - zeroed: int32
//! shape_rules:
//!   - output: 0
//!     dims: [1000]
//! kernel:
//!   class: ZeroOp
//!   headers: [gen_halide_zero_op.h]
//! ```
//!
//! A shape rule carries either `dims` or `same_as_input: <input index>`.
//! Attribute values that are lists, or single-key mappings keyed by
//! `list`, `tensor`, `shape` or `constraint`, load as unsupported kinds and
//! are rejected on validation. Any other non-string value (null, booleans,
//! numbers, other mappings) is rejected while loading, with the same
//! [`SpecError::UnsupportedAttributeKind`].

use std::path::Path;

use serde_yaml::{Mapping, Value};

use core_types::Device;

use crate::{
    ArgSpec, AttrKind, Composite, GenerationRequest, KernelBinding, OperatorSpec, OutputShape,
    ShapeRule, SpecError,
};

#[derive(Debug, serde::Deserialize)]
#[serde(deny_unknown_fields)]
struct RawRequest {
    name: String,
    #[serde(default)]
    attributes: Option<Mapping>,
    #[serde(default)]
    inputs: Option<Vec<Value>>,
    #[serde(default)]
    outputs: Option<Vec<Value>>,
    #[serde(default)]
    shape_rules: Option<Vec<RawShapeRule>>,
    #[serde(default)]
    kernel: Option<RawKernel>,
}

#[derive(Debug, serde::Deserialize)]
#[serde(deny_unknown_fields)]
struct RawShapeRule {
    output: usize,
    #[serde(default)]
    dims: Option<Vec<i64>>,
    #[serde(default)]
    same_as_input: Option<usize>,
}

#[derive(Debug, serde::Deserialize)]
#[serde(deny_unknown_fields)]
struct RawKernel {
    class: String,
    #[serde(default)]
    device: Device,
    #[serde(default)]
    headers: Vec<String>,
}

impl GenerationRequest {
    /// Loads a request from a YAML spec file.
    pub fn from_file(path: &Path) -> Result<Self, SpecError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parses a request from a YAML string.
    ///
    /// Entries that are not name/type pairs fail here; tag membership is
    /// left to validation.
    pub fn from_yaml(yaml: &str) -> Result<Self, SpecError> {
        let raw: RawRequest = serde_yaml::from_str(yaml)?;

        let mut spec = OperatorSpec::new(raw.name);
        for (key, value) in raw.attributes.unwrap_or_default() {
            let name = key.as_str().ok_or_else(|| {
                SpecError::malformed(
                    "attribute",
                    format!("attribute names must be strings, found {}", describe(&key)),
                )
            })?;
            let kind = attr_kind(name, &value)?;
            spec = spec.attr(name, kind);
        }
        for value in raw.inputs.unwrap_or_default() {
            let arg = arg_entry("input", &value)?;
            spec.inputs.push(arg);
        }
        for value in raw.outputs.unwrap_or_default() {
            let arg = arg_entry("output", &value)?;
            spec.outputs.push(arg);
        }

        let shape_rules = raw
            .shape_rules
            .unwrap_or_default()
            .into_iter()
            .map(shape_rule)
            .collect::<Result<Vec<_>, _>>()?;

        let kernel = raw.kernel.map(|k| KernelBinding {
            class_name: k.class,
            device:     k.device,
            headers:    k.headers,
        });

        Ok(GenerationRequest { spec, shape_rules, kernel })
    }
}

fn attr_kind(name: &str, value: &Value) -> Result<AttrKind, SpecError> {
    let composite = match value {
        Value::String(tag) => return Ok(AttrKind::Scalar(tag.clone())),
        Value::Sequence(_) => Some(Composite::List),
        Value::Mapping(map) if map.len() == 1 => map
            .iter()
            .next()
            .and_then(|(k, _)| k.as_str())
            .and_then(Composite::from_keyword),
        Value::Tagged(tagged) => {
            let tag = tagged.tag.to_string();
            Composite::from_keyword(tag.trim_start_matches('!'))
        }
        _ => None,
    };

    composite.map(AttrKind::Unsupported).ok_or_else(|| SpecError::UnsupportedAttributeKind {
        name: name.to_string(),
        kind: format!("expected a type tag, found {}", describe(value)),
    })
}

fn arg_entry(section: &'static str, value: &Value) -> Result<ArgSpec, SpecError> {
    if let Value::Mapping(map) = value {
        if let (1, Some((k, v))) = (map.len(), map.iter().next()) {
            return match (k.as_str(), v.as_str()) {
                (Some(name), Some(tag)) => Ok(ArgSpec::new(name, tag)),
                _ => Err(SpecError::malformed(
                    section,
                    format!("expected `name: type` strings, found {} -> {}", describe(k), describe(v)),
                )),
            };
        }
    }
    Err(SpecError::malformed(
        section,
        format!("expected a single `name: type` pair, found {}", describe(value)),
    ))
}

fn shape_rule(raw: RawShapeRule) -> Result<ShapeRule, SpecError> {
    let shape = match (raw.dims, raw.same_as_input) {
        (Some(dims), None) => {
            let dims = dims
                .into_iter()
                .enumerate()
                .map(|(i, d)| {
                    u64::try_from(d).ok().filter(|&d| d > 0).ok_or_else(|| {
                        SpecError::shape(
                            raw.output,
                            format!("dimension {i} is {d}, dimensions must be positive"),
                        )
                    })
                })
                .collect::<Result<Vec<_>, _>>()?;
            OutputShape::Fixed(dims)
        }
        (None, Some(input)) => OutputShape::SameAsInput(input),
        _ => {
            return Err(SpecError::malformed(
                "shape rule",
                format!("rule for output {} needs exactly one of `dims` or `same_as_input`", raw.output),
            ));
        }
    };
    Ok(ShapeRule { output: raw.output, shape })
}

fn describe(value: &Value) -> &'static str {
    match value {
        Value::Null        => "null",
        Value::Bool(_)     => "a boolean",
        Value::Number(_)   => "a number",
        Value::String(_)   => "a string",
        Value::Sequence(_) => "a list",
        Value::Mapping(_)  => "a mapping",
        Value::Tagged(_)   => "a tagged value",
    }
}
