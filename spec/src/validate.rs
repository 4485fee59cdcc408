//! Validator: checks a request against the type vocabulary and its own
//! declarations before any code is built.

use std::collections::HashSet;

use core_types::TypeTag;

use crate::{
    ArgSpec, AttrKind, GenerationRequest, KernelBinding, OperatorSpec, OutputShape, ShapeRule,
    SpecError,
};

/// How repeated output indices in the shape rules are treated
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ShapePolicy {
    /// Emit every rule in order; a later assignment overrides an earlier one
    #[default]
    Permissive,
    /// Reject a second rule for the same output
    Strict,
}

/// An attribute whose tag is a member of the vocabulary
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    pub name: String,
    pub ty:   TypeTag,
}

/// Attributes in declaration order, all with vocabulary tags
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidatedAttributes(Vec<Attribute>);

impl ValidatedAttributes {
    pub fn iter(&self) -> std::slice::Iter<'_, Attribute> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<'a> IntoIterator for &'a ValidatedAttributes {
    type Item = &'a Attribute;
    type IntoIter = std::slice::Iter<'a, Attribute>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// A request that passed every check
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedSpec {
    pub name:        String,
    pub attributes:  ValidatedAttributes,
    pub inputs:      Vec<ArgSpec>,
    pub outputs:     Vec<ArgSpec>,
    pub shape_rules: Vec<ShapeRule>,
    pub kernel:      Option<KernelBinding>,
}

/// Check every attribute against the vocabulary, keeping declaration order.
///
/// Composite kinds (lists, tensors, shapes, constraints) and unknown tags
/// fail with [`SpecError::UnsupportedAttributeKind`].
pub fn validate_attributes(
    attributes: &[(String, AttrKind)],
) -> Result<ValidatedAttributes, SpecError> {
    let mut seen = HashSet::new();
    let mut validated = Vec::with_capacity(attributes.len());

    for (name, kind) in attributes {
        if name.is_empty() {
            return Err(SpecError::malformed("attribute", "attribute name is empty"));
        }
        if !seen.insert(name.as_str()) {
            return Err(SpecError::malformed(
                "attribute",
                format!("attribute '{name}' is declared more than once"),
            ));
        }

        let ty = match kind {
            AttrKind::Scalar(tag) => TypeTag::from_tag(tag).ok_or_else(|| {
                SpecError::UnsupportedAttributeKind {
                    name: name.clone(),
                    kind: format!("'{tag}' is not an allowed type tag"),
                }
            })?,
            AttrKind::Unsupported(composite) => {
                return Err(SpecError::UnsupportedAttributeKind {
                    name: name.clone(),
                    kind: format!("{composite} attributes are not supported"),
                });
            }
        };
        validated.push(Attribute { name: name.clone(), ty });
    }

    Ok(ValidatedAttributes(validated))
}

/// Inputs and outputs only need a non-empty name and tag; tags are opaque.
pub fn validate_args(section: &'static str, args: &[ArgSpec]) -> Result<(), SpecError> {
    for (i, arg) in args.iter().enumerate() {
        if arg.name.is_empty() {
            return Err(SpecError::malformed(section, format!("entry {i} has an empty name")));
        }
        if arg.type_tag.is_empty() {
            return Err(SpecError::malformed(
                section,
                format!("'{}' has an empty type", arg.name),
            ));
        }
    }
    Ok(())
}

/// Every rule must target a declared output; fixed dimensions must be
/// positive and pass-through rules must name a declared input.
pub fn validate_shape_rules(
    rules:   &[ShapeRule],
    spec:    &OperatorSpec,
    policy:  ShapePolicy,
) -> Result<(), SpecError> {
    let num_outputs = spec.outputs.len();
    let num_inputs = spec.inputs.len();
    let mut seen = HashSet::new();

    for rule in rules {
        if rule.output >= num_outputs {
            return Err(SpecError::shape(
                rule.output,
                format!("'{}' declares {num_outputs} output(s)", spec.name),
            ));
        }

        match &rule.shape {
            OutputShape::Fixed(dims) => {
                if let Some(pos) = dims.iter().position(|&d| d == 0) {
                    return Err(SpecError::shape(
                        rule.output,
                        format!("dimension {pos} is zero, dimensions must be positive"),
                    ));
                }
            }
            OutputShape::SameAsInput(input) => {
                if *input >= num_inputs {
                    return Err(SpecError::shape(
                        rule.output,
                        format!("input {input} does not exist, '{}' declares {num_inputs} input(s)", spec.name),
                    ));
                }
            }
        }

        if !seen.insert(rule.output) {
            match policy {
                ShapePolicy::Strict => {
                    return Err(SpecError::shape(rule.output, "output has more than one shape rule"));
                }
                ShapePolicy::Permissive => {
                    tracing::warn!(
                        op = %spec.name,
                        output = rule.output,
                        "duplicate shape rule, the last assignment wins",
                    );
                }
            }
        }
    }

    Ok(())
}

/// Validate a whole request, failing on the first problem found.
pub fn validate_request(
    request: &GenerationRequest,
    policy:  ShapePolicy,
) -> Result<ValidatedSpec, SpecError> {
    let spec = &request.spec;
    if spec.name.is_empty() {
        return Err(SpecError::malformed("operator", "operator name is empty"));
    }

    let attributes = validate_attributes(&spec.attributes)?;
    validate_args("input", &spec.inputs)?;
    validate_args("output", &spec.outputs)?;
    validate_shape_rules(&request.shape_rules, spec, policy)?;

    if let Some(kernel) = &request.kernel {
        if kernel.class_name.is_empty() {
            return Err(SpecError::malformed("kernel", "kernel class name is empty"));
        }
    }

    tracing::debug!(
        op = %spec.name,
        attributes = attributes.len(),
        inputs = spec.inputs.len(),
        outputs = spec.outputs.len(),
        shape_rules = request.shape_rules.len(),
        "operator spec validated",
    );

    Ok(ValidatedSpec {
        name:        spec.name.clone(),
        attributes,
        inputs:      spec.inputs.clone(),
        outputs:     spec.outputs.clone(),
        shape_rules: request.shape_rules.clone(),
        kernel:      request.kernel.clone(),
    })
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Composite, KernelBinding, ShapeRule};

    fn zero_request() -> GenerationRequest {
        GenerationRequest::new(
            OperatorSpec::new("Zero")
                .input("to_zero", "int32")
                .output("zeroed", "int32"),
        )
        .with_shape_rule(ShapeRule::fixed(0, [1000]))
        .with_kernel(KernelBinding::new("ZeroOp"))
    }

    #[test]
    fn every_vocabulary_tag_is_accepted() {
        let attrs: Vec<(String, AttrKind)> = crate::ALLOWED_TYPE_TAGS
            .iter()
            .enumerate()
            .map(|(i, tag)| (format!("a{i}"), AttrKind::from(*tag)))
            .collect();
        let validated = validate_attributes(&attrs).unwrap();
        assert_eq!(validated.len(), attrs.len());
        for (attr, tag) in validated.iter().zip(crate::ALLOWED_TYPE_TAGS) {
            assert_eq!(attr.ty.as_str(), *tag);
        }
    }

    #[test]
    fn attributes_keep_declaration_order() {
        let attrs = vec![
            ("z".to_string(), AttrKind::from("float")),
            ("a".to_string(), AttrKind::from("int32")),
        ];
        let validated = validate_attributes(&attrs).unwrap();
        let names: Vec<&str> = validated.iter().map(|a| a.name.as_str()).collect();
        assert_eq!(names, ["z", "a"]);
    }

    #[test]
    fn unknown_tag_is_unsupported() {
        for tag in ["int", "string", "Float", "int32 ", ""] {
            let attrs = vec![("a".to_string(), AttrKind::from(tag))];
            match validate_attributes(&attrs) {
                Err(SpecError::UnsupportedAttributeKind { name, .. }) => assert_eq!(name, "a"),
                other => panic!("tag {tag:?}: expected UnsupportedAttributeKind, got {other:?}"),
            }
        }
    }

    #[test]
    fn composite_kinds_fail_loudly() {
        for composite in [Composite::List, Composite::Tensor, Composite::Shape, Composite::Constraint] {
            let attrs = vec![("c".to_string(), AttrKind::from(composite))];
            let err = validate_attributes(&attrs).unwrap_err();
            assert!(matches!(err, SpecError::UnsupportedAttributeKind { .. }));
            assert!(err.to_string().contains(composite.as_str()));
        }
    }

    #[test]
    fn repeated_or_empty_attribute_name_is_malformed() {
        let attrs = vec![
            ("a".to_string(), AttrKind::from("float")),
            ("a".to_string(), AttrKind::from("int32")),
        ];
        assert!(matches!(
            validate_attributes(&attrs),
            Err(SpecError::MalformedSpecEntry { section: "attribute", .. })
        ));

        let attrs = vec![(String::new(), AttrKind::from("float"))];
        assert!(matches!(
            validate_attributes(&attrs),
            Err(SpecError::MalformedSpecEntry { .. })
        ));
    }

    #[test]
    fn arg_tags_are_opaque() {
        let args = vec![ArgSpec::new("x", "T"), ArgSpec::new("y", "resource")];
        validate_args("input", &args).unwrap();
    }

    #[test]
    fn empty_arg_fields_are_malformed() {
        let err = validate_args("output", &[ArgSpec::new("", "int32")]).unwrap_err();
        assert!(matches!(err, SpecError::MalformedSpecEntry { section: "output", .. }));

        let err = validate_args("input", &[ArgSpec::new("x", "")]).unwrap_err();
        assert!(matches!(err, SpecError::MalformedSpecEntry { section: "input", .. }));
    }

    #[test]
    fn zero_request_validates() {
        let validated = validate_request(&zero_request(), ShapePolicy::Permissive).unwrap();
        assert_eq!(validated.name, "Zero");
        assert!(validated.attributes.is_empty());
        assert_eq!(validated.shape_rules, vec![ShapeRule::fixed(0, [1000])]);
        assert_eq!(validated.kernel.unwrap().class_name, "ZeroOp");
    }

    #[test]
    fn shape_rule_for_undeclared_output() {
        let request = zero_request().with_shape_rule(ShapeRule::fixed(1, [3]));
        match validate_request(&request, ShapePolicy::Permissive) {
            Err(SpecError::InconsistentShapeRule { output, .. }) => assert_eq!(output, 1),
            other => panic!("expected InconsistentShapeRule, got {other:?}"),
        }
    }

    #[test]
    fn shape_rule_with_zero_dimension() {
        let request = GenerationRequest::new(OperatorSpec::new("Op").output("y", "float"))
            .with_shape_rule(ShapeRule::fixed(0, [4, 0]));
        assert!(matches!(
            validate_request(&request, ShapePolicy::Permissive),
            Err(SpecError::InconsistentShapeRule { output: 0, .. })
        ));
    }

    #[test]
    fn scalar_shape_is_allowed() {
        let request = GenerationRequest::new(OperatorSpec::new("Op").output("y", "float"))
            .with_shape_rule(ShapeRule::fixed(0, Vec::<u64>::new()));
        validate_request(&request, ShapePolicy::Strict).unwrap();
    }

    #[test]
    fn pass_through_needs_declared_input() {
        let spec = OperatorSpec::new("Op").input("x", "float").output("y", "float");
        let ok = GenerationRequest::new(spec.clone()).with_shape_rule(ShapeRule::same_as_input(0, 0));
        validate_request(&ok, ShapePolicy::Strict).unwrap();

        let bad = GenerationRequest::new(spec).with_shape_rule(ShapeRule::same_as_input(0, 1));
        assert!(matches!(
            validate_request(&bad, ShapePolicy::Permissive),
            Err(SpecError::InconsistentShapeRule { output: 0, .. })
        ));
    }

    #[test]
    fn duplicate_output_depends_on_policy() {
        let request = GenerationRequest::new(OperatorSpec::new("Op").output("y", "int32"))
            .with_shape_rules([ShapeRule::fixed(0, [10]), ShapeRule::fixed(0, [20])]);

        let validated = validate_request(&request, ShapePolicy::Permissive).unwrap();
        assert_eq!(validated.shape_rules.len(), 2);

        assert!(matches!(
            validate_request(&request, ShapePolicy::Strict),
            Err(SpecError::InconsistentShapeRule { output: 0, .. })
        ));
    }

    #[test]
    fn empty_names_are_malformed() {
        let request = GenerationRequest::new(OperatorSpec::new(""));
        assert!(matches!(
            validate_request(&request, ShapePolicy::Permissive),
            Err(SpecError::MalformedSpecEntry { section: "operator", .. })
        ));

        let request = GenerationRequest::new(OperatorSpec::new("Op")).with_kernel(KernelBinding::new(""));
        assert!(matches!(
            validate_request(&request, ShapePolicy::Permissive),
            Err(SpecError::MalformedSpecEntry { section: "kernel", .. })
        ));
    }

    #[test]
    fn attribute_errors_come_before_shape_errors() {
        let request = GenerationRequest::new(OperatorSpec::new("Op").attr("a", "int"))
            .with_shape_rule(ShapeRule::fixed(5, [1]));
        assert!(matches!(
            validate_request(&request, ShapePolicy::Permissive),
            Err(SpecError::UnsupportedAttributeKind { .. })
        ));
    }
}
