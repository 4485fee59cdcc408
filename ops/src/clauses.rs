//! Fragment builders: one registration clause per attribute, input or output.
//!
//! Names and tags are wrapped in double quotes once and otherwise copied
//! verbatim; they are assumed to already be legal identifiers.

use opgen_core::Fragment;
use opgen_spec::{ArgSpec, Attribute, ValidatedAttributes};

/// Operator registration macro
pub const REGISTER_OP: &str = "REGISTER_OP";

/// Which clause an argument becomes part of
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArgRole {
    Input,
    Output,
}

impl ArgRole {
    pub fn prefix(self) -> &'static str {
        match self {
            ArgRole::Input  => "Input",
            ArgRole::Output => "Output",
        }
    }
}

/// `REGISTER_OP("<name>")`
pub fn name_clause(op_name: &str) -> Fragment {
    Fragment::call(REGISTER_OP, vec![Fragment::quoted(op_name)])
}

/// `Attr("<name>: <type>")`
pub fn attr_clause(attr: &Attribute) -> Fragment {
    Fragment::call("Attr", vec![Fragment::quoted(&format!("{}: {}", attr.name, attr.ty))])
}

/// `Input("<name>: <type>")` or `Output("<name>: <type>")`
pub fn arg_clause(role: ArgRole, arg: &ArgSpec) -> Fragment {
    Fragment::call(
        role.prefix(),
        vec![Fragment::quoted(&format!("{}: {}", arg.name, arg.type_tag))],
    )
}

pub fn input_clause(arg: &ArgSpec) -> Fragment {
    arg_clause(ArgRole::Input, arg)
}

pub fn output_clause(arg: &ArgSpec) -> Fragment {
    arg_clause(ArgRole::Output, arg)
}

pub fn attr_clauses(attributes: &ValidatedAttributes) -> Vec<Fragment> {
    attributes.iter().map(attr_clause).collect()
}

pub fn input_clauses(inputs: &[ArgSpec]) -> Vec<Fragment> {
    inputs.iter().map(input_clause).collect()
}

pub fn output_clauses(outputs: &[ArgSpec]) -> Vec<Fragment> {
    outputs.iter().map(output_clause).collect()
}


#[cfg(test)]
mod tests {
    use super::*;
    use opgen_spec::{validate_attributes, AttrKind, TypeTag};

    #[test]
    fn name() {
        assert_eq!(name_clause("Zero").render(), "REGISTER_OP(\"Zero\")\n");
    }

    #[test]
    fn attr() {
        let attr = Attribute { name: "axis".into(), ty: TypeTag::Int64 };
        assert_eq!(attr_clause(&attr).render(), "Attr(\"axis: int64\")\n");
    }

    #[test]
    fn input_and_output_prefixes() {
        let arg = ArgSpec::new("to_zero", "int32");
        assert_eq!(input_clause(&arg).render(), "Input(\"to_zero: int32\")\n");
        assert_eq!(output_clause(&arg).render(), "Output(\"to_zero: int32\")\n");
    }

    #[test]
    fn names_are_not_escaped() {
        let arg = ArgSpec::new("odd name", "T");
        assert_eq!(input_clause(&arg).render(), "Input(\"odd name: T\")\n");
    }

    #[test]
    fn clause_lists_keep_order() {
        let attrs = validate_attributes(&[
            ("b".to_string(), AttrKind::from("float")),
            ("a".to_string(), AttrKind::from("bool")),
        ])
        .unwrap();
        let rendered: Vec<String> = attr_clauses(&attrs).iter().map(|f| f.render()).collect();
        assert_eq!(rendered, ["Attr(\"b: float\")\n", "Attr(\"a: bool\")\n"]);

        let outs = output_clauses(&[ArgSpec::new("y", "int32"), ArgSpec::new("z", "half")]);
        assert_eq!(outs.len(), 2);
        assert_eq!(outs[1].render(), "Output(\"z: half\")\n");
        assert!(input_clauses(&[]).is_empty());
    }
}
