//! Macro-chain assembler.
//!
//! `REGISTER_OP` clauses always come out as: name, attributes, inputs,
//! outputs, then at most one shape function, one clause per line.

use core_types::Device;
use opgen_core::Fragment;
use opgen_spec::ValidatedSpec;

use crate::clauses::{attr_clauses, input_clauses, name_clause, output_clauses};
use crate::shape::{emit_shape_fn, shape_fn_clause};

/// Kernel registration macro
pub const REGISTER_KERNEL_BUILDER: &str = "REGISTER_KERNEL_BUILDER";

/// Join clause fragments into the `REGISTER_OP` statement.
///
/// `shape_fn` is the function literal from [`emit_shape_fn`]; it is
/// wrapped in `SetShapeFn(..)` here.
pub fn assemble_registration(
    op_name:  &str,
    attrs:    Vec<Fragment>,
    inputs:   Vec<Fragment>,
    outputs:  Vec<Fragment>,
    shape_fn: Option<Fragment>,
) -> Fragment {
    let mut links = Vec::with_capacity(2 + attrs.len() + inputs.len() + outputs.len());
    links.push(name_clause(op_name));
    links.extend(attrs);
    links.extend(inputs);
    links.extend(outputs);
    links.extend(shape_fn.map(shape_fn_clause));

    Fragment::terminated(Fragment::chain(links))
}

/// `REGISTER_KERNEL_BUILDER(Name("<op>").Device(<device>), <class>);`
pub fn assemble_kernel_registration(op_name: &str, device: Device, class_name: &str) -> Fragment {
    let builder = Fragment::join(
        vec![
            Fragment::call("Name", vec![Fragment::quoted(op_name)]),
            Fragment::call("Device", vec![Fragment::line(device.macro_constant())]),
        ],
        ".",
    );
    Fragment::terminated(Fragment::call(
        REGISTER_KERNEL_BUILDER,
        vec![builder, Fragment::line(class_name)],
    ))
}

/// Registration statement for a validated spec.
///
/// The shape function is only emitted when there is at least one rule.
pub fn registration_for(spec: &ValidatedSpec) -> Fragment {
    let shape_fn = (!spec.shape_rules.is_empty()).then(|| emit_shape_fn(&spec.shape_rules));
    assemble_registration(
        &spec.name,
        attr_clauses(&spec.attributes),
        input_clauses(&spec.inputs),
        output_clauses(&spec.outputs),
        shape_fn,
    )
}

/// Kernel registration statement, if the spec binds a kernel
pub fn kernel_registration_for(spec: &ValidatedSpec) -> Option<Fragment> {
    spec.kernel
        .as_ref()
        .map(|k| assemble_kernel_registration(&spec.name, k.device, &k.class_name))
}
