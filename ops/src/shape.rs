//! Shape-inference emitter.

use std::collections::HashSet;

use opgen_core::Fragment;
use opgen_spec::{OutputShape, ShapeRule};

/// Parameter list of the generated shape function
pub const INFERENCE_CONTEXT: &str = "::tensorflow::shape_inference::InferenceContext* c";

/// Emit the shape function literal for `rules`.
///
/// Rules are emitted in the order given, each fixed shape declared as
/// `s<output>` right before it is assigned. Repeated outputs are emitted
/// again, not merged; a repeated fixed rule goes in its own `{ }` block so
/// its `s<output>` does not redeclare the earlier one, and the last
/// assignment still wins. The body always ends with `return Status::OK();`.
pub fn emit_shape_fn(rules: &[ShapeRule]) -> Fragment {
    let mut body = Vec::with_capacity(rules.len() * 2 + 1);
    let mut declared = HashSet::new();
    for rule in rules {
        match &rule.shape {
            OutputShape::Fixed(dims) => {
                let local = format!("s{}", rule.output);
                let pair = vec![
                    Fragment::assign(
                        format!("auto {local}"),
                        format!("c->MakeShape({})", dim_list(dims)),
                    ),
                    Fragment::statement(format!("c->set_output({}, {local})", rule.output)),
                ];
                if declared.insert(rule.output) {
                    body.extend(pair);
                } else {
                    body.push(Fragment::block(pair));
                }
            }
            OutputShape::SameAsInput(input) => {
                body.push(Fragment::statement(format!(
                    "c->set_output({}, c->input({input}))",
                    rule.output
                )));
            }
        }
    }
    body.push(Fragment::statement("return Status::OK()"));

    Fragment::scope(format!("[]({INFERENCE_CONTEXT})"), body)
}

/// `SetShapeFn(<shape fn>)`
pub fn shape_fn_clause(shape_fn: Fragment) -> Fragment {
    Fragment::call("SetShapeFn", vec![shape_fn])
}

/// Brace-initializer list, e.g. `{2, 3}`
pub fn dim_list(dims: &[u64]) -> String {
    let dims: Vec<String> = dims.iter().map(u64::to_string).collect();
    format!("{{{}}}", dims.join(", "))
}
