use opgen_spec::{GenerationRequest, KernelBinding, OperatorSpec, ShapeRule};

use crate::op::{BuiltinOp, RegistrationInfo};
use crate::register_builtin;


/// Fills a 1000-element `int32` vector with zeros
pub struct Zero;

impl Zero {
    pub fn new() -> Self {
        Zero
    }
}

impl RegistrationInfo for Zero {
    const NAME: &'static str = "Zero";
}

impl BuiltinOp for Zero {
    fn summary(&self) -> &'static str {
        "int32[1000] -> zeros, Halide kernel halide_zero_op"
    }

    fn request(&self) -> GenerationRequest {
        GenerationRequest::new(
            OperatorSpec::new(Self::NAME)
                .input("to_zero", "int32")
                .output("zeroed", "int32"),
        )
        .with_shape_rule(ShapeRule::fixed(0, [1000]))
        .with_kernel(KernelBinding::new("ZeroOp").with_header("gen_halide_zero_op.h"))
    }
}

register_builtin!(Zero);
