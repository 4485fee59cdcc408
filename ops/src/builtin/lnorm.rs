use opgen_spec::{GenerationRequest, KernelBinding, OperatorSpec, ShapeRule};

use crate::op::{BuiltinOp, RegistrationInfo};
use crate::register_builtin;


/// Layer normalization over 2-D or 4-D float input
pub struct Lnorm;

impl Lnorm {
    pub fn new() -> Self {
        Lnorm
    }
}

impl RegistrationInfo for Lnorm {
    const NAME: &'static str = "Lnorm";
}

impl BuiltinOp for Lnorm {
    fn summary(&self) -> &'static str {
        "layer norm (input, gamma, beta), output shaped like input"
    }

    fn request(&self) -> GenerationRequest {
        GenerationRequest::new(
            OperatorSpec::new(Self::NAME)
                .input("input", "float")
                .input("gamma", "float")
                .input("beta", "float")
                .output("norm", "float"),
        )
        .with_shape_rule(ShapeRule::same_as_input(0, 0))
        .with_kernel(
            KernelBinding::new("LnormOp")
                .with_header("gen_halide_ln_2d.h")
                .with_header("gen_halide_ln_4d.h"),
        )
    }
}

register_builtin!(Lnorm);
