use opgen_spec::{GenerationRequest, KernelBinding, OperatorSpec, ShapeRule};

use crate::op::{BuiltinOp, RegistrationInfo};
use crate::register_builtin;


/// Batch normalization with precomputed mean and variance
pub struct Bnorm;

impl Bnorm {
    pub fn new() -> Self {
        Bnorm
    }
}

impl RegistrationInfo for Bnorm {
    const NAME: &'static str = "Bnorm";
}

impl BuiltinOp for Bnorm {
    fn summary(&self) -> &'static str {
        "batch norm (input, gamma, beta, mean, var), output shaped like input"
    }

    fn request(&self) -> GenerationRequest {
        GenerationRequest::new(
            OperatorSpec::new(Self::NAME)
                .input("input", "float")
                .input("gamma", "float")
                .input("beta", "float")
                .input("mean", "float")
                .input("var", "float")
                .output("norm", "float"),
        )
        .with_shape_rule(ShapeRule::same_as_input(0, 0))
        .with_kernel(KernelBinding::new("BnormOp").with_header("gen_halide_bn.h"))
    }
}

register_builtin!(Bnorm);
