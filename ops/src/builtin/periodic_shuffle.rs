use opgen_spec::{GenerationRequest, KernelBinding, OperatorSpec, TypeTag};

use crate::op::{BuiltinOp, RegistrationInfo};
use crate::register_builtin;


/// Sub-pixel shuffle by factor `r` (NHWC, channels divided by r*r)
pub struct PeriodicShuffle;

impl PeriodicShuffle {
    pub fn new() -> Self {
        PeriodicShuffle
    }
}

impl RegistrationInfo for PeriodicShuffle {
    const NAME: &'static str = "PeriodicShuffle";
}

impl BuiltinOp for PeriodicShuffle {
    fn summary(&self) -> &'static str {
        "periodic shuffle by attribute r, no fixed output shape"
    }

    // The output shape depends on the input and `r`, which fixed shape rules
    // cannot express, so no shape function is emitted.
    fn request(&self) -> GenerationRequest {
        GenerationRequest::new(
            OperatorSpec::new(Self::NAME)
                .attr("r", TypeTag::Int32)
                .input("input", "float")
                .output("shuffle", "float"),
        )
        .with_kernel(KernelBinding::new("PeriodicShuffleOp").with_header("gen_periodic_shuffle.h"))
    }
}

register_builtin!(PeriodicShuffle);
