//! # opgen
//!
//! Declarative generator for TensorFlow custom-operator sources. Describe an
//! operator (attributes, inputs, outputs, fixed output shapes, kernel class)
//! and get back the C++ file registering it with `REGISTER_OP`, a kernel
//! class skeleton and its `REGISTER_KERNEL_BUILDER` line.
//!
//! ```
//! let source = opgen::generate(
//!     "Zero",
//!     &[],
//!     &[("to_zero", "int32")],
//!     &[("zeroed", "int32")],
//!     &[(0, vec![1000])],
//!     "ZeroOp",
//!     Some("gen_halide_zero_op.h"),
//! )
//! .unwrap();
//! assert!(source.ends_with("REGISTER_KERNEL_BUILDER(Name(\"Zero\").Device(DEVICE_CPU), ZeroOp);\n"));
//! ```

pub use core_types::{Device, TypeClass, TypeTag, ALLOWED_TYPE_TAGS};
pub use opgen_core::{render, Fragment};
pub use opgen_generator::{
    emit, generate, Destination, GenerateError, Generator, GeneratorConfig,
};
pub use opgen_ops::{BuiltinOp, BuiltinRegistry};
pub use opgen_spec::{
    ArgSpec, AttrKind, Composite, GenerationRequest, KernelBinding, OperatorSpec, OutputShape,
    ShapePolicy, ShapeRule, SpecError, ValidatedSpec,
};

pub mod fragment {
    pub use opgen_core::*;
}

pub mod ops {
    pub use opgen_ops::*;
}
