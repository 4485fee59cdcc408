//! Kernel skeleton emitter.
//!
//! The class is scaffolding: the constructor body and the compute body are
//! left for hand-written code.

use opgen_core::Fragment;

/// Base class every generated kernel derives from
pub const KERNEL_BASE: &str = "OpKernel";

/// Marker comment placed in the empty compute body
pub const DEFAULT_PLACEHOLDER: &str = "Kernel implementation goes here";

pub fn emit_kernel_class(class_name: &str) -> Fragment {
    emit_kernel_class_with(class_name, DEFAULT_PLACEHOLDER)
}

/// Same as [`emit_kernel_class`] with a custom placeholder comment
pub fn emit_kernel_class_with(class_name: &str, placeholder: &str) -> Fragment {
    let constructor = Fragment::scope(
        format!("explicit {class_name}(OpKernelConstruction* context) : {KERNEL_BASE}(context)"),
        Vec::new(),
    );
    let compute = Fragment::scope(
        "void Compute(OpKernelContext* context) override",
        vec![Fragment::comment(placeholder)],
    );

    Fragment::terminated(Fragment::scope(
        format!("class {class_name}: public {KERNEL_BASE}"),
        vec![Fragment::line("public:"), constructor, Fragment::blank(), compute],
    ))
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_op_skeleton() {
        let expected = "\
class ZeroOp: public OpKernel
{
  public:
  explicit ZeroOp(OpKernelConstruction* context) : OpKernel(context)
  {
  }

  void Compute(OpKernelContext* context) override
  {
    // Kernel implementation goes here
  }
};
";
        assert_eq!(emit_kernel_class("ZeroOp").render(), expected);
    }

    #[test]
    fn custom_placeholder() {
        let text = emit_kernel_class_with("K", "call halide_k here").render();
        assert!(text.contains("    // call halide_k here\n"));
        assert!(text.starts_with("class K: public OpKernel\n"));
    }
}
