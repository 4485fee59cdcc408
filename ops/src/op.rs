use opgen_spec::GenerationRequest;


/// Trait to implement for each builtin operator
pub trait BuiltinOp: Send + Sync {
    /// One-line description shown by `opgen list`
    fn summary(&self) -> &'static str;

    /// The request that regenerates this operator's source
    fn request(&self) -> GenerationRequest;
}


/// Wrapper for builtin factory functions
pub struct BuiltinFactory {
    pub name: &'static str,
    pub factory: fn() -> Box<dyn BuiltinOp>,
}

// Collect all registered builtins
inventory::collect!(BuiltinFactory);


/// Trait to implement for each builtin to work with inventory
pub trait RegistrationInfo {
    /// Operator name, unique across the catalog
    const NAME: &'static str;
}
