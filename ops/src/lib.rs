//! # opgen_ops
//!
//! Turns a [`ValidatedSpec`](opgen_spec::ValidatedSpec) into code fragments:
//!
//! - [`clauses`]: one fragment per attribute, input and output.
//! - [`shape`]: the shape-inference function literal.
//! - [`kernel`]: the kernel class skeleton.
//! - [`chain`]: `REGISTER_OP` and `REGISTER_KERNEL_BUILDER` statements.
//!
//! Builders are pure functions; calling one twice gives equal fragments.
//! The crate also carries the catalog of builtin operators, registered at
//! link time with [`register_builtin!`].

pub mod builtin;
pub mod chain;
pub mod clauses;
pub mod kernel;
pub mod op;
pub mod shape;

use std::collections::BTreeMap;

pub use chain::{
    assemble_kernel_registration, assemble_registration, kernel_registration_for,
    registration_for,
};
pub use clauses::{arg_clause, attr_clause, input_clause, name_clause, output_clause, ArgRole};
pub use kernel::{emit_kernel_class, emit_kernel_class_with, DEFAULT_PLACEHOLDER};
pub use op::{BuiltinFactory, BuiltinOp, RegistrationInfo};
pub use shape::emit_shape_fn;


/// Register a builtin operator with the inventory system
#[macro_export]
macro_rules! register_builtin {
    ($op_type:ident) => {
        inventory::submit! {
            $crate::BuiltinFactory {
                name: <$op_type as $crate::RegistrationInfo>::NAME,
                factory: || Box::new($op_type::new()),
            }
        }
    };
}


/// Holds the builtin operators, keyed and ordered by name
pub struct BuiltinRegistry {
    map: BTreeMap<&'static str, Box<dyn BuiltinOp>>,
}

impl BuiltinRegistry {
    pub fn new() -> Self {
        Self { map: BTreeMap::new() }
    }

    /// Registry holding every builtin linked into the binary
    pub fn with_inventory() -> Self {
        let mut reg = Self::new();
        reg.collect_inventory();
        reg
    }

    pub fn collect_inventory(&mut self) {
        for factory in inventory::iter::<BuiltinFactory> {
            let op = (factory.factory)();
            self.register_boxed(factory.name, op);
        }
        tracing::debug!(count = self.map.len(), "builtin operators collected");
    }

    /// Register a builtin under its registration name
    pub fn register<O: BuiltinOp + RegistrationInfo + 'static>(&mut self, op: O) {
        self.map.insert(O::NAME, Box::new(op));
    }

    /// Register a boxed builtin with an explicit name
    pub fn register_boxed(&mut self, name: &'static str, op: Box<dyn BuiltinOp>) {
        self.map.insert(name, op);
    }

    pub fn get(&self, name: &str) -> Option<&dyn BuiltinOp> {
        self.map.get(name).map(|b| b.as_ref())
    }

    /// Registered names, sorted
    pub fn names(&self) -> Vec<&'static str> {
        self.map.keys().copied().collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &dyn BuiltinOp)> + '_ {
        self.map.iter().map(|(name, op)| (*name, op.as_ref()))
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

impl Default for BuiltinRegistry {
    fn default() -> Self {
        Self::new()
    }
}
