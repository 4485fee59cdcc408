use opgen_ops::BuiltinRegistry;

pub fn execute() -> anyhow::Result<()> {
    let registry = BuiltinRegistry::with_inventory();
    for (name, op) in registry.iter() {
        println!("{name:<18} {}", op.summary());
    }
    Ok(())
}
