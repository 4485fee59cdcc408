//! `opgen builtin`: render an operator from the built-in catalog.

use std::path::PathBuf;

use anyhow::Context;
use opgen_generator::Generator;
use opgen_ops::BuiltinRegistry;

pub fn execute(config: Option<PathBuf>, name: String, output: Option<PathBuf>) -> anyhow::Result<()> {
    let config = super::load_config(config.as_deref())?;
    let registry = BuiltinRegistry::with_inventory();

    let op = registry.get(&name).ok_or_else(|| {
        anyhow::anyhow!(
            "unknown builtin operator '{name}' (available: {})",
            registry.names().join(", ")
        )
    })?;

    Generator::new(config)
        .generate_to(&op.request(), &super::destination(output))
        .with_context(|| format!("failed to generate builtin '{name}'"))
}


#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn unknown_name_lists_the_catalog() {
        let err = execute(None, "Nope".to_string(), None).unwrap_err();
        let message = err.to_string();
        assert!(message.contains("'Nope'"), "unexpected error: {message}");
        assert!(message.contains("Bnorm, Lnorm, PeriodicShuffle, Zero"), "unexpected error: {message}");
    }

    #[test]
    fn writes_the_builtin_to_a_file() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("zero_op.cc");

        execute(None, "Zero".to_string(), Some(out.clone())).unwrap();

        let golden = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("../generator/tests/golden/zero_op.cc");
        assert_eq!(fs::read_to_string(&out).unwrap(), fs::read_to_string(golden).unwrap());
    }

    #[test]
    fn config_namespace_reaches_the_output() {
        let dir = tempfile::tempdir().unwrap();
        let config = dir.path().join("opgen.yaml");
        fs::write(&config, "namespace: tf\n").unwrap();
        let out = dir.path().join("lnorm_op.cc");

        execute(Some(config), "Lnorm".to_string(), Some(out.clone())).unwrap();
        assert!(fs::read_to_string(&out).unwrap().contains("\nusing namespace tf;\n"));
    }

    #[test]
    fn unreadable_config_fails_before_generating() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("zero_op.cc");

        let err = execute(Some(dir.path().join("missing.yaml")), "Zero".to_string(), Some(out.clone()))
            .unwrap_err();
        assert!(err.to_string().contains("missing.yaml"));
        assert!(!out.exists());
    }
}
