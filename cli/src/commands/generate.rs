//! `opgen generate`: load a YAML operator spec, validate it and render it.

use std::path::PathBuf;

use anyhow::Context;
use opgen_generator::Generator;
use opgen_spec::GenerationRequest;

pub fn execute(
    config: Option<PathBuf>,
    spec:   PathBuf,
    output: Option<PathBuf>,
    strict: bool,
) -> anyhow::Result<()> {
    let mut config = super::load_config(config.as_deref())?;
    config.strict_shape_rules |= strict;

    let request = GenerationRequest::from_file(&spec)
        .with_context(|| format!("failed to load spec from '{}'", spec.display()))?;
    tracing::info!(op = %request.spec.name, spec = %spec.display(), "spec loaded");

    Generator::new(config)
        .generate_to(&request, &super::destination(output))
        .with_context(|| format!("failed to generate '{}'", request.spec.name))
}


#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::Path;

    fn generator_tests() -> PathBuf {
        Path::new(env!("CARGO_MANIFEST_DIR")).join("../generator/tests")
    }

    const DUPLICATE_RULES: &str = "\
name: Op
outputs:
  - y: int32
shape_rules:
  - { output: 0, dims: [10] }
  - { output: 0, dims: [20] }
";

    #[test]
    fn valid_spec_writes_the_golden_text() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("resize_op.cc");

        execute(None, generator_tests().join("specs/resize.yaml"), Some(out.clone()), false).unwrap();

        let golden = fs::read_to_string(generator_tests().join("golden/resize_op.cc")).unwrap();
        assert_eq!(fs::read_to_string(&out).unwrap(), golden);
    }

    #[test]
    fn rejected_spec_fails_and_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("gather_op.cc");

        let err = execute(None, generator_tests().join("specs/bad_attribute.yaml"), Some(out.clone()), false)
            .unwrap_err();
        assert!(format!("{err:#}").contains("indices"), "unexpected error: {err:#}");
        assert!(!out.exists());
    }

    #[test]
    fn missing_spec_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let err = execute(None, dir.path().join("nope.yaml"), None, false).unwrap_err();
        assert!(err.to_string().contains("nope.yaml"));
    }

    #[test]
    fn strict_flag_rejects_duplicate_rules() {
        let dir = tempfile::tempdir().unwrap();
        let spec = dir.path().join("dup.yaml");
        fs::write(&spec, DUPLICATE_RULES).unwrap();
        let out = dir.path().join("dup.cc");

        assert!(execute(None, spec.clone(), Some(out.clone()), true).is_err());
        assert!(!out.exists());

        execute(None, spec, Some(out.clone()), false).unwrap();
        assert!(fs::read_to_string(&out).unwrap().contains("    auto s0 = c->MakeShape({20});\n"));
    }

    #[test]
    fn strict_config_file_is_honoured() {
        let dir = tempfile::tempdir().unwrap();
        let spec = dir.path().join("dup.yaml");
        fs::write(&spec, DUPLICATE_RULES).unwrap();
        let config = dir.path().join("opgen.yaml");
        fs::write(&config, "strict_shape_rules: true\n").unwrap();

        assert!(execute(Some(config), spec, Some(dir.path().join("dup.cc")), false).is_err());
    }
}
