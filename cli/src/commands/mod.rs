pub mod builtin;
pub mod generate;
pub mod list;
pub mod types;

use std::path::{Path, PathBuf};

use anyhow::Context;
use opgen_generator::{Destination, GeneratorConfig};
use tracing_subscriber::EnvFilter;

/// Install the stderr subscriber. `RUST_LOG` wins over `-v`.
pub fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Configuration from `--config`, or the defaults
pub fn load_config(path: Option<&Path>) -> anyhow::Result<GeneratorConfig> {
    match path {
        Some(path) => GeneratorConfig::from_file(path)
            .with_context(|| format!("failed to load config from '{}'", path.display())),
        None => Ok(GeneratorConfig::default()),
    }
}

pub fn destination(output: Option<PathBuf>) -> Destination {
    output.map_or(Destination::Stdout, Destination::File)
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn output_flag_selects_the_destination() {
        assert_eq!(destination(None), Destination::Stdout);
        assert_eq!(destination(Some(PathBuf::from("a.cc"))), Destination::File(PathBuf::from("a.cc")));
    }

    #[test]
    fn no_config_means_defaults() {
        assert_eq!(load_config(None).unwrap(), GeneratorConfig::default());
    }

    #[test]
    fn unknown_config_field_is_an_error() {
        let file = tempfile::NamedTempFile::new().unwrap();
        std::fs::write(file.path(), "bogus: 1\n").unwrap();
        assert!(load_config(Some(file.path())).is_err());
    }
}
