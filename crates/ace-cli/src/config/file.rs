use crate::config::models::FileConfig;
use crate::error::{CliError, Result};
use std::path::Path;

/// Loads and parses a TOML configuration file.
pub fn load(path: &Path) -> Result<FileConfig> {
    let contents = std::fs::read_to_string(path)?;
    toml::from_str(&contents).map_err(|e| CliError::FileParsing {
        path: path.to_path_buf(),
        source: e.into(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn full_config_file_parses() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ace.toml");
        std::fs::write(
            &path,
            r#"
[engine]
program = "/opt/julia/bin/julia"
script = "scripts/ace_io_script.jl"

[basis]
rcut = 6.0
order = 4
total-degree = 10

[buffer]
dir = "staging"
output-name = "run.npz"
reuse = true
"#,
        )
        .unwrap();

        let config = load(&path).unwrap();
        assert_eq!(
            config.engine.script,
            Some(PathBuf::from("scripts/ace_io_script.jl"))
        );
        assert_eq!(config.basis.rcut, Some(6.0));
        assert_eq!(config.basis.total_degree, Some(10));
        assert_eq!(config.buffer.output_name, Some("run.npz".to_string()));
        assert_eq!(config.buffer.reuse, Some(true));
    }

    #[test]
    fn empty_file_yields_all_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ace.toml");
        std::fs::write(&path, "").unwrap();

        let config = load(&path).unwrap();
        assert!(config.engine.script.is_none());
        assert!(config.basis.rcut.is_none());
        assert!(config.buffer.dir.is_none());
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ace.toml");
        std::fs::write(&path, "[basis]\ncutoff = 5.0\n").unwrap();

        let result = load(&path);
        assert!(matches!(result, Err(CliError::FileParsing { .. })));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let result = load(Path::new("/definitely/not/here.toml"));
        assert!(matches!(result, Err(CliError::Io(_))));
    }
}
