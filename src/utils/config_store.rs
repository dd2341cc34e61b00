//! ConfigStore - Local Configuration Files

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::de::DeserializeOwned;
use snafu::ResultExt;

use crate::error::{ReadConfigSnafu, Result};

/// Get the application config directory
pub fn app_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("com", "eis", "reinsurance-ui").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Load a TOML config file, falling back to the default when it doesn't exist
pub fn load_config<T: DeserializeOwned + Default>(path: &Path) -> Result<T> {
    match fs::read_to_string(path) {
        Ok(content) => parse_config(path, &content),
        Err(err) if err.kind() == ErrorKind::NotFound => {
            tracing::debug!(path = %path.display(), "Config file not found, using defaults");
            Ok(T::default())
        }
        Err(err) => Err(err).context(ReadConfigSnafu { path }),
    }
}

/// Load a TOML config file that must exist
pub fn read_config<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let content = fs::read_to_string(path).context(ReadConfigSnafu { path })?;
    parse_config(path, &content)
}

fn parse_config<T: DeserializeOwned>(path: &Path, content: &str) -> Result<T> {
    let config = toml::from_str(content)?;
    tracing::debug!(path = %path.display(), "Loaded config file");
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Default, Deserialize, PartialEq)]
    struct Sample {
        #[serde(default)]
        name: String,
    }

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("reinsurance-ui-{}-{name}", std::process::id()))
    }

    #[test]
    fn test_missing_file_yields_default() {
        let loaded: Sample = load_config(&temp_path("missing.toml")).expect("default");
        assert_eq!(loaded, Sample::default());
    }

    #[test]
    fn test_read_config_requires_the_file() {
        let path = temp_path("required.toml");
        let result: Result<Sample> = read_config(&path);
        assert!(matches!(
            result,
            Err(crate::error::Error::ReadConfig { path: ref missing, .. }) if *missing == path
        ));

        fs::write(&path, "name = \"facultative\"\n").expect("write temp config");
        let loaded: Sample = read_config(&path).expect("parsed");
        fs::remove_file(&path).ok();
        assert_eq!(loaded.name, "facultative");
    }

    #[test]
    fn test_loads_toml() {
        let path = temp_path("sample.toml");
        fs::write(&path, "name = \"treaty\"\n").expect("write temp config");

        let loaded: Sample = load_config(&path).expect("parsed");
        fs::remove_file(&path).ok();
        assert_eq!(loaded.name, "treaty");
    }

    #[test]
    fn test_invalid_toml_is_an_error() {
        let path = temp_path("broken.toml");
        fs::write(&path, "name = ").expect("write temp config");

        let result: Result<Sample> = load_config(&path);
        fs::remove_file(&path).ok();
        assert!(matches!(result, Err(crate::error::Error::TomlDe { .. })));
    }
}
