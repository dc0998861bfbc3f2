use std::path::Path;

use serde::Deserialize;

use crate::models::DirectoryError;

/// Environment variable consulted when no `--endpoint` flag is given.
pub const ENDPOINT_ENV: &str = "UCCF_API_URL";

/// Root configuration structure, deserialized from `.cu-directory/config.toml`.
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    /// API endpoint URL.
    pub endpoint: Option<String>,
}

/// Resolve the API endpoint URL, searching in order:
///
/// 1. `flag_override` — URL passed via `--endpoint`
/// 2. The `UCCF_API_URL` environment variable
/// 3. `endpoint` key of a config file: `config_override` path passed via
///    `--config`, else `./.cu-directory/config.toml`, else
///    `~/.config/cu-directory/config.toml`
///
/// Absence of all four is a fatal [`DirectoryError::Configuration`].
pub fn resolve_endpoint(
    flag_override: Option<&str>,
    config_override: Option<&Path>,
) -> Result<String, DirectoryError> {
    if let Some(url) = flag_override {
        return Ok(url.to_string());
    }

    if let Ok(url) = std::env::var(ENDPOINT_ENV) {
        if !url.is_empty() {
            return Ok(url);
        }
    }

    if let Some(url) = load_config(config_override).endpoint {
        return Ok(url);
    }

    Err(DirectoryError::Configuration(format!(
        "no API endpoint configured (set {} or pass --endpoint)",
        ENDPOINT_ENV
    )))
}

/// Load the config file, if any. A missing or unreadable file yields the empty
/// default; a present-but-invalid file is also treated as empty rather than
/// aborting, since the endpoint can still come from another source.
fn load_config(config_override: Option<&Path>) -> Config {
    if let Some(path) = config_override {
        return read_config_file(path).unwrap_or_default();
    }

    let project_config = Path::new(".cu-directory").join("config.toml");
    if project_config.exists() {
        return read_config_file(&project_config).unwrap_or_default();
    }

    if let Some(home) = dirs::home_dir() {
        let home_config = home
            .join(".config")
            .join("cu-directory")
            .join("config.toml");
        if home_config.exists() {
            return read_config_file(&home_config).unwrap_or_default();
        }
    }

    Config::default()
}

fn read_config_file(path: &Path) -> Option<Config> {
    let content = std::fs::read_to_string(path).ok()?;
    toml::from_str(&content).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_flag_override_wins() {
        let url = resolve_endpoint(Some("https://example.org/api"), None).unwrap();
        assert_eq!(url, "https://example.org/api");
    }

    #[test]
    fn test_config_file_endpoint() {
        let mut f = NamedTempFile::new().unwrap();
        write!(f, "endpoint = \"https://example.org/unions\"").unwrap();
        let config = read_config_file(f.path()).unwrap();
        assert_eq!(
            config.endpoint.as_deref(),
            Some("https://example.org/unions")
        );
    }

    #[test]
    fn test_invalid_config_file_is_empty() {
        let mut f = NamedTempFile::new().unwrap();
        write!(f, "not valid toml [[[").unwrap();
        assert!(read_config_file(f.path()).is_none());
        assert!(load_config(Some(f.path())).endpoint.is_none());
    }

    #[test]
    fn test_missing_everything_is_configuration_error() {
        // Point at a config file that does not exist so only the env var could
        // supply a URL; the test environment does not set it.
        if std::env::var(ENDPOINT_ENV).is_ok() {
            return;
        }
        let err = resolve_endpoint(None, Some(Path::new("/nonexistent/config.toml")))
            .unwrap_err();
        assert!(matches!(err, DirectoryError::Configuration(_)));
    }
}
