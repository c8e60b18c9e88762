//! Client configuration loader.
//!
//! Reads `config.toml` from `<config dir>/vgchat/` (or an explicit path)
//! and deserializes it into [`ClientConfig`]. The default location is
//! optional and forgiving; an explicitly named file must load cleanly.

use std::path::{Path, PathBuf};

use vgchat_types::config::ClientConfig;
use vgchat_types::error::ConfigError;

/// Directory under the platform config dir holding `config.toml`.
const APP_DIR: &str = "vgchat";

/// `~/.config/vgchat/config.toml` on Linux, the platform equivalent elsewhere.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR).join("config.toml"))
}

/// Load configuration.
///
/// - `explicit = Some(path)`: the file must exist and parse.
/// - `explicit = None`: the default path is used; a missing file returns
///   [`ClientConfig::default()`], a malformed one logs a warning and also
///   returns the default.
pub async fn load_client_config(explicit: Option<&Path>) -> Result<ClientConfig, ConfigError> {
    if let Some(path) = explicit {
        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| ConfigError::Read {
                path: path.display().to_string(),
                reason: e.to_string(),
            })?;
        return toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.display().to_string(),
            reason: e.to_string(),
        });
    }

    let Some(config_path) = default_config_path() else {
        tracing::debug!("No platform config directory, using defaults");
        return Ok(ClientConfig::default());
    };
    Ok(load_or_default(&config_path).await)
}

async fn load_or_default(config_path: &Path) -> ClientConfig {
    let content = match tokio::fs::read_to_string(config_path).await {
        Ok(content) => content,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!("No config.toml found at {}, using defaults", config_path.display());
            return ClientConfig::default();
        }
        Err(err) => {
            tracing::warn!("Failed to read {}: {err}, using defaults", config_path.display());
            return ClientConfig::default();
        }
    };

    match toml::from_str::<ClientConfig>(&content) {
        Ok(config) => config,
        Err(err) => {
            tracing::warn!(
                "Failed to parse {}: {err}, using defaults",
                config_path.display()
            );
            ClientConfig::default()
        }
    }
}

/// Resolve the backend base URL.
///
/// Priority:
/// 1. `--api-base` flag or `VGCHAT_API_BASE` (clap merges the two)
/// 2. `api_base` from `config.toml`
pub fn resolve_api_base(
    from_cli: Option<&str>,
    config: &ClientConfig,
) -> Result<String, ConfigError> {
    [from_cli, config.api_base.as_deref()]
        .into_iter()
        .flatten()
        .map(str::trim)
        .find(|base| !base.is_empty())
        .map(String::from)
        .ok_or(ConfigError::MissingApiBase)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn load_or_default_missing_file_returns_default() {
        let tmp = TempDir::new().unwrap();
        let config = load_or_default(&tmp.path().join("config.toml")).await;
        assert_eq!(config, ClientConfig::default());
    }

    #[tokio::test]
    async fn load_or_default_valid_toml_returns_parsed() {
        let tmp = TempDir::new().unwrap();
        let config_path = tmp.path().join("config.toml");
        tokio::fs::write(
            &config_path,
            r#"
api_base = "http://localhost:8000"
typing_delay_ms = 250
"#,
        )
        .await
        .unwrap();

        let config = load_or_default(&config_path).await;
        assert_eq!(config.api_base.as_deref(), Some("http://localhost:8000"));
        assert_eq!(config.typing_delay_ms, 250);
        assert!(config.show_timestamps);
    }

    #[tokio::test]
    async fn load_or_default_invalid_toml_returns_default() {
        let tmp = TempDir::new().unwrap();
        let config_path = tmp.path().join("config.toml");
        tokio::fs::write(&config_path, "this is not { valid toml !!!")
            .await
            .unwrap();

        let config = load_or_default(&config_path).await;
        assert_eq!(config, ClientConfig::default());
    }

    #[tokio::test]
    async fn explicit_missing_file_is_error() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("nope.toml");
        let err = load_client_config(Some(&path)).await.unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }

    #[tokio::test]
    async fn explicit_invalid_file_is_error() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("bad.toml");
        tokio::fs::write(&path, "typing_delay_ms = \"soon\"").await.unwrap();

        let err = load_client_config(Some(&path)).await.unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[tokio::test]
    async fn explicit_valid_file_loads() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("vgchat.toml");
        tokio::fs::write(&path, "assistant_name = \"Loan\"").await.unwrap();

        let config = load_client_config(Some(&path)).await.unwrap();
        assert_eq!(config.assistant_name, "Loan");
    }

    #[test]
    fn resolve_api_base_prefers_cli() {
        let config = ClientConfig {
            api_base: Some("http://from-file".to_string()),
            ..ClientConfig::default()
        };
        assert_eq!(
            resolve_api_base(Some("http://from-env"), &config).unwrap(),
            "http://from-env"
        );
        assert_eq!(resolve_api_base(None, &config).unwrap(), "http://from-file");
    }

    #[test]
    fn resolve_api_base_missing_everywhere() {
        let config = ClientConfig::default();
        assert!(matches!(
            resolve_api_base(None, &config),
            Err(ConfigError::MissingApiBase)
        ));
        assert!(matches!(
            resolve_api_base(Some("   "), &config),
            Err(ConfigError::MissingApiBase)
        ));
    }

    #[test]
    fn default_config_path_ends_with_app_dir() {
        if let Some(path) = default_config_path() {
            assert!(path.ends_with("vgchat/config.toml"));
        }
    }
}
