use std::{env, fs, path::Path};

use tracing::warn;

use crate::services::llm::{ClientConfig, Provider};

/// Inline default the credential starts from. A run must never reach the
/// network while the effective key still equals this value.
pub const PLACEHOLDER_API_KEY: &str = "your-gemini-api-key-here";

const DEFAULT_MODEL: &str = "gemini-pro";
const SECRETS_FILE: &str = "secrets.toml";
const API_KEY_VAR: &str = "GEMINI_API_KEY";

/// Process-wide run configuration.
///
/// Constructed once at startup and passed by reference into the pipeline;
/// there are no ambient globals. The API key is resolved from three
/// sources, lowest to highest precedence: inline placeholder,
/// `GEMINI_API_KEY` environment variable, `secrets.toml` in the working
/// directory.
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub provider: Provider,
    pub model: String,
    pub api_key: String,
    pub base_url: Option<String>,
}

impl RunConfig {
    /// Read configuration from the environment and the optional secrets
    /// file.
    pub fn load() -> Self {
        let provider = match env::var("TRIPCREW_PROVIDER").ok().as_deref() {
            Some("ollama") => Provider::Ollama,
            _ => Provider::Gemini,
        };

        let model = env::var("TRIPCREW_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.into());
        let base_url = env::var("TRIPCREW_BASE_URL").ok();

        let api_key = resolve_api_key(
            env::var(API_KEY_VAR).ok(),
            read_secrets(Path::new(SECRETS_FILE)),
        );

        Self {
            provider,
            model,
            api_key,
            base_url,
        }
    }

    /// Refuse to run while the credential is unset or still the
    /// placeholder, for providers that need one. Checked before any
    /// network call.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.provider.requires_api_key() {
            return Ok(());
        }
        if self.api_key.is_empty() || self.api_key == PLACEHOLDER_API_KEY {
            return Err(ConfigError::InvalidCredential);
        }
        Ok(())
    }

    /// Client settings for agents built under this configuration.
    pub fn client_config(&self) -> ClientConfig {
        ClientConfig {
            provider: self.provider.clone(),
            base_url: self.base_url.clone(),
            api_key: if self.api_key.is_empty() {
                None
            } else {
                Some(self.api_key.clone())
            },
        }
    }
}

/// Apply the credential precedence chain: placeholder < env < secrets.
fn resolve_api_key(env_key: Option<String>, secrets_key: Option<String>) -> String {
    let mut key = PLACEHOLDER_API_KEY.to_string();
    if let Some(k) = env_key {
        if !k.is_empty() {
            key = k;
        }
    }
    if let Some(k) = secrets_key {
        if !k.is_empty() {
            key = k;
        }
    }
    key
}

/// Best-effort read of the secrets file. A missing file is normal; a
/// malformed one is logged and ignored.
fn read_secrets(path: &Path) -> Option<String> {
    let raw = fs::read_to_string(path).ok()?;
    let parsed: toml::Value = match raw.parse() {
        Ok(v) => v,
        Err(e) => {
            warn!(path = %path.display(), error = %e, "ignoring malformed secrets file");
            return None;
        }
    };
    parsed
        .get(API_KEY_VAR)
        .and_then(|v| v.as_str())
        .map(|s| s.to_string())
}

/// Errors raised during configuration validation.
#[derive(Debug)]
pub enum ConfigError {
    /// The credential is unset or equals the placeholder value.
    InvalidCredential,
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::InvalidCredential => write!(
                f,
                "Please provide a valid Gemini API key (set {API_KEY_VAR} or add it to {SECRETS_FILE})."
            ),
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn placeholder_loses_to_env_and_env_loses_to_secrets() {
        assert_eq!(resolve_api_key(None, None), PLACEHOLDER_API_KEY);
        assert_eq!(resolve_api_key(Some("from-env".into()), None), "from-env");
        assert_eq!(
            resolve_api_key(Some("from-env".into()), Some("from-secrets".into())),
            "from-secrets"
        );
        // empty values never win
        assert_eq!(
            resolve_api_key(Some(String::new()), Some(String::new())),
            PLACEHOLDER_API_KEY
        );
    }

    #[test]
    fn validate_rejects_placeholder_and_empty_key() {
        let mut config = RunConfig {
            provider: Provider::Gemini,
            model: DEFAULT_MODEL.into(),
            api_key: PLACEHOLDER_API_KEY.into(),
            base_url: None,
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidCredential)
        ));

        config.api_key = String::new();
        assert!(config.validate().is_err());

        config.api_key = "real-key".into();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn ollama_needs_no_credential() {
        let config = RunConfig {
            provider: Provider::Ollama,
            model: "llama3".into(),
            api_key: PLACEHOLDER_API_KEY.into(),
            base_url: None,
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn secrets_file_is_parsed() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "GEMINI_API_KEY = \"from-file\"").unwrap();
        assert_eq!(read_secrets(file.path()), Some("from-file".into()));
    }

    #[test]
    fn malformed_secrets_file_is_ignored() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "not valid toml [[[").unwrap();
        assert_eq!(read_secrets(file.path()), None);
        assert_eq!(read_secrets(Path::new("/nonexistent/secrets.toml")), None);
    }
}
