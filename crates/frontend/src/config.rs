//! Console configuration.
//!
//! The defaults are embedded as TOML and may be overridden at build time
//! through `SELLCONTROL_BACKEND_URL`, `SELLCONTROL_GOOGLE_CLIENT_ID` and
//! `SELLCONTROL_LOG_LEVEL` (read with `option_env!`, so they are baked into
//! the wasm bundle by `trunk build`).

use once_cell::sync::Lazy;
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct AppConfig {
    pub backend: BackendConfig,
    pub identity: IdentityConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct BackendConfig {
    pub url: String,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct IdentityConfig {
    /// OAuth client id registered for the hosted sign-in widget.
    pub client_id: String,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct LoggingConfig {
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

/// Default configuration embedded in the bundle
const DEFAULT_CONFIG: &str = r#"
[backend]
url = "http://localhost:8000"

[identity]
client_id = ""

[logging]
level = "info"
"#;

/// Build-time overrides, captured when the bundle is compiled.
#[derive(Debug, Default, Clone, Copy)]
pub struct Overrides {
    pub backend_url: Option<&'static str>,
    pub client_id: Option<&'static str>,
    pub log_level: Option<&'static str>,
}

impl Overrides {
    pub fn from_build_env() -> Self {
        Self {
            backend_url: option_env!("SELLCONTROL_BACKEND_URL"),
            client_id: option_env!("SELLCONTROL_GOOGLE_CLIENT_ID"),
            log_level: option_env!("SELLCONTROL_LOG_LEVEL"),
        }
    }
}

/// Parse `source` and apply overrides on top.
pub fn load_config(source: &str, overrides: Overrides) -> anyhow::Result<AppConfig> {
    let mut config: AppConfig = toml::from_str(source)?;

    if let Some(url) = overrides.backend_url.filter(|v| !v.trim().is_empty()) {
        config.backend.url = url.trim().to_string();
    }
    if let Some(id) = overrides.client_id.filter(|v| !v.trim().is_empty()) {
        config.identity.client_id = id.trim().to_string();
    }
    if let Some(level) = overrides.log_level.filter(|v| !v.trim().is_empty()) {
        config.logging.level = level.trim().to_string();
    }

    config.backend.url = config.backend.url.trim_end_matches('/').to_string();
    Ok(config)
}

static CONFIG: Lazy<AppConfig> = Lazy::new(|| {
    match load_config(DEFAULT_CONFIG, Overrides::from_build_env()) {
        Ok(config) => config,
        Err(e) => {
            log::error!("Invalid configuration, using built-in defaults: {}", e);
            fallback_config()
        }
    }
});

fn fallback_config() -> AppConfig {
    AppConfig {
        backend: BackendConfig {
            url: "http://localhost:8000".to_string(),
        },
        identity: IdentityConfig {
            client_id: String::new(),
        },
        logging: LoggingConfig::default(),
    }
}

pub fn app_config() -> &'static AppConfig {
    &CONFIG
}

impl LoggingConfig {
    /// Unknown levels fall back to `info`.
    pub fn level(&self) -> log::Level {
        match self.level.trim().to_ascii_lowercase().as_str() {
            "error" => log::Level::Error,
            "warn" | "warning" => log::Level::Warn,
            "debug" => log::Level::Debug,
            "trace" => log::Level::Trace,
            _ => log::Level::Info,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = load_config(DEFAULT_CONFIG, Overrides::default()).unwrap();
        assert_eq!(config.backend.url, "http://localhost:8000");
        assert_eq!(config.identity.client_id, "");
        assert_eq!(config.logging.level(), log::Level::Info);
    }

    #[test]
    fn overrides_win_and_trailing_slash_is_trimmed() {
        let overrides = Overrides {
            backend_url: Some("https://api.sellcontrol.example/"),
            client_id: Some("123.apps.googleusercontent.com"),
            log_level: Some("DEBUG"),
        };
        let config = load_config(DEFAULT_CONFIG, overrides).unwrap();
        assert_eq!(config.backend.url, "https://api.sellcontrol.example");
        assert_eq!(config.identity.client_id, "123.apps.googleusercontent.com");
        assert_eq!(config.logging.level(), log::Level::Debug);
    }

    #[test]
    fn blank_overrides_are_ignored() {
        let overrides = Overrides {
            backend_url: Some("  "),
            ..Overrides::default()
        };
        let config = load_config(DEFAULT_CONFIG, overrides).unwrap();
        assert_eq!(config.backend.url, "http://localhost:8000");
    }

    #[test]
    fn logging_section_is_optional() {
        let src = "[backend]\nurl = \"http://x\"\n[identity]\nclient_id = \"c\"\n";
        let config = load_config(src, Overrides::default()).unwrap();
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn unknown_level_falls_back_to_info() {
        let logging = LoggingConfig {
            level: "loud".into(),
        };
        assert_eq!(logging.level(), log::Level::Info);
    }

    #[test]
    fn malformed_source_is_an_error() {
        assert!(load_config("[backend", Overrides::default()).is_err());
    }
}
