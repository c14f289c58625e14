//! Configuration management
//!
//! The native host loads `Config` from defaults, an optional config file and
//! `EVT_*` environment variables. The WASM client has no environment at run
//! time, so it bakes endpoints in at compile time from `EVENTTICKET_API_URL`
//! and `EVENTTICKET_SOCKET_URL`.

use serde::Deserialize;
use std::sync::OnceLock;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000/api";
pub const DEFAULT_SOCKET_BASE_URL: &str = "ws://localhost:8000";

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Config {
    /// REST API root, e.g. `http://localhost:8000/api`
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,

    /// WebSocket root, e.g. `ws://localhost:8000`
    #[serde(default = "default_socket_base_url")]
    pub socket_base_url: String,
}

fn default_api_base_url() -> String {
    DEFAULT_API_BASE_URL.to_string()
}

fn default_socket_base_url() -> String {
    DEFAULT_SOCKET_BASE_URL.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: default_api_base_url(),
            socket_base_url: default_socket_base_url(),
        }
    }
}

impl Config {
    /// Endpoints baked in at compile time (used by the WASM client)
    pub fn from_build_env() -> Self {
        Self {
            api_base_url: option_env!("EVENTTICKET_API_URL")
                .unwrap_or(DEFAULT_API_BASE_URL)
                .to_string(),
            socket_base_url: option_env!("EVENTTICKET_SOCKET_URL")
                .unwrap_or(DEFAULT_SOCKET_BASE_URL)
                .to_string(),
        }
    }

    /// Strip trailing slashes and check both roots parse as URLs
    pub fn normalized(self) -> anyhow::Result<Self> {
        let api = self.api_base_url.trim_end_matches('/').to_string();
        let socket = self.socket_base_url.trim_end_matches('/').to_string();

        let api_url = url::Url::parse(&api)?;
        anyhow::ensure!(
            matches!(api_url.scheme(), "http" | "https"),
            "api_base_url must be http(s), got {}",
            api_url.scheme()
        );
        let socket_url = url::Url::parse(&socket)?;
        anyhow::ensure!(
            matches!(socket_url.scheme(), "ws" | "wss"),
            "socket_base_url must be ws(s), got {}",
            socket_url.scheme()
        );

        Ok(Self {
            api_base_url: api,
            socket_base_url: socket,
        })
    }

    /// URL of the live channel for one event
    pub fn event_socket_url(&self, event_id: i64) -> String {
        format!("{}/ws/event/{}/", self.socket_base_url, event_id)
    }
}

static ACTIVE: OnceLock<Config> = OnceLock::new();

/// Install the process-wide configuration. Only the first call wins.
pub fn install(config: Config) {
    if ACTIVE.set(config).is_err() {
        tracing::warn!("Configuration already installed, ignoring");
    }
}

/// The active configuration, falling back to the compile-time endpoints
pub fn active() -> &'static Config {
    ACTIVE.get_or_init(Config::from_build_env)
}

#[cfg(feature = "server")]
pub fn load_config() -> anyhow::Result<Config> {
    let config_dir = directories::ProjectDirs::from("com", "eventticket", "eventticket")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .unwrap_or_else(|| std::path::PathBuf::from("."));
    load_config_from(&config_dir)
}

#[cfg(feature = "server")]
pub fn load_config_from(config_dir: &std::path::Path) -> anyhow::Result<Config> {
    let config = ::config::Config::builder()
        // Start with defaults
        .set_default("api_base_url", DEFAULT_API_BASE_URL)?
        .set_default("socket_base_url", DEFAULT_SOCKET_BASE_URL)?
        // Load from config file if it exists
        .add_source(
            ::config::File::with_name(&config_dir.join("config").to_string_lossy())
                .required(false),
        )
        // Override with environment variables (EVT_API_BASE_URL, EVT_SOCKET_BASE_URL)
        .add_source(
            ::config::Environment::with_prefix("EVT")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    config.try_deserialize::<Config>()?.normalized()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let cfg = Config::default().normalized().unwrap();
        assert_eq!(cfg.api_base_url, "http://localhost:8000/api");
        assert_eq!(cfg.event_socket_url(4), "ws://localhost:8000/ws/event/4/");
    }

    #[test]
    fn test_trailing_slash_is_stripped() {
        let cfg = Config {
            api_base_url: "https://tickets.example.com/api/".into(),
            socket_base_url: "wss://tickets.example.com/".into(),
        }
        .normalized()
        .unwrap();
        assert_eq!(cfg.api_base_url, "https://tickets.example.com/api");
        assert_eq!(cfg.event_socket_url(1), "wss://tickets.example.com/ws/event/1/");
    }

    #[test]
    fn test_wrong_scheme_rejected() {
        let cfg = Config {
            api_base_url: "ws://localhost:8000/api".into(),
            ..Config::default()
        };
        assert!(cfg.normalized().is_err());
    }

    #[cfg(feature = "server")]
    #[test]
    #[serial_test::serial]
    fn test_load_from_file_and_env() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("config.toml"),
            "api_base_url = \"http://api.internal:9000/api\"\n",
        )
        .unwrap();

        std::env::set_var("EVT_SOCKET_BASE_URL", "ws://socket.internal:9001");
        let cfg = load_config_from(dir.path()).unwrap();
        std::env::remove_var("EVT_SOCKET_BASE_URL");

        assert_eq!(cfg.api_base_url, "http://api.internal:9000/api");
        assert_eq!(cfg.socket_base_url, "ws://socket.internal:9001");
    }

    #[cfg(feature = "server")]
    #[test]
    #[serial_test::serial]
    fn test_load_without_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = load_config_from(dir.path()).unwrap();
        assert_eq!(cfg, Config::default());
    }
}
