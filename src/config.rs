use clap::Parser;
use config::{Config, Environment, File, FileFormat};
use serde::Deserialize;
use std::path::Path;

use crate::playground::PlaygroundMode;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Config file path
    #[arg(short, long, env = "CONFIG_FILE")]
    pub config: Option<String>,

    /// Port to listen on
    #[arg(long, env = "PORT")]
    pub port: Option<u16>,

    /// Base URL of the chat/generation backend (defaults to the site's own origin)
    #[arg(long, env = "BACKEND_URL")]
    pub backend_url: Option<String>,

    /// Playground chat mode: `networked` or `simulated`
    #[arg(long, env = "PLAYGROUND_MODE")]
    pub mode: Option<String>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub server: ServerConfig,
    #[serde(default)]
    pub backend: BackendConfig,
    pub playground: PlaygroundConfig,
    #[serde(default)]
    pub credentials: CredentialsConfig,
    #[serde(default)]
    pub catalog: CatalogConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub port: u16,
    pub host: String,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct BackendConfig {
    pub base_url: Option<String>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct PlaygroundConfig {
    pub mode: PlaygroundMode,
    pub simulated_delay_ms: u64,
    pub session_timeout_secs: u64,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct CredentialsConfig {
    /// JSON file holding saved API keys. Keys stay in memory when unset.
    pub path: Option<String>,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct CatalogConfig {
    /// YAML catalog replacing the built-in one.
    pub path: Option<String>,
}

impl AppConfig {
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_from_args(std::env::args())
    }

    pub fn load_from_args<I, T>(args: I) -> Result<Self, config::ConfigError>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        let cli =
            Cli::try_parse_from(args).map_err(|e| config::ConfigError::Message(e.to_string()))?;

        let mut builder = Config::builder();

        // 1. Defaults
        builder = builder
            .set_default("server.port", 3000)?
            .set_default("server.host", "0.0.0.0")?
            .set_default("playground.mode", "networked")?
            .set_default("playground.simulated_delay_ms", 800)?
            .set_default("playground.session_timeout_secs", 30 * 60)?;

        // 2. Config file: explicit path, else ./config.yaml when present
        if let Some(path) = &cli.config {
            builder = builder.add_source(File::new(path, FileFormat::Yaml));
        } else if Path::new("config.yaml").exists() {
            builder = builder.add_source(File::new("config.yaml", FileFormat::Yaml).required(false));
        }

        // 3. Environment variables, e.g. OMNI_SERVER__PORT=8000
        builder = builder.add_source(
            Environment::with_prefix("OMNI")
                .separator("__")
                .try_parsing(true),
        );

        // 4. CLI flags (and their env aliases) win
        if let Some(port) = cli.port {
            builder = builder.set_override("server.port", port)?;
        }
        if let Some(url) = cli.backend_url.filter(|u| !u.trim().is_empty()) {
            builder = builder.set_override("backend.base_url", url)?;
        }
        if let Some(mode) = cli.mode {
            builder = builder.set_override("playground.mode", mode.to_lowercase())?;
        }

        let cfg = builder.build()?;
        cfg.try_deserialize()
    }

    /// Address the server binds to.
    pub fn bind_address(&self) -> String {
        let host = self.server.host.as_str();
        if host.contains(':') && !host.starts_with('[') {
            format!("[{host}]:{}", self.server.port)
        } else {
            format!("{host}:{}", self.server.port)
        }
    }

    /// Backend base URL, falling back to the site's own origin.
    pub fn backend_base_url(&self) -> String {
        match self.backend.base_url.as_deref().map(str::trim) {
            Some(url) if !url.is_empty() => url.to_string(),
            _ => {
                let host = match self.server.host.as_str() {
                    "0.0.0.0" | "::" => "127.0.0.1".to_string(),
                    other if other.contains(':') && !other.starts_with('[') => format!("[{other}]"),
                    other => other.to_string(),
                };
                format!("http://{host}:{}", self.server.port)
            }
        }
    }
}
