use serde::Deserialize;
use std::path::PathBuf;

/// Top-level server configuration, loaded from a YAML file.
///
/// Every field carries a default so the server can start with no
/// configuration file at all.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub files: FilesConfig,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Address the listener binds to.
    pub listen_addr: String,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct FilesConfig {
    /// Sandbox boundary for all served resources.
    pub document_root: PathBuf,
    /// Directory holding per-status error pages (`<code>.html`).
    pub error_dir: PathBuf,
    /// Upper bound on accumulated request-head bytes before the
    /// blank-line terminator must have appeared.
    pub max_request_size: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            files: FilesConfig::default(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen_addr: "0.0.0.0:8080".to_string(),
        }
    }
}

impl Default for FilesConfig {
    fn default() -> Self {
        Self {
            document_root: PathBuf::from("public"),
            error_dir: PathBuf::from("errors"),
            max_request_size: 8192,
        }
    }
}

impl Config {
    /// Loads configuration from `$LANTERN_CONFIG` (or `lantern.yaml`).
    /// A missing file yields the defaults; a file that exists but does
    /// not parse is a startup error.
    pub fn load() -> anyhow::Result<Self> {
        let path =
            std::env::var("LANTERN_CONFIG").unwrap_or_else(|_| "lantern.yaml".to_string());

        match std::fs::read_to_string(&path) {
            Ok(contents) => {
                let cfg = serde_yaml::from_str(&contents)?;
                Ok(cfg)
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(e) => Err(e.into()),
        }
    }

    pub fn from_yaml(contents: &str) -> anyhow::Result<Self> {
        Ok(serde_yaml::from_str(contents)?)
    }
}

impl ServerConfig {
    /// Replaces the port part of `listen_addr`, keeping the host.
    pub fn set_port(&mut self, port: u16) {
        let host = self
            .listen_addr
            .rsplit_once(':')
            .map(|(host, _)| host)
            .unwrap_or("0.0.0.0");
        self.listen_addr = format!("{host}:{port}");
    }
}
