use anyhow::Result;
use serde::Deserialize;
use anyhow::anyhow;

#[derive(Debug, Clone, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub storage: StorageConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    #[serde(default)]
    pub worker_threads: Option<usize>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { host: "127.0.0.1".into(), port: 8000, worker_threads: Some(4) }
    }
}

/// Where assets are persisted and where the prebuilt client is served from.
/// `characters/` and `levels/` are created under `data_dir`.
#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    #[serde(default = "default_data_dir")]
    pub data_dir: String,
    #[serde(default = "default_static_dir")]
    pub static_dir: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self { data_dir: default_data_dir(), static_dir: default_static_dir() }
    }
}

fn default_data_dir() -> String { ".".into() }
fn default_static_dir() -> String { "Build".into() }

/// `CONFIG_PATH`, or `config.toml` in the working directory.
pub fn config_path() -> String {
    std::env::var("CONFIG_PATH").unwrap_or_else(|_| "config.toml".to_string())
}

pub fn load_from_file(path: &str) -> Result<AppConfig> {
    let content = std::fs::read_to_string(path)?;
    parse(&content)
}

pub fn parse(content: &str) -> Result<AppConfig> {
    let cfg: AppConfig = toml::from_str(content)?;
    Ok(cfg)
}

impl AppConfig {
    /// Load `config.toml` (or `CONFIG_PATH`); without a file, build the config
    /// from `SERVER_HOST`, `SERVER_PORT`, `TOKIO_WORKER_THREADS`, `DATA_DIR`
    /// and `STATIC_DIR`.
    pub fn load_and_validate() -> Result<Self> {
        let path = config_path();
        let mut cfg = if std::path::Path::new(&path).exists() {
            load_from_file(&path).map_err(|e| anyhow!("cannot load {path}: {e}"))?
        } else {
            Self::from_env()
        };
        cfg.normalize_and_validate()?;
        Ok(cfg)
    }

    pub fn from_env() -> Self {
        let defaults = ServerConfig::default();
        let server = ServerConfig {
            host: std::env::var("SERVER_HOST").unwrap_or(defaults.host),
            port: std::env::var("SERVER_PORT")
                .ok()
                .and_then(|p| p.parse::<u16>().ok())
                .unwrap_or(defaults.port),
            worker_threads: std::env::var("TOKIO_WORKER_THREADS")
                .ok()
                .and_then(|v| v.parse::<usize>().ok())
                .or(defaults.worker_threads),
        };
        let storage = StorageConfig {
            data_dir: std::env::var("DATA_DIR").unwrap_or_else(|_| default_data_dir()),
            static_dir: std::env::var("STATIC_DIR").unwrap_or_else(|_| default_static_dir()),
        };
        Self { server, storage }
    }

    pub fn normalize_and_validate(&mut self) -> Result<()> {
        self.server.normalize()?;
        self.storage.validate()?;
        Ok(())
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

impl ServerConfig {
    fn normalize(&mut self) -> Result<()> {
        if self.host.trim().is_empty() {
            self.host = "127.0.0.1".to_string();
        }
        if self.port == 0 {
            return Err(anyhow!("server.port must be in 1..=65535"));
        }
        if let Some(w) = self.worker_threads {
            if w == 0 { self.worker_threads = Some(4); }
        } else {
            self.worker_threads = Some(4);
        }
        Ok(())
    }
}

impl StorageConfig {
    pub fn validate(&self) -> Result<()> {
        if self.data_dir.trim().is_empty() {
            return Err(anyhow!("storage.data_dir must not be empty"));
        }
        if self.static_dir.trim().is_empty() {
            return Err(anyhow!("storage.static_dir must not be empty"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_full_file() {
        let cfg = parse(
            r#"
            [server]
            host = "0.0.0.0"
            port = 9000
            worker_threads = 2

            [storage]
            data_dir = "/var/lib/assets"
            static_dir = "web"
            "#,
        )
        .unwrap();
        assert_eq!(cfg.bind_addr(), "0.0.0.0:9000");
        assert_eq!(cfg.server.worker_threads, Some(2));
        assert_eq!(cfg.storage.data_dir, "/var/lib/assets");
        assert_eq!(cfg.storage.static_dir, "web");
    }

    #[test]
    fn missing_sections_use_defaults() {
        let mut cfg = parse("").unwrap();
        cfg.normalize_and_validate().unwrap();
        assert_eq!(cfg.bind_addr(), "127.0.0.1:8000");
        assert_eq!(cfg.storage.data_dir, ".");
        assert_eq!(cfg.storage.static_dir, "Build");
    }

    #[test]
    fn normalize_fixes_host_and_threads() {
        let mut cfg = parse("[server]\nhost = \" \"\nport = 80\nworker_threads = 0\n").unwrap();
        cfg.normalize_and_validate().unwrap();
        assert_eq!(cfg.server.host, "127.0.0.1");
        assert_eq!(cfg.server.worker_threads, Some(4));
    }

    #[test]
    fn rejects_port_zero_and_empty_dirs() {
        let mut cfg = parse("[server]\nhost = \"h\"\nport = 0\n").unwrap();
        assert!(cfg.normalize_and_validate().is_err());

        let mut cfg = parse("[storage]\ndata_dir = \"\"\n").unwrap();
        assert!(cfg.normalize_and_validate().is_err());
    }
}
