//! Configuration module
//!
//! All settings have defaults that reproduce the classic dev-server
//! behavior: listen on port 8000 and serve the directory containing the
//! executable. An optional `devpages.toml` file or `DEVPAGES`-prefixed
//! environment variables can override them, which is mainly useful for
//! tests (alternate port, temporary serving root).

use serde::Deserialize;
use std::io;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub site: SiteConfig,
    pub logging: LoggingConfig,
}

/// Server configuration
#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

/// Site layout configuration
#[derive(Debug, Deserialize, Clone)]
pub struct SiteConfig {
    /// Serving root. When unset, the directory containing the executable.
    pub root: Option<PathBuf>,
    pub index_file: String,
    pub fallback_file: String,
}

/// Logging configuration
#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    pub access_log: bool,
}

/// Resolved serving root and site file names, fixed for the process lifetime.
///
/// `root` is always an absolute, canonicalized path.
#[derive(Debug, Clone)]
pub struct Site {
    pub root: PathBuf,
    pub index_file: String,
    pub fallback_file: String,
}

impl Site {
    /// Path of the fallback page at the serving root
    pub fn fallback_path(&self) -> PathBuf {
        self.root.join(&self.fallback_file)
    }
}

impl Config {
    /// Load configuration from the default `devpages.toml` location
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_from("devpages")
    }

    /// Load configuration from specified file path (without extension)
    ///
    /// The file is optional; missing keys fall back to defaults.
    pub fn load_from(config_path: &str) -> Result<Self, config::ConfigError> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name(config_path).required(false))
            .add_source(config::Environment::with_prefix("DEVPAGES"))
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 8000)?
            .set_default("site.index_file", "index.html")?
            .set_default("site.fallback_file", "404.html")?
            .set_default("logging.access_log", true)?
            .build()?;

        settings.try_deserialize()
    }

    pub fn socket_addr(&self) -> Result<SocketAddr, String> {
        format!("{}:{}", self.server.host, self.server.port)
            .parse()
            .map_err(|e| format!("Invalid address: {e}"))
    }

    /// Resolve the serving root into an immutable [`Site`].
    ///
    /// Fails if the root does not exist or is not readable.
    pub fn site(&self) -> io::Result<Site> {
        let root = match &self.site.root {
            Some(path) => path.clone(),
            None => executable_dir()?,
        };

        Ok(Site {
            root: root.canonicalize()?,
            index_file: self.site.index_file.clone(),
            fallback_file: self.site.fallback_file.clone(),
        })
    }
}

/// Directory containing the running executable
fn executable_dir() -> io::Result<PathBuf> {
    let exe = std::env::current_exe()?;
    exe.parent().map(Path::to_path_buf).ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::NotFound,
            "executable path has no parent directory",
        )
    })
}
