//! Config loading with an embedded fallback
//!
//! - If CONFIG_FILE is NOT set: use the embedded config only (no filesystem access)
//! - If CONFIG_FILE IS set and the file is missing: seed it with the embedded config
//! - If CONFIG_FILE IS set and the file exists: use it

use rust_embed::RustEmbed;
use std::borrow::Cow;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Embedded default config
#[derive(RustEmbed)]
#[folder = "."]
#[include = "config.yaml"]
struct EmbeddedConfig;

const CONFIG_NAME: &str = "config.yaml";

/// Report of init (extraction) operations
#[derive(Debug, Default)]
pub struct InitReport {
    pub written: Vec<String>,
    pub skipped: Vec<String>,
}

/// Asset loader with optional filesystem override
pub struct AssetLoader {
    /// External config file path (from CONFIG_FILE env var)
    config_file: Option<PathBuf>,
}

impl AssetLoader {
    /// Create a new asset loader
    ///
    /// `config_file` should be `Some` only if CONFIG_FILE was set.
    pub fn new(config_file: Option<PathBuf>) -> Self {
        Self { config_file }
    }

    /// Loader configured from the CONFIG_FILE environment variable
    pub fn from_env() -> Self {
        Self::new(std::env::var("CONFIG_FILE").ok().map(PathBuf::from))
    }

    pub fn config_file(&self) -> Option<&Path> {
        self.config_file.as_deref()
    }

    /// Whether the external config file is configured and present
    pub fn has_external_config(&self) -> bool {
        self.config_file.as_ref().is_some_and(|p| p.exists())
    }

    /// Read the config file
    ///
    /// If an external path is configured and exists, uses that.
    /// Otherwise falls back to the embedded config.
    pub fn read_config(&self) -> io::Result<Cow<'static, [u8]>> {
        if let Some(ref path) = self.config_file {
            if path.exists() {
                tracing::trace!(path = %path.display(), "Loading config from filesystem");
                return Ok(Cow::Owned(fs::read(path)?));
            }
        }

        Self::embedded_config()
    }

    /// Read config as a UTF-8 string
    pub fn read_config_string(&self) -> io::Result<String> {
        let bytes = self.read_config()?;
        String::from_utf8(bytes.into_owned())
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    }

    /// The config shipped inside the binary
    pub fn embedded_config() -> io::Result<Cow<'static, [u8]>> {
        EmbeddedConfig::get(CONFIG_NAME)
            .map(|f| {
                tracing::trace!("Loading config from embedded assets");
                f.data
            })
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "Embedded config.yaml not found"))
    }

    /// Embedded config as a UTF-8 string
    pub fn embedded_config_string() -> io::Result<String> {
        let bytes = Self::embedded_config()?;
        String::from_utf8(bytes.into_owned())
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    }

    /// Write the embedded config to a configured but missing CONFIG_FILE
    ///
    /// Returns whether a file was written.
    pub fn seed_if_configured(&self) -> io::Result<bool> {
        let Some(ref path) = self.config_file else {
            return Ok(false);
        };
        if path.exists() {
            return Ok(false);
        }
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let data = Self::embedded_config()?;
        fs::write(path, &*data)?;
        tracing::info!(path = %path.display(), "Seeded config file with embedded default");
        Ok(true)
    }

    /// Extract the embedded config to the filesystem (init command)
    ///
    /// Writes to `target`, else the configured path, else `./config.yaml`.
    pub fn init(&self, target: Option<&Path>, force: bool) -> io::Result<InitReport> {
        let mut report = InitReport::default();
        let path = target
            .map(Path::to_path_buf)
            .or_else(|| self.config_file.clone())
            .unwrap_or_else(|| PathBuf::from(".").join(CONFIG_NAME));

        if !force && path.exists() {
            report.skipped.push(path.display().to_string());
            return Ok(report);
        }
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let data = Self::embedded_config()?;
        fs::write(&path, &*data)?;
        report.written.push(path.display().to_string());

        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_config_present() {
        let text = AssetLoader::embedded_config_string().unwrap();
        assert!(text.contains("palette:"));
    }

    #[test]
    fn test_missing_external_falls_back_to_embedded() {
        let loader = AssetLoader::new(Some(PathBuf::from("/nonexistent/brickboard.yaml")));
        assert!(!loader.has_external_config());
        let text = loader.read_config_string().unwrap();
        assert_eq!(text, AssetLoader::embedded_config_string().unwrap());
    }

    #[test]
    fn test_seed_and_init() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.yaml");
        let loader = AssetLoader::new(Some(path.clone()));

        assert!(loader.seed_if_configured().unwrap());
        assert!(path.exists());
        assert!(!loader.seed_if_configured().unwrap());

        let report = loader.init(None, false).unwrap();
        assert!(report.written.is_empty());
        assert_eq!(report.skipped.len(), 1);

        let report = loader.init(None, true).unwrap();
        assert_eq!(report.written.len(), 1);
    }

    #[test]
    fn test_no_config_file_never_seeds() {
        let loader = AssetLoader::new(None);
        assert!(!loader.seed_if_configured().unwrap());
    }
}
