use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub paths: PathsConfig,
    pub cache: CacheConfig,
    pub index: IndexConfig,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct PathsConfig {
    /// Directory scanned for `*.md` source documents.
    pub content: PathBuf,
    /// Directory the converted `.mu` pages are written into.
    pub output: PathBuf,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            content: PathBuf::from("content"),
            output: PathBuf::from("pages"),
        }
    }
}

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct CacheConfig {
    /// Cache lifetime in seconds; no directive line is emitted when unset.
    pub seconds: Option<u64>,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct IndexConfig {
    pub enabled: bool,
    pub title: String,
    /// Request-path prefix used for page links on the index.
    pub link_prefix: String,
}

impl Default for IndexConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            title: "Pages".to_string(),
            link_prefix: "/page".to_string(),
        }
    }
}

impl Config {
    /// Load config from a TOML file, or return defaults if not found.
    pub fn load(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content).unwrap_or_default(),
            Err(_) => Self::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::Config;

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let config = Config::load(Path::new("does-not-exist.toml"));
        assert_eq!(config.paths.content, Path::new("content"));
        assert_eq!(config.paths.output, Path::new("pages"));
        assert_eq!(config.cache.seconds, None);
        assert!(config.index.enabled);
    }

    #[test]
    fn partial_config_keeps_remaining_defaults() {
        let config: Config = toml::from_str("[cache]\nseconds = 600\n").unwrap();
        assert_eq!(config.cache.seconds, Some(600));
        assert_eq!(config.index.title, "Pages");
        assert_eq!(config.paths.output, Path::new("pages"));
    }
}
