//! Site configuration parsed from the embedded `site.toml`

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::{Error, Result};

/// Root of `site.toml`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub site: SiteSection,
    pub assets: AssetsConfig,
    pub logging: LoggingConfig,
}

/// `[site]` section
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteSection {
    /// Brand shown in the navbar and the document title
    pub title: String,
}

impl Default for SiteSection {
    fn default() -> Self {
        Self {
            title: "Capsumi".to_string(),
        }
    }
}

/// `[assets]` section
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssetsConfig {
    /// Path prefix for author documents, without a trailing slash
    pub documents_base: String,
}

impl Default for AssetsConfig {
    fn default() -> Self {
        Self {
            documents_base: "/assignments".to_string(),
        }
    }
}

impl AssetsConfig {
    /// Link to the n-th (1-based) author document
    pub fn author_document(&self, n: usize) -> String {
        format!("{}/author{}.pdf", self.documents_base, n)
    }
}

/// `[logging]` section
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: LogLevel,
}

/// Console log verbosity
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl SiteConfig {
    /// Parse and validate a `site.toml` document
    pub fn from_toml(content: &str) -> Result<Self> {
        let mut config: SiteConfig = toml::from_str(content)?;

        let base = config.assets.documents_base.trim();
        if !base.starts_with('/') {
            return Err(Error::config(format!(
                "assets.documents_base must be an absolute path, got {:?}",
                config.assets.documents_base
            )));
        }
        // "/" collapses to "" so documents resolve at the site root
        config.assets.documents_base = base.trim_end_matches('/').to_string();

        if config.site.title.trim().is_empty() {
            return Err(Error::config("site.title must not be empty"));
        }

        Ok(config)
    }

    /// Parse the embedded config, falling back to defaults on any error
    pub fn load_embedded(content: &str) -> Self {
        match Self::from_toml(content) {
            Ok(config) => {
                debug!("Loaded site config: {:?}", config);
                config
            }
            Err(e) => {
                warn!("Invalid site.toml, using defaults: {}", e);
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_document_uses_defaults() {
        let config = SiteConfig::from_toml("").unwrap();
        assert_eq!(config, SiteConfig::default());
        assert_eq!(config.site.title, "Capsumi");
        assert_eq!(config.assets.documents_base, "/assignments");
        assert_eq!(config.logging.level, LogLevel::Info);
    }

    #[test]
    fn test_full_document() {
        let config = SiteConfig::from_toml(
            r#"
[site]
title = "Capsumi Preview"

[assets]
documents_base = "/docs/pdf/"

[logging]
level = "debug"
"#,
        )
        .unwrap();

        assert_eq!(config.site.title, "Capsumi Preview");
        assert_eq!(config.assets.documents_base, "/docs/pdf");
        assert_eq!(config.logging.level, LogLevel::Debug);
    }

    #[test]
    fn test_author_document_path() {
        let assets = AssetsConfig::default();
        assert_eq!(assets.author_document(1), "/assignments/author1.pdf");
        assert_eq!(assets.author_document(4), "/assignments/author4.pdf");
    }

    #[test]
    fn test_root_documents_base() {
        let config = SiteConfig::from_toml("[assets]\ndocuments_base = \"/\"").unwrap();
        assert_eq!(config.assets.author_document(2), "/author2.pdf");
    }

    #[test]
    fn test_relative_documents_base_rejected() {
        let err = SiteConfig::from_toml("[assets]\ndocuments_base = \"assignments\"").unwrap_err();
        assert!(matches!(err, Error::Config { .. }));
        assert!(err.to_string().contains("absolute path"));
    }

    #[test]
    fn test_blank_title_rejected() {
        let err = SiteConfig::from_toml("[site]\ntitle = \"  \"").unwrap_err();
        assert!(err.to_string().contains("site.title"));
    }

    #[test]
    fn test_unknown_log_level_is_toml_error() {
        let err = SiteConfig::from_toml("[logging]\nlevel = \"loud\"").unwrap_err();
        assert!(matches!(err, Error::Toml(_)));
    }

    #[test]
    fn test_load_embedded_falls_back_on_error() {
        let config = SiteConfig::load_embedded("[site\ntitle = ");
        assert_eq!(config, SiteConfig::default());
    }
}
