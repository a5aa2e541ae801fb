//! Catalog configuration loader describing the localized asset layout.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::catalog::{LanguageCatalog, LanguageSelector};
use crate::resolve::{AssetExtension, AssetResolver, DEFAULT_ASSET_EXTENSION};

const DEFAULT_CONFIG_FILE: &str = "assets.config.json";

/// Startup configuration mapping language codes to base asset directories.
///
/// The core never parses this itself at resolution time; the host loads it
/// once and converts it into a [`LanguageCatalog`]. Adding a language is an
/// edit to this document, not a code change.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AssetCatalogConfig {
    /// Base asset directory for each supported language code.
    pub languages: BTreeMap<String, String>,
    /// Extension appended to resolved paths unless overridden per asset.
    pub default_extension: String,
}

impl Default for AssetCatalogConfig {
    fn default() -> Self {
        Self {
            languages: BTreeMap::from([
                ("EN".into(), "assets/EN/".into()),
                ("SP".into(), "assets/SP/".into()),
            ]),
            default_extension: DEFAULT_ASSET_EXTENSION.into(),
        }
    }
}

impl AssetCatalogConfig {
    /// Attempt to load configuration from the provided directory.
    ///
    /// When the configuration file does not exist or fails to parse we fall
    /// back to default values so the host can still render its stock layout.
    pub fn discover(config_dir: &Path) -> Self {
        let candidate = config_dir.join(DEFAULT_CONFIG_FILE);
        Self::from_path(&candidate).unwrap_or_default()
    }

    /// Read configuration from a specific JSON file.
    pub fn from_path(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read catalog configuration {}", path.display()))?;
        serde_json::from_str(&content)
            .with_context(|| format!("failed to parse catalog configuration {}", path.display()))
    }

    /// Convert the configuration into a populated language catalog.
    pub fn into_catalog(self) -> LanguageCatalog {
        LanguageCatalog::from_entries(
            self.languages
                .into_iter()
                .map(|(code, base_dir)| (LanguageSelector::new(code), base_dir)),
        )
    }

    /// Convert the configuration into a ready-to-use resolver.
    pub fn into_resolver(self) -> AssetResolver {
        let extension = AssetExtension::new(self.default_extension.clone());
        AssetResolver::with_default_extension(self.into_catalog(), extension)
    }
}
