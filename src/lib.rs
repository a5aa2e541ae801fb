#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

pub mod catalog;
pub mod config;
pub mod error;
pub mod resolve;
pub mod widget;

pub use catalog::{LanguageCatalog, LanguageSelector};
pub use config::AssetCatalogConfig;
pub use error::ResolveError;
pub use resolve::{AssetExtension, AssetResolver, ResolvedPath};
pub use widget::ButtonAsset;
