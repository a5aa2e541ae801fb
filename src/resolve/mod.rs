//! Path resolution from logical asset names to language-localized file paths.
//!
//! The responsibilities are split into focused submodules so that name
//! validation, path joining and catalog orchestration can be tested
//! independently: `name` guards against references escaping a language's base
//! directory, `join` owns separator normalisation, and `resolver` wires both
//! to the [`crate::catalog::LanguageCatalog`].

mod join;
mod name;
mod resolver;

pub use join::join_asset_path;
pub use name::validate_logical_name;
pub use resolver::{AssetExtension, AssetResolver, DEFAULT_ASSET_EXTENSION, ResolvedPath};
