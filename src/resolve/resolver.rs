use crate::catalog::{LanguageCatalog, LanguageSelector};
use crate::error::ResolveError;
use crate::resolve::join::join_asset_path;

/// Extension appended to resolved paths when a caller does not override it.
pub const DEFAULT_ASSET_EXTENSION: &str = ".jpg";

/// File suffix appended to a resolved asset path, e.g. `.jpg`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetExtension(String);

impl AssetExtension {
    /// Wrap a file suffix, inserting the leading dot when it is missing so
    /// `"png"` and `".png"` are equivalent. An empty value means the asset has
    /// no extension.
    pub fn new(value: impl Into<String>) -> Self {
        let value = value.into();
        if value.is_empty() || value.starts_with('.') {
            Self(value)
        } else {
            Self(format!(".{value}"))
        }
    }

    /// The suffix including its leading dot.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for AssetExtension {
    fn default() -> Self {
        Self::new(DEFAULT_ASSET_EXTENSION)
    }
}

impl std::fmt::Display for AssetExtension {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for AssetExtension {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// Final language-specific file path for an asset.
///
/// Only produced by a successful [`AssetResolver::resolve`] call, so a value
/// of this type always starts with a registered base directory and carries a
/// single separator between base and name. There is no unresolved or partial
/// state to observe.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ResolvedPath(String);

impl ResolvedPath {
    pub(crate) fn new(path: String) -> Self {
        Self(path)
    }

    /// The resolved path as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the value and return the owned path string.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl std::fmt::Display for ResolvedPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ResolvedPath {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Turns `(language selector, logical name)` pairs into resolved asset paths.
///
/// Resolution is a pure lookup-and-join with no I/O and no retries: the
/// catalog is consulted for the language's base directory, then the validated
/// name and extension are appended. Failures pass through unchanged because
/// both indicate caller configuration mistakes with no meaningful fallback.
#[derive(Debug, Clone)]
pub struct AssetResolver {
    catalog: LanguageCatalog,
    default_extension: AssetExtension,
}

impl AssetResolver {
    /// Create a resolver over the given catalog using [`DEFAULT_ASSET_EXTENSION`].
    pub fn new(catalog: LanguageCatalog) -> Self {
        Self::with_default_extension(catalog, AssetExtension::default())
    }

    /// Create a resolver with an explicit system-wide default extension.
    pub fn with_default_extension(
        catalog: LanguageCatalog,
        default_extension: AssetExtension,
    ) -> Self {
        Self {
            catalog,
            default_extension,
        }
    }

    /// Resolve a logical asset name for a language using the default extension.
    pub fn resolve(
        &self,
        selector: &LanguageSelector,
        name: &str,
    ) -> Result<ResolvedPath, ResolveError> {
        self.resolve_with_extension(selector, name, &self.default_extension)
    }

    /// Resolve a logical asset name with a per-asset extension override.
    ///
    /// The language lookup happens before name validation, so an unregistered
    /// selector reports [`ResolveError::UnsupportedLanguage`] for every name,
    /// valid or not.
    pub fn resolve_with_extension(
        &self,
        selector: &LanguageSelector,
        name: &str,
        extension: &AssetExtension,
    ) -> Result<ResolvedPath, ResolveError> {
        let base = self.catalog.base_for(selector)?;
        let path = join_asset_path(base, name, extension)?;
        Ok(ResolvedPath::new(path))
    }

    /// The catalog backing this resolver.
    pub fn catalog(&self) -> &LanguageCatalog {
        &self.catalog
    }

    /// The extension used when a call does not override it.
    pub fn default_extension(&self) -> &AssetExtension {
        &self.default_extension
    }
}
