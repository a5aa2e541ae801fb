//! Registry of supported display languages and their base asset directories.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::ResolveError;

/// Opaque code identifying a supported display language, e.g. `"EN"` or `"SP"`.
///
/// The set of codes is open: a new language is registered through configuration,
/// never by editing a compiled-in table. Codes compare byte-for-byte and are not
/// case-folded.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LanguageSelector(String);

impl LanguageSelector {
  /// Wrap a language code.
  pub fn new(code: impl Into<String>) -> Self {
    Self(code.into())
  }

  /// The underlying language code.
  pub fn as_str(&self) -> &str {
    &self.0
  }
}

impl std::fmt::Display for LanguageSelector {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.write_str(&self.0)
  }
}

impl From<&str> for LanguageSelector {
  fn from(code: &str) -> Self {
    Self::new(code)
  }
}

/// Mapping from language selectors to the base directory holding that
/// language's assets.
///
/// Read-only once populated; lookups never mutate, so a catalog can be shared
/// across threads without locking. An unknown selector is always a visible
/// [`ResolveError::UnsupportedLanguage`], never a silent empty or default base.
#[derive(Debug, Clone, Default)]
pub struct LanguageCatalog {
  entries: BTreeMap<LanguageSelector, String>,
}

impl LanguageCatalog {
  /// Create an empty catalog.
  pub fn new() -> Self {
    Self::default()
  }

  /// Build a catalog from `(selector, base directory)` pairs.
  ///
  /// Base directories are normalised on the way in; entries with a blank base
  /// directory are discarded so a lookup can never yield an empty path prefix.
  pub fn from_entries(
    entries: impl IntoIterator<Item = (LanguageSelector, String)>,
  ) -> Self {
    let mut catalog = Self::new();
    for (selector, base_dir) in entries {
      catalog.register(selector, base_dir);
    }
    catalog
  }

  /// Register one language, replacing any previous entry for the same selector.
  pub fn register(&mut self, selector: LanguageSelector, base_dir: impl AsRef<str>) {
    if let Some(base) = normalise_base_dir(base_dir.as_ref()) {
      self.entries.insert(selector, base);
    }
  }

  /// Look up the base asset directory for a language.
  ///
  /// The returned base is non-empty and always ends with exactly one `/`, so
  /// appending a file name to it is unambiguous.
  pub fn base_for(&self, selector: &LanguageSelector) -> Result<&str, ResolveError> {
    self
      .entries
      .get(selector)
      .map(String::as_str)
      .ok_or_else(|| ResolveError::UnsupportedLanguage {
        selector: selector.clone(),
      })
  }

  /// Whether the selector has a registered base directory.
  pub fn is_supported(&self, selector: &LanguageSelector) -> bool {
    self.entries.contains_key(selector)
  }

  /// Iterate over the registered selectors in code order.
  pub fn languages(&self) -> impl Iterator<Item = &LanguageSelector> {
    self.entries.keys()
  }

  /// Number of registered languages.
  pub fn len(&self) -> usize {
    self.entries.len()
  }

  /// Whether the catalog has no registered languages.
  pub fn is_empty(&self) -> bool {
    self.entries.is_empty()
  }
}

/// Normalise a configured base directory for unambiguous concatenation.
///
/// Backslashes are rewritten to forward slashes so resolved paths are stable
/// across platforms, and the result carries exactly one trailing separator.
/// Blank values yield `None`.
fn normalise_base_dir(value: &str) -> Option<String> {
  let trimmed = value.trim();
  if trimmed.is_empty() {
    return None;
  }

  let mut base = trimmed.replace('\\', "/");
  while base.ends_with('/') {
    base.pop();
  }
  if base.is_empty() {
    return None;
  }
  base.push('/');
  Some(base)
}
