//! Failure taxonomy for localized asset resolution.

use crate::catalog::LanguageSelector;

/// Errors produced while resolving a logical asset name to a localized path.
///
/// Both variants describe caller configuration mistakes. Resolution is a pure
/// computation, so every failure is deterministic and reproducible given the
/// same inputs; retrying never helps and nothing is recovered internally.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolveError {
  /// The requested language has no entry in the catalog.
  UnsupportedLanguage {
    /// Selector that failed the lookup.
    selector: LanguageSelector,
  },
  /// The logical asset name is empty or contains disallowed characters.
  InvalidAssetName {
    /// Name that failed validation.
    name: String,
    /// Why the name was rejected.
    reason: &'static str,
  },
}

impl std::fmt::Display for ResolveError {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      Self::UnsupportedLanguage { selector } => {
        write!(f, "unsupported language {:?}", selector.as_str())
      }
      Self::InvalidAssetName { name, reason } => {
        write!(f, "invalid asset name {:?}: {}", name, reason)
      }
    }
  }
}

impl std::error::Error for ResolveError {}
