//! Consumer-facing widget entities that hold resolved asset paths.

use crate::catalog::LanguageSelector;
use crate::error::ResolveError;
use crate::resolve::{AssetExtension, AssetResolver, ResolvedPath};

/// A button widget's image asset, resolved once at construction time.
///
/// The rendering layer only ever consumes the stored path string; this type
/// deliberately re-resolves nothing. When the active display language changes
/// the caller constructs a new `ButtonAsset` rather than mutating this one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ButtonAsset {
  identifier: String,
  image_path: ResolvedPath,
}

impl ButtonAsset {
  /// Build a button asset by resolving `logical_name` for `selector` with the
  /// resolver's default extension.
  ///
  /// The identifier is stored opaquely and never validated; it belongs to the
  /// caller. Resolution failures surface unchanged so the UI layer can decide
  /// between a placeholder asset and refusing to create the widget.
  pub fn create(
    resolver: &AssetResolver,
    identifier: impl Into<String>,
    logical_name: &str,
    selector: &LanguageSelector,
  ) -> Result<Self, ResolveError> {
    let image_path = resolver.resolve(selector, logical_name)?;
    Ok(Self {
      identifier: identifier.into(),
      image_path,
    })
  }

  /// Build a button asset with a per-asset extension override.
  pub fn create_with_extension(
    resolver: &AssetResolver,
    identifier: impl Into<String>,
    logical_name: &str,
    selector: &LanguageSelector,
    extension: &AssetExtension,
  ) -> Result<Self, ResolveError> {
    let image_path = resolver.resolve_with_extension(selector, logical_name, extension)?;
    Ok(Self {
      identifier: identifier.into(),
      image_path,
    })
  }

  /// Caller-supplied identifier for this widget.
  pub fn identifier(&self) -> &str {
    &self.identifier
  }

  /// Language-specific image path resolved at construction.
  pub fn image_path(&self) -> &ResolvedPath {
    &self.image_path
  }
}

#[cfg(test)]
mod tests {
  use super::ButtonAsset;
  use crate::catalog::{LanguageCatalog, LanguageSelector};
  use crate::error::ResolveError;
  use crate::resolve::{AssetExtension, AssetResolver};

  fn resolver() -> AssetResolver {
    AssetResolver::new(LanguageCatalog::from_entries([
      (LanguageSelector::new("EN"), "assets/EN/".to_string()),
      (LanguageSelector::new("SP"), "assets/SP/".to_string()),
    ]))
  }

  #[test]
  fn resolves_english_button_image() {
    let button =
      ButtonAsset::create(&resolver(), "btn1", "play", &LanguageSelector::new("EN")).unwrap();
    assert_eq!(button.identifier(), "btn1");
    assert_eq!(button.image_path().as_str(), "assets/EN/play.jpg");
  }

  #[test]
  fn resolves_spanish_button_image() {
    let button =
      ButtonAsset::create(&resolver(), "btn2", "play", &LanguageSelector::new("SP")).unwrap();
    assert_eq!(button.image_path().as_str(), "assets/SP/play.jpg");
  }

  #[test]
  fn refuses_construction_for_unregistered_language() {
    let selector = LanguageSelector::new("FR");
    let result = ButtonAsset::create(&resolver(), "btn3", "play", &selector);
    assert_eq!(
      result,
      Err(ResolveError::UnsupportedLanguage { selector })
    );
  }

  #[test]
  fn refuses_construction_for_empty_logical_name() {
    let result = ButtonAsset::create(&resolver(), "btn4", "", &LanguageSelector::new("EN"));
    assert!(matches!(result, Err(ResolveError::InvalidAssetName { .. })));
  }

  #[test]
  fn identifier_is_stored_without_validation() {
    let button = ButtonAsset::create(
      &resolver(),
      "  weird/../identifier  ",
      "play",
      &LanguageSelector::new("EN"),
    )
    .unwrap();
    assert_eq!(button.identifier(), "  weird/../identifier  ");
  }

  #[test]
  fn per_asset_extension_override() {
    let button = ButtonAsset::create_with_extension(
      &resolver(),
      "btn5",
      "volume",
      &LanguageSelector::new("SP"),
      &AssetExtension::new(".png"),
    )
    .unwrap();
    assert_eq!(button.image_path().as_str(), "assets/SP/volume.png");
  }
}
