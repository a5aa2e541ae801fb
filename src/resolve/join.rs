use crate::error::ResolveError;
use crate::resolve::name::validate_logical_name;
use crate::resolve::resolver::AssetExtension;

/// Join a base directory, a logical asset name and a file extension into one
/// path string.
///
/// The name is validated first, so a successful join can never leave the base
/// directory. Exactly one `/` separates base and name regardless of whether
/// the base already carries a trailing separator, and backslashes in the base
/// are rewritten so the result uses forward slashes on every platform. The
/// base is expected to be non-empty; catalog lookups guarantee that.
pub fn join_asset_path(
    base: &str,
    name: &str,
    extension: &AssetExtension,
) -> Result<String, ResolveError> {
    validate_logical_name(name)?;

    let base = base.replace('\\', "/");
    let base = base.trim_end_matches('/');
    Ok(format!("{base}/{name}{extension}"))
}

#[cfg(test)]
mod tests {
    use super::join_asset_path;
    use crate::error::ResolveError;
    use crate::resolve::resolver::AssetExtension;

    #[test]
    fn joins_base_name_and_extension() {
        let path = join_asset_path("assets/EN/", "play", &AssetExtension::new(".jpg"));
        assert_eq!(path, Ok("assets/EN/play.jpg".to_string()));
    }

    #[test]
    fn inserts_missing_separator_after_base() {
        let path = join_asset_path("assets/EN", "play", &AssetExtension::new(".jpg"));
        assert_eq!(path, Ok("assets/EN/play.jpg".to_string()));
    }

    #[test]
    fn collapses_doubled_separators_after_base() {
        let path = join_asset_path("assets/EN///", "play", &AssetExtension::new(".jpg"));
        assert_eq!(path, Ok("assets/EN/play.jpg".to_string()));
    }

    #[test]
    fn normalises_backslashes_from_windows_bases() {
        let path = join_asset_path(r"assets\EN\", "play", &AssetExtension::new(".jpg"));
        assert_eq!(path, Ok("assets/EN/play.jpg".to_string()));
    }

    #[test]
    fn is_deterministic_for_identical_inputs() {
        let extension = AssetExtension::new(".png");
        let first = join_asset_path("assets/SP", "pause", &extension);
        let second = join_asset_path("assets/SP", "pause", &extension);
        assert_eq!(first, second);
    }

    #[test]
    fn propagates_name_validation_failures() {
        let result = join_asset_path("assets/EN/", "", &AssetExtension::new(".jpg"));
        assert!(matches!(
            result,
            Err(ResolveError::InvalidAssetName { .. })
        ));
    }
}
