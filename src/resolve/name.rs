use regex::Regex;

use crate::error::ResolveError;

fn separator_pattern() -> &'static Regex {
    use std::sync::OnceLock;

    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"[/\\]").expect("invalid separator regex"))
}

/// Check that a logical asset name is safe to append to a base directory.
///
/// Names are language-independent identifiers such as `play_button`; anything
/// that could navigate out of the configured base directory is rejected rather
/// than resolved to a path the caller never intended.
pub fn validate_logical_name(name: &str) -> Result<(), ResolveError> {
    let reject = |reason| {
        Err(ResolveError::InvalidAssetName {
            name: name.to_string(),
            reason,
        })
    };

    if name.is_empty() {
        return reject("must not be empty");
    }
    if separator_pattern().is_match(name) {
        return reject("must not contain path separators");
    }
    if name == "." || name == ".." {
        return reject("must not be a directory reference");
    }

    Ok(())
}
