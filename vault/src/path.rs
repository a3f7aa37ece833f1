//! Vault path normalization.

/// Removes surrounding whitespace and leading/trailing slashes from a path.
///
/// Interior content is left alone: `"/a//b/"` becomes `"a//b"`.
///
/// ```
/// use vault_util::sanitize_path;
///
/// assert_eq!(sanitize_path(" /secret/app/ "), "secret/app");
/// assert_eq!(sanitize_path("   "), "");
/// ```
#[must_use]
pub fn sanitize_path(s: &str) -> String {
    trim_trailing_slashes(trim_leading_slashes(s.trim())).to_string()
}

/// Whitespace uncovered by stripping a slash is trimmed as well.
fn trim_leading_slashes(s: &str) -> &str {
    s.trim_start_matches(|c: char| c == '/' || c.is_whitespace())
}

fn trim_trailing_slashes(s: &str) -> &str {
    s.trim_end_matches(|c: char| c == '/' || c.is_whitespace())
}
