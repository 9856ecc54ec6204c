//! Slug normalization for matching file identifiers
//!
//! A slug is the canonical key shared by configuration entries and discovered
//! files: lower-cased, with every run of non-alphanumeric characters collapsed
//! to a single hyphen. The same slug doubles as the generated module's base
//! file name, so it must never contain path separators or reserved characters.

/// Normalize a human-readable file identifier into a slug.
///
/// Deterministic and total over any input; distinct identifiers may collapse
/// to the same slug (`"Toba Logo"` and `"toba-logo"` both yield `toba-logo`).
///
/// # Examples
/// ```
/// use glyphgen::slug::normalize;
///
/// assert_eq!(normalize("Toba Logo"), "toba-logo");
/// assert_eq!(normalize("ic_settings_48px"), "ic-settings-48px");
/// assert_eq!(normalize("arrow-thick-circle-left"), "arrow-thick-circle-left");
/// ```
pub fn normalize(identifier: &str) -> String {
    let mut slug = String::with_capacity(identifier.len());
    let mut pending_separator = false;

    for ch in identifier.chars() {
        if ch.is_alphanumeric() {
            if pending_separator && !slug.is_empty() {
                slug.push('-');
            }
            pending_separator = false;
            for lower in ch.to_lowercase() {
                slug.push(lower);
            }
        } else {
            pending_separator = true;
        }
    }

    slug
}
