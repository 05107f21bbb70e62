// crates/countries-core/src/text.rs

//! Key normalization used by the name filter.

/// Lowercases `s` the way the search box compares names.
///
/// This is a plain Unicode lowercase, no transliteration:
/// `"Åland"` becomes `"åland"`.
#[inline]
pub fn lower_key(s: &str) -> String {
    s.to_lowercase()
}

/// Convert a string into a folded key suitable for accent-insensitive
/// comparison.
///
/// This performs:
/// 1\) Transliterate Unicode → ASCII (e.g. `Åland` -> `Aland`)
/// 2\) Normalize to lowercase
///
/// # Examples
///
/// ```rust
/// use countries_core::text::fold_key;
///
/// assert_eq!(fold_key("Åland Islands"), "aland islands");
/// assert_eq!(fold_key("Curaçao"), "curacao");
/// ```
pub fn fold_key(s: &str) -> String {
    deunicode::deunicode(s).to_lowercase()
}
