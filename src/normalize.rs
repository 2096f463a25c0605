// ==========================================
// Quadrant Engine - Text Normalization
// ==========================================
// Responsibility: single folding rule for names, roles, departments
//                 and locations (diacritic/case/whitespace insensitive)
// Red line: every cross-record string comparison goes through norm()
// ==========================================

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Strips diacritics by NFD-decomposing and dropping combining marks.
///
/// # Examples
/// ```
/// use quadrant_engine::normalize::unaccent;
/// assert_eq!(unaccent("logística"), "logistica");
/// assert_eq!(unaccent("Martí"), "Marti");
/// ```
pub fn unaccent(input: &str) -> String {
    input.nfd().filter(|c| !is_combining_mark(*c)).collect()
}

/// Folds a string into the canonical comparison key:
/// unaccent, lowercase, trim.
///
/// # Examples
/// ```
/// use quadrant_engine::normalize::norm;
/// assert_eq!(norm("  Logística "), "logistica");
/// assert_eq!(norm("FINCA MIRÓ"), "finca miro");
/// ```
pub fn norm(input: &str) -> String {
    unaccent(input).to_lowercase().trim().to_string()
}

/// True when both strings fold to the same comparison key.
pub fn norm_eq(a: &str, b: &str) -> bool {
    norm(a) == norm(b)
}
