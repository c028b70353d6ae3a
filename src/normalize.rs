//! Identifier normalization rules observed across the source datasets.
//!
//! All rules are best-effort string rewrites: malformed identifiers pass
//! through unchanged rather than raising an error. A missing value
//! normalizes to the empty string; callers must skip triple creation for
//! empty identifiers instead of asserting a triple with an empty local
//! name. Every rule is idempotent.

/// Flatten an ontology CURIE into a URI-safe local name
/// (`DOID:123` becomes `DOID_123`).
pub fn curie_to_local(raw: &str) -> String {
    raw.trim().replace(':', "_")
}

/// Strip a literal prefix token (`CID000085` with token `CID` becomes
/// `000085`). Values without the token are returned trimmed.
pub fn strip_prefix_token(raw: &str, token: &str) -> String {
    let trimmed = raw.trim();
    trimmed.strip_prefix(token).unwrap_or(trimmed).to_string()
}

/// Strip surrounding angle brackets from a URI reference.
pub fn strip_angle_brackets(raw: &str) -> String {
    raw.trim()
        .trim_start_matches('<')
        .trim_end_matches('>')
        .to_string()
}

/// Clean a loosely-typed tabular cell: trim whitespace and map the
/// `nan` placeholder left behind by upstream exports to an empty string.
pub fn clean_cell(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.eq_ignore_ascii_case("nan") {
        return String::new();
    }
    trimmed.to_string()
}
