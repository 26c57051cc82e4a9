use uuid::Uuid;

/// Freshly generated causality token, a hyphenated UUID v4.
///
/// The host compares successive field values verbatim, so only uniqueness is
/// load-bearing, not the format.
pub fn fresh_token() -> String {
    Uuid::new_v4().to_string()
}
