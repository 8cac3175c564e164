use lusodir_core::error::{Error, Result};

/// Trim the raw query and enforce the minimum length (in characters).
///
/// No case or diacritic folding happens here; matching is the search
/// collaborator's business.
pub fn normalize_query(raw: Option<&str>, min_len: usize) -> Result<String> {
    let trimmed = raw.unwrap_or_default().trim();
    if trimmed.chars().count() < min_len {
        return Err(Error::InvalidQuery { min_len });
    }
    Ok(trimmed.to_string())
}
