use crate::error::{FotogramErrorType, FotogramResult};

/// Canonicalizes free-text tag input into the storage key: strips a
/// single leading `#` if present, then lowercases. The result is what
/// the tag table's uniqueness constraint and the search predicates
/// compare against, so every entry point must go through here.
///
/// Internal whitespace is kept as-is and no character set is enforced;
/// the only rejected input is one that is empty after stripping.
pub fn normalize_tag_name(raw: &str) -> FotogramResult<String> {
  let stripped = raw.strip_prefix('#').unwrap_or(raw);
  let name = stripped.to_lowercase();
  if name.is_empty() {
    Err(FotogramErrorType::EmptyTagName)?
  }
  Ok(name)
}

/// Validates a hashtag search query and returns the canonical tag name
/// to match against. The `#` prefix is mandatory for search input and
/// is checked before any normalization happens.
pub fn parse_hashtag_query(query: &str) -> FotogramResult<String> {
  if query.is_empty() {
    Err(FotogramErrorType::MissingSearchQuery)?
  }
  if !query.starts_with('#') {
    Err(FotogramErrorType::MissingHashtagPrefix)?
  }
  normalize_tag_name(query)
}
