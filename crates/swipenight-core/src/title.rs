//! Title matching policy for metadata-enrichment callers.
//!
//! The enrichment collaborator returns movie info keyed by title strings
//! that rarely match the pool's titles byte-for-byte. Callers normalize
//! both sides, prefer an exact normalized match, and otherwise take the
//! first candidate whose normalized title contains (or is contained by)
//! the query's normalized title.

/// Lowercase, collapse every run of non-alphanumeric characters to a single
/// space, and trim.
pub fn normalize(title: &str) -> String {
  let mut out = String::with_capacity(title.len());
  let mut pending_space = false;
  for c in title.chars() {
    if c.is_alphanumeric() {
      if pending_space && !out.is_empty() {
        out.push(' ');
      }
      pending_space = false;
      out.extend(c.to_lowercase());
    } else {
      pending_space = true;
    }
  }
  out
}

/// Pick the best match for `query` among `candidates`, returning its index.
///
/// Exact normalized equality wins; failing that, the first candidate with
/// mutual containment (either direction) of the normalized forms.
pub fn best_match<'a, I>(query: &str, candidates: I) -> Option<usize>
where
  I: IntoIterator<Item = &'a str>,
{
  let norm_query = normalize(query);
  let normalized: Vec<String> =
    candidates.into_iter().map(normalize).collect();

  if let Some(idx) = normalized.iter().position(|n| *n == norm_query) {
    return Some(idx);
  }
  normalized
    .iter()
    .position(|n| n.contains(&norm_query) || norm_query.contains(n.as_str()))
}
