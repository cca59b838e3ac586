//! Prefix completion against the command registry.

/// First candidate, in iteration order, whose name starts with `prefix`.
///
/// Ties always go to the earliest candidate so completion stays
/// deterministic; no cycling, no common-prefix expansion.
pub fn first_match<'a, I>(prefix: &str, candidates: I) -> Option<&'a str>
where
    I: IntoIterator<Item = &'a str>,
{
    candidates.into_iter().find(|c| c.starts_with(prefix))
}
