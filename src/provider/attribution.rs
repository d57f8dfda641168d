//! Attribution placeholder expansion.
//!
//! Attribution strings may embed `{attribution.<Provider>}` tokens that
//! splice in another provider's attribution text, transitively. Expansion
//! is a recursive descent over the tokens with an explicit depth bound, so
//! a reference cycle in a hand-authored table surfaces as an error instead
//! of unbounded recursion.

use regex::Regex;
use std::sync::OnceLock;

use super::error::ResolveError;
use super::keys;
use super::table::ProviderTable;

/// Upper bound on expansion depth.
///
/// A well-formed table never chains attributions deeper than the number of
/// providers it contains; anything past this bound is a reference cycle.
const MAX_DEPTH: usize = 64;

/// Get the attribution placeholder regex.
///
/// Pattern: `{attribution.<name>}` where `<name>` is a provider name
/// (word characters, matching the names used in the bundled table).
fn token_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"\{attribution\.(\w*)\}").unwrap())
}

/// Expands every attribution placeholder in `attr` against `table`.
///
/// Each token is replaced with the referenced provider's *top-level* base
/// attribution, itself expanded by the same rule.
///
/// # Errors
///
/// [`ResolveError::UnknownProvider`] if a token references a provider that
/// is not in the table; [`ResolveError::CyclicAttribution`] if expansion
/// exceeds the depth bound.
pub(super) fn expand(table: &ProviderTable, attr: &str) -> Result<String, ResolveError> {
    expand_at(table, attr, 0)
}

fn expand_at(table: &ProviderTable, attr: &str, depth: usize) -> Result<String, ResolveError> {
    if !attr.contains("{attribution.") {
        return Ok(attr.to_owned());
    }

    let mut out = String::with_capacity(attr.len());
    let mut last = 0;
    for token in token_pattern().find_iter(attr) {
        let name = token
            .as_str()
            .trim_start_matches("{attribution.")
            .trim_end_matches('}');

        tracing::trace!(provider = %name, depth, "Expanding attribution placeholder");

        if depth >= MAX_DEPTH {
            return Err(ResolveError::CyclicAttribution(name.to_owned()));
        }
        let provider = table
            .get(name)
            .ok_or_else(|| ResolveError::UnknownProvider(name.to_owned()))?;
        let referenced = provider.options.get_str(keys::ATTRIBUTION).unwrap_or("");

        out.push_str(&attr[last..token.start()]);
        out.push_str(&expand_at(table, referenced, depth + 1)?);
        last = token.end();
    }
    out.push_str(&attr[last..]);

    Ok(out)
}
