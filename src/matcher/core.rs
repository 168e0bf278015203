use super::params::Params;
use crate::error::PatternError;
use crate::pattern::{compile, CompiledPattern};

use once_cell::sync::OnceCell;
use tracing::trace;

/// Tries each pattern in order, compiling it on first use.
///
/// Takes the fields rather than the matcher so that callers can borrow the
/// pages mutably while the returned params borrow the cache.
pub(super) fn dispatch<'a>(
    patterns: &'a [Box<str>],
    compiled: &'a [OnceCell<CompiledPattern>],
    url: &'a str,
) -> Result<Option<(usize, Params<'a>)>, PatternError> {
    for (i, (pattern, slot)) in patterns.iter().zip(compiled).enumerate() {
        let rule = slot.get_or_try_init(|| compile(pattern))?;
        if let Some(params) = rule.captures(url) {
            trace!(url = %url, pattern = %pattern, index = i, "url matched");
            return Ok(Some((i, params)));
        }
    }

    trace!(url = %url, candidates = patterns.len(), "no pattern matched");
    Ok(None)
}
