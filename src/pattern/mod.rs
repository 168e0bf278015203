//! Pattern compiler.
//!
//! A pattern is a path template such as `/users/:id(/:tab)` or `/files/*`:
//!
//! - `:name` captures one segment (anything but `/` and `?`).
//! - `(...)` makes the enclosed part optional.
//! - `*` captures the remainder of the path as `path`, possibly empty.
//! - An optional `?query` suffix on the url is always accepted and ignored.
//!
//! Every other character matches itself. Patterns are not validated: a
//! malformed pattern compiles to some rule that may never match, and only
//! input the regex engine itself rejects produces a [`PatternError`].

mod rewrite;

use crate::error::PatternError;
use crate::matcher::Params;

use regex::Regex;
use tracing::debug;

/// A compiled pattern: an anchored regex and its parameter names.
///
/// The names are aligned with the capture groups of the regex, in order.
#[derive(Debug, Clone)]
pub struct CompiledPattern {
    pattern: Box<str>,
    regex: Regex,
    names: Box<[Box<str>]>,
}

/// Compiles `pattern` into a [`CompiledPattern`].
///
/// Compilation is deterministic, so the result can be cached by pattern string.
pub fn compile(pattern: &str) -> Result<CompiledPattern, PatternError> {
    let (source, names) = rewrite::rewrite(pattern);
    let regex = Regex::new(&source).map_err(|e| PatternError::new(pattern, e))?;

    debug!(
        pattern = %pattern,
        regex = %regex.as_str(),
        params = ?names,
        "compiled pattern"
    );

    Ok(CompiledPattern {
        pattern: pattern.into(),
        regex,
        names: names.into_boxed_slice(),
    })
}

impl CompiledPattern {
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    pub fn as_regex(&self) -> &Regex {
        &self.regex
    }

    /// Parameter names in capture order.
    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.names.iter().map(|n| &**n)
    }

    pub fn is_match(&self, url: &str) -> bool {
        self.regex.is_match(url)
    }

    /// Matches `url` and collects its parameters.
    ///
    /// Optional captures that did not participate are left out of the result;
    /// a capture that matched the empty string is kept with an empty value.
    pub fn captures<'a>(&'a self, url: &'a str) -> Option<Params<'a>> {
        let caps = self.regex.captures(url)?;

        // group 0 is the whole url and the last group is the query string
        let last = caps.len().saturating_sub(1);

        let mut params = Params::new();
        for (name, i) in self.names.iter().zip(1..last) {
            if let Some(m) = caps.get(i) {
                params.insert(name, m.as_str());
            }
        }
        Some(params)
    }
}
