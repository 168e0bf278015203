/// A pattern whose rewritten form the regex engine refuses to compile.
///
/// Patterns are never validated up front, so this only surfaces for input the
/// engine itself cannot parse, such as an unbalanced `)`.
#[derive(Debug, thiserror::Error)]
#[error("invalid pattern {pattern:?}: {source}")]
pub struct PatternError {
    pattern: Box<str>,
    #[source]
    source: regex::Error,
}

impl PatternError {
    pub(crate) fn new(pattern: &str, source: regex::Error) -> Self {
        Self {
            pattern: pattern.into(),
            source,
        }
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }
}
