mod core;
mod imp;
mod params;

pub use self::params::Params;

use crate::pattern::CompiledPattern;

use once_cell::sync::OnceCell;

/// Dispatches urls to pages by trying patterns in declaration order.
///
/// Patterns are compiled lazily, once each, the first time dispatch reaches
/// them. The cache is filled through [`OnceCell`], so a matcher can be shared
/// between threads.
#[derive(Debug, Clone)]
pub struct Matcher<T> {
    patterns: Vec<Box<str>>,
    pages: Vec<T>,
    compiled: Vec<OnceCell<CompiledPattern>>,
    fallback: Option<T>,
}

/// The page of the first matching pattern and the parameters it extracted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Match<'a, T> {
    pub page: &'a T,
    pub params: Params<'a>,
}

impl<T> Default for Matcher<T> {
    fn default() -> Self {
        Self::new()
    }
}
