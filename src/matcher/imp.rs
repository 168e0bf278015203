use super::core::dispatch;
use super::params::Params;
use super::{Match, Matcher};
use crate::error::PatternError;
use crate::pattern::CompiledPattern;

use std::iter::FromIterator;

use once_cell::sync::OnceCell;
use tracing::debug;

impl<T> Matcher<T> {
    pub fn new() -> Self {
        Self {
            patterns: Vec::new(),
            pages: Vec::new(),
            compiled: Vec::new(),
            fallback: None,
        }
    }

    /// Appends a route. Inserting a pattern that is already present replaces
    /// its page but keeps its position.
    pub fn insert(&mut self, pattern: &str, page: T) -> &mut Self {
        match self.position(pattern) {
            Some(i) => {
                debug!(pattern = %pattern, index = i, "replaced page of existing pattern");
                self.pages[i] = page;
            }
            None => {
                self.patterns.push(pattern.into());
                self.pages.push(page);
                self.compiled.push(OnceCell::new());
            }
        }
        self
    }

    /// Sets the page returned by [`find_or_fallback`](Self::find_or_fallback)
    /// when no pattern matches.
    pub fn with_fallback(mut self, page: T) -> Self {
        self.fallback = Some(page);
        self
    }

    /// Returns the page of the first pattern, in declaration order, that
    /// matches `url`.
    ///
    /// # Panics
    /// Panics if a pattern reached during dispatch is rejected by the regex
    /// engine. Use [`try_find`](Self::try_find) to get the error instead.
    pub fn find<'a>(&'a self, url: &'a str) -> Option<Match<'a, T>> {
        match self.try_find(url) {
            Ok(ret) => ret,
            Err(e) => panic!("{}", e),
        }
    }

    pub fn try_find<'a>(&'a self, url: &'a str) -> Result<Option<Match<'a, T>>, PatternError> {
        let found = dispatch(&self.patterns, &self.compiled, url)?;
        Ok(found.map(|(i, params)| Match {
            page: &self.pages[i],
            params,
        }))
    }

    /// Like [`find`](Self::find), with mutable access to the page.
    pub fn find_mut<'a>(&'a mut self, url: &'a str) -> Option<(&'a mut T, Params<'a>)> {
        let found = match dispatch(&self.patterns, &self.compiled, url) {
            Ok(found) => found,
            Err(e) => panic!("{}", e),
        };
        let (i, params) = found?;
        Some((&mut self.pages[i], params))
    }

    /// Like [`find`](Self::find), but returns the fallback page with empty
    /// params when nothing matches.
    pub fn find_or_fallback<'a>(&'a self, url: &'a str) -> Option<Match<'a, T>> {
        self.find(url).or_else(|| {
            self.fallback.as_ref().map(|page| Match {
                page,
                params: Params::new(),
            })
        })
    }

    /// Compiles every pattern that has not been compiled yet.
    pub fn compile_all(&self) -> Result<(), PatternError> {
        for (pattern, slot) in self.patterns.iter().zip(&self.compiled) {
            slot.get_or_try_init(|| crate::pattern::compile(pattern))?;
        }
        Ok(())
    }

    /// Returns the cached rule of `pattern` without compiling it.
    pub fn compiled(&self, pattern: &str) -> Option<&CompiledPattern> {
        let i = self.position(pattern)?;
        self.compiled[i].get()
    }

    pub fn patterns(&self) -> impl Iterator<Item = &str> + '_ {
        self.patterns.iter().map(|p| &**p)
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    pub fn clear(&mut self) {
        self.patterns.clear();
        self.pages.clear();
        self.compiled.clear();
    }
}

impl<T> Matcher<T> {
    fn position(&self, pattern: &str) -> Option<usize> {
        self.patterns.iter().position(|p| &**p == pattern)
    }
}

impl<K: AsRef<str>, T> FromIterator<(K, T)> for Matcher<T> {
    fn from_iter<I: IntoIterator<Item = (K, T)>>(iter: I) -> Self {
        let mut matcher = Self::new();
        matcher.extend(iter);
        matcher
    }
}

impl<K: AsRef<str>, T> Extend<(K, T)> for Matcher<T> {
    fn extend<I: IntoIterator<Item = (K, T)>>(&mut self, iter: I) {
        for (pattern, page) in iter {
            self.insert(pattern.as_ref(), page);
        }
    }
}
