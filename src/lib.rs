//! URL pattern matching for page routers.
//!
//! A [`Matcher`] maps path patterns to pages. Dispatching a url tries the
//! patterns in the order they were declared and returns the page of the first
//! one that matches, together with the named parameters it captured.
//!
//! ```
//! use pattern_router::create_matcher;
//!
//! let matcher = create_matcher(vec![
//!     ("/users/:id", "user"),
//!     ("/posts/:id(/:comment)", "post"),
//!     ("/static/*", "asset"),
//! ]);
//!
//! let m = matcher.find("/users/42").unwrap();
//! assert_eq!(*m.page, "user");
//! assert_eq!(m.params.get("id"), Some("42"));
//!
//! let m = matcher.find("/posts/7").unwrap();
//! assert!(m.params.get("comment").is_none());
//!
//! let m = matcher.find("/static/css/site.css?v=3").unwrap();
//! assert_eq!(m.params.get("path"), Some("css/site.css"));
//!
//! assert!(matcher.find("/users/42/").is_none());
//! ```
//!
//! See the [`pattern`] module for the pattern syntax.

#![deny(unsafe_code)]

mod error;
mod macros;
mod matcher;
pub mod pattern;

pub use self::error::PatternError;
pub use self::matcher::{Match, Matcher, Params};
pub use self::pattern::{compile, CompiledPattern};

/// Builds a [`Matcher`] from `(pattern, page)` pairs in declaration order.
///
/// Nothing is compiled here; each pattern is compiled the first time a
/// dispatch reaches it.
pub fn create_matcher<K, T, I>(routes: I) -> Matcher<T>
where
    K: AsRef<str>,
    I: IntoIterator<Item = (K, T)>,
{
    routes.into_iter().collect()
}
