//! Left-to-right rewrite of a path pattern into a regex source string.
//!
//! The steps must run in this order: optional groups are rewritten before
//! named parameters so that `(/:id)` still yields a capture for `id`, and
//! names are pushed in the same order their capture groups appear.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

const SEGMENT_CAPTURE: &str = "([^/?]+)";
const SPLAT_CAPTURE: &str = "([^?]*?)";
const SPLAT_NAME: &str = "path";
const QUERY_SUFFIX: &str = r"(?:\?([\s\S]*))?$";

static OPTIONAL_GROUP: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\((.*?)\)").expect("optional group regex"));

static NAMED_PARAM: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\(\?)?:[0-9A-Za-z_]+").expect("named param regex"));

/// Runs every step and returns the anchored regex source with its parameter names.
pub(super) fn rewrite(pattern: &str) -> (String, Vec<Box<str>>) {
    let mut names = Vec::new();

    let escaped = escape_literals(pattern);
    let optional = optional_groups(&escaped);
    let named = named_params(&optional, &mut names);
    let splat = splat_params(&named, &mut names);

    (anchor(&splat), names)
}

#[inline]
fn is_literal_meta(c: char) -> bool {
    matches!(
        c,
        '-' | '{' | '}' | '[' | ']' | '+' | '?' | '.' | ',' | '\\' | '^' | '$' | '|' | '#'
    )
}

// Whitespace is left as is: the engine matches it literally outside verbose
// mode and rejects escapes of non-ASCII characters.
fn escape_literals(pattern: &str) -> String {
    let mut out = String::with_capacity(pattern.len() * 2);
    for c in pattern.chars() {
        if is_literal_meta(c) {
            out.push('\\');
        }
        out.push(c);
    }
    out
}

fn optional_groups(s: &str) -> String {
    OPTIONAL_GROUP.replace_all(s, "(?:${1})?").into_owned()
}

fn named_params(s: &str, names: &mut Vec<Box<str>>) -> String {
    NAMED_PARAM
        .replace_all(s, |caps: &Captures<'_>| {
            let token = &caps[0];
            if caps.get(1).is_some() {
                // `(?:word` is the opener of an optional literal group
                return token.to_owned();
            }
            names.push(token[1..].into());
            SEGMENT_CAPTURE.to_owned()
        })
        .into_owned()
}

fn splat_params(s: &str, names: &mut Vec<Box<str>>) -> String {
    let mut out = String::with_capacity(s.len() + SPLAT_CAPTURE.len());
    for c in s.chars() {
        if c == '*' {
            names.push(SPLAT_NAME.into());
            out.push_str(SPLAT_CAPTURE);
        } else {
            out.push(c);
        }
    }
    out
}

fn anchor(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + QUERY_SUFFIX.len() + 1);
    out.push('^');
    out.push_str(s);
    out.push_str(QUERY_SUFFIX);
    out
}
