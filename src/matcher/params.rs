use std::ops::Deref;
use std::str::FromStr;

use smallvec::SmallVec;

/// Named parameters extracted from a url, in the order they appear in the pattern.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Params<'a> {
    buf: SmallVec<[(&'a str, &'a str); 8]>,
}

impl<'a> Params<'a> {
    pub fn get(&self, name: &str) -> Option<&'a str> {
        self.buf
            .iter()
            .find_map(|&(k, v)| if name == k { Some(v) } else { None })
    }

    pub fn parse<T: FromStr>(&self, name: &str) -> Option<Result<T, T::Err>> {
        self.get(name).map(T::from_str)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.buf.iter().any(|&(k, _)| k == name)
    }
}

impl<'a> Deref for Params<'a> {
    type Target = [(&'a str, &'a str)];
    fn deref(&self) -> &Self::Target {
        &*self.buf
    }
}

impl<'a> IntoIterator for Params<'a> {
    type Item = (&'a str, &'a str);
    type IntoIter = smallvec::IntoIter<[(&'a str, &'a str); 8]>;
    fn into_iter(self) -> Self::IntoIter {
        self.buf.into_iter()
    }
}

impl<'a> Params<'a> {
    pub(crate) fn new() -> Self {
        Self {
            buf: SmallVec::new(),
        }
    }

    /// A repeated name keeps its first position and takes the latest value.
    pub(crate) fn insert(&mut self, name: &'a str, value: &'a str) {
        match self.buf.iter_mut().find(|(k, _)| *k == name) {
            Some(entry) => entry.1 = value,
            None => self.buf.push((name, value)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repeated_name() {
        let mut params = Params::new();
        params.insert("id", "1");
        params.insert("tab", "a");
        params.insert("id", "2");
        assert_eq!(&*params, &[("id", "2"), ("tab", "a")]);
    }

    #[test]
    fn parse() {
        let mut params = Params::new();
        params.insert("id", "42");
        params.insert("name", "x");
        assert_eq!(params.parse::<u32>("id"), Some(Ok(42)));
        assert!(params.parse::<u32>("name").unwrap().is_err());
        assert!(params.parse::<u32>("missing").is_none());
        assert!(params.contains("name"));
        assert!(!params.contains("missing"));
    }
}
