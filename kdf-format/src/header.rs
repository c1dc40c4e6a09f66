use std::collections::HashSet;

use crate::error::OpenError;

/// The ordered, unique field keys taken from the first line of a file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyRow {
    keys: Vec<String>,
}

impl KeyRow {
    /// Builds a key row from header tokens, rejecting the first key that repeats.
    pub fn from_tokens<I, S>(tokens: I) -> Result<KeyRow, OpenError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut seen = HashSet::new();
        let mut keys = Vec::new();

        for token in tokens {
            let key = token.into();
            if !seen.insert(key.clone()) {
                return Err(OpenError::DuplicateKey { key });
            }
            keys.push(key);
        }

        Ok(KeyRow { keys })
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    #[inline(always)]
    pub fn get(&self, index: usize) -> Option<&str> {
        self.keys.get(index).map(String::as_str)
    }

    pub fn position(&self, key: &str) -> Option<usize> {
        self.keys.iter().position(|k| k == key)
    }

    #[inline(always)]
    pub fn as_slice(&self) -> &[String] {
        &self.keys
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.keys.iter().map(String::as_str)
    }

    pub fn into_vec(self) -> Vec<String> {
        self.keys
    }
}

impl<'a> IntoIterator for &'a KeyRow {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.keys.iter()
    }
}
