use std::collections::HashMap;

use crate::KeyRow;

/// The fields of one data line, keyed by the header key at the same position.
///
/// A record from a short line holds only the fields that were present; no
/// empty values are filled in for the missing keys.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Record {
    fields: HashMap<String, String>,
}

impl Record {
    #[inline(always)]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields.get(key).map(String::as_str)
    }

    #[inline(always)]
    pub fn contains_key(&self, key: &str) -> bool {
        self.fields.contains_key(key)
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Field values in header order, stopping at the first key this record lacks.
    pub fn values_in<'a>(&'a self, keys: &'a KeyRow) -> impl Iterator<Item = &'a str> + 'a {
        keys.iter().map_while(move |k| self.get(k))
    }

    pub fn to_json(&self, keys: &KeyRow) -> serde_json::Value {
        let map = keys
            .iter()
            .filter_map(|k| {
                self.get(k)
                    .map(|v| (k.to_string(), serde_json::Value::String(v.to_string())))
            })
            .collect::<serde_json::Map<_, _>>();
        serde_json::Value::Object(map)
    }

    pub fn into_map(self) -> HashMap<String, String> {
        self.fields
    }

    pub(crate) fn insert(&mut self, key: String, value: String) {
        self.fields.insert(key, value);
    }
}

impl From<Record> for HashMap<String, String> {
    fn from(record: Record) -> Self {
        record.fields
    }
}

impl From<HashMap<String, String>> for Record {
    fn from(fields: HashMap<String, String>) -> Self {
        Record { fields }
    }
}
