//! Reassembles posted flat form data into the shapes the widgets rendered.
//!
//! Browsers post repeated names as multiple values under one key and
//! nested fields as underscore-joined keys; this module folds both back
//! into lists, pair maps, and nested maps. Values stay plain strings —
//! typed conversion belongs to whatever consumes them.


use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// One reassembled nested row: field name to raw value.
pub type SubmittedRow = IndexMap<String, String>;

/// An item recovered from an array group: a bare input's value, or a
/// reassembled row when the group wrapped a nested form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SubmittedItem {
    Scalar(String),
    Row(SubmittedRow),
}

/// Submitted form data: insertion-ordered multimap of `name -> values`.
#[derive(Debug, Clone, Default)]
pub struct FormData {
    entries: IndexMap<String, Vec<String>>,
}

impl FormData {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.entries
            .entry(name.into())
            .or_default()
            .push(value.into());
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// All values posted under `name`, in order.
    pub fn values(&self, name: &str) -> &[String] {
        self.entries
            .get(name)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }
}

impl<N: Into<String>, V: Into<String>> FromIterator<(N, V)> for FormData {
    fn from_iter<I: IntoIterator<Item = (N, V)>>(iter: I) -> Self {
        let mut data = Self::new();
        for (name, value) in iter {
            data.append(name, value);
        }
        data
    }
}

/// Recovers the items of an array group from `data`.
///
/// When the exact field name was posted, each non-empty value is one
/// scalar item. Otherwise the rows are reassembled positionally from
/// every key containing the field name, with the `{name}_` marker
/// stripped from its first occurrence in the key.
pub fn array_values(data: &FormData, name: &str) -> Vec<SubmittedItem> {
    if data.contains(name) {
        return data
            .values(name)
            .iter()
            .filter(|value| !value.is_empty())
            .map(|value| SubmittedItem::Scalar(value.clone()))
            .collect();
    }

    let marker = format!("{name}_");
    let mut rows: Vec<SubmittedRow> = Vec::new();
    for key in data.keys() {
        if !key.contains(name) {
            continue;
        }
        let nested_key = key.replacen(&marker, "", 1);
        for (row, value) in data.values(key).iter().enumerate() {
            if row >= rows.len() {
                rows.push(SubmittedRow::new());
            }
            rows[row].insert(nested_key.clone(), value.clone());
        }
    }
    rows.into_iter().map(SubmittedItem::Row).collect()
}

/// Folds a flat `[k1, v1, k2, v2, ...]` list into an ordered map. A
/// trailing unpaired key is dropped.
pub fn compress_key_value(values: &[String]) -> IndexMap<String, String> {
    let mut out = IndexMap::new();
    let mut iter = values.iter();
    while let (Some(key), Some(value)) = (iter.next(), iter.next()) {
        out.insert(key.clone(), value.clone());
    }
    out
}

/// Collects the fields of one nested form: every key containing the form
/// name contributes its first value under the key with the `{name}_`
/// marker stripped from its first occurrence.
pub fn nested_values(data: &FormData, name: &str) -> SubmittedRow {
    let marker = format!("{name}_");
    let mut out = SubmittedRow::new();
    for key in data.keys() {
        if !key.contains(name) || key == name {
            continue;
        }
        if let Some(value) = data.values(key).first() {
            out.insert(key.replacen(&marker, "", 1), value.clone());
        }
    }
    out
}
