//! Records and cell values.
//!
//! A record is one row of spreadsheet-sourced tabular data, keyed by column
//! header. Headers arrive with accents, stray whitespace, and the occasional
//! BOM, so lookup is trim-tolerant while the original keys are preserved for
//! presentation. Records are never mutated in place; derived records are
//! built with [`Record::with_value`].

use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::lookup::normalize_name;

/// A raw spreadsheet cell.
///
/// The spreadsheet backend yields numbers for numeric cells and strings for
/// everything else; missing cells come through as null.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CellValue {
    Null,
    Number(f64),
    Text(String),
}

impl CellValue {
    /// True for null cells and for text that is exactly empty.
    pub fn is_missing(&self) -> bool {
        match self {
            CellValue::Null => true,
            CellValue::Number(_) => false,
            CellValue::Text(text) => text.is_empty(),
        }
    }

    /// The text content if this is a text cell.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            CellValue::Text(text) => Some(text.as_str()),
            _ => None,
        }
    }
}

impl Default for CellValue {
    fn default() -> Self {
        CellValue::Null
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        CellValue::Text(value.to_string())
    }
}

impl From<String> for CellValue {
    fn from(value: String) -> Self {
        CellValue::Text(value)
    }
}

impl From<f64> for CellValue {
    fn from(value: f64) -> Self {
        CellValue::Number(value)
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Null => Ok(()),
            CellValue::Number(value) => write!(f, "{value}"),
            CellValue::Text(text) => write!(f, "{text}"),
        }
    }
}

/// An ordered mapping from column name to raw cell value.
///
/// Insertion order is preserved; it carries the spreadsheet's column order
/// through to serialized output.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Record {
    entries: Vec<(String, CellValue)>,
}

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_pairs<I, S, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (S, V)>,
        S: Into<String>,
        V: Into<CellValue>,
    {
        let entries = pairs
            .into_iter()
            .map(|(name, value)| (name.into(), value.into()))
            .collect();
        Self { entries }
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<CellValue>) {
        self.entries.push((name.into(), value.into()));
    }

    /// Value under the exact column name.
    pub fn get(&self, name: &str) -> Option<&CellValue> {
        self.entries
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value)
    }

    /// Value under the column whose trimmed name matches `name` trimmed.
    pub fn lookup(&self, name: &str) -> Option<&CellValue> {
        let wanted = normalize_name(name);
        self.entries
            .iter()
            .find(|(key, _)| normalize_name(key) == wanted)
            .map(|(_, value)| value)
    }

    /// Whether a column with the given trimmed name exists, regardless of
    /// whether its value is missing.
    pub fn contains(&self, name: &str) -> bool {
        let wanted = normalize_name(name);
        self.entries.iter().any(|(key, _)| normalize_name(key) == wanted)
    }

    /// A derived record with the cell under `name` (trim-matched) replaced.
    /// The original key spelling is kept; an unknown name appends a column.
    pub fn with_value(&self, name: &str, value: impl Into<CellValue>) -> Record {
        let wanted = normalize_name(name);
        let mut derived = self.clone();
        let value = value.into();
        match derived
            .entries
            .iter()
            .position(|(key, _)| normalize_name(key) == wanted)
        {
            Some(index) => derived.entries[index].1 = value,
            None => derived.entries.push((name.to_string(), value)),
        }
        derived
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(key, _)| key.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &CellValue)> {
        self.entries
            .iter()
            .map(|(key, value)| (key.as_str(), value))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for Record {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, value) in &self.entries {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

struct RecordVisitor;

impl<'de> Visitor<'de> for RecordVisitor {
    type Value = Record;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a map of column names to cell values")
    }

    fn visit_map<A>(self, mut access: A) -> std::result::Result<Record, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut record = Record::new();
        while let Some((key, value)) = access.next_entry::<String, CellValue>()? {
            record.insert(key, value);
        }
        Ok(record)
    }
}

impl<'de> Deserialize<'de> for Record {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Record, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(RecordVisitor)
    }
}
