use std::collections::HashMap;

/// Strip surrounding whitespace (including no-break spaces) and any BOM from
/// a column name before comparison.
pub fn normalize_name(raw: &str) -> &str {
    raw.trim_matches(|ch: char| ch.is_whitespace() || ch == '\u{feff}')
}

/// Lookup from trimmed column name to the original spelling.
///
/// Spreadsheet headers routinely carry stray leading/trailing spaces; values
/// must still resolve against the canonical names from configuration. First
/// occurrence of a trimmed name wins.
#[derive(Debug, Clone)]
pub struct TrimmedLookup {
    map: HashMap<String, String>,
}

impl TrimmedLookup {
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut map = HashMap::new();
        for name in names {
            let name = name.as_ref();
            let key = normalize_name(name).to_string();
            map.entry(key).or_insert_with(|| name.to_string());
        }
        Self { map }
    }

    /// The original spelling of the column whose trimmed name matches.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.map.get(normalize_name(name)).map(|value| value.as_str())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.map.contains_key(normalize_name(name))
    }
}
