use std::collections::HashMap;

/// The result of a successful parse. Entries are keyed by section, then by key; the global
/// section is the empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Data {
    entries: HashMap<String, HashMap<String, String>>,
    count: usize,
}

impl Data {
    /// Look up `key` in the global section.
    #[must_use]
    pub fn get(&self, key: &str) -> &str {
        self.get_from_section("", key)
    }

    /// Look up `key` in `section`. Absent sections and keys yield an empty string.
    #[must_use]
    pub fn get_from_section(&self, section: &str, key: &str) -> &str {
        self.entries
            .get(section)
            .and_then(|entries| entries.get(key))
            .map_or("", String::as_str)
    }

    /// Whether `key` was assigned in `section`, even if the value is empty.
    #[must_use]
    pub fn contains(&self, section: &str, key: &str) -> bool {
        self.entries
            .get(section)
            .is_some_and(|entries| entries.contains_key(key))
    }

    /// Number of assignments seen while parsing. Overwritten keys count once per assignment.
    #[must_use]
    pub fn count_all_entries(&self) -> usize {
        self.count
    }

    /// Names of the sections holding at least one entry, in no particular order.
    pub fn sections(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Keys assigned in `section`, in no particular order.
    pub fn keys<'a>(&'a self, section: &str) -> impl Iterator<Item = &'a str> {
        self.entries
            .get(section)
            .into_iter()
            .flat_map(|entries| entries.keys().map(String::as_str))
    }

    pub(crate) fn insert(&mut self, section: &str, key: String, value: String) {
        // Sections are only materialized once they hold an entry.
        if let Some(entries) = self.entries.get_mut(section) {
            entries.insert(key, value);
        } else {
            self.entries
                .insert(section.to_owned(), HashMap::from([(key, value)]));
        }

        self.count += 1;
    }
}
