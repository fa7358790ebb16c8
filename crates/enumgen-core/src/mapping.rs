use indexmap::IndexMap;
use tracing::{debug, trace};

use crate::case::snake_to_camel;

/// Ordered display name -> enumerator name association.
///
/// A key keeps the position of its first insertion. Inserting it again only
/// replaces the enumerator name, matching how the generated table resolves
/// two enumerators that collapse to the same display name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnumMapping {
    entries: IndexMap<String, String>,
    discarded: usize,
    overwritten: usize,
}

/// Counters describing what `build_mapping` did with its input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MappingStats {
    /// Distinct display names in the mapping.
    pub entries: usize,
    /// Raw entries dropped because their display name was empty.
    pub discarded: usize,
    /// Raw entries that replaced an earlier enumerator with the same display name.
    pub overwritten: usize,
}

impl EnumMapping {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or update `display`, returning the enumerator name it replaced.
    pub fn insert(&mut self, display: String, original: String) -> Option<String> {
        let previous = self.entries.insert(display, original);
        if previous.is_some() {
            self.overwritten += 1;
        }
        previous
    }

    pub fn get(&self, display: &str) -> Option<&str> {
        self.entries.get(display).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate `(display, original)` pairs in emission order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = (&str, &str)> + '_ {
        self.entries
            .iter()
            .map(|(display, original)| (display.as_str(), original.as_str()))
    }

    pub fn stats(&self) -> MappingStats {
        MappingStats {
            entries: self.entries.len(),
            discarded: self.discarded,
            overwritten: self.overwritten,
        }
    }
}

/// Split enum body text into raw entries on `,`.
///
/// A trailing comma yields a final empty entry; `build_mapping` drops it.
pub fn split_entries(source: &str) -> std::str::Split<'_, char> {
    source.split(',')
}

/// The enumerator name of a raw entry: whitespace trimmed, `= value` dropped.
pub fn original_name(raw: &str) -> &str {
    let trimmed = raw.trim();
    match trimmed.split_once('=') {
        Some((name, _value)) => name.trim(),
        None => trimmed,
    }
}

/// The camelCase lookup key for an enumerator name.
///
/// `prefix` is removed once from the front when present; otherwise the
/// name is converted as-is.
pub fn display_name(original: &str, prefix: &str) -> String {
    let stripped = original.strip_prefix(prefix).unwrap_or(original);
    snake_to_camel(stripped)
}

/// Build the ordered mapping for a sequence of raw entries.
///
/// Entries whose display name comes out empty (blank entries, an entry
/// equal to the prefix) are skipped. Later duplicates overwrite the value
/// of earlier ones without moving them.
pub fn build_mapping<I>(raw_entries: I, prefix: &str) -> EnumMapping
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let mut mapping = EnumMapping::new();

    for raw in raw_entries {
        let original = original_name(raw.as_ref());
        let key = display_name(original, prefix);

        if key.is_empty() {
            trace!(entry = raw.as_ref(), "skipping entry with empty display name");
            mapping.discarded += 1;
            continue;
        }

        if let Some(previous) = mapping.insert(key.clone(), original.to_string()) {
            debug!(
                key = %key,
                previous = %previous,
                replacement = original,
                "duplicate display name, keeping the later enumerator"
            );
        }
    }

    mapping
}
