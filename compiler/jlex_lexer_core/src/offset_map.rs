//! Mapping from translated-buffer offsets back to original offsets.

/// One replaced unicode escape.
///
/// `original..original + original_len` in the source became
/// `translated..translated + translated_len` in the translated buffer.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct OffsetEntry {
    pub translated: u32,
    pub original: u32,
    pub translated_len: u32,
    pub original_len: u32,
}

/// Sorted list of replacements. Empty when the source had no escapes.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct OffsetMap {
    entries: Vec<OffsetEntry>,
}

impl OffsetMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a replacement. Entries must be pushed in source order.
    pub(crate) fn push(&mut self, entry: OffsetEntry) {
        debug_assert!(
            self.entries
                .last()
                .map_or(true, |last| last.translated + last.translated_len <= entry.translated),
            "offset entries must be pushed in order"
        );
        self.entries.push(entry);
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[OffsetEntry] {
        &self.entries
    }

    /// Map a translated byte offset to the original byte offset.
    ///
    /// An offset inside a decoded character maps to the start of its escape.
    /// An offset just past one maps just past the escape, so token boundaries
    /// stay contiguous in original coordinates.
    pub fn to_original(&self, translated: u32) -> u32 {
        let idx = self.entries.partition_point(|e| e.translated <= translated);
        let Some(entry) = idx.checked_sub(1).map(|i| self.entries[i]) else {
            return translated;
        };
        let translated_end = entry.translated + entry.translated_len;
        if translated < translated_end {
            entry.original
        } else {
            translated - translated_end + entry.original + entry.original_len
        }
    }

    /// `true` if any escape starts inside `start..end` (translated offsets).
    pub fn has_escape_in(&self, start: u32, end: u32) -> bool {
        let idx = self.entries.partition_point(|e| e.translated < start);
        self.entries.get(idx).is_some_and(|e| e.translated < end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn map(entries: &[(u32, u32, u32, u32)]) -> OffsetMap {
        let mut map = OffsetMap::new();
        for &(translated, original, translated_len, original_len) in entries {
            map.push(OffsetEntry {
                translated,
                original,
                translated_len,
                original_len,
            });
        }
        map
    }

    #[test]
    fn empty_map_is_identity() {
        let map = OffsetMap::new();
        assert_eq!(map.to_original(0), 0);
        assert_eq!(map.to_original(17), 17);
    }

    #[test]
    fn offsets_shift_after_escape() {
        // "a\u0041b" -> "aAb"
        let map = map(&[(1, 1, 1, 6)]);
        assert_eq!(map.to_original(0), 0);
        assert_eq!(map.to_original(1), 1);
        assert_eq!(map.to_original(2), 7);
        assert_eq!(map.to_original(3), 8);
    }

    #[test]
    fn inside_multibyte_decoded_char_maps_to_escape_start() {
        // "\u00e9" -> "é" (two bytes)
        let map = map(&[(0, 0, 2, 6)]);
        assert_eq!(map.to_original(1), 0);
        assert_eq!(map.to_original(2), 6);
    }

    #[test]
    fn consecutive_escapes() {
        // "\u0048\u0069!" -> "Hi!"
        let map = map(&[(0, 0, 1, 6), (1, 6, 1, 6)]);
        assert_eq!(map.to_original(1), 6);
        assert_eq!(map.to_original(2), 12);
        assert_eq!(map.to_original(3), 13);
    }

    #[test]
    fn has_escape_in_range() {
        let map = map(&[(4, 4, 1, 6)]);
        assert!(map.has_escape_in(0, 5));
        assert!(map.has_escape_in(4, 5));
        assert!(!map.has_escape_in(0, 4));
        assert!(!map.has_escape_in(5, 9));
    }
}
