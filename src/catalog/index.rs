//! Indexed view of the kotowaza dataset.
//!
//! `Catalog` owns the entry sequence in dataset order plus a derived id index
//! built once at construction. It is intentionally strict about empty
//! datasets, malformed slugs, and duplicate ids so callers cannot silently
//! consume a broken dataset; every query after construction is infallible.

use crate::catalog::identity::{EntryId, JlptLevel};
use crate::catalog::model::{Entry, load_dataset_from_path, parse_dataset};
use anyhow::{Context, Result, bail};
use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;

/// Dataset bundled with the crate; the canonical jepang.org collection.
const EMBEDDED_DATASET: &str = include_str!("../../data/kotowaza.json");

#[derive(Debug)]
/// Kotowaza dataset plus a derived index keyed by entry id.
pub struct Catalog {
    entries: Vec<Entry>,
    by_id: BTreeMap<EntryId, usize>,
}

impl Catalog {
    /// Build a catalog from an already-parsed dataset.
    ///
    /// Validates that the dataset is non-empty, that every id is a well-formed
    /// slug, and that ids are unique, then builds a deterministic index for
    /// lookups. Dataset order is preserved and becomes the canonical order of
    /// every listing operation.
    pub fn new(entries: Vec<Entry>) -> Result<Self> {
        let by_id = build_index(&entries)?;
        Ok(Self { entries, by_id })
    }

    /// Parse and index the dataset bundled with the crate.
    pub fn embedded() -> Result<Self> {
        let entries = parse_dataset(EMBEDDED_DATASET).context("parsing embedded dataset")?;
        Self::new(entries)
    }

    /// Load and index a dataset file from disk.
    pub fn load(path: &Path) -> Result<Self> {
        let entries =
            load_dataset_from_path(path).with_context(|| format!("loading {}", path.display()))?;
        Self::new(entries)
    }

    /// Full dataset in canonical order.
    pub fn all(&self) -> &[Entry] {
        &self.entries
    }

    /// Resolve an entry by its slug (exact, case-sensitive).
    ///
    /// Returns `None` instead of erroring; an unknown id is a normal outcome,
    /// not a failure.
    pub fn get(&self, id: &str) -> Option<&Entry> {
        self.by_id.get(id).map(|&pos| &self.entries[pos])
    }

    /// Substring search across Japanese text, reading, romaji, literal, and
    /// both meanings.
    ///
    /// Japanese and kana fields match exactly (the source script has no case);
    /// the latin-alphabet fields match case-insensitively. An empty query
    /// matches nothing. Dataset order is preserved among matches.
    pub fn search(&self, query: &str) -> Vec<&Entry> {
        if query.is_empty() {
            return Vec::new();
        }
        let q = query.to_lowercase();
        self.entries
            .iter()
            .filter(|entry| {
                entry.japanese.contains(query)
                    || entry.reading.contains(query)
                    || entry.romaji.to_lowercase().contains(&q)
                    || entry.literal.to_lowercase().contains(&q)
                    || entry.meaning.indonesian.to_lowercase().contains(&q)
                    || entry.meaning.english.to_lowercase().contains(&q)
            })
            .collect()
    }

    /// Entries carrying `tag` (English tags, case-insensitive exact match).
    pub fn by_tag(&self, tag: &str) -> Vec<&Entry> {
        filter_by_tag(&self.entries, tag, |entry| &entry.tags)
    }

    /// Entries carrying `tag` among the Indonesian tags.
    ///
    /// Entries without Indonesian tags never match.
    pub fn by_tag_id(&self, tag: &str) -> Vec<&Entry> {
        filter_by_tag(&self.entries, tag, |entry| &entry.tags_id)
    }

    /// Entries classified at the given JLPT level (case-insensitive).
    pub fn by_jlpt(&self, level: &str) -> Vec<&Entry> {
        if level.is_empty() {
            return Vec::new();
        }
        let wanted = JlptLevel::parse(level);
        self.entries
            .iter()
            .filter(|entry| entry.jlpt.as_ref() == Some(&wanted))
            .collect()
    }

    /// One entry chosen uniformly at random.
    ///
    /// Always succeeds: construction rejects empty datasets.
    pub fn random(&self) -> &Entry {
        &self.entries[fastrand::usize(..self.entries.len())]
    }

    /// Number of entries in the dataset.
    pub fn count(&self) -> usize {
        self.entries.len()
    }

    /// All distinct English tags, sorted ascending.
    pub fn tags(&self) -> Vec<String> {
        collect_sorted(
            self.entries
                .iter()
                .flat_map(|entry| &entry.tags)
                .map(String::as_str),
        )
    }

    /// All distinct Indonesian tags, sorted ascending.
    pub fn tags_id(&self) -> Vec<String> {
        collect_sorted(
            self.entries
                .iter()
                .flat_map(|entry| &entry.tags_id)
                .map(String::as_str),
        )
    }

    /// All JLPT levels present in the dataset, sorted ascending.
    pub fn jlpt_levels(&self) -> Vec<String> {
        collect_sorted(
            self.entries
                .iter()
                .filter_map(|entry| entry.jlpt.as_ref())
                .map(JlptLevel::as_str),
        )
    }
}

fn filter_by_tag<'a>(
    entries: &'a [Entry],
    tag: &str,
    tags_of: impl Fn(&Entry) -> &Vec<String>,
) -> Vec<&'a Entry> {
    if tag.is_empty() {
        return Vec::new();
    }
    let wanted = tag.to_lowercase();
    entries
        .iter()
        .filter(|entry| {
            tags_of(entry)
                .iter()
                .any(|candidate| candidate.to_lowercase() == wanted)
        })
        .collect()
}

fn collect_sorted<'a>(values: impl Iterator<Item = &'a str>) -> Vec<String> {
    let set: BTreeSet<&str> = values.collect();
    set.into_iter().map(str::to_string).collect()
}

fn build_index(entries: &[Entry]) -> Result<BTreeMap<EntryId, usize>> {
    if entries.is_empty() {
        bail!("dataset contains no entries");
    }

    let mut map = BTreeMap::new();
    for (pos, entry) in entries.iter().enumerate() {
        validate_slug(&entry.id)?;
        if map.insert(entry.id.clone(), pos).is_some() {
            bail!("duplicate entry id {}", entry.id);
        }
    }
    Ok(map)
}

fn validate_slug(id: &EntryId) -> Result<()> {
    if id.0.is_empty() {
        bail!("encountered entry with no id");
    }

    if !id
        .0
        .chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
    {
        bail!("entry id must match ^[a-z0-9-]+$, got {}", id.0);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::model::Meaning;

    fn entry(id: &str, tags: &[&str], jlpt: Option<&str>) -> Entry {
        Entry {
            id: EntryId(id.to_string()),
            japanese: format!("日本語-{id}"),
            reading: format!("よみ-{id}"),
            romaji: format!("Romaji {id}"),
            literal: format!("Literal {id}"),
            meaning: Meaning {
                indonesian: format!("Arti {id}"),
                english: format!("Meaning {id}"),
            },
            examples: Vec::new(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
            tags_id: Vec::new(),
            jlpt: jlpt.map(JlptLevel::parse),
            related: Vec::new(),
        }
    }

    fn fixture() -> Catalog {
        Catalog::new(vec![
            entry("aa", &["alpha", "Shared"], Some("N3")),
            entry("bb", &["beta"], Some("N2")),
            entry("cc", &["shared"], None),
        ])
        .unwrap()
    }

    #[test]
    fn rejects_empty_dataset() {
        let err = Catalog::new(Vec::new()).unwrap_err();
        assert!(err.to_string().contains("no entries"));
    }

    #[test]
    fn rejects_duplicate_ids() {
        let err = Catalog::new(vec![entry("aa", &[], None), entry("aa", &[], None)]).unwrap_err();
        assert!(err.to_string().contains("duplicate entry id aa"));
    }

    #[test]
    fn rejects_malformed_slugs() {
        assert!(Catalog::new(vec![entry("", &[], None)]).is_err());
        assert!(Catalog::new(vec![entry("Not A Slug", &[], None)]).is_err());
    }

    #[test]
    fn get_is_exact_and_case_sensitive() {
        let catalog = fixture();
        assert_eq!(catalog.get("aa").unwrap().id.as_str(), "aa");
        assert!(catalog.get("AA").is_none());
        assert!(catalog.get("__no_such_id__").is_none());
    }

    #[test]
    fn all_preserves_dataset_order() {
        let catalog = fixture();
        let ids: Vec<&str> = catalog.all().iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, ["aa", "bb", "cc"]);
        assert_eq!(catalog.count(), catalog.all().len());
    }

    #[test]
    fn search_latin_fields_ignore_case() {
        let catalog = fixture();
        assert_eq!(catalog.search("meaning BB").len(), 1);
        assert_eq!(catalog.search("ROMAJI cc").len(), 1);
        assert!(catalog.search("").is_empty());
        assert!(catalog.search("zzz-no-match").is_empty());
    }

    #[test]
    fn search_japanese_fields_are_exact() {
        let catalog = fixture();
        assert_eq!(catalog.search("日本語-aa").len(), 1);
        assert_eq!(catalog.search("よみ-bb").len(), 1);
    }

    #[test]
    fn tag_filters_ignore_case_and_preserve_order() {
        let catalog = fixture();
        let shared: Vec<&str> = catalog
            .by_tag("SHARED")
            .iter()
            .map(|e| e.id.as_str())
            .collect();
        assert_eq!(shared, ["aa", "cc"]);
        assert!(catalog.by_tag("").is_empty());
        assert!(catalog.by_tag_id("anything").is_empty());
    }

    #[test]
    fn jlpt_filter_normalizes_case() {
        let catalog = fixture();
        assert_eq!(catalog.by_jlpt("n3").len(), 1);
        assert_eq!(catalog.by_jlpt("N3").len(), 1);
        assert!(catalog.by_jlpt("N5").is_empty());
        assert!(catalog.by_jlpt("").is_empty());
    }

    #[test]
    fn unclassified_entries_contribute_no_levels() {
        let catalog = fixture();
        assert_eq!(catalog.jlpt_levels(), ["N2", "N3"]);
    }

    #[test]
    fn tags_are_sorted_and_deduped_exactly() {
        let catalog = fixture();
        // Dedup is by exact value; differing case survives, as in the dataset.
        assert_eq!(catalog.tags(), ["Shared", "alpha", "beta", "shared"]);
    }

    #[test]
    fn random_draws_from_the_dataset() {
        let catalog = fixture();
        for _ in 0..32 {
            let picked = catalog.random();
            assert!(catalog.all().iter().any(|e| e == picked));
        }
    }
}
