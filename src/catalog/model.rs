//! Deserializable representation of the kotowaza dataset.
//!
//! The types mirror the JSON shipped under `data/kotowaza.json` so callers can
//! reason about entries without ad-hoc JSON handling. Use `Catalog` for
//! validation and id lookup; use these structs when the full record surface is
//! required (readings, meanings, examples, cross-references).

use crate::catalog::identity::{EntryId, JlptLevel};
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// One kotowaza entry as stored in the dataset.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    pub id: EntryId,
    /// Proverb in the source script, e.g. `七転び八起き`.
    pub japanese: String,
    /// Kana reading of `japanese`.
    pub reading: String,
    /// Latin-alphabet transliteration.
    pub romaji: String,
    /// Word-for-word English rendering.
    pub literal: String,
    pub meaning: Meaning,
    #[serde(default)]
    pub examples: Vec<String>,
    /// English tags; always present in the dataset, may be empty.
    pub tags: Vec<String>,
    /// Indonesian tags; older entries omit the field entirely.
    #[serde(default)]
    pub tags_id: Vec<String>,
    /// JLPT level, absent for unclassified entries.
    #[serde(default)]
    pub jlpt: Option<JlptLevel>,
    /// Slugs of related entries; dangling references are tolerated.
    #[serde(default)]
    pub related: Vec<EntryId>,
}

/// Interpretive meaning rendered in both target languages.
///
/// The JSON keys are ISO language codes (`id` for Indonesian, `en` for
/// English); the Rust field names spell them out.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Meaning {
    #[serde(rename = "id")]
    pub indonesian: String,
    #[serde(rename = "en")]
    pub english: String,
}

/// Parse a dataset from its JSON text without additional validation.
pub fn parse_dataset(json: &str) -> Result<Vec<Entry>> {
    let entries: Vec<Entry> = serde_json::from_str(json)?;
    Ok(entries)
}

/// Read and parse a dataset file from disk without additional validation.
pub fn load_dataset_from_path(path: &Path) -> Result<Vec<Entry>> {
    let data = fs::read_to_string(path)?;
    parse_dataset(&data)
}
