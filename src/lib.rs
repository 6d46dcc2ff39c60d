//! Japanese proverbs (kotowaza) dataset and accessors.
//!
//! The crate bundles a curated collection of kotowaza with Indonesian and
//! English meanings, example sentences, JLPT levels, and bilingual tags, and
//! exposes read-only lookup, search, and aggregate operations over it. The
//! dataset is parsed and indexed once at [`Catalog`] construction and never
//! mutated afterwards, so a shared `&Catalog` is safe to query from anywhere.
//!
//! ```no_run
//! let catalog = kotowaza::Catalog::embedded()?;
//! let entry = catalog.get("nanakorobi-yaoki").unwrap();
//! assert_eq!(entry.japanese, "七転び八起き");
//! # anyhow::Ok(())
//! ```

pub mod catalog;

pub use catalog::{
    Catalog, Entry, EntryId, JlptLevel, Meaning, load_dataset_from_path, parse_dataset,
};

const REFERENCE_URL_BASE: &str = "https://jepang.org/peribahasa";

/// Canonical jepang.org URL for an entry slug.
///
/// Pure string formatting; the slug is interpolated verbatim and no check is
/// made that an entry with this id exists.
pub fn entry_url(id: &str) -> String {
    format!("{REFERENCE_URL_BASE}/{id}/")
}
