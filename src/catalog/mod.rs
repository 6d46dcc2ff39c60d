//! Kotowaza catalog wiring.
//!
//! This module wraps the JSON dataset under `data/kotowaza.json` so callers
//! can load a validated snapshot and query it through consistent identifiers.
//! Types here mirror the dataset fields; callers use `Catalog` for lookups
//! and the `model` types when the full record surface is required.

pub mod identity;
pub mod index;
pub mod model;

pub use identity::{EntryId, JlptLevel};
pub use index::Catalog;
pub use model::{Entry, Meaning, load_dataset_from_path, parse_dataset};
