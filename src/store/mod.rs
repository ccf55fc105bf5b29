//! In-memory pronunciation store: code-point key → ordered raw readings.
//!
//! Built once by merging two line-oriented text sources (primary
//! `kMandarin`-style data first, supplementary `pinyin.txt`-style data
//! appended), immutable afterwards.

mod source;

pub use source::{FileSource, HttpSource, InlineSource, SourceError, TextSource};

use std::collections::hash_map::Entry;
use std::collections::{BTreeSet, HashMap, HashSet};

use tracing::{info, warn};

/// Load failure. Only the supplementary source is mandatory; a primary
/// failure degrades the load instead of aborting it.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("supplementary source {origin} unavailable: {source}")]
    Supplementary {
        origin: String,
        #[source]
        source: SourceError,
    },
}

/// Immutable map from uppercase-hex code-point key to the ordered raw
/// (tone-marked) readings of that character.
pub struct PinyinStore {
    map: HashMap<String, Vec<String>>,
}

impl PinyinStore {
    /// Build from already-fetched source texts.
    ///
    /// The primary text seeds the map (a repeated key overwrites its
    /// earlier line). Supplementary readings for a known key are appended
    /// and the combined list de-duplicated preserving first occurrence;
    /// new keys enter verbatim.
    pub fn from_sources(primary: Option<&str>, supplementary: &str) -> Self {
        let mut map = HashMap::new();
        if let Some(text) = primary {
            for (key, readings) in parse_lines(text) {
                map.insert(key, readings);
            }
        }
        for (key, readings) in parse_lines(supplementary) {
            merge_entry(&mut map, key, readings);
        }
        Self { map }
    }

    /// Fetch both sources and build the store.
    ///
    /// A failing (or absent) primary source logs a warning and the load
    /// proceeds on supplementary data alone; a failing supplementary
    /// source fails the whole load.
    pub fn load(
        primary: Option<&dyn TextSource>,
        supplementary: &dyn TextSource,
    ) -> Result<Self, StoreError> {
        let primary_text = primary.and_then(|src| match src.fetch_text() {
            Ok(text) => Some(text),
            Err(e) => {
                warn!(
                    origin = %src.origin(),
                    error = %e,
                    "primary pronunciation source unavailable, relying on supplementary data"
                );
                None
            }
        });

        let supplementary_text =
            supplementary
                .fetch_text()
                .map_err(|e| StoreError::Supplementary {
                    origin: supplementary.origin(),
                    source: e,
                })?;

        let store = Self::from_sources(primary_text.as_deref(), &supplementary_text);
        let (chars, readings) = store.stats();
        info!(chars, readings, "pronunciation data loaded");
        Ok(store)
    }

    /// Raw readings for a key; empty when the key is unknown. Absence is a
    /// normal outcome, not an error.
    pub fn get(&self, key: &str) -> &[String] {
        self.map.get(key).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Returns (character count, reading count) over the whole store.
    pub fn stats(&self) -> (usize, usize) {
        let readings = self.map.values().map(Vec::len).sum();
        (self.map.len(), readings)
    }

    /// Every distinct raw reading in the store, sorted.
    pub fn all_readings(&self) -> Vec<String> {
        let set: BTreeSet<&String> = self.map.values().flatten().collect();
        set.into_iter().cloned().collect()
    }
}

/// Parse one `U+<hex>: r1, r2 # comment` data line. Blank lines, comment
/// lines, and anything malformed yield `None` — the data files are
/// externally maintained and stray rows must not abort a load.
fn parse_line(line: &str) -> Option<(String, Vec<String>)> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return None;
    }
    let rest = line.strip_prefix("U+")?;
    let (hex, readings) = rest.split_once(':')?;
    let hex = hex.trim();
    if hex.is_empty() || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    let readings = readings.split('#').next().unwrap_or("");
    let readings: Vec<String> = readings
        .split(',')
        .map(str::trim)
        .filter(|r| !r.is_empty())
        .map(str::to_string)
        .collect();
    if readings.is_empty() {
        return None;
    }
    // Keys are uppercased verbatim; padding only happens when a key is
    // derived from a literal character.
    Some((hex.to_uppercase(), readings))
}

fn parse_lines(text: &str) -> impl Iterator<Item = (String, Vec<String>)> + '_ {
    text.lines().filter_map(parse_line)
}

fn merge_entry(map: &mut HashMap<String, Vec<String>>, key: String, readings: Vec<String>) {
    match map.entry(key) {
        Entry::Occupied(mut e) => {
            let combined = e.get_mut();
            combined.extend(readings);
            let mut seen = HashSet::new();
            combined.retain(|r| seen.insert(r.clone()));
        }
        Entry::Vacant(e) => {
            e.insert(readings);
        }
    }
}
