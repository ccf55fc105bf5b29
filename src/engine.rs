//! Per-character conversion: classification, store lookup, and tone
//! formatting, driven by caller-supplied options.

use std::collections::HashSet;
use std::sync::{Arc, OnceLock};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::store::{PinyinStore, StoreError, TextSource};
use crate::tone::{self, ToneStyle};
use crate::unicode;

#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("engine not initialized; call initialize() first")]
    Uninitialized,

    #[error("data source error: {0}")]
    DataSource(#[from] StoreError),
}

/// Policy for characters outside the CJK ranges.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NonChinese {
    /// Pass the character through as its own "reading".
    #[default]
    Keep,
    /// Emit an empty reading for its position.
    Remove,
    /// Emit [`ConvertOptions::replace_char`] for its position.
    Replace,
}

/// Conversion options. Defaults are applied once at this boundary; fields
/// mirror the JSON option names server-side callers use.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ConvertOptions {
    pub tone_style: ToneStyle,
    /// When set, string output joins all readings of a heteronym with
    /// commas instead of picking the first.
    pub heteronym: bool,
    /// Joiner for string output. `None` means the per-operation default:
    /// a single space for full text, nothing for initials.
    pub separator: Option<String>,
    pub lowercase: bool,
    pub non_chinese: NonChinese,
    /// Substitution text under [`NonChinese::Replace`].
    pub replace_char: String,
}

/// Conversion result for a single character.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConvertedChar {
    pub origin: char,
    /// Formatted readings, de-duplicated, first-occurrence order. Never
    /// empty: non-Chinese and unknown characters carry exactly one entry.
    pub pinyin: Vec<String>,
    /// True iff more than one distinct reading remains after formatting.
    pub is_heteronym: bool,
}

/// A character with more than one distinct raw reading, as reported by
/// [`Engine::all_heteronyms`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Heteronym {
    pub ch: char,
    pub readings: Vec<String>,
}

/// The externally consumed conversion entry point.
///
/// An engine is cheap: injected sources plus a once-set store handle.
/// Multiple engines can share one store through [`Engine::with_store`];
/// after initialization the store is immutable and safe for unlimited
/// concurrent readers.
pub struct Engine {
    primary: Option<Box<dyn TextSource>>,
    supplementary: Option<Box<dyn TextSource>>,
    store: OnceLock<Arc<PinyinStore>>,
}

impl Engine {
    /// Engine that will load its store from the given sources on
    /// [`Engine::initialize`]. The primary source is best-effort, the
    /// supplementary source mandatory.
    pub fn new(
        primary: Option<Box<dyn TextSource>>,
        supplementary: Box<dyn TextSource>,
    ) -> Self {
        Self {
            primary,
            supplementary: Some(supplementary),
            store: OnceLock::new(),
        }
    }

    /// Engine over an externally built store; born initialized.
    pub fn with_store(store: Arc<PinyinStore>) -> Self {
        let cell = OnceLock::new();
        let _ = cell.set(store);
        Self {
            primary: None,
            supplementary: None,
            store: cell,
        }
    }

    /// Fetch, parse, and merge the data sources. Idempotent: once a load
    /// has succeeded, later calls return immediately. A failed load leaves
    /// the engine uninitialized and the call retryable.
    pub fn initialize(&self) -> Result<(), EngineError> {
        if self.store.get().is_some() {
            return Ok(());
        }
        let Some(supplementary) = self.supplementary.as_deref() else {
            return Err(EngineError::Uninitialized);
        };
        let store = PinyinStore::load(self.primary.as_deref(), supplementary)?;
        // A lost set race means a concurrent load already published.
        let _ = self.store.set(Arc::new(store));
        Ok(())
    }

    pub fn is_initialized(&self) -> bool {
        self.store.get().is_some()
    }

    /// Shared handle to the loaded store, for building further engines
    /// over the same data.
    pub fn store_handle(&self) -> Option<Arc<PinyinStore>> {
        self.store.get().cloned()
    }

    fn store(&self) -> Result<&PinyinStore, EngineError> {
        self.store
            .get()
            .map(Arc::as_ref)
            .ok_or(EngineError::Uninitialized)
    }

    /// Convert one character. Non-Chinese characters follow the
    /// [`NonChinese`] policy; Chinese characters missing from the store
    /// fall back to themselves as a literal reading.
    pub fn convert_char(
        &self,
        c: char,
        options: &ConvertOptions,
    ) -> Result<ConvertedChar, EngineError> {
        let store = self.store()?;

        let Some(key) = unicode::codepoint_key(c) else {
            return Ok(non_chinese_result(c, options));
        };

        let readings = store.get(&key);
        if readings.is_empty() {
            debug!(%c, key = %key, "no readings for character, passing through");
            return Ok(ConvertedChar {
                origin: c,
                pinyin: vec![c.to_string()],
                is_heteronym: false,
            });
        }

        let mut pinyin: Vec<String> = readings
            .iter()
            .map(|r| {
                let formatted = tone::format(r, options.tone_style);
                if options.lowercase {
                    formatted.to_lowercase()
                } else {
                    formatted
                }
            })
            .collect();
        let mut seen = HashSet::new();
        pinyin.retain(|r| seen.insert(r.clone()));

        let is_heteronym = pinyin.len() > 1;
        Ok(ConvertedChar {
            origin: c,
            pinyin,
            is_heteronym,
        })
    }

    /// Convert a whole text, one result per Unicode character (characters
    /// beyond the BMP count as one unit each).
    pub fn convert(
        &self,
        text: &str,
        options: &ConvertOptions,
    ) -> Result<Vec<ConvertedChar>, EngineError> {
        text.chars()
            .map(|c| self.convert_char(c, options))
            .collect()
    }

    /// Convert and join with the separator (default single space). With
    /// the `heteronym` option, heteronym positions list all readings
    /// comma-joined; otherwise the first reading wins.
    pub fn convert_to_string(
        &self,
        text: &str,
        options: &ConvertOptions,
    ) -> Result<String, EngineError> {
        let results = self.convert(text, options)?;
        let separator = options.separator.as_deref().unwrap_or(" ");
        let rendered: Vec<String> = results
            .iter()
            .map(|r| {
                if options.heteronym && r.is_heteronym {
                    r.pinyin.join(",")
                } else {
                    r.pinyin.first().cloned().unwrap_or_default()
                }
            })
            .collect();
        Ok(rendered.join(separator))
    }

    /// All distinct raw readings of a character; empty for non-Chinese or
    /// unknown characters.
    pub fn heteronyms(&self, c: char) -> Result<Vec<String>, EngineError> {
        let store = self.store()?;
        let Some(key) = unicode::codepoint_key(c) else {
            return Ok(Vec::new());
        };
        let mut readings = store.get(&key).to_vec();
        let mut seen = HashSet::new();
        readings.retain(|r| seen.insert(r.clone()));
        Ok(readings)
    }

    /// Every distinct raw reading across the store, sorted.
    pub fn available_pinyins(&self) -> Result<Vec<String>, EngineError> {
        Ok(self.store()?.all_readings())
    }

    /// Per character: the uppercased initial of its first formatted
    /// reading when that reading is a recognizable syllable, otherwise the
    /// original character unchanged.
    pub fn initials(
        &self,
        text: &str,
        options: &ConvertOptions,
    ) -> Result<Vec<String>, EngineError> {
        let results = self.convert(text, options)?;
        Ok(results
            .iter()
            .map(|r| match r.pinyin.first() {
                Some(p) if tone::is_valid_syllable(p) => tone::initial_of(p),
                _ => r.origin.to_string(),
            })
            .collect())
    }

    /// [`Engine::initials`] joined with the separator, defaulting to the
    /// empty string (unlike full-text conversion).
    pub fn initials_string(
        &self,
        text: &str,
        options: &ConvertOptions,
    ) -> Result<String, EngineError> {
        let initials = self.initials(text, options)?;
        let separator = options.separator.as_deref().unwrap_or("");
        Ok(initials.join(separator))
    }

    /// Classification only — usable before initialization.
    pub fn is_chinese(&self, c: char) -> bool {
        unicode::is_chinese(c)
    }

    /// Classification only — usable before initialization.
    pub fn count_chinese(&self, text: &str) -> usize {
        unicode::count_chinese(text)
    }

    /// Characters of `text` with more than one distinct raw reading, in
    /// text order.
    pub fn all_heteronyms(&self, text: &str) -> Result<Vec<Heteronym>, EngineError> {
        self.store()?;
        let mut out = Vec::new();
        for c in text.chars() {
            if !unicode::is_chinese(c) {
                continue;
            }
            let readings = self.heteronyms(c)?;
            if readings.len() > 1 {
                out.push(Heteronym { ch: c, readings });
            }
        }
        Ok(out)
    }
}

fn non_chinese_result(c: char, options: &ConvertOptions) -> ConvertedChar {
    let reading = match options.non_chinese {
        NonChinese::Keep => c.to_string(),
        NonChinese::Remove => String::new(),
        NonChinese::Replace => options.replace_char.clone(),
    };
    ConvertedChar {
        origin: c,
        pinyin: vec![reading],
        is_heteronym: false,
    }
}
