//! Chinese-character → pinyin conversion engine.
//!
//! Per-character conversion with configurable tone rendering (diacritic,
//! trailing digit, or toneless), heteronym disclosure, and non-Chinese
//! passthrough policies. Pronunciation data comes from two line-oriented
//! text sources (`kMandarin`-style primary, `pinyin.txt`-style
//! supplementary) merged once into an immutable in-memory store.
//!
//! ```no_run
//! use pinyin_engine::{ConvertOptions, Engine, FileSource};
//!
//! let engine = Engine::new(
//!     Some(Box::new(FileSource::new("data/kMandarin.txt"))),
//!     Box::new(FileSource::new("data/pinyin.txt")),
//! );
//! engine.initialize()?;
//! let text = engine.convert_to_string("你好", &ConvertOptions::default())?;
//! assert_eq!(text, "nǐ hǎo");
//! # Ok::<(), pinyin_engine::EngineError>(())
//! ```
//!
//! Non-Rust hosts consume the same operations through the [`api`] module's
//! generated bindings.

pub mod api;
pub mod engine;
pub mod store;
pub mod tone;
mod trace_init;
pub mod unicode;

pub use engine::{ConvertOptions, ConvertedChar, Engine, EngineError, Heteronym, NonChinese};
pub use store::{
    FileSource, HttpSource, InlineSource, PinyinStore, SourceError, StoreError, TextSource,
};
pub use tone::ToneStyle;

uniffi::setup_scaffolding!();
