//! Foreign-binding export layer — type-safe bindings for host languages.
//!
//! Each public type here maps to a generated class, struct, or enum on the
//! host side; Rust callers use the crate modules directly.

mod engine;
mod types;

pub use engine::PinEngine;
pub use types::{
    PinConvertOptions, PinError, PinHeteronym, PinNonChinese, PinToneStyle, PinWord,
};

use std::path::Path;

use crate::tone;
use crate::unicode;

// ---------------------------------------------------------------------------
// Top-level functions
// ---------------------------------------------------------------------------

#[uniffi::export]
fn engine_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

/// The documented defaults: tone marks, first reading only, space
/// separator, non-Chinese characters kept.
#[uniffi::export]
fn default_options() -> PinConvertOptions {
    PinConvertOptions {
        tone_style: PinToneStyle::Mark,
        heteronym: false,
        separator: None,
        lowercase: false,
        non_chinese: PinNonChinese::Keep,
        replace_char: String::new(),
    }
}

#[uniffi::export]
fn format_syllable(syllable: String, style: PinToneStyle) -> String {
    tone::format(&syllable, style.into())
}

#[uniffi::export]
fn syllable_initial(syllable: String) -> String {
    tone::initial_of(&syllable)
}

#[uniffi::export]
fn is_valid_syllable(text: String) -> bool {
    tone::is_valid_syllable(&text)
}

#[uniffi::export]
fn is_chinese_char(character: String) -> bool {
    unicode::is_chinese_str(&character)
}

#[uniffi::export]
fn trace_init(log_dir: String) {
    crate::trace_init::init_tracing(Path::new(&log_dir));
}
