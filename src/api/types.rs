use crate::engine::{ConvertOptions, ConvertedChar, EngineError, Heteronym, NonChinese};
use crate::tone::ToneStyle;

// ---------------------------------------------------------------------------
// Error
// ---------------------------------------------------------------------------

#[derive(Debug, thiserror::Error, uniffi::Error)]
pub enum PinError {
    #[error("not initialized: {msg}")]
    Uninitialized { msg: String },
    #[error("data source error: {msg}")]
    DataSource { msg: String },
}

impl From<EngineError> for PinError {
    fn from(e: EngineError) -> Self {
        match &e {
            EngineError::Uninitialized => Self::Uninitialized { msg: e.to_string() },
            EngineError::DataSource(_) => Self::DataSource { msg: e.to_string() },
        }
    }
}

// ---------------------------------------------------------------------------
// Records (value types, copied across the FFI boundary)
// ---------------------------------------------------------------------------

#[derive(Clone, uniffi::Record)]
pub struct PinWord {
    pub origin: String,
    pub pinyin: Vec<String>,
    pub is_heteronym: bool,
}

impl From<ConvertedChar> for PinWord {
    fn from(c: ConvertedChar) -> Self {
        Self {
            origin: c.origin.to_string(),
            pinyin: c.pinyin,
            is_heteronym: c.is_heteronym,
        }
    }
}

#[derive(Clone, uniffi::Record)]
pub struct PinHeteronym {
    pub character: String,
    pub readings: Vec<String>,
}

impl From<Heteronym> for PinHeteronym {
    fn from(h: Heteronym) -> Self {
        Self {
            character: h.ch.to_string(),
            readings: h.readings,
        }
    }
}

#[derive(Clone, uniffi::Record)]
pub struct PinConvertOptions {
    pub tone_style: PinToneStyle,
    pub heteronym: bool,
    pub separator: Option<String>,
    pub lowercase: bool,
    pub non_chinese: PinNonChinese,
    pub replace_char: String,
}

impl From<PinConvertOptions> for ConvertOptions {
    fn from(o: PinConvertOptions) -> Self {
        Self {
            tone_style: o.tone_style.into(),
            heteronym: o.heteronym,
            separator: o.separator,
            lowercase: o.lowercase,
            non_chinese: o.non_chinese.into(),
            replace_char: o.replace_char,
        }
    }
}

// ---------------------------------------------------------------------------
// Enums
// ---------------------------------------------------------------------------

#[derive(Clone, Copy, Debug, uniffi::Enum)]
pub enum PinToneStyle {
    Mark,
    Number,
    None,
}

impl From<PinToneStyle> for ToneStyle {
    fn from(s: PinToneStyle) -> Self {
        match s {
            PinToneStyle::Mark => Self::Mark,
            PinToneStyle::Number => Self::Number,
            PinToneStyle::None => Self::None,
        }
    }
}

#[derive(Clone, Copy, Debug, uniffi::Enum)]
pub enum PinNonChinese {
    Keep,
    Remove,
    Replace,
}

impl From<PinNonChinese> for NonChinese {
    fn from(p: PinNonChinese) -> Self {
        match p {
            PinNonChinese::Keep => Self::Keep,
            PinNonChinese::Remove => Self::Remove,
            PinNonChinese::Replace => Self::Replace,
        }
    }
}
