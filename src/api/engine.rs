use std::sync::Arc;

use crate::engine::{ConvertOptions, Engine, EngineError};
use crate::store::{FileSource, HttpSource, InlineSource, TextSource};

use super::{PinConvertOptions, PinError, PinHeteronym, PinWord};

#[derive(uniffi::Object)]
pub struct PinEngine {
    inner: Engine,
}

impl PinEngine {
    fn build(
        primary: Option<Box<dyn TextSource>>,
        supplementary: Box<dyn TextSource>,
    ) -> Arc<Self> {
        Arc::new(Self {
            inner: Engine::new(primary, supplementary),
        })
    }
}

#[uniffi::export]
impl PinEngine {
    /// Engine reading both sources from the local filesystem.
    #[uniffi::constructor]
    fn from_files(primary: Option<String>, supplementary: String) -> Arc<Self> {
        Self::build(
            primary.map(|p| Box::new(FileSource::new(p)) as Box<dyn TextSource>),
            Box::new(FileSource::new(supplementary)),
        )
    }

    /// Engine fetching both sources over HTTP.
    #[uniffi::constructor]
    fn from_urls(primary: Option<String>, supplementary: String) -> Arc<Self> {
        Self::build(
            primary.map(|u| Box::new(HttpSource::new(u)) as Box<dyn TextSource>),
            Box::new(HttpSource::new(supplementary)),
        )
    }

    /// Engine over source text the host already holds in memory.
    #[uniffi::constructor]
    fn from_inline(primary: Option<String>, supplementary: String) -> Arc<Self> {
        Self::build(
            primary.map(|t| Box::new(InlineSource::new(t)) as Box<dyn TextSource>),
            Box::new(InlineSource::new(supplementary)),
        )
    }

    fn initialize(&self) -> Result<(), PinError> {
        self.inner.initialize().map_err(Into::into)
    }

    fn is_initialized(&self) -> bool {
        self.inner.is_initialized()
    }

    fn convert(&self, text: String, options: PinConvertOptions) -> Result<Vec<PinWord>, PinError> {
        let opts: ConvertOptions = options.into();
        let results = self.inner.convert(&text, &opts)?;
        Ok(results.into_iter().map(Into::into).collect())
    }

    fn convert_to_string(
        &self,
        text: String,
        options: PinConvertOptions,
    ) -> Result<String, PinError> {
        let opts: ConvertOptions = options.into();
        self.inner.convert_to_string(&text, &opts).map_err(Into::into)
    }

    /// All distinct raw readings of a single character; empty for anything
    /// that is not exactly one Chinese character.
    fn heteronyms(&self, character: String) -> Result<Vec<String>, PinError> {
        let mut chars = character.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => self.inner.heteronyms(c).map_err(Into::into),
            _ if !self.inner.is_initialized() => Err(EngineError::Uninitialized.into()),
            _ => Ok(Vec::new()),
        }
    }

    fn available_pinyins(&self) -> Result<Vec<String>, PinError> {
        self.inner.available_pinyins().map_err(Into::into)
    }

    fn initials(&self, text: String, options: PinConvertOptions) -> Result<Vec<String>, PinError> {
        let opts: ConvertOptions = options.into();
        self.inner.initials(&text, &opts).map_err(Into::into)
    }

    fn initials_string(
        &self,
        text: String,
        options: PinConvertOptions,
    ) -> Result<String, PinError> {
        let opts: ConvertOptions = options.into();
        self.inner.initials_string(&text, &opts).map_err(Into::into)
    }

    fn is_chinese(&self, character: String) -> bool {
        crate::unicode::is_chinese_str(&character)
    }

    fn count_chinese(&self, text: String) -> u64 {
        self.inner.count_chinese(&text) as u64
    }

    fn all_heteronyms(&self, text: String) -> Result<Vec<PinHeteronym>, PinError> {
        let found = self.inner.all_heteronyms(&text)?;
        Ok(found.into_iter().map(Into::into).collect())
    }
}
