use std::fmt;
use ns_core::{Result, TranslationProvider};

/// Hands text back untouched. Useful offline and in tests.
pub struct DummyTranslator;

impl fmt::Debug for DummyTranslator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DummyTranslator").finish()
    }
}

impl DummyTranslator {
    pub fn new() -> Self {
        Self
    }
}

impl Default for DummyTranslator {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl TranslationProvider for DummyTranslator {
    fn name(&self) -> &str {
        "Dummy"
    }

    async fn translate(&self, text: &str, _target_language: &str) -> Result<String> {
        Ok(text.to_string())
    }
}
