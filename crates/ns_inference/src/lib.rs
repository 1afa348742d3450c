use ns_core::Result;

pub mod providers;
pub mod sentiment;
pub mod summarize;

pub use providers::create_translator;
pub use sentiment::LexiconScorer;
pub use summarize::{summarize, DEFAULT_MAX_SENTENCES};

/// Translation provider settings, usually filled from the command line.
#[derive(Debug, Clone)]
pub struct TranslatorConfig {
    /// Provider name: `mymemory` or `dummy`
    pub provider: String,
    /// Overrides the provider's API base URL
    pub provider_url: Option<String>,
    pub source_language: String,
    /// Sent to MyMemory to raise the anonymous daily quota
    pub contact_email: Option<String>,
}

impl Default for TranslatorConfig {
    fn default() -> Self {
        Self {
            provider: "mymemory".to_string(),
            provider_url: None,
            source_language: "en".to_string(),
            contact_email: None,
        }
    }
}

impl TranslatorConfig {
    pub fn validate(&self) -> Result<()> {
        if self.source_language.trim().is_empty() {
            return Err(ns_core::Error::Config("source language must not be empty".to_string()));
        }
        if let Some(url) = &self.provider_url {
            url::Url::parse(url)
                .map_err(|e| ns_core::Error::Config(format!("invalid translator URL {}: {}", url, e)))?;
        }
        Ok(())
    }
}

pub mod prelude {
    pub use super::TranslatorConfig;
    pub use super::providers::create_translator;
    pub use super::sentiment::LexiconScorer;
    pub use ns_core::{Error, Result, SentimentScorer, TranslationProvider};
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = TranslatorConfig::default();
        assert_eq!(config.provider, "mymemory");
        assert_eq!(config.source_language, "en");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_rejects_bad_url() {
        let config = TranslatorConfig {
            provider_url: Some("not a url".to_string()),
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(ns_core::Error::Config(_))));
    }
}
