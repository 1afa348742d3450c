use std::sync::Arc;
use ns_core::{Error, Result, TranslationProvider};
use crate::TranslatorConfig;

pub mod dummy;
pub mod mymemory;

pub use dummy::DummyTranslator;
pub use mymemory::MyMemoryTranslator;

/// Builds the translation provider named in `config`.
pub fn create_translator(config: &TranslatorConfig) -> Result<Arc<dyn TranslationProvider>> {
    config.validate()?;

    match config.provider.to_lowercase().as_str() {
        "mymemory" => {
            let translator = MyMemoryTranslator::new(
                config.provider_url.clone(),
                config.source_language.clone(),
                config.contact_email.clone(),
            )?;
            tracing::info!("🌍 Using MyMemory translator at {}", translator.base_url());
            Ok(Arc::new(translator))
        }
        "dummy" => {
            tracing::info!("🪞 Using dummy translator, summaries will not be translated");
            Ok(Arc::new(DummyTranslator::new()))
        }
        other => Err(Error::Config(format!(
            "Unknown translator '{}'. Available translators: mymemory, dummy",
            other
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_known_translators() {
        let translator = create_translator(&TranslatorConfig::default()).unwrap();
        assert_eq!(translator.name(), "MyMemory");

        let config = TranslatorConfig { provider: "Dummy".to_string(), ..Default::default() };
        let translator = create_translator(&config).unwrap();
        assert_eq!(translator.name(), "Dummy");
    }

    #[test]
    fn test_unknown_translator() {
        let config = TranslatorConfig { provider: "babelfish".to_string(), ..Default::default() };
        match create_translator(&config) {
            Err(Error::Config(msg)) => assert!(msg.contains("babelfish")),
            Err(other) => panic!("unexpected error {}", other),
            Ok(_) => panic!("expected an error"),
        }
    }
}
