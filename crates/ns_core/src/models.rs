use async_trait::async_trait;
use crate::Result;

#[async_trait]
pub trait TranslationProvider: Send + Sync {
    /// Name used in logs and on the command line
    fn name(&self) -> &str;

    /// Translate one bounded piece of text into `target_language`
    async fn translate(&self, text: &str, target_language: &str) -> Result<String>;
}

pub trait SentimentScorer: Send + Sync {
    fn name(&self) -> &str;

    /// Polarity of `text` in [-1.0, 1.0]
    fn polarity(&self, text: &str) -> Result<f64>;
}
