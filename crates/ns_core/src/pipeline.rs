use std::sync::Arc;
use tracing::{error, info};
use crate::models::{SentimentScorer, TranslationProvider};
use crate::source::ArticleSource;
use crate::translation::{translate_text, DEFAULT_CHUNK_SIZE};
use crate::types::{ArticleData, SentimentResult, SummaryResponse, DATE_FORMAT};
use crate::{Error, ProcessingError, Result};

/// Chains fetch, translation and sentiment scoring for one article.
///
/// Holds only shared, immutable collaborators so a single pipeline can
/// serve any number of concurrent requests.
#[derive(Clone)]
pub struct SummaryPipeline {
    source: Arc<dyn ArticleSource>,
    translator: Arc<dyn TranslationProvider>,
    scorer: Arc<dyn SentimentScorer>,
    chunk_size: usize,
}

impl SummaryPipeline {
    pub fn new(
        source: Arc<dyn ArticleSource>,
        translator: Arc<dyn TranslationProvider>,
        scorer: Arc<dyn SentimentScorer>,
    ) -> Self {
        Self {
            source,
            translator,
            scorer,
            chunk_size: DEFAULT_CHUNK_SIZE,
        }
    }

    pub fn with_chunk_size(mut self, chunk_size: usize) -> Self {
        self.chunk_size = chunk_size;
        self
    }

    pub fn chunk_size(&self) -> usize {
        self.chunk_size
    }

    pub fn translator_name(&self) -> &str {
        self.translator.name()
    }

    /// Runs the whole pipeline. Every failure is logged here and reduced to
    /// [`ProcessingError`].
    pub async fn handle_summarize_request(
        &self,
        url: &str,
        target_language: &str,
    ) -> std::result::Result<SummaryResponse, ProcessingError> {
        info!("📨 Received URL: {}", url);
        info!("🌐 Target language: {}", target_language);

        match self.process(url, target_language).await {
            Ok(response) => {
                info!("✨ Article processed: {}", response.title);
                Ok(response)
            }
            Err(e) => {
                error!(url = %url, "Error processing article: {}", e);
                Err(ProcessingError)
            }
        }
    }

    async fn process(&self, url: &str, target_language: &str) -> Result<SummaryResponse> {
        info!("📰 Fetching article");
        let article = self.source.fetch_article(url).await?;

        let author = first_author(&article)?;
        let publication_date = formatted_date(&article)?;

        info!("🔤 Translating summary with {}", self.translator.name());
        let translated_summary = translate_text(
            self.translator.as_ref(),
            &article.summary,
            target_language,
            self.chunk_size,
        )
        .await?;

        info!("🎭 Scoring sentiment with {}", self.scorer.name());
        let polarity = self.scorer.polarity(&article.full_text)?;
        if !(-1.0..=1.0).contains(&polarity) {
            return Err(Error::Scoring(format!("polarity {} outside [-1, 1]", polarity)));
        }

        Ok(SummaryResponse {
            summary: article.summary,
            translated_summary,
            title: article.title,
            author,
            publication_date,
            sentiment: SentimentResult::from_polarity(polarity),
        })
    }
}

fn first_author(article: &ArticleData) -> Result<String> {
    article
        .authors
        .first()
        .cloned()
        .ok_or_else(|| Error::Metadata(format!("no author found for {}", article.url)))
}

fn formatted_date(article: &ArticleData) -> Result<String> {
    article
        .publication_date
        .map(|date| date.format(DATE_FORMAT).to_string())
        .ok_or_else(|| Error::Metadata(format!("no publication date found for {}", article.url)))
}
