pub mod error;
pub mod models;
pub mod pipeline;
pub mod source;
pub mod translation;
pub mod types;

pub use error::{Error, ProcessingError, Result, PROCESSING_FAILED_DETAIL};
pub use models::{SentimentScorer, TranslationProvider};
pub use pipeline::SummaryPipeline;
pub use source::ArticleSource;
pub use translation::{split_chunks, translate_text, DEFAULT_CHUNK_SIZE};
pub use types::{
    ArticleData, SentimentLabel, SentimentResult, SummaryRequest, SummaryResponse, DATE_FORMAT,
};

pub mod prelude {
    pub use crate::{
        ArticleData, ArticleSource, Error, Result, SentimentScorer, SummaryPipeline,
        TranslationProvider,
    };
}
