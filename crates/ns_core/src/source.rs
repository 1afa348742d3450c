use async_trait::async_trait;
use crate::types::ArticleData;
use crate::Result;

#[async_trait]
pub trait ArticleSource: Send + Sync {
    /// Download, parse and summarize the article at `url`
    async fn fetch_article(&self, url: &str) -> Result<ArticleData>;
}
