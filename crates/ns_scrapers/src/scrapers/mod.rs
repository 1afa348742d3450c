use std::time::Duration;
use async_trait::async_trait;
use reqwest::Client;
use scraper::Html;
use tracing::{debug, info};
use url::Url;
use ns_core::{ArticleData, ArticleSource, Error, Result};
use ns_inference::summarize::{summarize, DEFAULT_MAX_SENTENCES};

pub mod content;
pub mod jsonld;
pub mod metadata;

pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0 Safari/537.36";

#[derive(Debug, Clone)]
pub struct ScraperConfig {
    pub user_agent: String,
    pub timeout: Duration,
    pub max_summary_sentences: usize,
}

impl Default for ScraperConfig {
    fn default() -> Self {
        Self {
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout: Duration::from_secs(30),
            max_summary_sentences: DEFAULT_MAX_SENTENCES,
        }
    }
}

/// Downloads any news page and pulls out the article.
///
/// One client is shared by every request made through this scraper.
#[derive(Debug, Clone)]
pub struct ArticleScraper {
    client: Client,
    max_summary_sentences: usize,
}

impl ArticleScraper {
    pub fn new(config: ScraperConfig) -> Result<Self> {
        let client = Client::builder()
            .user_agent(config.user_agent)
            .timeout(config.timeout)
            .build()?;
        Ok(Self {
            client,
            max_summary_sentences: config.max_summary_sentences,
        })
    }

    async fn download(&self, url: &Url) -> Result<String> {
        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|e| Error::Fetch(format!("Failed to download {}: {}", url, e)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::Fetch(format!("{} returned HTTP {}", url, status)));
        }

        response
            .text()
            .await
            .map_err(|e| Error::Fetch(format!("Failed to read body of {}: {}", url, e)))
    }
}

#[async_trait]
impl ArticleSource for ArticleScraper {
    async fn fetch_article(&self, url: &str) -> Result<ArticleData> {
        let parsed = utils::parse_url(url)?;
        info!("🦗 Downloading {}", parsed);
        let html = self.download(&parsed).await?;
        debug!("Downloaded {} bytes from {}", html.len(), parsed);

        let article = parse_article(url, &html, self.max_summary_sentences)?;
        info!(
            "📄 Parsed '{}' ({} author(s), {} chars)",
            article.title,
            article.authors.len(),
            article.full_text.chars().count()
        );
        Ok(article)
    }
}

/// Turns a downloaded page into [`ArticleData`], summary included.
pub fn parse_article(url: &str, html: &str, max_summary_sentences: usize) -> Result<ArticleData> {
    let base = utils::parse_url(url)?;
    let document = Html::parse_document(html);
    let nodes = jsonld::extract_nodes(&document);

    let title = metadata::extract_title(&document, &nodes);
    let authors = metadata::extract_authors(&document, &nodes);
    let publication_date = metadata::extract_publication_date(&document, &nodes, url);
    let full_text = content::extract_text(html, &base);

    if full_text.is_empty() {
        return Err(Error::Fetch(format!("No article text found at {}", url)));
    }

    let summary = summarize(&title, &full_text, max_summary_sentences).join("\n");
    if summary.is_empty() {
        return Err(Error::Fetch(format!("Could not summarize article at {}", url)));
    }

    Ok(ArticleData {
        url: url.to_string(),
        title,
        authors,
        publication_date,
        full_text,
        summary,
    })
}

/// Common utilities for scrapers
pub(crate) mod utils {
    use scraper::{Html, Selector};
    use url::Url;
    use ns_core::{Error, Result};

    pub fn parse_url(url: &str) -> Result<Url> {
        let parsed = Url::parse(url.trim())
            .map_err(|e| Error::InvalidUrl(format!("Failed to parse URL {}: {}", url, e)))?;
        match parsed.scheme() {
            "http" | "https" => Ok(parsed),
            other => Err(Error::InvalidUrl(format!("Unsupported scheme '{}' in {}", other, url))),
        }
    }

    pub fn collapse_whitespace(text: &str) -> String {
        text.split_whitespace().collect::<Vec<_>>().join(" ")
    }

    pub fn first_text(document: &Html, selector: &str) -> Option<String> {
        all_texts(document, selector).into_iter().next()
    }

    pub fn all_texts(document: &Html, selector: &str) -> Vec<String> {
        let Ok(selector) = Selector::parse(selector) else {
            return Vec::new();
        };
        document
            .select(&selector)
            .map(|el| collapse_whitespace(&el.text().collect::<String>()))
            .filter(|text| !text.is_empty())
            .collect()
    }

    pub fn first_attr(document: &Html, selector: &str, attr: &str) -> Option<String> {
        all_attrs(document, selector, attr).into_iter().next()
    }

    pub fn all_attrs(document: &Html, selector: &str, attr: &str) -> Vec<String> {
        let Ok(selector) = Selector::parse(selector) else {
            return Vec::new();
        };
        document
            .select(&selector)
            .filter_map(|el| el.value().attr(attr))
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .map(str::to_string)
            .collect()
    }
}
