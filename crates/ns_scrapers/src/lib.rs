pub mod scrapers;

pub use scrapers::{parse_article, ArticleScraper, ScraperConfig};

pub mod prelude {
    pub use super::scrapers::{ArticleScraper, ScraperConfig};
    pub use ns_core::{ArticleData, ArticleSource, Error, Result};
}
