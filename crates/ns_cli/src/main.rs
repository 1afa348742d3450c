use clap::Parser;
use std::net::SocketAddr;
use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;
use ns_core::{SummaryPipeline, DEFAULT_CHUNK_SIZE};
use ns_inference::{create_translator, LexiconScorer, TranslatorConfig};
use ns_scrapers::scrapers::DEFAULT_USER_AGENT;
use ns_scrapers::{ArticleScraper, ScraperConfig};
use ns_web::AppState;

mod logging;

#[derive(Debug, Clone, PartialEq)]
struct HumanDuration(Duration);

impl FromStr for HumanDuration {
    type Err = String;

    /// Accepts `90`, `45s`, `2m`, `1h` or combinations such as `1m30s`.
    /// Trailing digits without a unit count as seconds.
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let too_long = || format!("duration '{}' is too long", s);
        let mut total: u64 = 0;
        let mut digits = String::new();

        for c in s.chars().filter(|c| !c.is_whitespace()) {
            if c.is_ascii_digit() {
                digits.push(c);
                continue;
            }
            let unit: u64 = match c {
                's' => 1,
                'm' => 60,
                'h' => 3600,
                _ => return Err(format!("unknown duration unit '{}' in '{}'", c, s)),
            };
            let value = parse_amount(&digits, s)?;
            total = value
                .checked_mul(unit)
                .and_then(|secs| total.checked_add(secs))
                .ok_or_else(too_long)?;
            digits.clear();
        }

        if !digits.is_empty() {
            let value = parse_amount(&digits, s)?;
            total = total.checked_add(value).ok_or_else(too_long)?;
        }

        if total == 0 {
            return Err(format!("duration '{}' must be greater than zero", s));
        }
        Ok(HumanDuration(Duration::from_secs(total)))
    }
}

fn parse_amount(digits: &str, input: &str) -> std::result::Result<u64, String> {
    if digits.is_empty() {
        return Err(format!("missing number in duration '{}'", input));
    }
    digits
        .parse::<u64>()
        .map_err(|_| format!("duration '{}' is too long", input))
}

fn parse_chunk_size(s: &str) -> std::result::Result<usize, String> {
    match s.parse::<usize>() {
        Ok(0) => Err("chunk size must be greater than zero".to_string()),
        Ok(n) => Ok(n),
        Err(e) => Err(format!("invalid chunk size: {}", e)),
    }
}

#[derive(Parser, Debug)]
#[command(author, version, about = "Summarize, translate and score news articles", long_about = None)]
pub struct Cli {
    #[arg(long, default_value = "mymemory", help = "Translator to use. Available translators: mymemory (default), dummy")]
    translator: String,
    /// Base URL of the translation API
    #[arg(long)]
    translator_url: Option<String>,
    /// Language articles are written in
    #[arg(long, default_value = "en")]
    source_language: String,
    /// Contact address sent to MyMemory for a larger free quota
    #[arg(long)]
    contact_email: Option<String>,
    /// Maximum characters sent per translation request
    #[arg(long, default_value_t = DEFAULT_CHUNK_SIZE, value_parser = parse_chunk_size)]
    chunk_size: usize,
    #[arg(long, default_value = DEFAULT_USER_AGENT)]
    user_agent: String,
    /// Timeout for article downloads (e.g. 30s, 1m)
    #[arg(long, default_value = "30s")]
    fetch_timeout: HumanDuration,
    #[arg(short, long)]
    verbose: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Serve the HTTP API
    Serve {
        #[arg(long, default_value = "0.0.0.0:8000")]
        bind: SocketAddr,
    },
    /// Process a single article and print the JSON response
    Summarize {
        url: String,
        /// Target language code (e.g. es, fr, de)
        #[arg(long = "to", default_value = "es")]
        target_language: String,
    },
}

fn build_pipeline(cli: &Cli) -> anyhow::Result<SummaryPipeline> {
    let scraper = ArticleScraper::new(ScraperConfig {
        user_agent: cli.user_agent.clone(),
        timeout: cli.fetch_timeout.0,
        ..Default::default()
    })?;
    info!("🦗 Article scraper ready (timeout {}s)", cli.fetch_timeout.0.as_secs());

    let translator = create_translator(&TranslatorConfig {
        provider: cli.translator.clone(),
        provider_url: cli.translator_url.clone(),
        source_language: cli.source_language.clone(),
        contact_email: cli.contact_email.clone(),
    })?;

    let scorer = Arc::new(LexiconScorer::new());

    Ok(SummaryPipeline::new(Arc::new(scraper), translator, scorer).with_chunk_size(cli.chunk_size))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose);

    let pipeline = build_pipeline(&cli)?;
    info!(
        "🧠 Pipeline initialized (translator {}, chunk size {})",
        pipeline.translator_name(),
        pipeline.chunk_size()
    );

    match cli.command {
        Commands::Serve { bind } => {
            ns_web::serve(bind, AppState::new(pipeline)).await?;
        }
        Commands::Summarize { url, target_language } => {
            let response = pipeline.handle_summarize_request(&url, &target_language).await?;
            println!("{}", serde_json::to_string_pretty(&response)?);
        }
    }

    Ok(())
}
