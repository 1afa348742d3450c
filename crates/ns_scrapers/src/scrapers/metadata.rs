use chrono::{DateTime, NaiveDate, NaiveDateTime};
use once_cell::sync::Lazy;
use regex::Regex;
use scraper::Html;
use serde_json::Value;
use super::jsonld;
use super::utils::{collapse_whitespace, first_attr, first_text, all_attrs, all_texts};

static URL_DATE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"/((?:19|20)\d{2})[/\-_.](\d{1,2})[/\-_.](\d{1,2})(?:[/\-_.]|$)")
        .expect("URL date pattern is valid")
});

const DATE_META_SELECTORS: &[&str] = &[
    "meta[property='article:published_time']",
    "meta[property='og:published_time']",
    "meta[name='pubdate']",
    "meta[name='publishdate']",
    "meta[name='date']",
    "meta[name='DC.date.issued']",
    "meta[itemprop='datePublished']",
];

pub fn extract_title(document: &Html, nodes: &[Value]) -> String {
    jsonld::extract_headline(nodes)
        .or_else(|| first_attr(document, "meta[property='og:title']", "content"))
        .or_else(|| first_text(document, "title"))
        .or_else(|| first_text(document, "h1"))
        .map(|title| collapse_whitespace(&title))
        .unwrap_or_default()
}

/// Author names, JSON-LD first then the usual byline markup.
pub fn extract_authors(document: &Html, nodes: &[Value]) -> Vec<String> {
    let mut candidates = jsonld::extract_authors(nodes);
    if candidates.is_empty() {
        candidates.extend(all_attrs(document, "meta[name='author']", "content"));
        candidates.extend(all_attrs(document, "meta[property='article:author']", "content"));
    }
    if candidates.is_empty() {
        candidates.extend(all_texts(document, "[rel='author']"));
        candidates.extend(all_texts(document, "[itemprop='author']"));
    }
    clean_authors(candidates)
}

fn clean_authors(candidates: Vec<String>) -> Vec<String> {
    let mut authors: Vec<String> = Vec::new();
    for candidate in candidates {
        let name = collapse_whitespace(&candidate);
        let name = name
            .strip_prefix("By ")
            .or_else(|| name.strip_prefix("by "))
            .unwrap_or(&name)
            .trim()
            .to_string();
        if name.is_empty() || name.starts_with("http://") || name.starts_with("https://") {
            continue;
        }
        if !authors.iter().any(|a| a.eq_ignore_ascii_case(&name)) {
            authors.push(name);
        }
    }
    authors
}

pub fn extract_publication_date(document: &Html, nodes: &[Value], url: &str) -> Option<NaiveDate> {
    if let Some(date) = jsonld::extract_date_published(nodes).and_then(|d| parse_date(&d)) {
        return Some(date);
    }

    for selector in DATE_META_SELECTORS {
        if let Some(date) = first_attr(document, selector, "content").and_then(|d| parse_date(&d)) {
            return Some(date);
        }
    }

    if let Some(date) = first_attr(document, "time[datetime]", "datetime").and_then(|d| parse_date(&d)) {
        return Some(date);
    }

    date_from_url(url)
}

/// Accepts RFC 3339, RFC 2822 and the common ISO-like layouts sites emit.
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.date_naive());
    }
    if let Ok(dt) = DateTime::parse_from_rfc2822(raw) {
        return Some(dt.date_naive());
    }
    if let Ok(dt) = DateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%z") {
        return Some(dt.date_naive());
    }
    for layout in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(raw, layout) {
            return Some(dt.date());
        }
    }

    raw.get(..10).and_then(|prefix| NaiveDate::parse_from_str(prefix, "%Y-%m-%d").ok())
}

pub fn date_from_url(url: &str) -> Option<NaiveDate> {
    let caps = URL_DATE.captures(url)?;
    let year = caps[1].parse().ok()?;
    let month = caps[2].parse().ok()?;
    let day = caps[3].parse().ok()?;
    NaiveDate::from_ymd_opt(year, month, day)
}
