use readability::extractor;
use scraper::{ElementRef, Html, Selector};
use tracing::warn;
use url::Url;
use super::utils::collapse_whitespace;

const BOILERPLATE_TAGS: &[&str] = &["nav", "footer", "header", "aside", "form", "figure", "script", "style"];

/// Main body text, one paragraph per block separated by blank lines.
///
/// Readability scoring picks the node that holds the story. Only the `<p>`
/// elements inside that node are kept.
pub fn extract_text(html: &str, url: &Url) -> String {
    let product = match extractor::extract(&mut html.as_bytes(), url) {
        Ok(product) => product,
        Err(e) => {
            warn!("Readability could not process {}: {}", url, e);
            return String::new();
        }
    };

    let body = Html::parse_fragment(&product.content);
    paragraphs(&body).join("\n\n")
}

fn paragraphs(body: &Html) -> Vec<String> {
    let Ok(selector) = Selector::parse("p") else {
        return Vec::new();
    };

    body.select(&selector)
        .filter(|el| !in_boilerplate(el))
        .map(|el| collapse_whitespace(&el.text().collect::<String>()))
        .filter(|text| !text.is_empty())
        .collect()
}

fn in_boilerplate(el: &ElementRef) -> bool {
    el.ancestors()
        .filter_map(ElementRef::wrap)
        .any(|ancestor| BOILERPLATE_TAGS.contains(&ancestor.value().name()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> Url {
        Url::parse("https://news.example.com/economy/rates").unwrap()
    }

    #[test]
    fn test_story_in_div_beats_teaser_article() {
        let html = r#"
            <html><body>
                <nav><p>Home | World | Economy | Sports | Opinion | Culture</p></nav>
                <div class="story-body">
                    <p>The central bank raised interest rates by half a point on Thursday, its third increase this year.</p>
                    <p>Officials said inflation, driven by energy and food prices, remained well above the target.</p>
                    <p>Markets had expected the move, and the currency barely changed after the announcement.</p>
                </div>
                <div class="more-news">
                    <article class="teaser"><p>Read more: sports results</p></article>
                </div>
            </body></html>
        "#;
        let text = extract_text(html, &base());

        let paragraphs: Vec<&str> = text.split("\n\n").collect();
        assert_eq!(paragraphs.len(), 3, "{}", text);
        assert!(paragraphs[0].starts_with("The central bank raised interest rates"));
        assert!(!text.contains("sports results"));
        assert!(!text.contains("Home | World"));
    }

    #[test]
    fn test_whitespace_collapsed_inside_paragraphs() {
        let html = r#"
            <html><body><article>
                <p>The river rose two meters   overnight,
                   flooding the lower town, officials said.</p>
                <p>Residents were moved to the school gym before dawn, and roads were closed.</p>
            </article></body></html>
        "#;
        let text = extract_text(html, &base());
        assert!(text.starts_with("The river rose two meters overnight, flooding the lower town, officials said.\n\n"));
    }

    #[test]
    fn test_no_text() {
        assert_eq!(extract_text("<html><body><div>hi</div></body></html>", &base()), "");
    }
}
