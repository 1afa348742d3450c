use scraper::{Html, Selector};
use serde_json::Value;

/// All JSON-LD nodes found in the document, flattened out of arrays and
/// `@graph` containers. Nodes typed as articles come first.
pub fn extract_nodes(document: &Html) -> Vec<Value> {
    let mut nodes = Vec::new();

    if let Ok(script_selector) = Selector::parse("script[type='application/ld+json']") {
        for script in document.select(&script_selector) {
            if let Ok(json) = serde_json::from_str::<Value>(script.text().collect::<String>().trim()) {
                flatten(json, &mut nodes);
            }
        }
    }

    // Stable, so document order is kept inside each group
    nodes.sort_by_key(|node| !is_article(node));
    nodes
}

fn flatten(value: Value, out: &mut Vec<Value>) {
    match value {
        Value::Array(items) => {
            for item in items {
                flatten(item, out);
            }
        }
        Value::Object(mut obj) => {
            if let Some(graph) = obj.remove("@graph") {
                flatten(graph, out);
            }
            out.push(Value::Object(obj));
        }
        _ => {}
    }
}

fn is_article(node: &Value) -> bool {
    let type_matches = |t: &str| t.ends_with("Article") || t == "BlogPosting" || t == "Report";
    match node.get("@type") {
        Some(Value::String(t)) => type_matches(t.as_str()),
        Some(Value::Array(types)) => types.iter().filter_map(Value::as_str).any(type_matches),
        _ => false,
    }
}

/// Extracts authors from JSON-LD metadata in the HTML document.
/// Returns a vector of author names.
pub fn extract_authors(nodes: &[Value]) -> Vec<String> {
    let mut authors = Vec::new();

    for node in nodes {
        // Try to get author from the JSON-LD data
        if let Some(author) = node.get("author") {
            match author {
                Value::Array(arr) => {
                    for author_obj in arr {
                        push_author(author_obj, &mut authors);
                    }
                }
                other => push_author(other, &mut authors),
            }
        }
        if !authors.is_empty() {
            break;
        }
    }

    authors
}

fn push_author(value: &Value, authors: &mut Vec<String>) {
    match value {
        Value::Object(obj) => {
            if let Some(name) = obj.get("name").and_then(|n| n.as_str()) {
                authors.push(name.trim().to_string());
            }
        }
        Value::String(s) => authors.push(s.trim().to_string()),
        _ => {}
    }
}

pub fn extract_headline(nodes: &[Value]) -> Option<String> {
    first_string(nodes.iter().filter(|node| is_article(node)), &["headline", "name"])
}

pub fn extract_date_published(nodes: &[Value]) -> Option<String> {
    first_string(nodes.iter(), &["datePublished", "dateCreated", "uploadDate"])
}

fn first_string<'a>(mut nodes: impl Iterator<Item = &'a Value>, keys: &[&str]) -> Option<String> {
    nodes.find_map(|node| {
        keys.iter()
            .filter_map(|key| node.get(*key).and_then(Value::as_str))
            .map(str::trim)
            .find(|s| !s.is_empty())
            .map(str::to_string)
    })
}
