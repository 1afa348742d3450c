use std::fmt;
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::Value;
use tracing::debug;
use ns_core::{Error, Result, TranslationProvider};

pub const DEFAULT_BASE_URL: &str = "https://api.mymemory.translated.net";

#[derive(Debug, Deserialize)]
struct MyMemoryResponse {
    #[serde(rename = "responseData")]
    response_data: Option<ResponseData>,
    // Sent as a number on success and as a string on some errors
    #[serde(rename = "responseStatus", default)]
    response_status: Value,
    #[serde(rename = "responseDetails", default)]
    response_details: Value,
    #[serde(rename = "quotaFinished", default)]
    quota_finished: Option<bool>,
    #[serde(default)]
    matches: Value,
}

#[derive(Debug, Deserialize)]
struct ResponseData {
    #[serde(rename = "translatedText", default)]
    translated_text: Option<String>,
}

/// Client for the free MyMemory translation API.
pub struct MyMemoryTranslator {
    client: Client,
    base_url: String,
    source_language: String,
    contact_email: Option<String>,
}

impl fmt::Debug for MyMemoryTranslator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MyMemoryTranslator")
            .field("client", &"<reqwest::Client>")
            .field("base_url", &self.base_url)
            .field("source_language", &self.source_language)
            .field("contact_email", &self.contact_email.as_deref().map(|_| "<redacted>"))
            .finish()
    }
}

impl MyMemoryTranslator {
    pub fn new(
        base_url: Option<String>,
        source_language: String,
        contact_email: Option<String>,
    ) -> Result<Self> {
        let client = Client::builder().build()?;
        Ok(Self {
            client,
            base_url: base_url
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
                .trim_end_matches('/')
                .to_string(),
            source_language,
            contact_email,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait]
impl TranslationProvider for MyMemoryTranslator {
    fn name(&self) -> &str {
        "MyMemory"
    }

    async fn translate(&self, text: &str, target_language: &str) -> Result<String> {
        let target_language = target_language.trim();
        if target_language.is_empty() {
            return Err(Error::Translation("target language is empty".to_string()));
        }
        if target_language.eq_ignore_ascii_case(&self.source_language) {
            return Ok(text.to_string());
        }

        let langpair = format!("{}|{}", self.source_language, target_language);
        let mut query = vec![("q", text), ("langpair", langpair.as_str())];
        if let Some(email) = &self.contact_email {
            query.push(("de", email.as_str()));
        }

        debug!("MyMemory request {} ({} chars)", langpair, text.chars().count());
        let response = self
            .client
            .get(format!("{}/get", self.base_url))
            .query(&query)
            .send()
            .await
            .map_err(|e| Error::Translation(format!("MyMemory request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(Error::Translation(format!("MyMemory returned {}: {}", status, body)));
        }

        let body: MyMemoryResponse = response
            .json()
            .await
            .map_err(|e| Error::Translation(format!("Invalid MyMemory response: {}", e)))?;

        extract_translation(body)
    }
}

fn status_code(status: &Value) -> Option<u64> {
    match status {
        Value::Number(n) => n.as_u64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

fn extract_translation(response: MyMemoryResponse) -> Result<String> {
    if response.quota_finished == Some(true) {
        return Err(Error::Translation("MyMemory daily quota exhausted".to_string()));
    }

    let status = status_code(&response.response_status);
    if status.is_some_and(|code| code != 200) {
        let details = match &response.response_details {
            Value::String(s) => s.clone(),
            Value::Null => "no details".to_string(),
            other => other.to_string(),
        };
        return Err(Error::Translation(format!(
            "MyMemory status {}: {}",
            status.unwrap_or_default(),
            details
        )));
    }

    if let Some(text) = response
        .response_data
        .and_then(|data| data.translated_text)
        .filter(|text| !text.is_empty())
    {
        return Ok(text);
    }

    // Empty primary result: fall back to the first memory match
    response
        .matches
        .as_array()
        .and_then(|matches| matches.iter().find_map(|m| m.get("translation")?.as_str()))
        .filter(|text| !text.is_empty())
        .map(str::to_string)
        .ok_or_else(|| Error::Translation("MyMemory returned no translation".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{extract::Query, routing::get, Json, Router};
    use serde_json::json;
    use std::collections::HashMap;

    fn parse(value: Value) -> MyMemoryResponse {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_extract_translation() {
        let response = parse(json!({
            "responseData": {"translatedText": "Hola mundo", "match": 1},
            "responseStatus": 200,
            "responseDetails": "",
            "quotaFinished": false,
            "matches": []
        }));
        assert_eq!(extract_translation(response).unwrap(), "Hola mundo");
    }

    #[test]
    fn test_extract_falls_back_to_matches() {
        let response = parse(json!({
            "responseData": {"translatedText": ""},
            "responseStatus": 200,
            "matches": [{"id": "1", "translation": "Bonjour"}]
        }));
        assert_eq!(extract_translation(response).unwrap(), "Bonjour");
    }

    #[test]
    fn test_extract_errors() {
        let quota = parse(json!({"responseData": {"translatedText": "x"}, "quotaFinished": true}));
        assert!(matches!(extract_translation(quota), Err(Error::Translation(_))));

        let bad_pair = parse(json!({
            "responseData": {"translatedText": "'ZZ' IS AN INVALID TARGET LANGUAGE"},
            "responseStatus": "403",
            "responseDetails": "'ZZ' IS AN INVALID TARGET LANGUAGE"
        }));
        match extract_translation(bad_pair) {
            Err(Error::Translation(msg)) => assert!(msg.contains("403"), "{}", msg),
            other => panic!("expected translation error, got {:?}", other),
        }

        let empty = parse(json!({"responseStatus": 200, "matches": ""}));
        assert!(matches!(extract_translation(empty), Err(Error::Translation(_))));
    }

    async fn spawn_fake_mymemory() -> String {
        async fn handler(Query(params): Query<HashMap<String, String>>) -> Json<Value> {
            let text = params.get("q").cloned().unwrap_or_default();
            let pair = params.get("langpair").cloned().unwrap_or_default();
            Json(json!({
                "responseData": {"translatedText": format!("<{}>{}", pair, text)},
                "responseStatus": 200,
                "quotaFinished": false,
                "matches": []
            }))
        }

        let app = Router::new().route("/get", get(handler));
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        format!("http://{}/", addr)
    }

    #[tokio::test]
    async fn test_translate_against_local_server() {
        let base = spawn_fake_mymemory().await;
        let translator = MyMemoryTranslator::new(Some(base), "en".to_string(), None).unwrap();

        let result = translator.translate("Hello & goodbye", "es").await.unwrap();
        assert_eq!(result, "<en|es>Hello & goodbye");

        let chunked = ns_core::translate_text(&translator, "abcdef", "de", 4).await.unwrap();
        assert_eq!(chunked, "<en|de>abcd<en|de>ef");
    }

    #[tokio::test]
    async fn test_same_language_skips_request() {
        // Nothing listens here, so any request would fail
        let translator =
            MyMemoryTranslator::new(Some("http://127.0.0.1:9".to_string()), "en".to_string(), None)
                .unwrap();
        assert_eq!(translator.translate("unchanged", "EN").await.unwrap(), "unchanged");
    }

    #[tokio::test]
    async fn test_unreachable_provider() {
        let translator =
            MyMemoryTranslator::new(Some("http://127.0.0.1:9".to_string()), "en".to_string(), None)
                .unwrap();
        let result = translator.translate("hello", "es").await;
        assert!(matches!(result, Err(Error::Translation(_))));
    }

    #[tokio::test]
    async fn test_empty_target_language() {
        let translator = MyMemoryTranslator::new(None, "en".to_string(), None).unwrap();
        assert!(matches!(translator.translate("hello", " ").await, Err(Error::Translation(_))));
    }
}
