use tracing::debug;
use crate::models::TranslationProvider;
use crate::{Error, Result};

/// Most providers cap a single request around this many characters.
pub const DEFAULT_CHUNK_SIZE: usize = 500;

/// Splits `text` into contiguous pieces of `chunk_size` characters.
///
/// Sizes are counted in `char`s so a piece never ends inside a UTF-8
/// sequence. Only the last piece may be shorter. A `chunk_size` of zero
/// yields no pieces.
pub fn split_chunks(text: &str, chunk_size: usize) -> Vec<&str> {
    let mut chunks = Vec::new();
    if chunk_size == 0 {
        return chunks;
    }

    let mut start = 0;
    let mut count = 0;
    for (idx, _) in text.char_indices() {
        if count == chunk_size {
            chunks.push(&text[start..idx]);
            start = idx;
            count = 0;
        }
        count += 1;
    }
    if start < text.len() {
        chunks.push(&text[start..]);
    }

    chunks
}

/// Translates `text` chunk by chunk and joins the results in order.
///
/// Chunks are sent one after another. The first failing chunk fails the
/// whole call.
pub async fn translate_text(
    provider: &dyn TranslationProvider,
    text: &str,
    target_language: &str,
    chunk_size: usize,
) -> Result<String> {
    if chunk_size == 0 {
        return Err(Error::Translation("chunk size must be greater than zero".to_string()));
    }

    let chunks = split_chunks(text, chunk_size);
    debug!("Translating {} chunk(s) to {} with {}", chunks.len(), target_language, provider.name());

    let mut translated = String::with_capacity(text.len());
    for (i, chunk) in chunks.iter().enumerate() {
        let part = provider
            .translate(chunk, target_language)
            .await
            .map_err(|e| match e {
                Error::Translation(msg) => {
                    Error::Translation(format!("chunk {}/{}: {}", i + 1, chunks.len(), msg))
                }
                other => Error::Translation(format!("chunk {}/{}: {}", i + 1, chunks.len(), other)),
            })?;
        debug!("Chunk {}/{} translated ({} chars)", i + 1, chunks.len(), chunk.chars().count());
        translated.push_str(&part);
    }

    Ok(translated)
}
