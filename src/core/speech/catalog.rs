//! Voice catalog retrieval.
//!
//! Enumerates voices per language tag through the paginated DescribeVoices
//! endpoint, then orders the combined catalog by (language code, display
//! name), both ascending, byte-wise. Voices returned under more than one
//! queried tag are kept once per tag.

use tracing::{debug, info};

use super::provider::SpeechProvider;
use super::types::Voice;
use crate::errors::app_error::{AppError, AppResult};

/// Fetch and sort the full voice catalog for the given language tags.
///
/// Tags are queried strictly in order; for each tag every page is fetched
/// before the next tag starts. Any failing page aborts the whole fetch and
/// already-fetched pages are discarded.
pub async fn fetch_voice_catalog(
    provider: &dyn SpeechProvider,
    languages: &[String],
) -> AppResult<Vec<Voice>> {
    if languages.is_empty() {
        return Err(AppError::configuration(
            "At least one language tag is required",
        ));
    }

    let mut voices = Vec::new();
    for language in languages {
        voices.extend(fetch_voices_for_language(provider, language).await?);
    }

    // Stable sort keeps per-tag duplicates in a deterministic order
    voices.sort_by(|a, b| {
        a.language_code
            .cmp(&b.language_code)
            .then_with(|| a.name.cmp(&b.name))
    });

    info!(
        total = voices.len(),
        languages = languages.len(),
        "Voice catalog fetched"
    );
    Ok(voices)
}

/// Fetch every page of voices for one language tag.
async fn fetch_voices_for_language(
    provider: &dyn SpeechProvider,
    language: &str,
) -> AppResult<Vec<Voice>> {
    let mut voices = Vec::new();
    let mut next_token: Option<String> = None;

    loop {
        let page = provider.describe_voices_page(language, next_token).await?;
        debug!(
            language = language,
            page_voices = page.voices.len(),
            "Fetched voice page"
        );
        voices.extend(page.voices);

        // An absent or empty token ends the listing
        match page.next_token {
            Some(token) if !token.is_empty() => next_token = Some(token),
            _ => break,
        }
    }

    Ok(voices)
}

/// Find a voice by exact identifier in the fetched catalog.
///
/// The first match wins; a missing identifier is a selection error naming it.
pub fn select_voice<'a>(voices: &'a [Voice], voice_id: &str) -> AppResult<&'a Voice> {
    voices
        .iter()
        .find(|voice| voice.id == voice_id)
        .ok_or_else(|| AppError::voice_selection(voice_id))
}
