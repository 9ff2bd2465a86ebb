//! Amazon Polly-backed speech provider.
//!
//! Wraps the AWS SDK client behind the [`SpeechProvider`] trait so the
//! catalog and synthesizer logic stay testable without network access. The
//! factory resolves AWS configuration exactly once, up front, from the
//! explicit [`ClientConfig`] plus the SDK's default discovery chain
//! (environment variables, shared config/credentials files, instance roles).

use async_trait::async_trait;
use aws_config::{BehaviorVersion, Region};
use aws_credential_types::provider::ProvideCredentials;
use aws_sdk_polly::Client as PollyClient;
use aws_sdk_polly::primitives::ByteStream;
use aws_sdk_polly::types::{
    Engine as SdkEngine, LanguageCode, OutputFormat as SdkOutputFormat,
    TextType as SdkTextType, Voice as SdkVoice, VoiceId,
};
use tracing::{debug, error, info};

use super::types::{Engine, OutputFormat, SynthesisRequest, TextType, Voice, VoicePage};
use crate::config::ClientConfig;
use crate::errors::app_error::{AppError, AppResult};

// =============================================================================
// Provider Trait
// =============================================================================

/// Remote speech service operations consumed by this crate.
///
/// One page of the voice catalog and one synthesis call; pagination and file
/// handling live with the callers. Implemented by [`PollyProvider`] for the
/// real service and by in-memory mocks in tests.
#[async_trait]
pub trait SpeechProvider: Send + Sync {
    /// Fetch one page of voices for a language tag, resuming from
    /// `next_token` when given.
    async fn describe_voices_page(
        &self,
        language: &str,
        next_token: Option<String>,
    ) -> AppResult<VoicePage>;

    /// Issue one synthesis call and return the audio byte stream.
    async fn synthesize_speech(&self, request: &SynthesisRequest) -> AppResult<ByteStream>;
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Convert Engine to AWS SDK Engine type
fn engine_to_sdk(engine: Engine) -> SdkEngine {
    match engine {
        Engine::Standard => SdkEngine::Standard,
        Engine::Neural => SdkEngine::Neural,
        Engine::LongForm => SdkEngine::LongForm,
        Engine::Generative => SdkEngine::Generative,
    }
}

/// Convert OutputFormat to AWS SDK OutputFormat type
fn output_format_to_sdk(format: OutputFormat) -> SdkOutputFormat {
    match format {
        OutputFormat::Mp3 => SdkOutputFormat::Mp3,
        OutputFormat::OggVorbis => SdkOutputFormat::OggVorbis,
        OutputFormat::Pcm => SdkOutputFormat::Pcm,
    }
}

/// Convert TextType to AWS SDK TextType
fn text_type_to_sdk(text_type: TextType) -> SdkTextType {
    match text_type {
        TextType::Text => SdkTextType::Text,
        TextType::Ssml => SdkTextType::Ssml,
    }
}

/// Convert an AWS SDK voice record into the crate's Voice type
fn voice_from_sdk(voice: SdkVoice) -> Voice {
    Voice {
        id: voice
            .id
            .map(|id| id.as_str().to_string())
            .unwrap_or_default(),
        language_code: voice
            .language_code
            .map(|code| code.as_str().to_string())
            .unwrap_or_default(),
        name: voice.name.unwrap_or_default(),
        supported_engines: voice
            .supported_engines
            .unwrap_or_default()
            .iter()
            .map(|engine| Engine::from_str_or_default(engine.as_str()))
            .collect(),
    }
}

// =============================================================================
// Client Factory
// =============================================================================

/// Build an authenticated Polly provider from explicit client settings.
///
/// Runs the SDK's default discovery chain once, applies the region override
/// if given, and resolves credentials eagerly so a broken credential chain
/// fails here instead of on the first Polly call.
pub async fn connect(config: &ClientConfig) -> AppResult<PollyProvider> {
    let mut loader = aws_config::defaults(BehaviorVersion::latest());
    if let Some(ref region) = config.region {
        loader = loader.region(Region::new(region.clone()));
    }
    let aws_config = loader.load().await;

    let credentials = aws_config.credentials_provider().ok_or_else(|| {
        AppError::configuration("No AWS credentials provider is available")
    })?;
    credentials.provide_credentials().await.map_err(|e| {
        error!(error = %e, "AWS credentials are not resolvable");
        AppError::configuration(format!("AWS credentials are not resolvable: {e}"))
    })?;

    info!(
        region = aws_config
            .region()
            .map(|region| region.as_ref())
            .unwrap_or("<default>"),
        "Amazon Polly client ready"
    );

    Ok(PollyProvider::new(PollyClient::new(&aws_config)))
}

// =============================================================================
// Amazon Polly Provider
// =============================================================================

/// [`SpeechProvider`] backed by the AWS SDK Polly client.
///
/// The client is read-only after construction and serves the whole run
/// sequentially.
#[derive(Debug, Clone)]
pub struct PollyProvider {
    client: PollyClient,
}

impl PollyProvider {
    /// Wrap an already constructed SDK client.
    pub fn new(client: PollyClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl SpeechProvider for PollyProvider {
    async fn describe_voices_page(
        &self,
        language: &str,
        next_token: Option<String>,
    ) -> AppResult<VoicePage> {
        debug!(
            language = language,
            resumed = next_token.is_some(),
            "Requesting voice page from Amazon Polly"
        );

        let output = self
            .client
            .describe_voices()
            .language_code(LanguageCode::from(language))
            .set_next_token(next_token)
            .send()
            .await
            .map_err(|e| {
                error!(language = language, error = %e, "DescribeVoices failed");
                AppError::remote_request(format!("DescribeVoices failed for '{language}': {e}"))
            })?;

        Ok(VoicePage {
            voices: output
                .voices
                .unwrap_or_default()
                .into_iter()
                .map(voice_from_sdk)
                .collect(),
            next_token: output.next_token,
        })
    }

    async fn synthesize_speech(&self, request: &SynthesisRequest) -> AppResult<ByteStream> {
        debug!(
            voice = %request.voice_id,
            text_len = request.text.len(),
            format = %request.output_format,
            "Synthesizing text with Amazon Polly"
        );

        let mut call = self
            .client
            .synthesize_speech()
            .text(request.text.as_str())
            .voice_id(VoiceId::from(request.voice_id.as_str()))
            .output_format(output_format_to_sdk(request.output_format));

        if let Some(engine) = request.engine {
            call = call.engine(engine_to_sdk(engine));
        }
        if let Some(text_type) = request.text_type {
            call = call.text_type(text_type_to_sdk(text_type));
        }
        if let Some(ref sample_rate) = request.sample_rate {
            call = call.sample_rate(sample_rate.clone());
        }

        let response = call.send().await.map_err(|e| {
            error!(voice = %request.voice_id, error = %e, "SynthesizeSpeech failed");
            AppError::remote_request(format!("SynthesizeSpeech failed: {e}"))
        })?;

        Ok(response.audio_stream)
    }
}
