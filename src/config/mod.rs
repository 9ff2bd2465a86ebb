//! Runtime configuration for the CLI.
//!
//! Configuration is assembled once at the process boundary (CLI flags plus an
//! optional `.env` file loaded by the binary) and handed in explicitly; the
//! library never reads the process environment itself. AWS credentials and
//! the fallback region are resolved by the SDK's default discovery chain
//! inside the client factory, seeded from [`ClientConfig`].

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::core::speech::{Engine, OutputFormat, SynthesisRequest, TextType, Voice};

// =============================================================================
// Defaults
// =============================================================================

/// Language tags queried when none are given, in query order.
pub const DEFAULT_LANGUAGE_TAGS: &[&str] = &[
    "en-US", "en-GB", "en-AU", "en-IN", "en-NZ", "en-ZA", "en-IE",
];

/// Voice used when none is given.
pub const DEFAULT_VOICE_ID: &str = "Matthew";

/// Text spoken when none is given.
pub const DEFAULT_TEXT: &str = "Hello, Isaac! This is your computer.";

/// Sample rate used when none is given (Hz, as the API expects it).
pub const DEFAULT_SAMPLE_RATE: &str = "22050";

/// Output file used when none is given.
pub const DEFAULT_OUTPUT_PATH: &str = "speech.mp3";

// =============================================================================
// Client Configuration
// =============================================================================

/// Settings consumed by the Polly client factory.
///
/// Anything not set here is resolved by the AWS SDK's default discovery chain
/// (environment variables, shared config/credentials files, instance roles).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ClientConfig {
    /// AWS region override; `None` defers to the discovery chain
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
}

// =============================================================================
// Application Configuration
// =============================================================================

/// Fully resolved settings for one run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Client factory settings
    pub client: ClientConfig,

    /// Language tags to enumerate voices for, in query order
    pub languages: Vec<String>,

    /// Identifier of the voice to synthesize with
    pub voice_id: String,

    /// Text to synthesize
    pub text: String,

    /// Input text type (plain text or SSML)
    pub text_type: TextType,

    /// Audio output format
    pub output_format: OutputFormat,

    /// Output sample rate in Hz; `None` defers to the service default
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sample_rate: Option<String>,

    /// Engine override; `None` picks the voice's first supported engine
    #[serde(skip_serializing_if = "Option::is_none")]
    pub engine: Option<Engine>,

    /// Destination file for the synthesized audio
    pub output_path: PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            client: ClientConfig::default(),
            languages: DEFAULT_LANGUAGE_TAGS
                .iter()
                .map(|tag| tag.to_string())
                .collect(),
            voice_id: DEFAULT_VOICE_ID.to_string(),
            text: DEFAULT_TEXT.to_string(),
            text_type: TextType::default(),
            output_format: OutputFormat::default(),
            sample_rate: Some(DEFAULT_SAMPLE_RATE.to_string()),
            engine: None,
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
        }
    }
}

impl AppConfig {
    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if self.languages.is_empty() {
            return Err("At least one language tag is required".to_string());
        }
        if self.languages.iter().any(|tag| tag.trim().is_empty()) {
            return Err("Language tags must not be blank".to_string());
        }
        if self.voice_id.trim().is_empty() {
            return Err("Voice id must not be empty".to_string());
        }
        if self.text.trim().is_empty() {
            return Err("Text must not be empty".to_string());
        }
        Ok(())
    }

    /// Build the synthesis request for the selected voice.
    ///
    /// The engine falls back to the first engine the voice supports when no
    /// override was given; the request carries no engine at all if the voice
    /// lists none.
    pub fn synthesis_request(&self, voice: &Voice) -> SynthesisRequest {
        SynthesisRequest {
            voice_id: voice.id.clone(),
            engine: self.engine.or_else(|| voice.default_engine()),
            text: self.text.clone(),
            text_type: Some(self.text_type),
            output_format: self.output_format,
            sample_rate: self.sample_rate.clone(),
            output_path: self.output_path.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn voice_with_engines(engines: Vec<Engine>) -> Voice {
        Voice {
            id: "Matthew".to_string(),
            language_code: "en-US".to_string(),
            name: "Matthew".to_string(),
            supported_engines: engines,
        }
    }

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.voice_id, "Matthew");
        assert_eq!(config.languages.len(), 7);
        assert_eq!(config.languages[0], "en-US");
        assert_eq!(config.languages[6], "en-IE");
        assert_eq!(config.output_format, OutputFormat::Mp3);
        assert_eq!(config.text_type, TextType::Text);
        assert_eq!(config.sample_rate.as_deref(), Some("22050"));
        assert!(config.engine.is_none());
        assert!(config.client.region.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validation_rejects_empty_languages() {
        let mut config = AppConfig::default();
        config.languages.clear();

        let result = config.validate();
        assert!(result.is_err());
        assert!(result.unwrap_err().contains("language"));
    }

    #[test]
    fn test_validation_rejects_blank_voice() {
        let mut config = AppConfig::default();
        config.voice_id = "  ".to_string();

        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_blank_text() {
        let mut config = AppConfig::default();
        config.text = String::new();

        assert!(config.validate().is_err());
    }

    #[test]
    fn test_synthesis_request_uses_voice_engine_when_unset() {
        let config = AppConfig::default();
        let voice = voice_with_engines(vec![Engine::Generative, Engine::Neural]);

        let request = config.synthesis_request(&voice);
        assert_eq!(request.voice_id, "Matthew");
        assert_eq!(request.engine, Some(Engine::Generative));
        assert_eq!(request.text_type, Some(TextType::Text));
        assert_eq!(request.sample_rate.as_deref(), Some("22050"));
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_synthesis_request_keeps_explicit_engine() {
        let mut config = AppConfig::default();
        config.engine = Some(Engine::Standard);
        let voice = voice_with_engines(vec![Engine::Neural]);

        let request = config.synthesis_request(&voice);
        assert_eq!(request.engine, Some(Engine::Standard));
    }

    #[test]
    fn test_synthesis_request_omits_engine_when_voice_lists_none() {
        let config = AppConfig::default();
        let voice = voice_with_engines(Vec::new());

        let request = config.synthesis_request(&voice);
        assert!(request.engine.is_none());
    }
}
