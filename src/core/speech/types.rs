//! Data types for the Amazon Polly speech operations.
//!
//! Voice records as DescribeVoices returns them, one page of such records,
//! and the parameters for a single SynthesizeSpeech call, plus the string
//! enums the API expects (engine, output format, text type).

use std::fmt;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

// =============================================================================
// Engine
// =============================================================================

/// Amazon Polly synthesis engine options.
///
/// Different engines provide different quality/latency trade-offs:
/// - **Standard**: Basic TTS, lowest latency
/// - **Neural**: High-quality neural voices
/// - **LongForm**: Optimized for longer content like audiobooks
/// - **Generative**: Latest generative AI voices
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Engine {
    /// Standard TTS engine
    #[serde(rename = "standard")]
    Standard,
    /// Neural TTS engine
    #[default]
    #[serde(rename = "neural")]
    Neural,
    /// Long-form TTS engine (for audiobooks, articles)
    #[serde(rename = "long-form")]
    LongForm,
    /// Generative AI TTS engine
    #[serde(rename = "generative")]
    Generative,
}

impl Engine {
    /// Convert to AWS API string.
    #[inline]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Standard => "standard",
            Self::Neural => "neural",
            Self::LongForm => "long-form",
            Self::Generative => "generative",
        }
    }

    /// Parse from string, with fallback to Neural.
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "standard" => Self::Standard,
            "neural" => Self::Neural,
            "long-form" | "longform" | "long_form" => Self::LongForm,
            "generative" => Self::Generative,
            _ => Self::default(),
        }
    }
}

impl fmt::Display for Engine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// =============================================================================
// Output Format
// =============================================================================

/// Audio output formats supported by Amazon Polly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum OutputFormat {
    /// MP3 format (default, compressed)
    #[default]
    #[serde(rename = "mp3")]
    Mp3,
    /// OGG Vorbis format (compressed)
    #[serde(rename = "ogg_vorbis")]
    OggVorbis,
    /// PCM format (uncompressed, 16-bit signed little-endian)
    #[serde(rename = "pcm")]
    Pcm,
}

impl OutputFormat {
    /// Convert to AWS API string.
    #[inline]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Mp3 => "mp3",
            Self::OggVorbis => "ogg_vorbis",
            Self::Pcm => "pcm",
        }
    }

    /// Get supported sample rates for this format.
    pub fn supported_sample_rates(&self) -> &'static [u32] {
        match self {
            Self::Mp3 | Self::OggVorbis => &[8000, 16000, 22050, 24000],
            Self::Pcm => &[8000, 16000],
        }
    }

    /// Parse from string, with fallback to Mp3.
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "mp3" | "mpeg" => Self::Mp3,
            "ogg_vorbis" | "ogg" | "vorbis" => Self::OggVorbis,
            "pcm" | "linear16" | "raw" => Self::Pcm,
            _ => Self::default(),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// =============================================================================
// Text Type
// =============================================================================

/// Input text type for Amazon Polly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TextType {
    /// Plain text input
    #[default]
    #[serde(rename = "text")]
    Text,
    /// SSML (Speech Synthesis Markup Language) input
    #[serde(rename = "ssml")]
    Ssml,
}

impl TextType {
    /// Convert to AWS API string.
    #[inline]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Ssml => "ssml",
        }
    }

    /// Parse from string.
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "ssml" => Self::Ssml,
            _ => Self::Text,
        }
    }
}

impl fmt::Display for TextType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// =============================================================================
// Voice
// =============================================================================

/// One voice record as DescribeVoices returns it.
///
/// Immutable once fetched; a voice returned under several queried language
/// tags appears once per tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Voice {
    /// Provider-assigned identifier (e.g. "Joanna")
    pub id: String,
    /// Language code the voice was returned under (e.g. "en-US")
    pub language_code: String,
    /// Human-readable display name
    pub name: String,
    /// Engines the voice supports, in provider order (may be empty)
    pub supported_engines: Vec<Engine>,
}

impl Voice {
    /// Engine used when no override is given: the first one the voice lists.
    pub fn default_engine(&self) -> Option<Engine> {
        self.supported_engines.first().copied()
    }
}

impl fmt::Display for Voice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}, {})", self.id, self.language_code, self.name)?;
        if !self.supported_engines.is_empty() {
            let engines: Vec<&str> = self
                .supported_engines
                .iter()
                .map(|engine| engine.as_str())
                .collect();
            write!(f, " [{}]", engines.join(", "))?;
        }
        Ok(())
    }
}

// =============================================================================
// Voice Page
// =============================================================================

/// One page of a DescribeVoices response.
#[derive(Debug, Clone, Default)]
pub struct VoicePage {
    /// Voices on this page
    pub voices: Vec<Voice>,
    /// Continuation token; absent or empty means no further pages
    pub next_token: Option<String>,
}

// =============================================================================
// Synthesis Request
// =============================================================================

/// Maximum text length for SynthesizeSpeech API (characters).
pub const MAX_TEXT_LENGTH: usize = 3000;

/// Parameters for one SynthesizeSpeech call.
///
/// Built once per run, validated, never mutated afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SynthesisRequest {
    /// Identifier of the voice to synthesize with
    pub voice_id: String,

    /// Engine override; `None` lets the service pick for the voice
    #[serde(skip_serializing_if = "Option::is_none")]
    pub engine: Option<Engine>,

    /// Text to synthesize
    pub text: String,

    /// How to interpret the text; `None` defers to the service default
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_type: Option<TextType>,

    /// Audio container/encoding of the response stream
    pub output_format: OutputFormat,

    /// Sample rate in Hz as the API expects it; `None` defers to the
    /// service default for the format
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sample_rate: Option<String>,

    /// Destination file; truncated if it already exists
    pub output_path: PathBuf,
}

impl SynthesisRequest {
    /// Create a request with the given voice, text, and destination, leaving
    /// every optional knob at the service default.
    pub fn new(
        voice_id: impl Into<String>,
        text: impl Into<String>,
        output_path: impl Into<PathBuf>,
    ) -> Self {
        Self {
            voice_id: voice_id.into(),
            engine: None,
            text: text.into(),
            text_type: None,
            output_format: OutputFormat::default(),
            sample_rate: None,
            output_path: output_path.into(),
        }
    }

    /// Validate the request.
    pub fn validate(&self) -> Result<(), String> {
        if self.voice_id.trim().is_empty() {
            return Err("Voice id must not be empty".to_string());
        }

        let text = self.text.trim();
        if text.is_empty() {
            return Err("Text must not be empty".to_string());
        }
        if text.len() > MAX_TEXT_LENGTH {
            return Err(format!(
                "Text length {} exceeds maximum {} characters",
                text.len(),
                MAX_TEXT_LENGTH
            ));
        }

        // Sample rate must be numeric and supported by the output format
        if let Some(ref rate) = self.sample_rate {
            let rate: u32 = rate
                .parse()
                .map_err(|_| format!("Sample rate '{rate}' is not a number"))?;
            let supported = self.output_format.supported_sample_rates();
            if !supported.contains(&rate) {
                return Err(format!(
                    "Sample rate {} is not supported for {} format. Supported rates: {:?}",
                    rate,
                    self.output_format.as_str(),
                    supported
                ));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_engine() {
        assert_eq!(Engine::Neural.as_str(), "neural");
        assert_eq!(Engine::Standard.as_str(), "standard");
        assert_eq!(Engine::from_str_or_default("long-form"), Engine::LongForm);
        assert_eq!(Engine::from_str_or_default("unknown"), Engine::Neural);
    }

    #[test]
    fn test_engine_serde() {
        assert_eq!(
            serde_json::to_string(&Engine::LongForm).unwrap(),
            "\"long-form\""
        );
        assert_eq!(
            serde_json::from_str::<Engine>("\"generative\"").unwrap(),
            Engine::Generative
        );
    }

    #[test]
    fn test_output_format() {
        assert_eq!(OutputFormat::Mp3.as_str(), "mp3");
        assert_eq!(OutputFormat::Pcm.as_str(), "pcm");
        assert!(OutputFormat::Mp3.supported_sample_rates().contains(&22050));
        assert!(!OutputFormat::Pcm.supported_sample_rates().contains(&22050));
        assert_eq!(
            OutputFormat::from_str_or_default("ogg"),
            OutputFormat::OggVorbis
        );
        assert_eq!(OutputFormat::from_str_or_default("unknown"), OutputFormat::Mp3);
    }

    #[test]
    fn test_text_type() {
        assert_eq!(TextType::Text.as_str(), "text");
        assert_eq!(TextType::Ssml.as_str(), "ssml");
        assert_eq!(TextType::from_str_or_default("ssml"), TextType::Ssml);
        assert_eq!(TextType::from_str_or_default("unknown"), TextType::Text);
    }

    #[test]
    fn test_voice_display() {
        let voice = Voice {
            id: "Amy".to_string(),
            language_code: "en-GB".to_string(),
            name: "Amy".to_string(),
            supported_engines: vec![Engine::Neural, Engine::Standard],
        };
        assert_eq!(voice.to_string(), "Amy (en-GB, Amy) [neural, standard]");
        assert_eq!(voice.default_engine(), Some(Engine::Neural));
    }

    #[test]
    fn test_voice_display_without_engines() {
        let voice = Voice {
            id: "Amy".to_string(),
            language_code: "en-GB".to_string(),
            name: "Amy".to_string(),
            supported_engines: Vec::new(),
        };
        assert_eq!(voice.to_string(), "Amy (en-GB, Amy)");
        assert!(voice.default_engine().is_none());
    }

    #[test]
    fn test_request_validation_valid() {
        let mut request = SynthesisRequest::new("Matthew", "Hello", "out.mp3");
        request.sample_rate = Some("22050".to_string());
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_request_validation_no_sample_rate() {
        let request = SynthesisRequest::new("Matthew", "Hello", "out.mp3");
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_request_validation_empty_text() {
        let request = SynthesisRequest::new("Matthew", "   ", "out.mp3");

        let result = request.validate();
        assert!(result.is_err());
        assert!(result.unwrap_err().contains("Text"));
    }

    #[test]
    fn test_request_validation_text_too_long() {
        let request =
            SynthesisRequest::new("Matthew", "a".repeat(MAX_TEXT_LENGTH + 1), "out.mp3");

        let result = request.validate();
        assert!(result.is_err());
        assert!(result.unwrap_err().contains("exceeds"));
    }

    #[test]
    fn test_request_validation_invalid_sample_rate() {
        let mut request = SynthesisRequest::new("Matthew", "Hello", "out.pcm");
        request.output_format = OutputFormat::Pcm;
        request.sample_rate = Some("22050".to_string());

        let result = request.validate();
        assert!(result.is_err());
        assert!(result.unwrap_err().contains("Sample rate"));
    }

    #[test]
    fn test_request_validation_non_numeric_sample_rate() {
        let mut request = SynthesisRequest::new("Matthew", "Hello", "out.mp3");
        request.sample_rate = Some("fast".to_string());

        let result = request.validate();
        assert!(result.is_err());
        assert!(result.unwrap_err().contains("not a number"));
    }

    #[test]
    fn test_request_validation_empty_voice() {
        let request = SynthesisRequest::new("", "Hello", "out.mp3");
        assert!(request.validate().is_err());
    }
}
