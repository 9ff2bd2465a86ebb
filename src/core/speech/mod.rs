//! Amazon Polly speech operations.
//!
//! This module wraps the two Polly operations the CLI consumes:
//!
//! - DescribeVoices: paginated voice listing per language tag, merged and
//!   sorted into one catalog by [`catalog::fetch_voice_catalog`]
//! - SynthesizeSpeech: one synthesis call whose audio stream is copied to a
//!   local file by [`synthesizer::synthesize_to_file`]
//!
//! # Architecture
//!
//! The AWS SDK client sits behind the [`SpeechProvider`] trait so the catalog
//! and synthesizer logic run against in-memory mocks in tests. The real
//! provider is built once by [`connect`] from an explicit [`ClientConfig`];
//! request signing and credential management belong to the SDK.
//!
//! [`ClientConfig`]: crate::config::ClientConfig
//!
//! # Example
//!
//! ```rust,ignore
//! use pollysay::config::{AppConfig, ClientConfig};
//! use pollysay::core::speech::{connect, fetch_voice_catalog, select_voice, synthesize_to_file};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = AppConfig::default();
//!     let provider = connect(&config.client).await?;
//!
//!     let voices = fetch_voice_catalog(&provider, &config.languages).await?;
//!     let voice = select_voice(&voices, &config.voice_id)?;
//!
//!     let request = config.synthesis_request(voice);
//!     let written = synthesize_to_file(&provider, &request).await?;
//!     println!("wrote {written} bytes");
//!     Ok(())
//! }
//! ```

mod catalog;
mod provider;
mod synthesizer;
mod types;


pub use catalog::{fetch_voice_catalog, select_voice};
pub use provider::{PollyProvider, SpeechProvider, connect};
pub use synthesizer::synthesize_to_file;
pub use types::{
    Engine, MAX_TEXT_LENGTH, OutputFormat, SynthesisRequest, TextType, Voice, VoicePage,
};
