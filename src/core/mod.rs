pub mod speech;

// Re-export commonly used types for convenience
pub use speech::{
    Engine, MAX_TEXT_LENGTH, OutputFormat, PollyProvider, SpeechProvider, SynthesisRequest,
    TextType, Voice, VoicePage, connect, fetch_voice_catalog, select_voice, synthesize_to_file,
};
