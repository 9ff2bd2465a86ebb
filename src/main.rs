use std::path::PathBuf;

use anyhow::anyhow;
use clap::Parser;

use pollysay::config::{
    AppConfig, ClientConfig, DEFAULT_OUTPUT_PATH, DEFAULT_SAMPLE_RATE, DEFAULT_TEXT,
    DEFAULT_VOICE_ID,
};
use pollysay::core::speech::{
    Engine, OutputFormat, TextType, connect, fetch_voice_catalog, select_voice,
    synthesize_to_file,
};

/// pollysay - List Amazon Polly voices and speak a line of text to a file
#[derive(Parser, Debug)]
#[command(name = "pollysay")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Text to synthesize
    #[arg(short = 't', long = "text", default_value = DEFAULT_TEXT)]
    text: String,

    /// Voice id to synthesize with (must appear in the listing)
    #[arg(short = 'v', long = "voice", default_value = DEFAULT_VOICE_ID)]
    voice: String,

    /// Language tags to list voices for, comma-separated or repeated
    /// (defaults to the English locales)
    #[arg(short = 'l', long = "language", value_delimiter = ',')]
    languages: Vec<String>,

    /// Output file for the synthesized audio
    #[arg(short = 'o', long = "output", default_value = DEFAULT_OUTPUT_PATH)]
    output: PathBuf,

    /// Audio output format (mp3, ogg_vorbis, or pcm)
    #[arg(short = 'f', long = "format", default_value = "mp3")]
    format: String,

    /// Output sample rate in Hz
    #[arg(long = "sample-rate", default_value = DEFAULT_SAMPLE_RATE)]
    sample_rate: String,

    /// Engine override (standard, neural, long-form, or generative);
    /// defaults to the first engine the selected voice supports
    #[arg(long = "engine")]
    engine: Option<String>,

    /// Treat the text as SSML
    #[arg(long = "ssml")]
    ssml: bool,

    /// Print the voice listing as JSON lines
    #[arg(long = "json")]
    json: bool,

    /// AWS region override
    #[arg(long = "region")]
    region: Option<String>,
}

impl Cli {
    /// Resolve the parsed flags into a full configuration.
    fn into_config(self) -> AppConfig {
        let defaults = AppConfig::default();
        AppConfig {
            client: ClientConfig {
                region: self.region,
            },
            languages: if self.languages.is_empty() {
                defaults.languages
            } else {
                self.languages
            },
            voice_id: self.voice,
            text: self.text,
            text_type: if self.ssml {
                TextType::Ssml
            } else {
                TextType::Text
            },
            output_format: OutputFormat::from_str_or_default(&self.format),
            sample_rate: Some(self.sample_rate),
            engine: self.engine.as_deref().map(Engine::from_str_or_default),
            output_path: self.output,
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if it exists (must be done before credential discovery)
    let _ = dotenvy::dotenv();

    // Initialize tracing
    tracing_subscriber::fmt::init();

    // Parse CLI arguments
    let cli = Cli::parse();
    let json_listing = cli.json;

    let config = cli.into_config();
    config.validate().map_err(|e| anyhow!(e))?;

    // Connect once; credentials are resolved here, not on first request
    let provider = connect(&config.client).await?;

    // List every voice for the configured language tags
    let catalog = fetch_voice_catalog(&provider, &config.languages).await?;
    for voice in &catalog {
        if json_listing {
            println!("{}", serde_json::to_string(voice)?);
        } else {
            println!("{voice}");
        }
    }

    // Synthesize with the selected voice and write the audio out
    let voice = select_voice(&catalog, &config.voice_id)?;
    let request = config.synthesis_request(voice);
    let written = synthesize_to_file(&provider, &request).await?;

    println!(
        "All done! Wrote {written} bytes to {}",
        request.output_path.display()
    );

    Ok(())
}
