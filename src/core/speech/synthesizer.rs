//! Speech synthesis to a local file.
//!
//! Issues one SynthesizeSpeech call and copies the returned audio stream into
//! the destination file chunk by chunk. The stream and the file handle are
//! dropped on every exit path; if anything fails after the file was created,
//! the partial file is removed on a best-effort basis.

use std::path::Path;

use aws_sdk_polly::primitives::ByteStream;
use tokio::fs::File;
use tokio::io::AsyncWriteExt;
use tracing::{debug, error, info};

use super::provider::SpeechProvider;
use super::types::SynthesisRequest;
use crate::errors::app_error::{AppError, AppResult};

/// Synthesize one request and write the audio to `request.output_path`.
///
/// The destination is created fresh, truncating any existing file. Returns
/// the number of audio bytes written.
pub async fn synthesize_to_file(
    provider: &dyn SpeechProvider,
    request: &SynthesisRequest,
) -> AppResult<u64> {
    request.validate().map_err(AppError::Configuration)?;

    debug!(
        voice = %request.voice_id,
        text_len = request.text.len(),
        path = %request.output_path.display(),
        "Requesting synthesis"
    );

    let mut stream = provider.synthesize_speech(request).await?;

    let path = request.output_path.as_path();
    let mut file = File::create(path)
        .await
        .map_err(|e| AppError::local_io(path, e))?;

    match copy_stream_to_file(&mut stream, &mut file, path).await {
        Ok(written) => {
            info!(bytes = written, path = %path.display(), "Audio written");
            Ok(written)
        }
        Err(e) => {
            // Drop the handle first, then remove the partial file best-effort
            drop(file);
            let _ = tokio::fs::remove_file(path).await;
            Err(e)
        }
    }
}

/// Copy the audio stream into the file chunk by chunk.
///
/// Stream read failures map to remote request errors, write and flush
/// failures to local I/O errors.
async fn copy_stream_to_file(
    stream: &mut ByteStream,
    file: &mut File,
    path: &Path,
) -> AppResult<u64> {
    let mut written: u64 = 0;

    while let Some(chunk) = stream.try_next().await.map_err(|e| {
        error!(error = %e, "Audio stream read failed");
        AppError::remote_request(format!("Audio stream read failed: {e}"))
    })? {
        file.write_all(&chunk)
            .await
            .map_err(|e| AppError::local_io(path, e))?;
        written += chunk.len() as u64;
    }

    file.flush()
        .await
        .map_err(|e| AppError::local_io(path, e))?;

    Ok(written)
}
