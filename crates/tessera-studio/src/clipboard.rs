//! Export of generated markup to the system clipboard

use thiserror::Error;

/// Errors from writing to the clipboard
#[derive(Error, Debug)]
pub enum ClipboardError {
    /// No clipboard available, or the platform refused the write
    #[error("This system's clipboard is not available: {0}")]
    Unavailable(String),

    /// The blocking write task did not finish
    #[error("Clipboard task failed: {0}")]
    Task(String),
}

/// Write `contents` to the clipboard (blocking)
pub fn write_text(contents: String) -> Result<(), ClipboardError> {
    cli_clipboard::set_contents(contents).map_err(|e| ClipboardError::Unavailable(e.to_string()))
}

/// Write `contents` to the clipboard off the UI thread
///
/// Returns the number of bytes copied.
pub async fn copy(contents: String) -> Result<usize, ClipboardError> {
    let len = contents.len();
    log::info!("copy: Writing {} bytes to clipboard", len);

    tokio::task::spawn_blocking(move || write_text(contents))
        .await
        .map_err(|e| ClipboardError::Task(e.to_string()))??;

    Ok(len)
}
