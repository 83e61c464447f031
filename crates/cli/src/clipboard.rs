//! Best-effort clipboard writes.

use arboard::Clipboard;
use log::{error, info};

/// Copy `text` to the system clipboard. Failures are logged, never returned.
pub fn copy_to_clipboard(text: &str) -> bool {
    match Clipboard::new().and_then(|mut clipboard| clipboard.set_text(text)) {
        Ok(()) => {
            info!("copied {} bytes to clipboard", text.len());
            true
        }
        Err(e) => {
            error!("Failed to copy text: {e}");
            false
        }
    }
}
