//! Copying hex codes to the system clipboard.

/// Copy a hex code to the clipboard.
///
/// Best effort: returns `false` when no clipboard is available (e.g.
/// headless sessions) or the write fails.
pub fn copy_hex(hex: &str) -> bool {
    let mut clipboard = match arboard::Clipboard::new() {
        Ok(clipboard) => clipboard,
        Err(err) => {
            tracing::warn!(error = %err, "clipboard unavailable");
            return false;
        }
    };
    match clipboard.set_text(hex) {
        Ok(()) => true,
        Err(err) => {
            tracing::warn!(error = %err, "clipboard write failed");
            false
        }
    }
}
