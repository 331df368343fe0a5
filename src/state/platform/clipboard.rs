//! Clipboard writes for the address copy action.
//!
//! On Linux the external tools (`wl-copy`, `xclip`, `xsel`) are tried first:
//! they keep owning the selection after lazycap exits, which an in-process
//! `arboard` clipboard does not. Other platforms, and Linux without any of
//! those tools, go straight through `arboard`.
//!
//! ```ignore
//! // From the UI loop; returns immediately.
//! clipboard::copy_in_background("f1abc...".to_string());
//! ```

use thiserror::Error;

/// Why an address could not be placed on the clipboard.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ClipboardError {
    #[error("no clipboard available")]
    Unavailable,
    #[error("clipboard rejected the text: {0}")]
    Rejected(String),
}

/// Helper programs and their arguments, in preference order.
#[cfg(target_os = "linux")]
const EXTERNAL_TOOLS: [(&str, &[&str]); 3] = [
    ("wl-copy", &[]),
    ("xclip", &["-selection", "clipboard"]),
    ("xsel", &["--clipboard", "--input"]),
];

/// Writes `text` to the system clipboard, blocking until done.
///
/// # Errors
///
/// Returns [`ClipboardError`] when neither an external tool nor `arboard`
/// accepted the text.
pub fn copy_text(text: &str) -> Result<(), ClipboardError> {
    #[cfg(target_os = "linux")]
    if EXTERNAL_TOOLS
        .iter()
        .any(|(program, args)| pipe_into(program, args, text))
    {
        return Ok(());
    }

    let mut clipboard = arboard::Clipboard::new().map_err(|_| ClipboardError::Unavailable)?;
    clipboard
        .set_text(text)
        .map_err(|err| ClipboardError::Rejected(err.to_string()))
}

/// Feeds `text` to `program`'s stdin; `false` if it is missing or fails.
#[cfg(target_os = "linux")]
fn pipe_into(program: &str, args: &[&str], text: &str) -> bool {
    use std::io::Write;
    use std::process::{Command, Stdio};

    let Ok(mut child) = Command::new(program)
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
    else {
        return false;
    };

    // Dropping stdin closes the pipe so the tool can finish.
    let written = child
        .stdin
        .take()
        .is_some_and(|mut stdin| stdin.write_all(text.as_bytes()).is_ok());

    child.wait().is_ok_and(|status| status.success()) && written
}

/// Copies text on a blocking worker without waiting for the outcome.
///
/// Failures are logged and otherwise swallowed: the grid has no channel to
/// surface them. Must be called from within a tokio runtime.
pub fn copy_in_background(text: String) {
    tokio::task::spawn_blocking(move || match copy_text(&text) {
        Ok(()) => tracing::debug!(len = text.len(), "copied to clipboard"),
        Err(err) => tracing::debug!(%err, "clipboard write failed"),
    });
}
