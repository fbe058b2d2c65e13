//! Prompt validation and alert wording
//!
//! Pure functions, no I/O.

/// Alert shown when Generate is pressed without a prompt
pub const EMPTY_PROMPT_ALERT: &str = "Please provide a prompt";

/// Alert shown when Upload is pressed before any image exists
pub const NO_IMAGE_ALERT: &str = "No image generated to upload";

/// Returns the prompt to send, or None if there is nothing to send
///
/// Whitespace-only prompts count as empty. The text itself is sent untrimmed
/// so the user's wording reaches the endpoint exactly as typed.
pub fn prompt_to_submit(text: &str) -> Option<&str> {
    if text.trim().is_empty() {
        None
    } else {
        Some(text)
    }
}

/// Format an operation failure the way every alert on the screen reads
pub fn error_alert(message: &str) -> String {
    format!("Error: {}", message)
}
