const MAX_VISIBLE_LENGTH: usize = 200;

/// Trims and truncates process output for safe logging.
pub fn preview_output(output: &str) -> String {
    let trimmed = output.trim();

    if trimmed.is_empty() {
        return String::from("[EMPTY]");
    }

    let total_chars = trimmed.chars().count();
    if total_chars > MAX_VISIBLE_LENGTH {
        let visible: String = trimmed.chars().take(MAX_VISIBLE_LENGTH).collect();
        format!("{}... ({} chars total)", visible, total_chars)
    } else {
        trimmed.to_string()
    }
}
