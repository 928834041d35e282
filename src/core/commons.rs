// Quoting helpers shared by substitution and argument building.

/// Whether `value` is already wrapped in a pair of double quotes.
pub fn is_quoted(value: &str) -> bool {
    value.len() >= 2 && value.starts_with('"') && value.ends_with('"')
}

/// Wraps `value` in double quotes when it contains whitespace and is not
/// quoted yet. Inner quotes are left as they are.
pub fn quote_if_needed(value: &str) -> String {
    if value.chars().any(char::is_whitespace) && !is_quoted(value) {
        format!("\"{}\"", value)
    } else {
        value.to_string()
    }
}
