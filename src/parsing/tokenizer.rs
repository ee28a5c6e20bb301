//! Quote-aware comma splitting for a single CSV line.

/// Splits a line on commas, ignoring commas inside double-quoted spans.
///
/// Every `"` toggles the in-quote state; there is no `""` escape. Quote
/// characters are kept in the tokens so callers can decide how to strip
/// them (see [`strip_wrapping_quotes`]).
///
/// # Example
///
/// ```
/// use personnel_records::parsing::split_quoted;
///
/// let tokens = split_quoted(r#"10001,"Lim, Antonio",90000"#);
/// assert_eq!(tokens, vec!["10001", "\"Lim, Antonio\"", "90000"]);
/// ```
pub fn split_quoted(line: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;

    for c in line.chars() {
        match c {
            '"' => {
                in_quotes = !in_quotes;
                current.push(c);
            }
            ',' if !in_quotes => tokens.push(std::mem::take(&mut current)),
            _ => current.push(c),
        }
    }
    tokens.push(current);

    tokens
}

/// Trims whitespace and removes one pair of surrounding double quotes.
///
/// # Example
///
/// ```
/// use personnel_records::parsing::strip_wrapping_quotes;
///
/// assert_eq!(strip_wrapping_quotes(r#" "123 Main St, QC" "#), "123 Main St, QC");
/// assert_eq!(strip_wrapping_quotes("plain"), "plain");
/// ```
pub fn strip_wrapping_quotes(token: &str) -> &str {
    let trimmed = token.trim();
    trimmed
        .strip_prefix('"')
        .and_then(|rest| rest.strip_suffix('"'))
        .unwrap_or(trimmed)
}

/// Splits a line with [`split_quoted`] and strips quotes from every token.
pub fn split_and_unquote(line: &str) -> Vec<String> {
    split_quoted(line)
        .iter()
        .map(|t| strip_wrapping_quotes(t).to_string())
        .collect()
}
