use std::collections::HashSet;

/// Non-empty lines of `text`, trimmed of leading and trailing whitespace.
///
/// Lines that only differ in surrounding whitespace collapse into one element.
/// `\r\n` endings need no special casing since `\r` is trimmed with the rest.
pub fn trimmed_lines(text: &str) -> HashSet<String> {
    text.split('\n')
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .map(str::to_string)
        .collect()
}
