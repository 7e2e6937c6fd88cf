use fancy_regex::Regex;
use once_cell::sync::Lazy;

// Dotted quad with no digit directly before or after it.
static IPV4_LITERAL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?<!\d)\d{1,3}\.\d{1,3}\.\d{1,3}\.\d{1,3}(?!\d)")
        .expect("IPv4 literal pattern is valid")
});

/// Return every IPv4 literal in `line`, left to right.
///
/// A candidate glued to further digits (`1234.1.1.1`, `10.1.1.1000`) is not
/// reported, so longer numeric tokens are never split into a false address.
/// Octet values are not range checked.
pub fn extract_ipv4(line: &str) -> Vec<String> {
    IPV4_LITERAL
        .find_iter(line)
        .filter_map(Result::ok)
        .map(|m| m.as_str().to_string())
        .collect()
}
