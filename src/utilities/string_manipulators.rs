use super::constants::TIER_PREFIX_LEN;

/// Drops the "Tier N: " prefix from a tier heading, "Tier 1: Excellent" -> "Excellent".
/// Headings shorter than the prefix give an empty tier.
pub fn strip_tier_prefix(heading: &str) -> String {
    heading.trim().chars().skip(TIER_PREFIX_LEN).collect()
}

pub fn escape_html(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
