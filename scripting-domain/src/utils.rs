// Shared helpers

/// Normalizes a hex color channel: optional leading '#', exactly six hex
/// digits, uppercased. Anything else is rejected.
pub fn normalize_hex_channel(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    let digits = trimmed.strip_prefix('#').unwrap_or(trimmed);
    if digits.len() == 6 && digits.chars().all(|c| c.is_ascii_hexdigit()) {
        Some(digits.to_ascii_uppercase())
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_six_hex_digits_with_optional_hash() {
        assert_eq!(normalize_hex_channel("ff0000").as_deref(), Some("FF0000"));
        assert_eq!(normalize_hex_channel("#00FF00").as_deref(), Some("00FF00"));
        assert_eq!(normalize_hex_channel(" 0000ff ").as_deref(), Some("0000FF"));
    }

    #[test]
    fn rejects_everything_else() {
        assert_eq!(normalize_hex_channel("red"), None);
        assert_eq!(normalize_hex_channel("FF00"), None);
        assert_eq!(normalize_hex_channel("FF00001"), None);
        assert_eq!(normalize_hex_channel("GG0000"), None);
        assert_eq!(normalize_hex_channel(""), None);
    }
}
