//! Literal color normalization.

/// Normalize a literal color value.
///
/// Hex colors are lowercased and 3-digit forms expanded to 6 digits; pure
/// white and black collapse to their keywords. Anything that is not a
/// recognized literal color is returned unchanged.
pub fn normalize_color(value: &str) -> String {
    if let Some(hex) = value.strip_prefix('#')
        && matches!(hex.len(), 3 | 6 | 8)
        && hex.chars().all(|c| c.is_ascii_hexdigit())
    {
        let hex = hex.to_ascii_lowercase();
        let expanded = if hex.len() == 3 {
            hex.chars().flat_map(|c| [c, c]).collect()
        } else {
            hex
        };
        return match expanded.as_str() {
            "ffffff" => "white".to_string(),
            "000000" => "black".to_string(),
            _ => format!("#{expanded}"),
        };
    }

    let lower = value.to_ascii_lowercase();
    match lower.as_str() {
        "white" | "black" | "transparent" => lower,
        _ => value.to_string(),
    }
}
