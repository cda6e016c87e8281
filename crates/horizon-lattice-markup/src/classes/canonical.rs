//! Canonical declaration strings and the class hash.

use crate::style::IMPORTANT;

/// Reduce a declaration string to its canonical form.
///
/// Priority markers are removed, declarations are split on `;`, trimmed,
/// sorted and rejoined with `"; "`. Two declaration strings that differ only
/// in declaration order or priority canonicalize identically.
pub fn canonicalize(declarations: &str) -> String {
    let cleaned = declarations.replace(IMPORTANT, "");
    let mut parts: Vec<&str> = cleaned
        .split(';')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .collect();
    parts.sort_unstable();
    parts.join("; ")
}

/// Hash a string to a base-36 class suffix.
///
/// Rolling `h * 31 + c` over UTF-16 code units with 32-bit wraparound, then
/// the absolute value. Stable across platforms and releases since generated
/// class names may be referenced by hand-written stylesheets.
pub fn class_hash(input: &str) -> String {
    let hash = input
        .encode_utf16()
        .fold(0i32, |h, unit| h.wrapping_mul(31).wrapping_add(i32::from(unit)));
    to_base36(i64::from(hash).unsigned_abs())
}

fn to_base36(mut value: u64) -> String {
    const DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";
    if value == 0 {
        return "0".to_string();
    }

    let mut digits = Vec::new();
    while value > 0 {
        digits.push(DIGITS[(value % 36) as usize]);
        value /= 36;
    }
    digits.reverse();
    String::from_utf8_lossy(&digits).into_owned()
}
