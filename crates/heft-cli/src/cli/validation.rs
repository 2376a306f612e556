/// Parse a byte size with an optional 1024-based unit suffix.
///
/// Accepts plain bytes (`409600`) or a number followed by `K`, `M` or `G`
/// (case-insensitive, optional trailing `B`): `400K`, `1.5M`, `2gb`.
///
/// # Errors
///
/// Returns an error message for empty input, unknown suffixes, negative or
/// non-numeric values, and values that do not fit in 64 bits.
pub fn parse_size(s: &str) -> Result<u64, String> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return Err("Size cannot be empty".to_string());
    }

    let upper = trimmed.to_ascii_uppercase();
    let without_b = upper
        .strip_suffix('B')
        .filter(|rest| rest.ends_with(['K', 'M', 'G']))
        .unwrap_or(upper.as_str());

    let (number, multiplier) = match without_b.char_indices().last() {
        Some((at, 'K')) => (&without_b[..at], 1024u64),
        Some((at, 'M')) => (&without_b[..at], 1024u64.pow(2)),
        Some((at, 'G')) => (&without_b[..at], 1024u64.pow(3)),
        _ => (without_b, 1u64),
    };

    let number = number.trim();
    if let Ok(bytes) = number.parse::<u64>() {
        return bytes
            .checked_mul(multiplier)
            .ok_or_else(|| format!("Size is too large: '{}'", s));
    }

    match number.parse::<f64>() {
        Ok(value) if value.is_finite() && value >= 0.0 => {
            let bytes = (value * multiplier as f64).round();
            if bytes > u64::MAX as f64 {
                Err(format!("Size is too large: '{}'", s))
            } else {
                Ok(bytes as u64)
            }
        }
        _ => Err(format!(
            "Invalid size '{}': expected bytes or a number with a K, M or G suffix",
            s
        )),
    }
}
