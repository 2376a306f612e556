//! Human-readable byte sizes for node labels and tables.

/// Units scaled by powers of 1024; the last one absorbs everything larger.
const UNITS: [&str; 5] = ["", "K", "M", "G", "T"];

/// Format a byte count with one decimal place and a 1024-based unit suffix.
///
/// ```
/// use heft_graph::format_size;
///
/// assert_eq!(format_size(1000), "1000.0");
/// assert_eq!(format_size(2048), "2.0K");
/// assert_eq!(format_size(409_600), "400.0K");
/// ```
pub fn format_size(bytes: u64) -> String {
    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }
    format!("{value:.1}{}", UNITS[unit])
}

/// Node label: display name followed by own and total size.
pub fn size_label(name: &str, own_size: u64, total_size: u64) -> String {
    format!(
        "{name} ({}/{})",
        format_size(own_size),
        format_size(total_size)
    )
}
