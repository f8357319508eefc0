//! Formatting utilities for file sizes and timestamps.

use js_sys::Date;
use wasm_bindgen::JsValue;

/// Format file size for display (e.g., "1.2K", "3.4M").
pub fn format_size(bytes: u64) -> String {
    if bytes >= 1_000_000_000 {
        format!("{:.1}G", bytes as f64 / 1_000_000_000.0)
    } else if bytes >= 1_000_000 {
        format!("{:.1}M", bytes as f64 / 1_000_000.0)
    } else if bytes >= 1_000 {
        format!("{:.1}K", bytes as f64 / 1_000.0)
    } else {
        format!("{}B", bytes)
    }
}

/// Largest timestamp a JavaScript `Date` can hold.
const MAX_DATE_MS: f64 = 8.64e15;

/// Format a JavaScript timestamp (milliseconds since epoch) as YYYY-MM-DD in
/// UTC.
///
/// Values a `Date` cannot represent render as `-`.
pub fn format_date_ms(ms: f64) -> String {
    if !ms.is_finite() || ms.abs() > MAX_DATE_MS {
        return "-".to_string();
    }
    let iso = String::from(Date::new(&JsValue::from_f64(ms)).to_iso_string());
    iso.split('T').next().unwrap_or_default().to_string()
}

/// Depth of a drop path: `/a.txt` is 0, `/dir/a.txt` is 1.
pub fn path_depth(full_path: &str) -> usize {
    full_path
        .trim_matches('/')
        .matches('/')
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_size() {
        assert_eq!(format_size(0), "0B");
        assert_eq!(format_size(500), "500B");
        assert_eq!(format_size(1500), "1.5K");
        assert_eq!(format_size(1_500_000), "1.5M");
        assert_eq!(format_size(2_000_000_000), "2.0G");
    }

    #[test]
    fn test_unrepresentable_dates() {
        assert_eq!(format_date_ms(f64::NAN), "-");
        assert_eq!(format_date_ms(f64::INFINITY), "-");
        assert_eq!(format_date_ms(9e15), "-");
    }

    #[test]
    fn test_path_depth() {
        assert_eq!(path_depth("/a.txt"), 0);
        assert_eq!(path_depth("/dir/a.txt"), 1);
        assert_eq!(path_depth("/dir/sub/"), 1);
    }
}
