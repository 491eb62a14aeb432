//! Human-readable number formatting for cards and the detail field list.

use num_format::{Locale, ToFormattedString};

/// Abbreviate a population figure for list cards.
///
/// ≥ 1,000,000 → `"X.XM"`, ≥ 1,000 → `"XK"`, otherwise the literal integer.
/// Unknown populations render as `"N/A"`.
pub fn abbreviate_population(population: Option<u64>) -> String {
    match population {
        Some(p) if p >= 1_000_000 => format!("{:.1}M", p as f64 / 1_000_000.0),
        Some(p) if p >= 1_000 => format!("{}K", p / 1_000),
        Some(p) => p.to_string(),
        None => "N/A".to_string(),
    }
}

/// Population with thousands separators; absent or zero renders as `"N/A"`.
pub fn format_population(population: Option<u64>) -> String {
    match population {
        Some(p) if p > 0 => p.to_formatted_string(&Locale::en),
        _ => "N/A".to_string(),
    }
}

/// Area with thousands separators and a `km²` suffix; absent or non-positive
/// renders as `"N/A"`. Fractional parts survive up to two decimals, with
/// trailing zeros trimmed.
pub fn format_area(area: Option<f64>) -> String {
    match area {
        Some(a) if a.is_finite() && a > 0.0 => {
            let fixed = format!("{:.2}", a);
            let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));
            let grouped = int_part
                .parse::<u64>()
                .map(|n| n.to_formatted_string(&Locale::en))
                .unwrap_or_else(|_| int_part.to_string());
            let frac = frac_part.trim_end_matches('0');
            if frac.is_empty() {
                format!("{grouped} km²")
            } else {
                format!("{grouped}.{frac} km²")
            }
        }
        _ => "N/A".to_string(),
    }
}
