use once_cell::sync::Lazy;
use regex::Regex;

static TIME_24: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([01]?[0-9]|2[0-3]):([0-5][0-9])$").expect("Failed to init regexp"));

/// Converts `HH:MM` (24-hour, leading zero optional) to `9:15 am` / `1 pm`.
/// A whole hour drops its `:00`, so `12:00` reads `12 pm` and `00:00` reads `12 am`.
pub fn to_12_hour(time24: Option<&str>) -> Option<String> {
    let caps = TIME_24.captures(time24.unwrap_or_default())?;
    let hours: u8 = caps[1].parse().ok()?;
    let minutes = &caps[2];

    let period = if hours >= 12 { "pm" } else { "am" };
    let hour12 = match hours % 12 {
        0 => 12,
        h => h,
    };
    if minutes == "00" {
        Some(format!("{hour12} {period}"))
    } else {
        Some(format!("{hour12}:{minutes} {period}"))
    }
}
