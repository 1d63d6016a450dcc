//! Field normalization: raw catalog text fragments to typed values.
//!
//! Every function here is pure and infallible. Unparseable input degrades
//! to a default (`0.0`, `None`, the unscaled number) instead of an error.

use std::sync::LazyLock;

use chrono::{Month, NaiveDate};
use regex::Regex;

/// Placeholder for optional text that is missing from the markup.
pub const NOT_AVAILABLE: &str = "N/A";

const AVAILABILITY_LABEL: &str = "Availability:";
const IN_STOCK: &str = "in stock";

static PRICE_STRIP_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\d.]").expect("valid regex"));
static LEADING_NUMBER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:\d+(?:\.\d*)?|\.\d+)").expect("valid regex"));
static CAPACITY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d+)([[:alpha:]]+)").expect("valid regex"));

/// Shipping date shapes, tried in order. The first one that matches anywhere
/// in the text decides the date, even if a later pattern would match a
/// longer span.
static SHIPPING_DATE_RES: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        // 2024-03-05
        r"(\d{4}-\d{2}-\d{2})",
        // 5 March 2024
        r"(\d{1,2} \w+ \d{4})",
        // 05 March 2024; shadowed by the pattern above
        r"(\d{2} \w+ \d{4})",
        // Tuesday 5th March 2024
        r"\b(\w+day \d{1,2}(?:st|nd|rd|th) \w+ \d{4})\b",
    ]
    .iter()
    .map(|pattern| Regex::new(pattern).expect("valid regex"))
    .collect()
});
static DAY_MONTH_YEAR_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(\d{1,2})(?:st|nd|rd|th)? (\w+) (\d{4})").expect("valid regex")
});

/// Parses a price such as `"£399.00"` into `399.0`.
///
/// Everything but digits and `.` is dropped, then the leading numeric prefix
/// is read. Input with no digits yields `0.0`.
pub fn parse_price(raw: &str) -> f64 {
    let stripped = PRICE_STRIP_RE.replace_all(raw, "");
    LEADING_NUMBER_RE
        .find(&stripped)
        .and_then(|m| m.as_str().parse::<f64>().ok())
        .unwrap_or(0.0)
}

/// Multiplier to megabytes for a capacity unit.
///
/// Units match case-sensitively. Unknown units (including `TB` and `gb`)
/// scale by 1, so `"1TB"` becomes `1`.
fn unit_multiplier(unit: &str) -> u64 {
    match unit {
        "MB" => 1,
        "GB" => 1024,
        _ => 1,
    }
}

/// Converts a capacity string such as `"64GB"` or `"64 GB"` to megabytes.
///
/// Returns `None` when no number followed by a unit can be found.
pub fn capacity_to_mb(raw: &str) -> Option<u64> {
    let compact: String = raw.chars().filter(|c| !c.is_whitespace()).collect();
    let caps = CAPACITY_RE.captures(&compact)?;
    let value: u64 = caps[1].parse().ok()?;
    value.checked_mul(unit_multiplier(&caps[2]))
}

/// Removes the `Availability:` label and surrounding whitespace.
pub fn clean_availability_text(raw: &str) -> String {
    raw.replace(AVAILABILITY_LABEL, "").trim().to_string()
}

/// True when the text mentions "In Stock" in any letter case.
pub fn is_available(availability_text: &str) -> bool {
    availability_text.to_lowercase().contains(IN_STOCK)
}

/// Finds a delivery date in free-form shipping text.
pub fn extract_shipping_date(shipping_text: &str) -> Option<NaiveDate> {
    let matched = SHIPPING_DATE_RES
        .iter()
        .find_map(|re| re.captures(shipping_text))?;
    parse_date_span(&matched[1])
}

fn parse_date_span(span: &str) -> Option<NaiveDate> {
    if let Ok(date) = NaiveDate::parse_from_str(span, "%Y-%m-%d") {
        return Some(date);
    }

    // Weekday names are ignored; the calendar date wins. "Monday 5th March
    // 2024" is 2024-03-05, not rolled forward to the next Monday.
    let caps = DAY_MONTH_YEAR_RE.captures(span)?;
    let day: u32 = caps[1].parse().ok()?;
    let month = caps[2].parse::<Month>().ok()?;
    let year: i32 = caps[3].parse().ok()?;
    NaiveDate::from_ymd_opt(year, month.number_from_month(), day)
}

/// Joins an image path from the markup onto the catalog base URL.
///
/// One leading `../` is dropped, and exactly one `/` separates the two halves.
pub fn resolve_image_url(base_url: &str, relative: &str) -> String {
    let relative = relative.strip_prefix("../").unwrap_or(relative);
    format!(
        "{}/{}",
        base_url.trim_end_matches('/'),
        relative.trim_start_matches('/')
    )
}
