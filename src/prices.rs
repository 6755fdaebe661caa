//! Price signal extraction from free text
//!
//! Provider answers arrive as arbitrary prose. A fixed table of currency
//! patterns mines plausible rupee amounts out of it; anything outside the
//! [300, 500000] band is discarded as noise (phone numbers, PIN codes,
//! unrealistic figures). Extraction is pure and cannot fail; no match
//! just means an empty result.

use std::sync::LazyLock;

use regex::Regex;

/// Lower bound of a plausible travel price in rupees
pub const MIN_PLAUSIBLE_PRICE: u32 = 300;
/// Upper bound of a plausible travel price in rupees
pub const MAX_PLAUSIBLE_PRICE: u32 = 500_000;

/// Currency mention patterns: symbol-prefixed, code-prefixed, suffix-word,
/// and keyword-prefixed amounts with optional thousands separators and
/// two-decimal cents.
static PRICE_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"(?i)₹\s*(\d+(?:,\d+)*(?:\.\d{2})?)",
        r"(?i)rs\.?\s*(\d+(?:,\d+)*(?:\.\d{2})?)",
        r"(?i)inr\s*(\d+(?:,\d+)*(?:\.\d{2})?)",
        r"(?i)(\d+(?:,\d+)*(?:\.\d{2})?)\s*rupees?",
        r"(?i)price[:\s]*₹?\s*(\d+(?:,\d+)*)",
        r"(?i)cost[:\s]*₹?\s*(\d+(?:,\d+)*)",
        r"(?i)from\s*₹?\s*(\d+(?:,\d+)*)",
        r"(?i)starting\s*₹?\s*(\d+(?:,\d+)*)",
    ]
    .iter()
    .map(|p| Regex::new(p).expect("price pattern must compile"))
    .collect()
});

/// Extract plausible prices from arbitrary text, ascending and deduplicated
#[must_use]
pub fn extract_prices(text: &str) -> Vec<u32> {
    if text.is_empty() {
        return Vec::new();
    }

    let mut prices = Vec::new();
    for pattern in PRICE_PATTERNS.iter() {
        for captures in pattern.captures_iter(text) {
            let Some(raw) = captures.get(1) else {
                continue;
            };
            let cleaned = raw.as_str().replace(',', "");
            let cleaned = cleaned.strip_suffix(".00").unwrap_or(&cleaned);
            let Ok(value) = cleaned.parse::<f64>() else {
                continue;
            };
            let value = value as u32;
            if (MIN_PLAUSIBLE_PRICE..=MAX_PLAUSIBLE_PRICE).contains(&value) {
                prices.push(value);
            }
        }
    }

    prices.sort_unstable();
    prices.dedup();
    prices
}

/// Human-readable range for a price set, with a neutral fallback phrase
#[must_use]
pub fn price_range_label(prices: &[u32]) -> String {
    match (prices.first(), prices.last()) {
        (Some(min), Some(max)) => format!(
            "{} - {}",
            format_rupees(i64::from(*min)),
            format_rupees(i64::from(*max))
        ),
        _ => "Current pricing available".to_string(),
    }
}

/// Format an amount as "Rs. 1,234" with digit grouping
#[must_use]
pub fn format_rupees(amount: i64) -> String {
    let digits = amount.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if amount < 0 {
        format!("Rs. -{grouped}")
    } else {
        format!("Rs. {grouped}")
    }
}
