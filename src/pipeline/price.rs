use std::sync::LazyLock;

use regex::Regex;

static NUMBER_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[\d,]+\.?\d*").unwrap());

/// Pull a positive price out of free-form price text.
///
/// Storefront price strings arrive as "$159.99", "Sale price\n$89.99",
/// "Regular price $1,234.50" and the like. The first numeric candidate
/// wins; anything not strictly positive means the record carries no
/// usable price and gets discarded upstream.
pub fn extract_price(raw: &str) -> Option<f64> {
    let raw = raw.trim();
    if raw.is_empty() || raw == "0" || raw == "N/A" {
        return None;
    }

    let cleaned = raw
        .replace(['\n', '\r'], " ")
        .replace("Sale price", "")
        .replace("Regular price", "");

    let candidate = NUMBER_RE.find(&cleaned)?;
    let price: f64 = candidate.as_str().replace(',', "").parse().ok()?;
    (price > 0.0).then_some(price)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_dollar_amount() {
        assert_eq!(extract_price("$159.99"), Some(159.99));
    }

    #[test]
    fn thousands_separator() {
        assert_eq!(extract_price("$1,234.50"), Some(1234.50));
    }

    #[test]
    fn sale_prefix_and_newlines() {
        assert_eq!(extract_price("Sale price\n$89.99\nRegular price $119.99"), Some(89.99));
    }

    #[test]
    fn no_digits_is_none() {
        assert_eq!(extract_price("Call for pricing"), None);
        assert_eq!(extract_price(""), None);
        assert_eq!(extract_price("N/A"), None);
    }

    #[test]
    fn zero_is_none() {
        assert_eq!(extract_price("0"), None);
        assert_eq!(extract_price("$0.00"), None);
    }
}
