use std::sync::LazyLock;

use regex::Regex;
use url::form_urlencoded;

use crate::model::Category;

/// Brands worth leading a marketplace search with, across all sources.
const SEARCH_BRANDS: &[&str] = &[
    "AMD", "Intel", "ASUS", "GIGABYTE", "MSI", "ASRock", "CORSAIR", "SAMSUNG",
    "eufy", "Arlo", "Ubiquiti", "Reolink", "Kasa", "Philips", "Eve",
];

// Plural first so the singular replacement never leaves a dangling "s".
const PURIFIER_STOP_WORDS: &[&str] = &["air purifiers", "air purifier", "hepa", "model", "series"];

const MAX_SEARCH_TERMS: usize = 4;

static CPU_MODEL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d{4,5}[A-Za-z]{0,4}").unwrap());

/// Builds best-effort Amazon search links from extracted title keywords.
///
/// The result is a convenience link, not a guaranteed product match; when
/// nothing distinctive matches it degrades to a generic search over the
/// title's leading words.
pub struct LinkBuilder {
    referral_tag: String,
}

impl LinkBuilder {
    pub fn new(referral_tag: impl Into<String>) -> Self {
        LinkBuilder {
            referral_tag: referral_tag.into(),
        }
    }

    pub fn build(&self, title: &str, category: Category) -> String {
        let lower = title.to_lowercase();
        let mut terms: Vec<String> = Vec::new();

        if let Some(brand) = SEARCH_BRANDS
            .iter()
            .find(|b| lower.contains(&b.to_lowercase()))
        {
            terms.push((*brand).to_string());
        }

        match category {
            // The numeric model designator is the strongest CPU search key.
            Category::Cpu => {
                if let Some(m) = CPU_MODEL_RE.find(title) {
                    terms.push(m.as_str().to_string());
                }
            }
            // Purifier names are padded with generic words; strip them first.
            Category::AirPurifier => {
                let mut stripped = lower.clone();
                for word in PURIFIER_STOP_WORDS {
                    stripped = stripped.replace(word, "");
                }
                terms.extend(stripped.split_whitespace().take(5).map(str::to_string));
            }
            _ => terms.extend(title.split_whitespace().take(5).map(str::to_string)),
        }

        if terms.is_empty() {
            terms.extend(title.split_whitespace().take(3).map(str::to_string));
        }
        terms.truncate(MAX_SEARCH_TERMS);

        let query = terms.join(" ");
        let encoded: String = form_urlencoded::byte_serialize(query.as_bytes()).collect();
        format!(
            "https://www.amazon.com/s?k={}&tag={}",
            encoded, self.referral_tag
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn builder() -> LinkBuilder {
        LinkBuilder::new("YOUR_TAG-20")
    }

    #[test]
    fn cpu_link_uses_brand_and_model() {
        let link = builder().build(
            "AMD Ryzen 5 5600X 6-Core 3.7 GHz Socket AM4 65W Desktop Processor",
            Category::Cpu,
        );
        assert_eq!(link, "https://www.amazon.com/s?k=AMD+5600X&tag=YOUR_TAG-20");
    }

    #[test]
    fn generic_category_uses_leading_words() {
        let link = builder().build("CORSAIR Vengeance 32GB DDR5 6000MHz", Category::Memory);
        assert!(link.starts_with("https://www.amazon.com/s?k=CORSAIR+CORSAIR+Vengeance+32GB"));
        assert!(link.ends_with("&tag=YOUR_TAG-20"));
    }

    #[test]
    fn purifier_stop_words_removed() {
        let link = builder().build("Coway Airmega 200M True HEPA Air Purifier", Category::AirPurifier);
        assert!(!link.to_lowercase().contains("hepa"));
        assert!(link.contains("coway"));
    }

    #[test]
    fn query_is_url_encoded() {
        let link = builder().build("Some Fancy Widget & Co", Category::Other);
        assert!(link.contains("%26"));
        assert!(!link.contains(' '));
    }
}
