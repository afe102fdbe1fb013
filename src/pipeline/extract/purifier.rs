use std::sync::LazyLock;

use regex::Regex;

use crate::model::{PurifierSpecs, RawRecord};

static UNIT_WORDS_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"sq\.?\s*ft\.?|square\s+feet|up\s+to|approximately|covers?\s+up\s+to|whole\s+house|manufacturer-suggested")
        .unwrap()
});
static NOISE_WORDS_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"db|decibels?|dba|decibel\s+level|noise\s+level|maximum|minimum").unwrap()
});

static INT_GROUP_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[\d,]+").unwrap());
static DIGITS_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\d+").unwrap());
static DECIMAL_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\d+\.?\d*").unwrap());
static WHOLE_NUMBER_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\b(\d+)\b").unwrap());

/// Coverage areas outside this range are unrelated numbers in the text.
const COVERAGE_RANGE_SQFT: (u32, u32) = (50, 3000);

const WORD_NUMBERS: &[(&str, u32)] = &[
    ("one", 1),
    ("two", 2),
    ("three", 3),
    ("four", 4),
    ("five", 5),
    ("six", 6),
    ("seven", 7),
    ("eight", 8),
    ("nine", 9),
    ("ten", 10),
];

/// Air-purifier specs come from the detail page's labelled fields rather
/// than the product name; each field is free text the scraper copied
/// verbatim, with "N/A" standing in for absent rows.
pub fn extract(record: &RawRecord) -> PurifierSpecs {
    let (min_noise, max_noise) = field(&record.noise_level)
        .map(noise_level)
        .unwrap_or((None, None));

    PurifierSpecs {
        coverage_area: field(&record.coverage_area).and_then(coverage_area),
        cadr_smoke: field(&record.cadr_smoke).and_then(largest_number),
        cadr_pollen: field(&record.cadr_pollen).and_then(largest_number),
        cadr_dust: field(&record.cadr_dust).and_then(largest_number),
        min_noise,
        max_noise,
        filter_type: field(&record.filter_type).map(str::to_string),
        fan_speeds: field(&record.fan_speeds).and_then(fan_speeds),
    }
}

fn field(value: &Option<String>) -> Option<&str> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty() && *v != "N/A")
}

/// Largest in-range number after unit words are removed; the biggest
/// figure in "covers 360 sq. ft., up to 1,200 sq. ft. total" is the
/// total coverage.
fn coverage_area(text: &str) -> Option<u32> {
    let lower = text.to_lowercase();
    let stripped = UNIT_WORDS_RE.replace_all(&lower, "");
    INT_GROUP_RE
        .find_iter(&stripped)
        .filter_map(|m| m.as_str().replace(',', "").parse::<u32>().ok())
        .filter(|n| (COVERAGE_RANGE_SQFT.0..=COVERAGE_RANGE_SQFT.1).contains(n))
        .max()
}

/// CADR fields hold a single rating, sometimes beside a smaller per-speed
/// figure; take the largest digit run.
fn largest_number(text: &str) -> Option<u32> {
    DIGITS_RE
        .find_iter(text)
        .filter_map(|m| m.as_str().parse::<u32>().ok())
        .max()
}

/// Min and max over every decimal in the field; a single figure is both.
fn noise_level(text: &str) -> (Option<f64>, Option<f64>) {
    let lower = text.to_lowercase();
    let stripped = NOISE_WORDS_RE.replace_all(&lower, "");
    let numbers: Vec<f64> = DECIMAL_RE
        .find_iter(&stripped)
        .filter_map(|m| m.as_str().parse().ok())
        .collect();
    if numbers.is_empty() {
        return (None, None);
    }
    let min = numbers.iter().cloned().fold(f64::INFINITY, f64::min);
    let max = numbers.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
    (Some(min), Some(max))
}

/// Digits win over words: "3 speeds" before "Three-speed".
fn fan_speeds(text: &str) -> Option<u32> {
    let lower = text.to_lowercase();
    if let Some(caps) = WHOLE_NUMBER_RE.captures(&lower) {
        return caps[1].parse().ok();
    }
    WORD_NUMBERS
        .iter()
        .find(|(word, _)| lower.contains(word))
        .map(|(_, n)| *n)
}
