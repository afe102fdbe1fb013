use std::sync::LazyLock;

use regex::Regex;

use crate::model::SsdSpecs;

use super::match_brand;

const BRANDS: &[&str] = &[
    "SAMSUNG",
    "Western Digital",
    "WD",
    "Crucial",
    "Patriot",
    "Kingston",
    "Sabrent",
    "Solidigm",
];

static TB_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(\d+\.?\d*)\s*TB").unwrap());
static GB_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(\d+)\s*GB").unwrap());
static READ_SPEED_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d+,?\d*)\s*MB/s").unwrap());

pub fn extract(title: &str) -> SsdSpecs {
    let mut specs = SsdSpecs::default();

    specs.brand = match_brand(title, BRANDS);
    specs.capacity_gb = capacity_gb(title);

    specs.interface = if title.contains("PCIe Gen4") || title.contains("PCIe 4.0") {
        Some("PCIe Gen4".to_string())
    } else if title.contains("PCIe Gen3") || title.contains("PCIe 3.0") {
        Some("PCIe Gen3".to_string())
    } else {
        None
    };

    if let Some(caps) = READ_SPEED_RE.captures(title) {
        specs.read_speed = Some(caps[1].to_string());
    }

    specs.form_factor = if title.contains("M.2") {
        Some("M.2".to_string())
    } else if title.contains("2.5\"") {
        Some("2.5 inch".to_string())
    } else {
        None
    };

    specs
}

/// Capacity in gigabytes. The fractional-TB pattern must run before the
/// plain-GB pattern: "7.68TB" read GB-first would parse as 68GB. A GB match
/// followed by a word character is skipped so a bundled-RAM mention like
/// "8GB DDR4" never becomes the drive's capacity.
fn capacity_gb(title: &str) -> Option<u64> {
    if let Some(caps) = TB_RE.captures(title) {
        let tb: f64 = caps[1].parse().ok()?;
        return Some((tb * 1024.0) as u64);
    }
    for caps in GB_RE.captures_iter(title) {
        let end = caps.get(0).map(|m| m.end())?;
        let followed_by_word = title[end..]
            .trim_start()
            .chars()
            .next()
            .is_some_and(|c| c.is_alphanumeric() || c == '_');
        if !followed_by_word {
            return caps[1].parse().ok();
        }
    }
    None
}
