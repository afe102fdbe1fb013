use std::sync::LazyLock;

use regex::Regex;

use crate::model::MotherboardSpecs;

use super::match_brand;

const BRANDS: &[&str] = &["ASUS", "GIGABYTE", "MSI", "ASRock"];

static CHIPSET_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([ABCXYZ]\d{3,4}|[BZ]\d{3,})").unwrap());

static SOCKET_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)Socket\s+[A-Z0-9]+|LGA\s*\d{4,5}|AM[45]").unwrap());

pub fn extract(title: &str) -> MotherboardSpecs {
    let mut specs = MotherboardSpecs::default();

    specs.brand = match_brand(title, BRANDS);

    if let Some(caps) = CHIPSET_RE.captures(title) {
        specs.chipset = Some(caps[1].to_string());
    }

    if let Some(m) = SOCKET_RE.find(title) {
        specs.socket = Some(m.as_str().to_string());
    }

    // Narrower tokens first: "mATX" contains "ATX".
    specs.form_factor = if title.contains("mATX") || title.contains("Micro ATX") {
        Some("mATX".to_string())
    } else if title.contains("ATX") {
        Some("ATX".to_string())
    } else if title.contains("ITX") {
        Some("ITX".to_string())
    } else {
        None
    };

    specs.memory_type = if title.contains("DDR5") {
        Some("DDR5".to_string())
    } else if title.contains("DDR4") {
        Some("DDR4".to_string())
    } else {
        None
    };

    specs
}
