use std::sync::LazyLock;

use regex::Regex;

use crate::model::GamingPcSpecs;

use super::match_brand;

const BRANDS: &[&str] = &["ABS", "iBUYPOWER", "CYBERPOWERPC", "Skytech", "CLX", "Xidax"];

static CPU_RES: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"(?i)(Intel Core [iU3579][-\s]*\d+[A-Za-z]{0,4})",
        r"(?i)(Intel Core Ultra [3579]\s*\d+[A-Za-z]{0,4})",
        r"(?i)(AMD Ryzen [3579]\s*\d{4}[A-Za-z]{0,4})",
    ]
    .iter()
    .map(|p| Regex::new(p).unwrap())
    .collect()
});

static GPU_RES: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"(?i)(RTX\s*\d+[A-Za-z]{0,4})",
        r"(?i)(GeForce\s*RTX\s*\d+[A-Za-z]{0,4})",
        r"(?i)(GeForce\s*GTX\s*\d+[A-Za-z]{0,4})",
        r"(?i)(Radeon\s*RX\s*\d+[A-Za-z]{0,4})",
    ]
    .iter()
    .map(|p| Regex::new(p).unwrap())
    .collect()
});

static RAM_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)(\d+)\s*GB\s*DDR[45]").unwrap());

static STORAGE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)(\d+)\s*(GB|TB)\s*(?:SSD|NVMe)").unwrap());

pub fn extract(title: &str) -> GamingPcSpecs {
    let mut specs = GamingPcSpecs::default();

    specs.brand = match_brand(title, BRANDS);

    specs.cpu = CPU_RES
        .iter()
        .find_map(|re| re.captures(title))
        .map(|caps| caps[1].trim().to_string());

    specs.gpu = GPU_RES
        .iter()
        .find_map(|re| re.captures(title))
        .map(|caps| caps[1].trim().to_string());

    if let Some(caps) = RAM_RE.captures(title) {
        specs.ram = Some(format!("{} GB", &caps[1]));
    }

    if let Some(caps) = STORAGE_RE.captures(title) {
        specs.storage = Some(format!("{} {} SSD", &caps[1], &caps[2]));
    }

    specs
}
