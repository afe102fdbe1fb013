use std::sync::LazyLock;

use regex::Regex;

use crate::model::MemorySpecs;

use super::match_brand;

const BRANDS: &[&str] = &["CORSAIR", "G.SKILL", "Kingston", "Crucial", "Patriot"];

static CAPACITY_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(\d+)\s*GB").unwrap());

static SPEED_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d{4})\s*(?:MHz|PC5)").unwrap());

pub fn extract(title: &str) -> MemorySpecs {
    let mut specs = MemorySpecs::default();

    specs.brand = match_brand(title, BRANDS);

    if let Some(caps) = CAPACITY_RE.captures(title) {
        specs.capacity_gb = caps[1].parse().ok();
    }

    specs.kind = if title.contains("DDR5") {
        Some("DDR5".to_string())
    } else if title.contains("DDR4") {
        Some("DDR4".to_string())
    } else {
        None
    };

    if let Some(caps) = SPEED_RE.captures(title) {
        specs.speed_mhz = caps[1].parse().ok();
    }

    specs
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ddr5_kit() {
        let specs = extract("CORSAIR Vengeance 32GB (2 x 16GB) DDR5 6000MHz Desktop Memory");
        assert_eq!(specs.brand.as_deref(), Some("CORSAIR"));
        assert_eq!(specs.capacity_gb, Some(32));
        assert_eq!(specs.kind.as_deref(), Some("DDR5"));
        assert_eq!(specs.speed_mhz, Some(6000));
    }

    #[test]
    fn kind_serializes_as_type() {
        let specs = extract("Kingston FURY 16GB DDR4 3200MHz");
        let value = serde_json::to_value(&specs).unwrap();
        assert_eq!(value["type"], "DDR4");
        assert_eq!(value["capacity_gb"], 16);
    }
}
