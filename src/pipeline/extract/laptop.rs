use std::sync::LazyLock;

use regex::Regex;

use crate::model::LaptopSpecs;

use super::match_brand;

const BRANDS: &[&str] = &[
    "ASUS", "MSI", "Acer", "Lenovo", "Dell", "HP", "Razer", "GIGABYTE", "XIDAX",
];

static CPU_RES: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"(?i)(Intel Core [iU3579][-\s]*\d+[A-Za-z]{0,4})",
        r"(?i)(Intel Core Ultra [3579]\s*\d+[A-Za-z]{0,4})",
        r"(?i)(AMD Ryzen [3579]\s*\d{4}[A-Za-z]{0,4})",
        r"(?i)(Intel Core \d+ Proces)",
    ]
    .iter()
    .map(|p| Regex::new(p).unwrap())
    .collect()
});

static RAM_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)(\d+)\s*GB\s*DDR[45]").unwrap());

static STORAGE_GB_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)(\d+)\s*GB\s*(SSD|NVMe|M\.2)").unwrap());
static STORAGE_TB_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)(\d+)\s*TB\s*SSD").unwrap());

static SCREEN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(\d+\.?\d*)["\s]"#).unwrap());

/// Plausible laptop panel diagonal, inches.
const SCREEN_RANGE_IN: (f64, f64) = (10.0, 20.0);

static GPU_RES: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"(?i)(RTX\s*\d+[A-Za-z]{0,4}\s*Laptop)",
        r"(?i)(GeForce\s*RTX\s*\d+[A-Za-z]{0,4}\s*Laptop)",
        r"(?i)(Radeon\s*RX\s*\d+[A-Za-z]{0,4})",
    ]
    .iter()
    .map(|p| Regex::new(p).unwrap())
    .collect()
});

pub fn extract(title: &str) -> LaptopSpecs {
    let mut specs = LaptopSpecs::default();

    specs.brand = match_brand(title, BRANDS);

    specs.cpu = CPU_RES
        .iter()
        .find_map(|re| re.captures(title))
        .map(|caps| caps[1].trim().to_string());

    if let Some(caps) = RAM_RE.captures(title) {
        specs.ram = Some(format!("{} GB", &caps[1]));
    }

    specs.storage = if let Some(caps) = STORAGE_GB_RE.captures(title) {
        Some(format!("{} GB {}", &caps[1], &caps[2]))
    } else {
        STORAGE_TB_RE
            .captures(title)
            .map(|caps| format!("{} TB SSD", &caps[1]))
    };

    // Only the first number-before-quote candidate is considered; an
    // out-of-range value means the title leads with something else.
    if let Some(caps) = SCREEN_RE.captures(title) {
        if let Ok(inches) = caps[1].parse::<f64>() {
            if (SCREEN_RANGE_IN.0..=SCREEN_RANGE_IN.1).contains(&inches) {
                specs.screen_size = Some(format!("{} inch", &caps[1]));
            }
        }
    }

    specs.gpu = GPU_RES
        .iter()
        .find_map(|re| re.captures(title))
        .map(|caps| caps[1].trim().to_string());

    specs
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gaming_laptop() {
        let specs = extract(
            "MSI Katana 15.6\" Gaming Laptop Intel Core i7-13620H 16GB DDR5 1TB SSD RTX 4060 Laptop GPU",
        );
        assert_eq!(specs.brand.as_deref(), Some("MSI"));
        assert_eq!(specs.cpu.as_deref(), Some("Intel Core i7"));
        assert_eq!(specs.ram.as_deref(), Some("16 GB"));
        assert_eq!(specs.storage.as_deref(), Some("1 TB SSD"));
        assert_eq!(specs.screen_size.as_deref(), Some("15.6 inch"));
        assert_eq!(specs.gpu.as_deref(), Some("RTX 4060 Laptop"));
    }

    #[test]
    fn gb_storage_with_unit() {
        let specs = extract("Acer Aspire 14\" Laptop Ryzen 3 512GB NVMe");
        assert_eq!(specs.storage.as_deref(), Some("512 GB NVMe"));
        assert_eq!(specs.screen_size.as_deref(), Some("14 inch"));
    }

    #[test]
    fn out_of_range_screen_is_none() {
        let specs = extract("Lenovo 27\" Monitor Bundle Laptop Sleeve");
        assert_eq!(specs.screen_size, None);
    }
}
