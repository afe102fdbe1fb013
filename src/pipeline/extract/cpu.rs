use std::sync::LazyLock;

use regex::Regex;

use crate::model::CpuSpecs;

static BRAND_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)\b(AMD|Intel)\b").unwrap());

static SERIES_RES: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"(?i)\b(Ryzen\s*[3579]|Ryzen\s+Threadripper|EPYC)\b",
        r"(?i)\b(Core\s*[ijU][3579]|Core\s+Ultra)\b",
        r"(?i)\b(Pentium|Celeron)\b",
    ]
    .iter()
    .map(|p| Regex::new(p).unwrap())
    .collect()
});

static MODEL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b(\d{4,5}[A-Za-z]{0,4}[LXK]?)\b").unwrap());

static CORES_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)(\d+)[\s-]*Co(?:re|res)").unwrap());

static SPEED_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)(\d+\.?\d*)\s*GHz").unwrap());

static SOCKET_RES: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"(?i)Socket\s+([A-Z0-9]+)",
        r"(?i)LGA\s*(\d{4,5})",
        r"\b(AM[45])\b",
    ]
    .iter()
    .map(|p| Regex::new(p).unwrap())
    .collect()
});

// Trailing context keeps "W" from matching inside words like "Windows".
static POWER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)(\d{2,3})\s*W(?:\s|,|$|\.|\))").unwrap());

/// TDP values outside this range are false positives from unrelated numbers.
const POWER_RANGE_W: (u32, u32) = (35, 350);

pub fn extract(title: &str) -> CpuSpecs {
    let mut specs = CpuSpecs::default();

    if let Some(caps) = BRAND_RE.captures(title) {
        specs.brand = Some(caps[1].to_string());
    }

    specs.series = SERIES_RES
        .iter()
        .find_map(|re| re.captures(title))
        .map(|caps| caps[1].trim().to_string());

    if let Some(caps) = MODEL_RE.captures(title) {
        specs.model = Some(caps[1].to_string());
    }

    if let Some(caps) = CORES_RE.captures(title) {
        specs.cores = caps[1].parse().ok();
    }

    if let Some(caps) = SPEED_RE.captures(title) {
        specs.speed = Some(format!("{} GHz", &caps[1]));
    }

    for re in SOCKET_RES.iter() {
        if let Some(caps) = re.captures(title) {
            let raw = caps[1].trim().to_string();
            specs.socket = if raw.starts_with("LGA") || raw.starts_with("AM") {
                Some(raw)
            } else {
                Some(format!("Socket {raw}"))
            };
            break;
        }
    }

    if let Some(caps) = POWER_RE.captures(title) {
        if let Ok(watts) = caps[1].parse::<u32>() {
            if (POWER_RANGE_W.0..=POWER_RANGE_W.1).contains(&watts) {
                specs.power = Some(format!("{watts}W"));
            }
        }
    }

    specs
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ryzen_5600x_full_extraction() {
        let specs =
            extract("AMD Ryzen 5 5600X 6-Core 3.7 GHz Socket AM4 65W Desktop Processor");
        assert_eq!(specs.brand.as_deref(), Some("AMD"));
        assert_eq!(specs.series.as_deref(), Some("Ryzen 5"));
        assert_eq!(specs.model.as_deref(), Some("5600X"));
        assert_eq!(specs.cores, Some(6));
        assert_eq!(specs.speed.as_deref(), Some("3.7 GHz"));
        assert_eq!(specs.socket.as_deref(), Some("AM4"));
        assert_eq!(specs.power.as_deref(), Some("65W"));
    }

    #[test]
    fn intel_lga_socket_gets_prefix() {
        let specs = extract("Intel Core i7-13700K 16-Core 3.4 GHz LGA 1700 125W Processor");
        assert_eq!(specs.brand.as_deref(), Some("Intel"));
        assert_eq!(specs.socket.as_deref(), Some("Socket 1700"));
        assert_eq!(specs.cores, Some(16));
        assert_eq!(specs.power.as_deref(), Some("125W"));
    }

    #[test]
    fn wattage_range_guard() {
        // 500W is a PSU number leaking into a CPU title, not a TDP.
        let specs = extract("Bundle CPU Processor with 500W PSU");
        assert_eq!(specs.power, None);
        let specs = extract("AMD Processor 65W TDP");
        assert_eq!(specs.power.as_deref(), Some("65W"));
    }

    #[test]
    fn unmatched_fields_stay_none() {
        let specs = extract("Mystery Processor");
        assert_eq!(specs, CpuSpecs::default());
    }
}
