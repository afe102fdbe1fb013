use crate::model::Category;

/// Ordered keyword rules mapping a title to a category.
///
/// Precedence is deliberate and load-bearing: Laptop must come before
/// Gaming PC ("ASUS Gaming Laptop" is a laptop), Air Purifier before
/// everything ("Levoit Air Purifier ... Filter" must not fall into a
/// hardware bucket). Keywords are stored lower-case; titles are lowered
/// before matching.
const RULES: &[(Category, &[&str])] = &[
    (Category::AirPurifier, &["air purifier", "purifier"]),
    (
        Category::Laptop,
        &[
            "laptop",
            "notebook",
            "2-in-1",
            "chromebook",
            "gaming laptop",
            "touchscreen laptop",
        ],
    ),
    (
        Category::GamingPc,
        &["gaming pc", "desktop pc", "pre-built", "gaming desktop"],
    ),
    (Category::Cpu, &["processor", "cpu"]),
    (
        Category::Motherboard,
        &["motherboard", "lga", "socket am5", "atx", "matx", "itx"],
    ),
    (
        Category::Memory,
        &["ram", "ddr5", "ddr4", "memory", "gb (2 x"],
    ),
    (
        Category::Ssd,
        &["ssd", "solid state drive", "nvme", "m.2", "pcie gen"],
    ),
    (
        Category::GraphicsCard,
        &["graphics card", "gpu", "rtx", "radeon", "geforce"],
    ),
    (Category::Storage, &["hard drive", "hdd"]),
    (
        Category::PowerSupply,
        &["power supply", "psu", "w power supply"],
    ),
    (Category::Case, &["case", "chassis"]),
    (
        Category::Cooler,
        &["cooler", "heatsink", "liquid cooler", "aio"],
    ),
    (
        Category::Camera,
        &[
            "camera",
            "webcam",
            "surveillance",
            "security camera",
            "ptz",
            "nvr kit",
            "dome camera",
        ],
    ),
    (
        Category::SmartHome,
        &["smart plug", "smart light", "hub", "sensor", "doorbell", "thermostat"],
    ),
    (
        Category::Networking,
        &["router", "switch", "access point", "wifi", "ethernet"],
    ),
];

/// First-match-wins title classifier over an ordered rule table.
pub struct Classifier {
    rules: &'static [(Category, &'static [&'static str])],
}

impl Classifier {
    pub fn with_default_rules() -> Self {
        Classifier { rules: RULES }
    }

    pub fn classify(&self, title: &str) -> Category {
        let lower = title.to_lowercase();
        for (category, keywords) in self.rules {
            if keywords.iter().any(|kw| lower.contains(kw)) {
                return *category;
            }
        }
        Category::Other
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cpu_from_processor_keyword() {
        let c = Classifier::with_default_rules();
        assert_eq!(
            c.classify("AMD Ryzen 5 5600X 6-Core 3.7 GHz Socket AM4 65W Desktop Processor"),
            Category::Cpu
        );
    }

    #[test]
    fn laptop_precedes_gaming_pc() {
        let c = Classifier::with_default_rules();
        // Contains both "gaming desktop"-adjacent and "laptop" keywords.
        assert_eq!(
            c.classify("MSI Katana Gaming Laptop with Desktop PC performance"),
            Category::Laptop
        );
    }

    #[test]
    fn purifier_precedes_hardware_buckets() {
        let c = Classifier::with_default_rules();
        // "Filter" titles often contain "HEPA ... Case"-like tokens.
        assert_eq!(
            c.classify("Levoit Core 300 True HEPA Air Purifier"),
            Category::AirPurifier
        );
    }

    #[test]
    fn deterministic() {
        let c = Classifier::with_default_rules();
        let title = "CORSAIR Vengeance 32GB (2 x 16GB) DDR5 6000";
        assert_eq!(c.classify(title), c.classify(title));
    }

    #[test]
    fn fallback_is_other() {
        let c = Classifier::with_default_rules();
        assert_eq!(c.classify("Decorative Desk Plant"), Category::Other);
    }
}
