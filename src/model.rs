use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A raw listing as emitted by the scraping layer.
///
/// Field names follow the scraper's JSON output; the air-purifier source
/// uses `product_name`/`url`/`image_url` and carries per-field spec text,
/// the hardware source uses `title`/`product_link`/`img_url` and packs
/// everything into the title. "N/A" in a spec field means the scraper
/// found nothing.
#[derive(Debug, Clone, Deserialize)]
pub struct RawRecord {
    #[serde(alias = "product_name")]
    pub title: String,
    #[serde(default)]
    pub price: String,
    #[serde(default, alias = "image_url")]
    pub img_url: String,
    #[serde(default, alias = "url")]
    pub product_link: String,
    #[serde(default)]
    pub item_features: Vec<String>,

    // Air-purifier spec fields, absent on hardware listings.
    #[serde(default)]
    pub coverage_area: Option<String>,
    #[serde(default)]
    pub cadr_smoke: Option<String>,
    #[serde(default)]
    pub cadr_pollen: Option<String>,
    #[serde(default)]
    pub cadr_dust: Option<String>,
    #[serde(default)]
    pub noise_level: Option<String>,
    #[serde(default)]
    pub filter_type: Option<String>,
    #[serde(default)]
    pub fan_speeds: Option<String>,
}

/// Product category, chosen by first-match precedence over the title.
///
/// The variant order here mirrors the classifier's rule order: more
/// specific categories come first so overlapping keywords ("Gaming",
/// "SSD" inside a laptop title) resolve to the right bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "Air Purifier")]
    AirPurifier,
    Laptop,
    #[serde(rename = "Gaming PC")]
    GamingPc,
    #[serde(rename = "CPU")]
    Cpu,
    Motherboard,
    Memory,
    #[serde(rename = "SSD")]
    Ssd,
    #[serde(rename = "Graphics Card")]
    GraphicsCard,
    Storage,
    #[serde(rename = "Power Supply")]
    PowerSupply,
    Case,
    Cooler,
    Camera,
    #[serde(rename = "Smart Home")]
    SmartHome,
    Networking,
    Other,
}

impl Category {
    pub fn label(&self) -> &'static str {
        match self {
            Category::AirPurifier => "Air Purifier",
            Category::Laptop => "Laptop",
            Category::GamingPc => "Gaming PC",
            Category::Cpu => "CPU",
            Category::Motherboard => "Motherboard",
            Category::Memory => "Memory",
            Category::Ssd => "SSD",
            Category::GraphicsCard => "Graphics Card",
            Category::Storage => "Storage",
            Category::PowerSupply => "Power Supply",
            Category::Case => "Case",
            Category::Cooler => "Cooler",
            Category::Camera => "Camera",
            Category::SmartHome => "Smart Home",
            Category::Networking => "Networking",
            Category::Other => "Other",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CpuSpecs {
    pub brand: Option<String>,
    pub series: Option<String>,
    pub model: Option<String>,
    pub cores: Option<u32>,
    pub speed: Option<String>,
    pub socket: Option<String>,
    pub power: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MotherboardSpecs {
    pub brand: Option<String>,
    pub chipset: Option<String>,
    pub socket: Option<String>,
    pub form_factor: Option<String>,
    pub memory_type: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MemorySpecs {
    pub brand: Option<String>,
    pub capacity_gb: Option<u32>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub speed_mhz: Option<u32>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SsdSpecs {
    pub brand: Option<String>,
    pub capacity_gb: Option<u64>,
    pub interface: Option<String>,
    pub read_speed: Option<String>,
    pub form_factor: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct LaptopSpecs {
    pub brand: Option<String>,
    pub cpu: Option<String>,
    pub ram: Option<String>,
    pub storage: Option<String>,
    pub screen_size: Option<String>,
    pub gpu: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct GamingPcSpecs {
    pub brand: Option<String>,
    pub cpu: Option<String>,
    pub gpu: Option<String>,
    pub ram: Option<String>,
    pub storage: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PurifierSpecs {
    pub coverage_area: Option<u32>,
    pub cadr_smoke: Option<u32>,
    pub cadr_pollen: Option<u32>,
    pub cadr_dust: Option<u32>,
    pub min_noise: Option<f64>,
    pub max_noise: Option<f64>,
    pub filter_type: Option<String>,
    pub fan_speeds: Option<u32>,
}

/// Marker for categories without a dedicated extractor; serializes as `{}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct EmptySpecs {}

/// Category-keyed spec attributes. Untagged: each variant serializes as a
/// plain object whose fields are always present, `null` when unmatched.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum SpecAttributes {
    Cpu(CpuSpecs),
    Motherboard(MotherboardSpecs),
    Memory(MemorySpecs),
    Ssd(SsdSpecs),
    Laptop(LaptopSpecs),
    GamingPc(GamingPcSpecs),
    AirPurifier(PurifierSpecs),
    Empty(EmptySpecs),
}

impl SpecAttributes {
    /// Brand pulled up to the top-level record, where the extractor found one.
    pub fn brand(&self) -> Option<&str> {
        match self {
            SpecAttributes::Cpu(s) => s.brand.as_deref(),
            SpecAttributes::Motherboard(s) => s.brand.as_deref(),
            SpecAttributes::Memory(s) => s.brand.as_deref(),
            SpecAttributes::Ssd(s) => s.brand.as_deref(),
            SpecAttributes::Laptop(s) => s.brand.as_deref(),
            SpecAttributes::GamingPc(s) => s.brand.as_deref(),
            SpecAttributes::AirPurifier(_) | SpecAttributes::Empty(_) => None,
        }
    }
}

/// Canonical output record. Constructed once per accepted raw record and
/// never mutated; `price` is always strictly positive.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NormalizedRecord {
    pub title: String,
    pub category: Category,
    pub brand: Option<String>,
    pub price: f64,
    pub image_url: String,
    pub product_link: String,
    pub item_features: Vec<String>,
    pub specs: SpecAttributes,
    pub amazon_link: String,
    pub processed_at: DateTime<Utc>,
}
