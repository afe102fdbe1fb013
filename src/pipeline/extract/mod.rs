pub mod cpu;
pub mod gaming_pc;
pub mod laptop;
pub mod memory;
pub mod motherboard;
pub mod purifier;
pub mod ssd;

use crate::model::{Category, EmptySpecs, RawRecord, SpecAttributes};

/// Dispatch to the category's extractor. Categories without a dedicated
/// extractor yield an empty attribute set; every extractor is total and
/// defaults unmatched fields to `None`.
pub fn extract_specs(record: &RawRecord, category: Category) -> SpecAttributes {
    match category {
        Category::Cpu => SpecAttributes::Cpu(cpu::extract(&record.title)),
        Category::Motherboard => SpecAttributes::Motherboard(motherboard::extract(&record.title)),
        Category::Memory => SpecAttributes::Memory(memory::extract(&record.title)),
        Category::Ssd => SpecAttributes::Ssd(ssd::extract(&record.title)),
        Category::Laptop => SpecAttributes::Laptop(laptop::extract(&record.title)),
        Category::GamingPc => SpecAttributes::GamingPc(gaming_pc::extract(&record.title)),
        Category::AirPurifier => SpecAttributes::AirPurifier(purifier::extract(record)),
        _ => SpecAttributes::Empty(EmptySpecs::default()),
    }
}

/// First matching brand from an ordered candidate list, case-insensitive
/// substring match. First match wins, no scoring.
pub(crate) fn match_brand(title: &str, brands: &[&str]) -> Option<String> {
    let lower = title.to_lowercase();
    brands
        .iter()
        .find(|b| lower.contains(&b.to_lowercase()))
        .map(|b| (*b).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn brand_match_is_case_insensitive() {
        assert_eq!(
            match_brand("asrock B650M Pro", &["ASUS", "GIGABYTE", "MSI", "ASRock"]),
            Some("ASRock".to_string())
        );
    }

    #[test]
    fn no_extractor_yields_empty_specs() {
        let record = raw("Netgear Nighthawk WiFi 6 Router", "$99.99");
        let specs = extract_specs(&record, Category::Networking);
        assert_eq!(
            serde_json::to_value(&specs).unwrap(),
            serde_json::json!({})
        );
        assert_eq!(specs.brand(), None);
    }

    fn raw(title: &str, price: &str) -> RawRecord {
        serde_json::from_value(serde_json::json!({
            "title": title,
            "price": price,
        }))
        .unwrap()
    }
}
