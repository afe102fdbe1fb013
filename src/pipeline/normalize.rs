use chrono::Utc;

use crate::model::{NormalizedRecord, RawRecord};
use crate::settings::Settings;

use super::classify::Classifier;
use super::extract;
use super::link::LinkBuilder;
use super::price::extract_price;

/// Turns a raw scraped listing into a canonical record, or discards it.
///
/// Pure apart from reading the clock for `processed_at`: no I/O, so the
/// batch pass can shard freely across threads.
pub struct Normalizer {
    classifier: Classifier,
    links: LinkBuilder,
}

impl Normalizer {
    pub fn new(settings: &Settings) -> Self {
        Normalizer {
            classifier: Classifier::with_default_rules(),
            links: LinkBuilder::new(settings.referral_tag.clone()),
        }
    }

    /// `None` means discarded: a record with no recoverable positive price
    /// carries no commercial value and must not reach the sink.
    pub fn normalize(&self, raw: &RawRecord) -> Option<NormalizedRecord> {
        let price = extract_price(&raw.price)?;
        let category = self.classifier.classify(&raw.title);
        let specs = extract::extract_specs(raw, category);
        let brand = specs.brand().map(str::to_string);
        let amazon_link = self.links.build(&raw.title, category);

        Some(NormalizedRecord {
            title: raw.title.clone(),
            category,
            brand,
            price,
            image_url: raw.img_url.clone(),
            product_link: raw.product_link.clone(),
            item_features: raw.item_features.clone(),
            specs,
            amazon_link,
            processed_at: Utc::now(),
        })
    }
}
