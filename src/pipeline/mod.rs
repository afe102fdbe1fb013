pub mod classify;
pub mod extract;
pub mod link;
pub mod normalize;
pub mod price;

use std::collections::BTreeMap;

use indicatif::{ProgressBar, ProgressStyle};
use itertools::Itertools;
use tracing::info;

use crate::model::{NormalizedRecord, RawRecord};
use self::normalize::Normalizer;

/// Result of one batch pass: accepted records in input order, plus the
/// discard count and distribution tallies for reporting.
pub struct BatchOutcome {
    pub accepted: Vec<NormalizedRecord>,
    pub discarded: usize,
    pub categories: BTreeMap<&'static str, usize>,
    pub brands: BTreeMap<String, usize>,
}

impl BatchOutcome {
    pub fn print_summary(&self) {
        println!("\nProcessed: {} accepted, {} discarded", self.accepted.len(), self.discarded);

        if !self.categories.is_empty() {
            println!("\nCategories (top 5):");
            for (category, count) in self
                .categories
                .iter()
                .sorted_by(|a, b| b.1.cmp(a.1).then(a.0.cmp(b.0)))
                .take(5)
            {
                println!("  {category}: {count}");
            }
        }

        if !self.brands.is_empty() {
            println!("\nBrands (top 5):");
            for (brand, count) in self
                .brands
                .iter()
                .sorted_by(|a, b| b.1.cmp(a.1).then(a.0.cmp(b.0)))
                .take(5)
            {
                println!("  {brand}: {count}");
            }
        }

        let prices: Vec<f64> = self.accepted.iter().map(|r| r.price).collect();
        if !prices.is_empty() {
            let min = prices.iter().cloned().fold(f64::INFINITY, f64::min);
            let max = prices.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
            let mean = prices.iter().sum::<f64>() / prices.len() as f64;
            println!("\nPrice range: ${min:.2} - ${max:.2} (avg ${mean:.2})");
        }
    }
}

/// Single ordered pass over the raw records. Discards are silent in the
/// output but counted. With the `rayon` feature the map step runs in
/// parallel; the indexed collect keeps input order either way.
pub fn process_all(normalizer: &Normalizer, records: &[RawRecord]) -> BatchOutcome {
    let pb = ProgressBar::new(records.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({per_sec})")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("#>-"),
    );

    #[cfg(feature = "rayon")]
    let normalized: Vec<Option<NormalizedRecord>> = {
        use rayon::prelude::*;
        records
            .par_iter()
            .map(|raw| {
                let result = normalizer.normalize(raw);
                pb.inc(1);
                result
            })
            .collect()
    };

    #[cfg(not(feature = "rayon"))]
    let normalized: Vec<Option<NormalizedRecord>> = records
        .iter()
        .map(|raw| {
            let result = normalizer.normalize(raw);
            pb.inc(1);
            result
        })
        .collect();

    pb.finish_and_clear();

    let mut outcome = BatchOutcome {
        accepted: Vec::with_capacity(records.len()),
        discarded: 0,
        categories: BTreeMap::new(),
        brands: BTreeMap::new(),
    };

    for result in normalized {
        match result {
            Some(record) => {
                *outcome.categories.entry(record.category.label()).or_default() += 1;
                if let Some(brand) = &record.brand {
                    *outcome.brands.entry(brand.clone()).or_default() += 1;
                }
                outcome.accepted.push(record);
            }
            None => outcome.discarded += 1,
        }
    }

    info!(
        accepted = outcome.accepted.len(),
        discarded = outcome.discarded,
        "batch pass complete"
    );
    outcome
}
