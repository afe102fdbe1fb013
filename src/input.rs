use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::info;

use crate::model::RawRecord;

/// File-level failures are fatal and reported before any processing
/// begins; there is nothing to partially recover.
#[derive(Debug, Error)]
pub enum InputError {
    #[error("input file not found: {0}")]
    Missing(PathBuf),
    #[error("failed to read {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed JSON in {path}")]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Load a JSON array of raw records from the scraping layer's output.
pub fn load_records(path: &Path) -> Result<Vec<RawRecord>, InputError> {
    if !path.exists() {
        return Err(InputError::Missing(path.to_path_buf()));
    }
    let text = fs::read_to_string(path).map_err(|source| InputError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let records: Vec<RawRecord> =
        serde_json::from_str(&text).map_err(|source| InputError::Malformed {
            path: path.to_path_buf(),
            source,
        })?;
    info!(count = records.len(), path = %path.display(), "loaded raw records");
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_is_fatal() {
        let err = load_records(Path::new("no/such/file.json")).unwrap_err();
        assert!(matches!(err, InputError::Missing(_)));
    }

    #[test]
    fn malformed_json_is_fatal() {
        let dir = std::env::temp_dir();
        let path = dir.join("product_etl_malformed_test.json");
        fs::write(&path, "{not json").unwrap();
        let err = load_records(&path).unwrap_err();
        assert!(matches!(err, InputError::Malformed { .. }));
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn mixed_source_shapes_deserialize() {
        let dir = std::env::temp_dir();
        let path = dir.join("product_etl_shapes_test.json");
        fs::write(
            &path,
            r#"[
                {"title": "AMD Ryzen 5 5600X Processor", "price": "$159.99",
                 "img_url": "https://img", "product_link": "https://newegg/item",
                 "item_features": ["6 cores"]},
                {"product_name": "Coway Airmega Air Purifier", "price": "Sale price $229.99",
                 "image_url": "https://img2", "url": "https://sylvane/item",
                 "coverage_area": "361 sq. ft.", "cadr_smoke": "246"}
            ]"#,
        )
        .unwrap();
        let records = load_records(&path).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].title, "AMD Ryzen 5 5600X Processor");
        assert_eq!(records[0].item_features, vec!["6 cores"]);
        assert_eq!(records[1].title, "Coway Airmega Air Purifier");
        assert_eq!(records[1].product_link, "https://sylvane/item");
        assert_eq!(records[1].coverage_area.as_deref(), Some("361 sq. ft."));
        let _ = fs::remove_file(&path);
    }
}
