//! Career catalog: the static universe of careers the matcher ranks.
//!
//! Loaded once at startup (embedded JSON by default, or `CATALOG_PATH`),
//! validated, then shared read-only behind an `Arc` in `AppState`.
//! The JSON object's key order is the catalog's iteration order, which is
//! also the tie-break order for equal match scores.

pub mod handlers;

use std::collections::HashSet;
use std::path::Path;

use serde_json::{Map, Value};
use thiserror::Error;
use tracing::info;

use crate::models::career::CareerRecord;

const EMBEDDED_CATALOG: &str = include_str!("../../data/career_catalog.json");

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to read catalog file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Catalog is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Catalog must be a JSON object keyed by career name")]
    NotAnObject,

    #[error("Catalog entry '{career}' is malformed: {source}")]
    Record {
        career: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Catalog entry '{0}' has no traits")]
    NoTraits(String),

    #[error("Catalog entry '{career}' has salary min {min} above max {max}")]
    SalaryRange { career: String, min: u64, max: u64 },

    #[error("Catalog entry '{career}' has demand_score {score} outside [0, 10]")]
    DemandOutOfRange { career: String, score: f64 },

    #[error("Catalog entry '{0}' appears more than once")]
    Duplicate(String),

    #[error("Catalog contains no careers")]
    Empty,
}

/// Ordered, validated, read-only set of career records.
#[derive(Debug, Clone, Default)]
pub struct CareerCatalog {
    entries: Vec<(String, CareerRecord)>,
}

impl CareerCatalog {
    /// Builds a catalog from already-parsed entries, enforcing record invariants.
    /// An empty catalog is allowed here; the matcher ranks it to an empty list.
    pub fn new(entries: Vec<(String, CareerRecord)>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::new();
        for (name, record) in &entries {
            if !seen.insert(name.as_str()) {
                return Err(CatalogError::Duplicate(name.clone()));
            }
            validate_record(name, record)?;
        }
        Ok(Self { entries })
    }

    /// Parses a catalog JSON document. Rejects documents with no careers.
    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        let root: Value = serde_json::from_str(json)?;
        let object: Map<String, Value> = match root {
            Value::Object(object) => object,
            _ => return Err(CatalogError::NotAnObject),
        };

        let entries = object
            .into_iter()
            .map(|(career, value)| {
                serde_json::from_value::<CareerRecord>(value)
                    .map(|record| (career.clone(), record))
                    .map_err(|source| CatalogError::Record { career, source })
            })
            .collect::<Result<Vec<_>, _>>()?;

        if entries.is_empty() {
            return Err(CatalogError::Empty);
        }

        Self::new(entries)
    }

    /// The catalog compiled into the binary.
    pub fn embedded() -> Result<Self, CatalogError> {
        Self::from_json_str(EMBEDDED_CATALOG)
    }

    /// Loads from `path` when given, otherwise the embedded catalog.
    pub fn load(path: Option<&Path>) -> Result<Self, CatalogError> {
        let catalog = match path {
            Some(path) => {
                info!("Loading career catalog from {}", path.display());
                let json = std::fs::read_to_string(path)?;
                Self::from_json_str(&json)?
            }
            None => Self::embedded()?,
        };
        info!("Career catalog loaded: {} careers", catalog.len());
        Ok(catalog)
    }

    pub fn get(&self, career: &str) -> Option<&CareerRecord> {
        self.entries
            .iter()
            .find(|(name, _)| name == career)
            .map(|(_, record)| record)
    }

    pub fn contains(&self, career: &str) -> bool {
        self.get(career).is_some()
    }

    /// Entries in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &CareerRecord)> {
        self.entries
            .iter()
            .map(|(name, record)| (name.as_str(), record))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn validate_record(career: &str, record: &CareerRecord) -> Result<(), CatalogError> {
    if record.traits.iter().all(|t| t.trim().is_empty()) {
        return Err(CatalogError::NoTraits(career.to_string()));
    }
    if record.min_salary() > record.max_salary() {
        return Err(CatalogError::SalaryRange {
            career: career.to_string(),
            min: record.min_salary(),
            max: record.max_salary(),
        });
    }
    if !(0.0..=10.0).contains(&record.demand_score) {
        return Err(CatalogError::DemandOutOfRange {
            career: career.to_string(),
            score: record.demand_score,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matching::tables::DOMAIN_CAREERS;
    use crate::models::career::Growth;
    use std::io::Write;

    fn record(traits: &[&str], salary: [u64; 2], demand: f64) -> CareerRecord {
        CareerRecord {
            traits: traits.iter().map(|t| t.to_string()).collect(),
            salary,
            work_environment: "Office".to_string(),
            growth: Growth::Stable,
            locations: vec![],
            demand_score: demand,
            rank: 1,
            nsdc_trainings: None,
        }
    }

    #[test]
    fn test_embedded_catalog_is_valid() {
        let catalog = CareerCatalog::embedded().unwrap();
        assert!(catalog.len() >= 30);
    }

    #[test]
    fn test_embedded_catalog_covers_every_domain_career() {
        let catalog = CareerCatalog::embedded().unwrap();
        for (domain, careers) in DOMAIN_CAREERS {
            for career in *careers {
                assert!(
                    catalog.contains(career),
                    "{career} ({}) missing from catalog",
                    domain.as_str()
                );
            }
        }
    }

    #[test]
    fn test_key_order_is_preserved() {
        let json = r#"{
            "Zoologist": {"traits": ["Curious"], "salary": [1, 2], "work_env": "Field",
                          "growth": "Low", "locations": [], "demand_score": 3, "rank": 9},
            "Architect": {"traits": ["Creative"], "salary": [1, 2], "work_env": "Office",
                          "growth": "Stable", "locations": [], "demand_score": 5, "rank": 2}
        }"#;
        let catalog = CareerCatalog::from_json_str(json).unwrap();
        let names: Vec<&str> = catalog.iter().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["Zoologist", "Architect"]);
    }

    #[test]
    fn test_empty_document_is_rejected() {
        assert!(matches!(
            CareerCatalog::from_json_str("{}"),
            Err(CatalogError::Empty)
        ));
    }

    #[test]
    fn test_array_document_is_rejected() {
        assert!(matches!(
            CareerCatalog::from_json_str("[]"),
            Err(CatalogError::NotAnObject)
        ));
    }

    #[test]
    fn test_malformed_record_names_the_career() {
        let json = r#"{"Pilot": {"traits": ["Calm"], "salary": [1, 2]}}"#;
        match CareerCatalog::from_json_str(json) {
            Err(CatalogError::Record { career, .. }) => assert_eq!(career, "Pilot"),
            other => panic!("expected Record error, got {other:?}"),
        }
    }

    #[test]
    fn test_inverted_salary_is_rejected() {
        let result = CareerCatalog::new(vec![(
            "Pilot".to_string(),
            record(&["Calm"], [900, 100], 5.0),
        )]);
        assert!(matches!(result, Err(CatalogError::SalaryRange { .. })));
    }

    #[test]
    fn test_demand_out_of_range_is_rejected() {
        let result = CareerCatalog::new(vec![(
            "Pilot".to_string(),
            record(&["Calm"], [100, 900], 10.5),
        )]);
        assert!(matches!(result, Err(CatalogError::DemandOutOfRange { .. })));
    }

    #[test]
    fn test_missing_traits_are_rejected() {
        let result = CareerCatalog::new(vec![("Pilot".to_string(), record(&[], [1, 2], 5.0))]);
        assert!(matches!(result, Err(CatalogError::NoTraits(_))));
    }

    #[test]
    fn test_duplicate_names_are_rejected() {
        let result = CareerCatalog::new(vec![
            ("Pilot".to_string(), record(&["Calm"], [1, 2], 5.0)),
            ("Pilot".to_string(), record(&["Calm"], [1, 2], 5.0)),
        ]);
        assert!(matches!(result, Err(CatalogError::Duplicate(_))));
    }

    #[test]
    fn test_empty_entries_are_allowed_in_memory() {
        let catalog = CareerCatalog::new(vec![]).unwrap();
        assert!(catalog.is_empty());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"Pilot": {{"traits": ["Calm"], "salary": [500000, 3000000], "work_env": "Field",
                 "growth": "Moderate", "locations": ["Delhi"], "demand_score": 7, "rank": 4,
                 "nsdc_trainings": 12}}}}"#
        )
        .unwrap();

        let catalog = CareerCatalog::load(Some(file.path())).unwrap();
        let pilot = catalog.get("Pilot").unwrap();
        assert_eq!(pilot.nsdc_trainings, Some(12));
        assert_eq!(pilot.growth, Growth::Moderate);
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let result = CareerCatalog::load(Some(Path::new("/nonexistent/catalog.json")));
        assert!(matches!(result, Err(CatalogError::Io(_))));
    }
}
