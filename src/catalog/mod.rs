use std::collections::HashSet;
use std::fs;
use std::path::Path;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Latitude/longitude pair as it appears in catalog files.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coords {
    pub lat: f64,
    pub lon: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct City {
    pub name: String,
    pub population: u64,
    pub subject: String,
    pub district: String,
    pub coords: Coords,
    /// Inert metadata: usage is tracked by pool membership, never by this
    /// flag.
    #[serde(default)]
    pub is_used: bool,
}

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("failed to read catalog file: {0}")]
    Io(#[from] std::io::Error),
    #[error("catalog file is not a JSON array of records: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, thiserror::Error)]
pub enum RecordError {
    #[error("malformed record: {0}")]
    Malformed(String),
    #[error("city name is empty")]
    EmptyName,
    #[error("duplicate city name {0:?}")]
    Duplicate(String),
}

/// A record dropped during catalog construction, with its position in the
/// source sequence.
#[derive(Debug)]
pub struct RejectedRecord {
    pub index: usize,
    pub reason: RecordError,
}

/// Immutable, ordered collection of validated city records.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    cities: Vec<City>,
}

impl Catalog {
    /// Build a catalog from raw records. A record that fails validation is
    /// dropped and reported, never fatal.
    pub fn from_records(records: Vec<Value>) -> (Self, Vec<RejectedRecord>) {
        let mut cities: Vec<City> = Vec::with_capacity(records.len());
        let mut seen: HashSet<String> = HashSet::new();
        let mut rejected = Vec::new();
        for (index, record) in records.into_iter().enumerate() {
            let city: City = match serde_json::from_value(record) {
                Ok(city) => city,
                Err(err) => {
                    rejected.push(RejectedRecord {
                        index,
                        reason: RecordError::Malformed(err.to_string()),
                    });
                    continue;
                }
            };
            if city.name.is_empty() {
                rejected.push(RejectedRecord {
                    index,
                    reason: RecordError::EmptyName,
                });
                continue;
            }
            // Name uniqueness is case-sensitive, matching pool membership.
            if !seen.insert(city.name.clone()) {
                rejected.push(RejectedRecord {
                    index,
                    reason: RecordError::Duplicate(city.name),
                });
                continue;
            }
            cities.push(city);
        }
        (Self { cities }, rejected)
    }

    /// Load a catalog from a JSON file containing an array of records.
    pub fn load(path: impl AsRef<Path>) -> Result<(Self, Vec<RejectedRecord>), CatalogError> {
        let raw = fs::read_to_string(path)?;
        let records: Vec<Value> = serde_json::from_str(&raw)?;
        Ok(Self::from_records(records))
    }

    /// The city list compiled into the binary.
    pub fn bundled() -> &'static Catalog {
        static BUNDLED: Lazy<Catalog> = Lazy::new(|| {
            let records: Vec<Value> = serde_json::from_str(include_str!("../../data/cities.json"))
                .expect("bundled city list is valid JSON");
            Catalog::from_records(records).0
        });
        &BUNDLED
    }

    pub fn cities(&self) -> &[City] {
        &self.cities
    }

    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.cities.iter().map(|city| city.name.as_str())
    }

    pub fn get(&self, name: &str) -> Option<&City> {
        self.cities.iter().find(|city| city.name == name)
    }

    pub fn len(&self) -> usize {
        self.cities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cities.is_empty()
    }
}
