use crate::dataset::record::LaunchRecord;
use crate::math::stats::StatsHelper;
use crate::prelude::{LoadError, LoadResult};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Global bounds of the payload column.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PayloadDomain {
    pub min: f64,
    pub max: f64,
}

/// Ordered, immutable launch table. Row positions never change after load.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    records: Vec<LaunchRecord>,
}

impl Dataset {
    /// Builds a dataset, rejecting rows that break the record invariants.
    pub fn from_records(records: Vec<LaunchRecord>) -> LoadResult<Self> {
        for (idx, record) in records.iter().enumerate() {
            validate(record).map_err(|reason| LoadError::InvalidRecord {
                row: idx + 1,
                reason,
            })?;
        }
        Ok(Self { records })
    }

    pub fn records(&self) -> &[LaunchRecord] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, LaunchRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl<'a> IntoIterator for &'a Dataset {
    type Item = &'a LaunchRecord;
    type IntoIter = std::slice::Iter<'a, LaunchRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

pub(crate) fn validate(record: &LaunchRecord) -> Result<(), String> {
    if record.site.trim().is_empty() {
        return Err("launch site is empty".into());
    }
    if !record.payload_mass_kg.is_finite() || record.payload_mass_kg < 0.0 {
        return Err(format!(
            "payload mass {} is not a finite non-negative number",
            record.payload_mass_kg
        ));
    }
    Ok(())
}

/// Distinct launch sites in order of first appearance.
pub fn distinct_sites(dataset: &Dataset) -> Vec<String> {
    let mut seen = HashSet::new();
    dataset
        .iter()
        .filter(|record| seen.insert(record.site.as_str()))
        .map(|record| record.site.clone())
        .collect()
}

/// Min and max payload mass; `None` for an empty dataset.
pub fn payload_domain(dataset: &Dataset) -> Option<PayloadDomain> {
    let masses: Vec<f64> = dataset.iter().map(|r| r.payload_mass_kg).collect();
    StatsHelper::min_max(&masses).map(|(min, max)| PayloadDomain { min, max })
}
