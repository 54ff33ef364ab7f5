use crate::dataset::{Dataset, LaunchRecord, Outcome};
use crate::prelude::DashboardQuery;
use crate::query::mask::RowMask;
use crate::query::selection::{PayloadRange, SiteSelection};
use crate::telemetry::log::LogManager;
use serde::{Deserialize, Serialize};

/// One dot on the payload/outcome scatter chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScatterPoint {
    pub payload_mass_kg: f64,
    pub outcome: Outcome,
    pub booster_category: String,
}

impl From<&LaunchRecord> for ScatterPoint {
    fn from(record: &LaunchRecord) -> Self {
        Self {
            payload_mass_kg: record.payload_mass_kg,
            outcome: record.outcome,
            booster_category: record.booster_category.clone(),
        }
    }
}

pub fn site_mask(dataset: &Dataset, selection: &SiteSelection) -> RowMask {
    RowMask::from_predicate(dataset.records(), |record| selection.matches(&record.site))
}

pub fn payload_mask(dataset: &Dataset, range: &PayloadRange) -> RowMask {
    RowMask::from_predicate(dataset.records(), |record| {
        range.contains(record.payload_mass_kg)
    })
}

/// Builds the scatter chart series for the current control values.
///
/// Both masks are derived from the full dataset's columns and joined by row
/// position. Because `Dataset` rows keep their load order this matches a
/// site filter followed by a payload filter on the surviving rows.
pub fn compute_scatter_points(
    dataset: &Dataset,
    selection: &SiteSelection,
    range: &PayloadRange,
) -> Vec<ScatterPoint> {
    let mask = site_mask(dataset, selection) & payload_mask(dataset, range);
    mask.select(dataset.records()).map(ScatterPoint::from).collect()
}

/// Query object for the scatter chart.
#[derive(Debug, Clone)]
pub struct ScatterQuery {
    pub selection: SiteSelection,
    pub range: PayloadRange,
}

impl ScatterQuery {
    pub fn new(selection: SiteSelection, range: PayloadRange) -> Self {
        Self { selection, range }
    }
}

impl DashboardQuery for ScatterQuery {
    type Output = Vec<ScatterPoint>;

    fn name(&self) -> &'static str {
        "scatter-points"
    }

    fn execute(&self, dataset: &Dataset) -> Vec<ScatterPoint> {
        let points = compute_scatter_points(dataset, &self.selection, &self.range);
        let detail = format!(
            "{} {}..={}",
            self.selection, self.range.low, self.range.high
        );
        LogManager::new().record_query(self.name(), &detail, points.len());
        points
    }
}
