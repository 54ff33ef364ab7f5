use crate::dataset::{Dataset, Outcome};
use crate::prelude::DashboardQuery;
use crate::query::selection::SiteSelection;
use crate::telemetry::log::LogManager;
use serde::Serialize;
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SiteCount {
    pub site: String,
    pub successes: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutcomeCount {
    pub outcome: Outcome,
    pub count: u64,
}

/// Pie chart table. Groups appear in order of first appearance in the dataset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "groups", rename_all = "snake_case")]
pub enum SuccessAggregate {
    /// Successful launches per site, every site present.
    BySite(Vec<SiteCount>),
    /// Launches per outcome at one site; absent outcomes are omitted.
    ByOutcome(Vec<OutcomeCount>),
}

impl SuccessAggregate {
    pub fn len(&self) -> usize {
        match self {
            SuccessAggregate::BySite(groups) => groups.len(),
            SuccessAggregate::ByOutcome(groups) => groups.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Sum of all group values.
    pub fn total(&self) -> u64 {
        match self {
            SuccessAggregate::BySite(groups) => groups.iter().map(|g| g.successes).sum(),
            SuccessAggregate::ByOutcome(groups) => groups.iter().map(|g| g.count).sum(),
        }
    }

    pub fn site(&self, site: &str) -> Option<u64> {
        match self {
            SuccessAggregate::BySite(groups) => groups
                .iter()
                .find(|g| g.site == site)
                .map(|g| g.successes),
            SuccessAggregate::ByOutcome(_) => None,
        }
    }

    pub fn outcome(&self, outcome: Outcome) -> Option<u64> {
        match self {
            SuccessAggregate::ByOutcome(groups) => groups
                .iter()
                .find(|g| g.outcome == outcome)
                .map(|g| g.count),
            SuccessAggregate::BySite(_) => None,
        }
    }
}

/// Builds the pie chart table for the current dropdown value.
pub fn compute_success_aggregate(dataset: &Dataset, selection: &SiteSelection) -> SuccessAggregate {
    match selection {
        SiteSelection::All => SuccessAggregate::BySite(successes_by_site(dataset)),
        SiteSelection::Site(site) => SuccessAggregate::ByOutcome(outcomes_at_site(dataset, site)),
    }
}

fn successes_by_site(dataset: &Dataset) -> Vec<SiteCount> {
    let mut slots: HashMap<&str, usize> = HashMap::new();
    let mut groups: Vec<SiteCount> = Vec::new();

    for record in dataset {
        let slot = *slots.entry(record.site.as_str()).or_insert_with(|| {
            groups.push(SiteCount {
                site: record.site.clone(),
                successes: 0,
            });
            groups.len() - 1
        });
        groups[slot].successes += u64::from(record.outcome.as_class());
    }

    groups
}

fn outcomes_at_site(dataset: &Dataset, site: &str) -> Vec<OutcomeCount> {
    let mut groups: Vec<OutcomeCount> = Vec::with_capacity(2);

    for record in dataset.iter().filter(|r| r.site == site) {
        match groups.iter_mut().find(|g| g.outcome == record.outcome) {
            Some(group) => group.count += 1,
            None => groups.push(OutcomeCount {
                outcome: record.outcome,
                count: 1,
            }),
        }
    }

    groups
}

/// Query object for the pie chart.
#[derive(Debug, Clone, Default)]
pub struct SuccessAggregateQuery {
    pub selection: SiteSelection,
}

impl SuccessAggregateQuery {
    pub fn new(selection: SiteSelection) -> Self {
        Self { selection }
    }
}

impl DashboardQuery for SuccessAggregateQuery {
    type Output = SuccessAggregate;

    fn name(&self) -> &'static str {
        "success-aggregate"
    }

    fn execute(&self, dataset: &Dataset) -> SuccessAggregate {
        let aggregate = compute_success_aggregate(dataset, &self.selection);
        LogManager::new().record_query(self.name(), self.selection.as_str(), aggregate.len());
        aggregate
    }
}
