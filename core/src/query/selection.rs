use crate::dataset::PayloadDomain;
use crate::prelude::ALL_SITES;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Dropdown value: every site, or one literal site name.
///
/// A site name that is absent from the dataset is still a valid selection;
/// it simply matches no rows.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SiteSelection {
    #[default]
    All,
    Site(String),
}

impl SiteSelection {
    pub fn parse(value: &str) -> Self {
        Self::from(value.to_string())
    }

    pub fn as_str(&self) -> &str {
        match self {
            SiteSelection::All => ALL_SITES,
            SiteSelection::Site(site) => site,
        }
    }

    pub fn matches(&self, site: &str) -> bool {
        match self {
            SiteSelection::All => true,
            SiteSelection::Site(selected) => selected == site,
        }
    }
}

impl From<String> for SiteSelection {
    fn from(value: String) -> Self {
        if value == ALL_SITES {
            SiteSelection::All
        } else {
            SiteSelection::Site(value)
        }
    }
}

impl From<SiteSelection> for String {
    fn from(selection: SiteSelection) -> Self {
        match selection {
            SiteSelection::All => ALL_SITES.to_string(),
            SiteSelection::Site(site) => site,
        }
    }
}

impl fmt::Display for SiteSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Inclusive payload window chosen on the range slider.
///
/// No validation happens here: an inverted or out-of-domain window is a
/// legal value that selects nothing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PayloadRange {
    pub low: f64,
    pub high: f64,
}

impl PayloadRange {
    pub fn new(low: f64, high: f64) -> Self {
        Self { low, high }
    }

    pub fn full(domain: PayloadDomain) -> Self {
        Self {
            low: domain.min,
            high: domain.max,
        }
    }

    pub fn contains(&self, payload_mass_kg: f64) -> bool {
        self.low <= payload_mass_kg && payload_mass_kg <= self.high
    }
}
