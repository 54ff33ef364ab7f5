use crate::gui_bridge::model::{
    pie_title, scatter_title, ControlLayout, PieChart, ScatterChart, SCATTER_COLOR_BY,
    SCATTER_X_LABEL, SCATTER_Y_LABEL,
};
use crate::workflow::config::DashboardConfig;
use launchcore::dataset::{distinct_sites, payload_domain, PayloadDomain};
use launchcore::math::StatsHelper;
use launchcore::query::{ScatterQuery, SuccessAggregateQuery};
use launchcore::{DashboardQuery, Dataset, Outcome, PayloadRange, SiteSelection};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Current values of the dropdown and the range slider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ControlState {
    pub site: SiteSelection,
    pub payload: PayloadRange,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardResult {
    pub controls: ControlState,
    pub pie: PieChart,
    pub scatter: ScatterChart,
}

/// Answers chart requests against the shared, read-only dataset.
#[derive(Clone)]
pub struct Runner {
    dataset: Arc<Dataset>,
    domain: PayloadDomain,
    layout: ControlLayout,
}

impl Runner {
    pub fn new(dataset: Arc<Dataset>, config: &DashboardConfig) -> Self {
        let domain = payload_domain(&dataset).unwrap_or(PayloadDomain { min: 0.0, max: 0.0 });
        let layout = ControlLayout::new(
            &distinct_sites(&dataset),
            domain,
            config.slider_step,
            &config.slider_marks,
        );
        Self {
            dataset,
            domain,
            layout,
        }
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    pub fn layout(&self) -> &ControlLayout {
        &self.layout
    }

    /// Fills unset controls the way the page does on first render.
    pub fn controls_from(
        &self,
        site: Option<&str>,
        low: Option<f64>,
        high: Option<f64>,
    ) -> ControlState {
        ControlState {
            site: site.map(SiteSelection::parse).unwrap_or_default(),
            payload: PayloadRange::new(
                low.unwrap_or(self.domain.min),
                high.unwrap_or(self.domain.max),
            ),
        }
    }

    pub fn pie(&self, selection: &SiteSelection) -> PieChart {
        let table = SuccessAggregateQuery::new(selection.clone()).execute(&self.dataset);
        let (successes, launches) = match selection {
            SiteSelection::All => (table.total(), self.dataset.len() as u64),
            SiteSelection::Site(_) => (
                table.outcome(Outcome::Success).unwrap_or(0),
                table.total(),
            ),
        };

        PieChart {
            title: pie_title(selection),
            success_rate: StatsHelper::success_rate(successes, launches),
            table,
        }
    }

    pub fn scatter(&self, selection: &SiteSelection, range: &PayloadRange) -> ScatterChart {
        let points = ScatterQuery::new(selection.clone(), *range).execute(&self.dataset);
        ScatterChart {
            title: scatter_title(selection),
            x_label: SCATTER_X_LABEL,
            y_label: SCATTER_Y_LABEL,
            color_by: SCATTER_COLOR_BY,
            points,
        }
    }

    pub fn execute(&self, controls: &ControlState) -> DashboardResult {
        DashboardResult {
            controls: controls.clone(),
            pie: self.pie(&controls.site),
            scatter: self.scatter(&controls.site, &controls.payload),
        }
    }
}
