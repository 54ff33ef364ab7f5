use launchcore::dataset::PayloadDomain;
use launchcore::query::{ScatterPoint, SuccessAggregate};
use launchcore::{prelude::ALL_SITES, SiteSelection};
use serde::{Deserialize, Serialize};

pub const SCATTER_X_LABEL: &str = "Payload Mass (kg)";
pub const SCATTER_Y_LABEL: &str = "Launch Outcome (0=Failure, 1=Success)";
pub const SCATTER_COLOR_BY: &str = "Booster Version Category";

pub const PAGE_TITLE: &str = "SpaceX Launch Records Dashboard";
pub const SITE_LABEL: &str = "Launch Site Drop-down Input:";
pub const SITE_PLACEHOLDER: &str = "Select a Launch Site";
pub const PAYLOAD_LABEL: &str = "Payload range (Kg):";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DropdownOption {
    pub label: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SliderMark {
    pub value: f64,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SliderSpec {
    pub min: f64,
    pub max: f64,
    pub step: f64,
    pub marks: Vec<SliderMark>,
    pub value: [f64; 2],
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteDropdown {
    pub label: String,
    pub placeholder: String,
    pub searchable: bool,
    pub options: Vec<DropdownOption>,
    pub value: String,
}

/// Everything a front end needs to draw the page heading and both controls.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ControlLayout {
    pub title: String,
    pub site_dropdown: SiteDropdown,
    pub payload_label: String,
    pub payload_slider: SliderSpec,
}

impl ControlLayout {
    pub fn new(sites: &[String], domain: PayloadDomain, step: f64, marks: &[f64]) -> Self {
        let mut site_options = Vec::with_capacity(sites.len() + 1);
        site_options.push(DropdownOption {
            label: "All Sites".into(),
            value: ALL_SITES.into(),
        });
        site_options.extend(sites.iter().map(|site| DropdownOption {
            label: site.clone(),
            value: site.clone(),
        }));

        Self {
            title: PAGE_TITLE.into(),
            site_dropdown: SiteDropdown {
                label: SITE_LABEL.into(),
                placeholder: SITE_PLACEHOLDER.into(),
                searchable: true,
                options: site_options,
                value: ALL_SITES.into(),
            },
            payload_label: PAYLOAD_LABEL.into(),
            payload_slider: SliderSpec {
                min: domain.min,
                max: domain.max,
                step,
                marks: marks
                    .iter()
                    .map(|&value| SliderMark {
                        value,
                        label: format!("{}", value),
                    })
                    .collect(),
                value: [domain.min, domain.max],
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PieChart {
    pub title: String,
    pub success_rate: f64,
    pub table: SuccessAggregate,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScatterChart {
    pub title: String,
    pub x_label: &'static str,
    pub y_label: &'static str,
    pub color_by: &'static str,
    pub points: Vec<ScatterPoint>,
}

pub fn pie_title(selection: &SiteSelection) -> String {
    match selection {
        SiteSelection::All => "Total Success Launches By Site".to_string(),
        SiteSelection::Site(site) => format!("Success vs Failure for {}", site),
    }
}

pub fn scatter_title(selection: &SiteSelection) -> String {
    match selection {
        SiteSelection::All => "Payload vs. Success for All Sites".to_string(),
        SiteSelection::Site(site) => format!("Payload vs. Success for {}", site),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_lists_all_sites_first() {
        let sites = vec!["CCAFS LC-40".to_string(), "KSC LC-39A".to_string()];
        let layout = ControlLayout::new(
            &sites,
            PayloadDomain {
                min: 0.0,
                max: 9600.0,
            },
            1000.0,
            &[0.0, 2500.0],
        );

        let dropdown = &layout.site_dropdown;
        assert_eq!(dropdown.options.len(), 3);
        assert_eq!(dropdown.options[0].value, "ALL");
        assert_eq!(dropdown.options[2].label, "KSC LC-39A");
        assert_eq!(dropdown.value, "ALL");
        assert_eq!(layout.payload_slider.value, [0.0, 9600.0]);
        assert_eq!(layout.payload_slider.marks[1].label, "2500");
    }

    #[test]
    fn layout_carries_page_and_control_labels() {
        let layout = ControlLayout::new(
            &[],
            PayloadDomain { min: 0.0, max: 0.0 },
            1000.0,
            &[],
        );

        assert_eq!(layout.title, "SpaceX Launch Records Dashboard");
        assert_eq!(layout.site_dropdown.label, "Launch Site Drop-down Input:");
        assert_eq!(layout.site_dropdown.placeholder, "Select a Launch Site");
        assert!(layout.site_dropdown.searchable);
        assert_eq!(layout.payload_label, "Payload range (Kg):");
    }

    #[test]
    fn titles_follow_selection() {
        assert_eq!(pie_title(&SiteSelection::All), "Total Success Launches By Site");
        assert_eq!(
            scatter_title(&SiteSelection::parse("VAFB SLC-4E")),
            "Payload vs. Success for VAFB SLC-4E"
        );
    }
}
