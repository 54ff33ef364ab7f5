//! Filtering and aggregation core for the launch records dashboard.
//!
//! The dataset is loaded once and shared read-only; every chart table is
//! recomputed from scratch by a pure query over it.

pub mod dataset;
pub mod math;
pub mod prelude;
pub mod query;
pub mod telemetry;

pub use dataset::{Dataset, LaunchRecord, Outcome};
pub use prelude::{DashboardQuery, LoadError, LoadResult};
pub use query::{PayloadRange, SiteSelection};
