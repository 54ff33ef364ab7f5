use crate::dataset::Dataset;

/// Column headers the loader requires in the source table.
pub const SITE_COLUMN: &str = "Launch Site";
pub const PAYLOAD_COLUMN: &str = "Payload Mass (kg)";
pub const CLASS_COLUMN: &str = "class";
pub const BOOSTER_COLUMN: &str = "Booster Version Category";

/// Sentinel dropdown value selecting every launch site.
pub const ALL_SITES: &str = "ALL";

/// Error raised while materializing the dataset. Fatal to startup.
#[derive(thiserror::Error, Debug)]
pub enum LoadError {
    #[error("i/o failure: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed csv: {0}")]
    Csv(#[from] csv::Error),
    #[error("missing required column `{0}`")]
    MissingColumn(String),
    #[error("invalid record at row {row}: {reason}")]
    InvalidRecord { row: usize, reason: String },
    #[error("source {location} unreachable: {reason}")]
    Unreachable { location: String, reason: String },
}

pub type LoadResult<T> = Result<T, LoadError>;

/// A pure, stateless computation over the loaded dataset.
///
/// Implementations capture the current control values and are re-executed
/// from scratch on every control change.
pub trait DashboardQuery {
    type Output;

    fn name(&self) -> &'static str;
    fn execute(&self, dataset: &Dataset) -> Self::Output;
}
