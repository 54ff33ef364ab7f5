pub mod aggregate;
pub mod mask;
pub mod scatter;
pub mod selection;

pub use aggregate::{
    compute_success_aggregate, OutcomeCount, SiteCount, SuccessAggregate, SuccessAggregateQuery,
};
pub use mask::RowMask;
pub use scatter::{compute_scatter_points, ScatterPoint, ScatterQuery};
pub use selection::{PayloadRange, SiteSelection};

#[cfg(test)]
mod properties;
