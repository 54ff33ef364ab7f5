pub mod loader;
pub mod record;
pub mod table;

pub use loader::{load, load_path};
pub use record::{LaunchRecord, Outcome};
pub use table::{distinct_sites, payload_domain, Dataset, PayloadDomain};
