pub mod fetch;
pub mod synthetic;
