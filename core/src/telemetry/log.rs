use log::{debug, info};

pub struct LogManager;

impl LogManager {
    pub fn new() -> Self {
        Self
    }

    pub fn record(&self, message: &str) {
        info!("{}", message);
    }

    pub fn record_query(&self, query: &str, detail: &str, rows: usize) {
        debug!("{} [{}] -> {} rows", query, detail, rows);
    }
}

impl Default for LogManager {
    fn default() -> Self {
        Self::new()
    }
}
