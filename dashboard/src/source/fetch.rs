use launchcore::dataset::{self, Dataset};
use launchcore::LoadError;
use std::path::PathBuf;

/// Where the launch table comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DatasetSource {
    Path(PathBuf),
    Url(String),
}

impl DatasetSource {
    pub fn parse(location: &str) -> Self {
        if location.starts_with("http://") || location.starts_with("https://") {
            DatasetSource::Url(location.to_string())
        } else {
            DatasetSource::Path(PathBuf::from(location))
        }
    }

    /// Reads the table once. Must run outside any async runtime.
    pub fn load(&self) -> Result<Dataset, LoadError> {
        match self {
            DatasetSource::Path(path) => dataset::load_path(path),
            DatasetSource::Url(url) => {
                let unreachable = |err: reqwest::Error| LoadError::Unreachable {
                    location: url.clone(),
                    reason: err.to_string(),
                };
                let body = reqwest::blocking::get(url)
                    .and_then(|response| response.error_for_status())
                    .and_then(|response| response.bytes())
                    .map_err(unreachable)?;
                dataset::load(body.as_ref())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn parse_distinguishes_urls_from_paths() {
        assert_eq!(
            DatasetSource::parse("https://example.com/launches.csv"),
            DatasetSource::Url("https://example.com/launches.csv".into())
        );
        assert_eq!(
            DatasetSource::parse("data/launches.csv"),
            DatasetSource::Path(PathBuf::from("data/launches.csv"))
        );
    }

    #[test]
    fn path_source_loads_local_csv() {
        let mut temp = NamedTempFile::new().unwrap();
        temp.write_all(
            b"Launch Site,Payload Mass (kg),class,Booster Version Category\nKSC LC-39A,2490,1,FT\n",
        )
        .unwrap();
        let path = temp.into_temp_path();
        let dataset = DatasetSource::Path(path.to_path_buf()).load().unwrap();
        assert_eq!(dataset.len(), 1);
    }

    #[test]
    fn unreachable_url_maps_to_load_error() {
        let url = "http://127.0.0.1:1/launches.csv";
        match DatasetSource::parse(url).load() {
            Err(LoadError::Unreachable { location, reason }) => {
                assert_eq!(location, url);
                assert!(!reason.is_empty());
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }
}
