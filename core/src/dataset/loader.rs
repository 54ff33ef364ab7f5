use crate::dataset::record::{LaunchRecord, Outcome};
use crate::dataset::table::{distinct_sites, Dataset};
use crate::prelude::{
    LoadError, LoadResult, BOOSTER_COLUMN, CLASS_COLUMN, PAYLOAD_COLUMN, SITE_COLUMN,
};
use crate::telemetry::log::LogManager;
use csv::{ReaderBuilder, StringRecord, Trim};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Positions of the required columns within a header row.
struct ColumnIndex {
    site: usize,
    payload: usize,
    class: usize,
    booster: usize,
}

impl ColumnIndex {
    fn resolve(headers: &StringRecord) -> LoadResult<Self> {
        let find = |name: &str| {
            headers
                .iter()
                .position(|header| header == name)
                .ok_or_else(|| LoadError::MissingColumn(name.to_string()))
        };
        Ok(Self {
            site: find(SITE_COLUMN)?,
            payload: find(PAYLOAD_COLUMN)?,
            class: find(CLASS_COLUMN)?,
            booster: find(BOOSTER_COLUMN)?,
        })
    }
}

/// Reads a headered CSV table fully into memory.
///
/// Columns are located by header name, so extra columns and any column order
/// are accepted. Rows are kept in source order.
pub fn load<R: Read>(reader: R) -> LoadResult<Dataset> {
    let mut csv_reader = ReaderBuilder::new()
        .has_headers(true)
        .trim(Trim::All)
        .from_reader(reader);

    let columns = ColumnIndex::resolve(csv_reader.headers()?)?;

    let mut records = Vec::new();
    for (idx, row) in csv_reader.records().enumerate() {
        let row = row?;
        let record = parse_row(&row, &columns).map_err(|reason| LoadError::InvalidRecord {
            row: idx + 1,
            reason,
        })?;
        records.push(record);
    }

    let dataset = Dataset::from_records(records)?;
    LogManager::new().record(&format!(
        "loaded {} launch records across {} sites",
        dataset.len(),
        distinct_sites(&dataset).len()
    ));
    Ok(dataset)
}

/// Opens a local CSV file and loads it.
pub fn load_path<P: AsRef<Path>>(path: P) -> LoadResult<Dataset> {
    let file = File::open(path.as_ref())?;
    load(file)
}

fn parse_row(row: &StringRecord, columns: &ColumnIndex) -> Result<LaunchRecord, String> {
    let field = |idx: usize, name: &str| {
        row.get(idx)
            .ok_or_else(|| format!("row is missing field `{}`", name))
    };

    let site = field(columns.site, SITE_COLUMN)?;
    let payload_raw = field(columns.payload, PAYLOAD_COLUMN)?;
    let payload_mass_kg = payload_raw
        .parse::<f64>()
        .map_err(|_| format!("payload mass `{}` is not a number", payload_raw))?;
    let outcome = parse_class(field(columns.class, CLASS_COLUMN)?)?;
    let booster = field(columns.booster, BOOSTER_COLUMN)?;

    Ok(LaunchRecord::new(site, payload_mass_kg, outcome, booster))
}

fn parse_class(raw: &str) -> Result<Outcome, String> {
    let value = match raw.parse::<u8>() {
        Ok(value) => Some(value),
        Err(_) => match raw.parse::<f64>() {
            Ok(v) if v == 0.0 => Some(0),
            Ok(v) if v == 1.0 => Some(1),
            _ => None,
        },
    };
    value
        .and_then(Outcome::from_class)
        .ok_or_else(|| format!("class `{}` must be 0 or 1", raw))
}
