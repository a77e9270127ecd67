use std::{fs::File, io::Read, path::Path};

use csv::{ReaderBuilder, StringRecord, Trim};
use log::info;

use super::{LoadErr, Result};
use crate::dataset::SampleSet;

const DEFAULT_MILEAGE_COLUMN: &str = "km";
const DEFAULT_PRICE_COLUMN: &str = "price";

/// Reads mileage/price samples from comma separated data with a header row.
///
/// Columns are looked up by name, so their order and any extra columns do not
/// matter.
#[derive(Debug, Clone)]
pub struct SampleLoader {
    mileage_column: String,
    price_column: String,
}

impl Default for SampleLoader {
    fn default() -> Self {
        Self {
            mileage_column: DEFAULT_MILEAGE_COLUMN.to_string(),
            price_column: DEFAULT_PRICE_COLUMN.to_string(),
        }
    }
}

impl SampleLoader {
    /// Returns a loader expecting `km` and `price` columns.
    pub fn new() -> Self {
        Self::default()
    }

    /// Overrides the names of the mileage and price columns.
    pub fn with_columns(mut self, mileage: &str, price: &str) -> Self {
        self.mileage_column = mileage.to_string();
        self.price_column = price.to_string();
        self
    }

    /// Loads the samples stored in the file at `path`.
    ///
    /// # Errors
    /// See `read`, plus `LoadErr::Io` if the file cannot be opened.
    pub fn load<P: AsRef<Path>>(&self, path: P) -> Result<SampleSet> {
        let path = path.as_ref();
        let file = File::open(path)?;
        let samples = self.read(file)?;

        info!(rows = samples.len(); "loaded samples from {}", path.display());
        Ok(samples)
    }

    /// Reads samples from any CSV source, skipping its header row.
    ///
    /// # Errors
    /// * `LoadErr::MissingColumn` if a required column is absent.
    /// * `LoadErr::Malformed` on the first field that is not an integer.
    /// * `LoadErr::Csv` on a syntax error or a row of the wrong width.
    /// * `LoadErr::Invalid` if there are no data rows.
    pub fn read<R: Read>(&self, reader: R) -> Result<SampleSet> {
        let mut rdr = ReaderBuilder::new()
            .has_headers(true)
            .trim(Trim::All)
            .from_reader(reader);

        let headers = rdr.headers()?.clone();
        let mileage_idx = column_index(&headers, &self.mileage_column)?;
        let price_idx = column_index(&headers, &self.price_column)?;

        let mut mileages = Vec::new();
        let mut prices = Vec::new();

        for record in rdr.records() {
            let record = record?;
            mileages.push(parse_field(&record, mileage_idx, &self.mileage_column)?);
            prices.push(parse_field(&record, price_idx, &self.price_column)?);
        }

        Ok(SampleSet::new(mileages, prices)?)
    }
}

fn column_index(headers: &StringRecord, name: &str) -> Result<usize> {
    headers
        .iter()
        .position(|h| h == name)
        .ok_or_else(|| LoadErr::MissingColumn(name.to_string()))
}

fn parse_field(record: &StringRecord, idx: usize, column: &str) -> Result<i64> {
    let value = record.get(idx).unwrap_or_default();

    value.parse().map_err(|_| LoadErr::Malformed {
        line: record.position().map_or(0, |p| p.line()),
        column: column.to_string(),
        value: value.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::InvalidInput;

    #[test]
    fn test_reads_rows_in_order() {
        let data = "km,price\n240000,3650\n139800,3800\n150500,4400\n";
        let samples = SampleLoader::new().read(data.as_bytes()).unwrap();

        assert_eq!(samples.mileages(), &[240000, 139800, 150500]);
        assert_eq!(samples.prices(), &[3650, 3800, 4400]);
    }

    #[test]
    fn test_columns_are_found_by_name() {
        let data = "price, model ,km\n3650, a ,240000\n3800,b, 139800\n";
        let samples = SampleLoader::new().read(data.as_bytes()).unwrap();

        assert_eq!(samples.mileages(), &[240000, 139800]);
        assert_eq!(samples.prices(), &[3650, 3800]);
    }

    #[test]
    fn test_custom_column_names() {
        let data = "mileage,cost\n1,10\n2,20\n";
        let samples = SampleLoader::new()
            .with_columns("mileage", "cost")
            .read(data.as_bytes())
            .unwrap();

        assert_eq!(samples.len(), 2);
    }

    #[test]
    fn test_missing_column() {
        let data = "km,cost\n1,10\n";
        let err = SampleLoader::new().read(data.as_bytes()).unwrap_err();
        assert!(matches!(err, LoadErr::MissingColumn(c) if c == "price"));
    }

    #[test]
    fn test_malformed_field_reports_its_line() {
        let data = "km,price\n1,10\n2,twenty\n";
        let err = SampleLoader::new().read(data.as_bytes()).unwrap_err();

        match err {
            LoadErr::Malformed {
                line,
                column,
                value,
            } => {
                assert_eq!(line, 3);
                assert_eq!(column, "price");
                assert_eq!(value, "twenty");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_header_only_is_empty() {
        let err = SampleLoader::new().read("km,price\n".as_bytes()).unwrap_err();
        assert!(matches!(err, LoadErr::Invalid(InvalidInput::EmptySamples)));
    }

    #[test]
    fn test_ragged_row_is_a_csv_error() {
        let data = "km,price\n1,10\n2\n";
        let err = SampleLoader::new().read(data.as_bytes()).unwrap_err();
        assert!(matches!(err, LoadErr::Csv(_)));
    }

    #[test]
    fn test_missing_file_is_an_io_error() {
        let err = SampleLoader::new()
            .load("this/file/does/not/exist.csv")
            .unwrap_err();
        assert!(matches!(err, LoadErr::Io(_)));
    }
}
