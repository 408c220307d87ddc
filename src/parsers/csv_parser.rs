use super::parser::{Parser, ReadError, RowIter};
use csv::{ReaderBuilder, StringRecord, Trim};
use log::debug;
use serde::de::DeserializeOwned;
use std::collections::HashSet;
use std::fs::File;
use std::io::Read;

pub struct CsvParser;

/// Columns kept after trimming the header names: the first column under
/// each name wins, later repeats are dropped from every row.
struct HeaderProjection {
    headers: StringRecord,
    columns: Vec<usize>,
}

impl HeaderProjection {
    fn new(raw: &StringRecord) -> Self {
        let mut seen = HashSet::new();
        let (columns, names): (Vec<usize>, Vec<&str>) = raw
            .iter()
            .map(str::trim)
            .enumerate()
            .filter(|(_, name)| seen.insert(*name))
            .unzip();

        HeaderProjection {
            headers: names.into_iter().collect(),
            columns,
        }
    }

    fn project(&self, row: &StringRecord) -> StringRecord {
        self.columns
            .iter()
            .filter_map(|&column| row.get(column))
            .collect()
    }
}

impl Parser for CsvParser {
    fn parse<T>(&self, file_path: &str) -> Result<RowIter<T>, ReadError>
    where
        T: DeserializeOwned + 'static,
    {
        debug!("Opening CSV file: {:?}", file_path);
        let file = File::open(file_path)?;
        self.parse_reader(file)
    }

    fn parse_reader<T, R>(&self, reader: R) -> Result<RowIter<T>, ReadError>
    where
        T: DeserializeOwned + 'static,
        R: Read + 'static,
    {
        let mut rdr = ReaderBuilder::new()
            .trim(Trim::All)
            .flexible(true)
            .from_reader(reader);

        let projection = HeaderProjection::new(rdr.headers()?);
        debug!("CSV columns: {:?}", projection.headers);

        let iter = rdr
            .into_records()
            .map(move |result| -> Result<T, ReadError> {
                let row = projection.project(&result?);
                Ok(row.deserialize(Some(&projection.headers))?)
            });

        Ok(Box::new(iter))
    }
}
