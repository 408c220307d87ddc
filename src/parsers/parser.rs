use csv::Error as CsvError;
use serde::de::DeserializeOwned;
use std::io::{self, Read};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReadError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] CsvError),
}

pub type RowIter<T> = Box<dyn Iterator<Item = Result<T, ReadError>>>;

/// A source of typed rows.
///
/// Implementors decode an input into a lazy iterator of rows. Failure to
/// open or read the header of the input is returned up front, while a row
/// that cannot be decoded is yielded as an `Err` so callers can skip it and
/// keep going.
pub trait Parser {
    /// Opens `file_path` and decodes its rows.
    fn parse<T>(&self, file_path: &str) -> Result<RowIter<T>, ReadError>
    where
        T: DeserializeOwned + 'static;

    /// Decodes rows from an already opened reader.
    fn parse_reader<T, R>(&self, reader: R) -> Result<RowIter<T>, ReadError>
    where
        T: DeserializeOwned + 'static,
        R: Read + 'static;
}
