use std::collections::HashMap;

use log::{debug, info, warn};

use crate::parsers::{
    csv_parser::CsvParser,
    parser::{Parser, ReadError, RowIter},
};
use crate::records::{flow_log_record::Protocol, protocol_record::ProtocolRecord};

/// Protocol numbers to lowercase keywords, loaded once from the IANA registry.
#[derive(Debug, Default)]
pub struct ProtocolMap {
    by_decimal: HashMap<u8, String>,
}

impl ProtocolMap {
    pub fn load(path: &str) -> Result<Self, ReadError> {
        let rows = CsvParser.parse::<ProtocolRecord>(path)?;
        let map = Self::from_rows(rows);
        info!("Loaded {} protocol names from {:?}", map.len(), path);
        Ok(map)
    }

    #[cfg(test)]
    pub fn from_reader<R: std::io::Read + 'static>(reader: R) -> Result<Self, ReadError> {
        let rows = CsvParser.parse_reader::<ProtocolRecord, _>(reader)?;
        Ok(Self::from_rows(rows))
    }

    // Unassigned ranges such as "146-252" and rows without a keyword are
    // not resolvable and get dropped here.
    fn from_rows(rows: RowIter<ProtocolRecord>) -> Self {
        let mut by_decimal = HashMap::new();

        for (index, row) in rows.enumerate() {
            let record = match row {
                Ok(record) => record,
                Err(err) => {
                    warn!("Skipping protocol row {}: {}", index + 1, err);
                    continue;
                }
            };

            let Ok(decimal) = record.decimal.parse::<u8>() else {
                debug!("Skipping protocol row with decimal {:?}", record.decimal);
                continue;
            };

            if record.keyword.is_empty() {
                debug!("Skipping protocol {} without keyword", decimal);
                continue;
            }

            by_decimal.insert(decimal, record.keyword.to_lowercase());
        }

        ProtocolMap { by_decimal }
    }

    pub fn name(&self, decimal: u8) -> Option<&str> {
        self.by_decimal.get(&decimal).map(String::as_str)
    }

    /// Resolves the raw protocol field of a flow log line.
    pub fn resolve(&self, field: &str) -> Protocol {
        match field.parse::<u8>().ok().and_then(|decimal| self.name(decimal)) {
            Some(name) => Protocol::Named(name.to_string()),
            None => Protocol::Undefined,
        }
    }

    pub fn len(&self) -> usize {
        self.by_decimal.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_decimal.is_empty()
    }
}
