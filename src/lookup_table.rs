use std::collections::HashMap;

use log::{debug, info, warn};

use crate::parsers::{
    csv_parser::CsvParser,
    parser::{Parser, ReadError, RowIter},
};
use crate::records::{
    flow_log_record::{FlowKey, Port, Protocol},
    lookup_record::LookupRecord,
};

/// Maps (destination port, lowercase protocol) to a tag.
///
/// Protocol names are lowercased on load, so `TCP`, `Tcp` and `tcp` in the
/// table all match a flow resolved to `tcp`. When a key appears more than
/// once the last row wins.
#[derive(Debug, Default)]
pub struct LookupTable {
    // dstport -> protocol -> tag, so a lookup borrows the protocol name
    tags: HashMap<u16, HashMap<String, String>>,
}

impl LookupTable {
    pub fn load(path: &str) -> Result<Self, ReadError> {
        let rows = CsvParser.parse::<LookupRecord>(path)?;
        let table = Self::from_rows(rows);
        info!("Loaded {} lookup entries from {:?}", table.len(), path);
        Ok(table)
    }

    #[cfg(test)]
    pub fn from_reader<R: std::io::Read + 'static>(reader: R) -> Result<Self, ReadError> {
        let rows = CsvParser.parse_reader::<LookupRecord, _>(reader)?;
        Ok(Self::from_rows(rows))
    }

    fn from_rows(rows: RowIter<LookupRecord>) -> Self {
        let mut table = LookupTable::default();

        for (index, row) in rows.enumerate() {
            let record = match row {
                Ok(record) => record,
                Err(err) => {
                    warn!("Skipping lookup row {}: {}", index + 1, err);
                    continue;
                }
            };

            let Ok(dstport) = record.dstport.parse::<u16>() else {
                warn!(
                    "Skipping lookup row {}: invalid dstport {:?}",
                    index + 1,
                    record.dstport
                );
                continue;
            };

            if record.protocol.is_empty() || record.tag.is_empty() {
                warn!("Skipping lookup row {}: missing protocol or tag", index + 1);
                continue;
            }

            table.insert(dstport, &record.protocol, record.tag);
        }

        table
    }

    pub fn insert(&mut self, dstport: u16, protocol: &str, tag: String) {
        let by_protocol = self.tags.entry(dstport).or_default();
        if let Some(previous) = by_protocol.insert(protocol.to_lowercase(), tag) {
            debug!(
                "Lookup entry {},{} redefined, dropping tag {:?}",
                dstport, protocol, previous
            );
        }
    }

    /// The tag for a flow, if any. Flows with a raw port or an undefined
    /// protocol never match.
    pub fn tag(&self, key: &FlowKey) -> Option<&str> {
        let (Port::Number(dstport), Protocol::Named(name)) = (&key.dstport, &key.protocol) else {
            return None;
        };

        self.tags
            .get(dstport)?
            .get(name.as_str())
            .map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.tags.values().map(HashMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }
}
