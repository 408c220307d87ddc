use std::collections::BTreeMap;
use std::io::BufRead;

use log::{debug, info};

use crate::lookup_table::LookupTable;
use crate::parsers::{flow_log_parser::parse_line, parser::ReadError};
use crate::protocol_map::ProtocolMap;
use crate::records::flow_log_record::FlowKey;

/// Tag applied to flows with no lookup entry.
pub const UNTAGGED: &str = "Untagged";

/// Tallies per tag and per (port, protocol) pair.
///
/// Both tables are ordered maps so the report comes out in the same order on
/// every run. `Untagged` is present from the start, even if nothing falls
/// into it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlowCounts {
    tags: BTreeMap<String, u64>,
    port_protocol: BTreeMap<FlowKey, u64>,
    pub lines_read: u64,
    pub lines_skipped: u64,
}

impl FlowCounts {
    pub fn new() -> Self {
        let mut tags = BTreeMap::new();
        tags.insert(UNTAGGED.to_string(), 0);

        Self {
            tags,
            port_protocol: BTreeMap::new(),
            lines_read: 0,
            lines_skipped: 0,
        }
    }

    /// Counts one flow under its tag and its (port, protocol) pair.
    pub fn record(&mut self, key: &FlowKey, lookup: &LookupTable) {
        let tag = lookup.tag(key).unwrap_or(UNTAGGED);
        *self.tags.entry(tag.to_string()).or_insert(0) += 1;
        *self.port_protocol.entry(key.clone()).or_insert(0) += 1;
    }

    pub fn tag_counts(&self) -> impl Iterator<Item = (&str, u64)> {
        self.tags.iter().map(|(tag, &count)| (tag.as_str(), count))
    }

    pub fn port_protocol_counts(&self) -> impl Iterator<Item = (&FlowKey, u64)> {
        self.port_protocol.iter().map(|(key, &count)| (key, count))
    }

    #[cfg(test)]
    pub fn tag_count(&self, tag: &str) -> u64 {
        self.tags.get(tag).copied().unwrap_or(0)
    }

    #[cfg(test)]
    pub fn pair_count(&self, key: &FlowKey) -> u64 {
        self.port_protocol.get(key).copied().unwrap_or(0)
    }

    /// Number of flows counted, equal to the sum over either table.
    pub fn records(&self) -> u64 {
        self.tags.values().sum()
    }
}

impl Default for FlowCounts {
    fn default() -> Self {
        Self::new()
    }
}

/// Reads flow log lines from `reader` and counts every valid one.
///
/// Lines without the full set of columns are skipped and only show up in
/// `lines_skipped`. Blank lines are ignored entirely. An I/O error while reading aborts the pass.
pub fn aggregate<R: BufRead>(
    reader: R,
    protocols: &ProtocolMap,
    lookup: &LookupTable,
) -> Result<FlowCounts, ReadError> {
    let mut counts = FlowCounts::new();

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        counts.lines_read += 1;

        match parse_line(&line, protocols) {
            Ok(key) => counts.record(&key, lookup),
            Err(err) => {
                debug!("Skipping flow log line {}: {}", index + 1, err);
                counts.lines_skipped += 1;
            }
        }
    }

    info!(
        "Counted {} flow records, skipped {} of {} lines",
        counts.records(),
        counts.lines_skipped,
        counts.lines_read
    );

    Ok(counts)
}
