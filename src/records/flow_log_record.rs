use std::fmt;
use strum::EnumCount;
use strum_macros::EnumCount;
use thiserror::Error;

/// Column order of a flow log line as it is exported for tagging: the
/// service (destination) port comes before the client port.
///
/// Only `DstPort` and `Protocol` are read, the other columns name the rest
/// of the layout and fix the field count.
#[allow(dead_code)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumCount)]
pub enum FlowLogColumn {
    Version,
    AccountId,
    InterfaceId,
    SrcAddr,
    DstAddr,
    DstPort,
    SrcPort,
    Protocol,
    Packets,
    Bytes,
    Start,
    End,
    Action,
    LogStatus,
}

/// Why a flow log line was not counted.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LineError {
    #[error("expected {expected} fields, found {found}", expected = FlowLogColumn::COUNT)]
    FieldCount { found: usize },
}

/// A flow log line split into its positional fields.
///
/// Construction guarantees exactly `FlowLogColumn::COUNT` fields, so the
/// column accessors never go out of bounds.
#[derive(Debug)]
pub struct FlowLogRecord<'a> {
    fields: Vec<&'a str>,
}

impl<'a> FlowLogRecord<'a> {
    pub fn from_line(line: &'a str) -> Result<Self, LineError> {
        let fields: Vec<&str> = line.split_whitespace().collect();
        if fields.len() != FlowLogColumn::COUNT {
            return Err(LineError::FieldCount {
                found: fields.len(),
            });
        }
        Ok(FlowLogRecord { fields })
    }

    pub fn get(&self, column: FlowLogColumn) -> &'a str {
        self.fields[column as usize]
    }

    pub fn dstport(&self) -> &'a str {
        self.get(FlowLogColumn::DstPort)
    }

    pub fn protocol(&self) -> &'a str {
        self.get(FlowLogColumn::Protocol)
    }
}

/// The destination port of a flow.
///
/// `Raw` keeps a field that is not a port number, such as the `-` of a
/// NODATA record. It is still counted but never matches a lookup entry.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Port {
    Number(u16),
    Raw(String),
}

impl Port {
    pub fn parse(field: &str) -> Self {
        match field.parse::<u16>() {
            Ok(number) => Port::Number(number),
            Err(_) => Port::Raw(field.to_string()),
        }
    }
}

impl fmt::Display for Port {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Port::Number(number) => write!(f, "{}", number),
            Port::Raw(raw) => write!(f, "{}", raw),
        }
    }
}

/// The protocol of a flow after resolving its number.
///
/// `Named` holds the lowercase registry keyword. Every number the registry
/// does not know collapses into `Undefined`, which never matches a lookup
/// entry.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Protocol {
    Named(String),
    Undefined,
}

impl fmt::Display for Protocol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Protocol::Named(name) => write!(f, "{}", name),
            Protocol::Undefined => write!(f, "undefined"),
        }
    }
}

/// The (destination port, protocol) pair a flow is tagged and counted by.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FlowKey {
    pub dstport: Port,
    pub protocol: Protocol,
}

impl FlowKey {
    pub fn new(dstport: u16, protocol: Protocol) -> Self {
        FlowKey {
            dstport: Port::Number(dstport),
            protocol,
        }
    }
}
