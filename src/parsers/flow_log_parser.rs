use crate::protocol_map::ProtocolMap;
use crate::records::flow_log_record::{FlowKey, FlowLogRecord, LineError, Port};

/// Decodes one flow log line into the key it is tagged and counted by.
///
/// Only the field count is validated. A destination port that is not a
/// number stays `Port::Raw`, and a protocol number the registry does not
/// know becomes `Protocol::Undefined`; both lines still count.
pub fn parse_line(line: &str, protocols: &ProtocolMap) -> Result<FlowKey, LineError> {
    let record = FlowLogRecord::from_line(line)?;

    Ok(FlowKey {
        dstport: Port::parse(record.dstport()),
        protocol: protocols.resolve(record.protocol()),
    })
}
