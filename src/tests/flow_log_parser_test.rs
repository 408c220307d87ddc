#[cfg(test)]
mod tests {
    use crate::lookup_table::LookupTable;
    use crate::parsers::flow_log_parser::parse_line;
    use crate::protocol_map::ProtocolMap;
    use crate::records::flow_log_record::{
        FlowKey, FlowLogColumn, FlowLogRecord, LineError, Port, Protocol,
    };

    const LINE: &str = "2 123456789012 eni-0a1b2c3d 10.0.1.201 198.51.100.2 443 49153 6 25 20000 1620140761 1620140821 ACCEPT OK";
    const NODATA_LINE: &str =
        "2 123456789012 eni-1235b8ca - - - - - - - 1431280876 1431280934 - NODATA";

    fn setup_protocol_map() -> ProtocolMap {
        ProtocolMap::from_reader("Decimal,Keyword\n6,TCP\n17,UDP\n1,ICMP\n".as_bytes()).unwrap()
    }

    #[test]
    fn test_record_columns() {
        let record = FlowLogRecord::from_line(LINE).unwrap();
        assert_eq!(record.get(FlowLogColumn::Version), "2");
        assert_eq!(record.dstport(), "443");
        assert_eq!(record.get(FlowLogColumn::SrcPort), "49153");
        assert_eq!(record.protocol(), "6");
        assert_eq!(record.get(FlowLogColumn::LogStatus), "OK");
    }

    #[test]
    fn test_parse_valid_line() {
        let key = parse_line(LINE, &setup_protocol_map()).unwrap();
        assert_eq!(key, FlowKey::new(443, Protocol::Named("tcp".to_string())));
    }

    #[test]
    fn test_service_port_column_is_tagged() {
        let mut lookup = LookupTable::default();
        lookup.insert(443, "tcp", "sv_P2".to_string());

        let key = parse_line(LINE, &setup_protocol_map()).unwrap();
        assert_eq!(lookup.tag(&key), Some("sv_P2"));
    }

    #[test]
    fn test_any_whitespace_separates_fields() {
        let line = LINE.replace(' ', "\t  ");
        let key = parse_line(&line, &setup_protocol_map()).unwrap();
        assert_eq!(key.dstport, Port::Number(443));
    }

    #[test]
    fn test_thirteen_fields_rejected() {
        let line = LINE.rsplit_once(' ').unwrap().0;
        assert_eq!(
            parse_line(line, &setup_protocol_map()),
            Err(LineError::FieldCount { found: 13 })
        );
    }

    #[test]
    fn test_fifteen_fields_rejected() {
        let line = format!("{} extra", LINE);
        assert_eq!(
            parse_line(&line, &setup_protocol_map()),
            Err(LineError::FieldCount { found: 15 })
        );
    }

    #[test]
    fn test_unknown_protocol_is_undefined() {
        let line = LINE.replace(" 6 25 ", " 99 25 ");
        let key = parse_line(&line, &setup_protocol_map()).unwrap();
        assert_eq!(key.protocol, Protocol::Undefined);
    }

    #[test]
    fn test_nodata_line_keeps_raw_port() {
        let key = parse_line(NODATA_LINE, &setup_protocol_map()).unwrap();
        assert_eq!(key.dstport, Port::Raw("-".to_string()));
        assert_eq!(key.protocol, Protocol::Undefined);
        assert_eq!(key.dstport.to_string(), "-");
    }

    #[test]
    fn test_line_error_message() {
        let err = LineError::FieldCount { found: 3 };
        assert_eq!(err.to_string(), "expected 14 fields, found 3");
    }
}
