#[cfg(test)]
mod tests {
    use crate::flow_counts::FlowCounts;
    use crate::lookup_table::LookupTable;
    use crate::output::render_report;
    use crate::records::flow_log_record::{FlowKey, Port, Protocol};

    fn named(port: u16, protocol: &str) -> FlowKey {
        FlowKey::new(port, Protocol::Named(protocol.to_string()))
    }

    fn render(counts: &FlowCounts) -> String {
        let mut out = Vec::new();
        render_report(counts, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_empty_report() {
        let report = render(&FlowCounts::new());
        assert_eq!(
            report,
            "Tag Counts:\nTag,Count\nUntagged,0\n\nPort/Protocol Combination Counts:\nPort,Protocol,Count\n"
        );
    }

    #[test]
    fn test_report_is_sorted() {
        let mut lookup = LookupTable::default();
        lookup.insert(443, "tcp", "sv_P2".to_string());
        lookup.insert(25, "tcp", "sv_P1".to_string());
        lookup.insert(993, "tcp", "email".to_string());

        let mut counts = FlowCounts::new();
        for key in [
            named(993, "tcp"),
            named(443, "tcp"),
            named(25, "tcp"),
            named(443, "tcp"),
            named(1024, "udp"),
            named(1024, "tcp"),
            FlowKey::new(80, Protocol::Undefined),
            FlowKey {
                dstport: Port::Raw("-".to_string()),
                protocol: Protocol::Undefined,
            },
        ] {
            counts.record(&key, &lookup);
        }

        let expected = "\
Tag Counts:
Tag,Count
Untagged,4
email,1
sv_P1,1
sv_P2,2

Port/Protocol Combination Counts:
Port,Protocol,Count
25,tcp,1
80,undefined,1
443,tcp,2
993,tcp,1
1024,tcp,1
1024,udp,1
-,undefined,1
";
        assert_eq!(render(&counts), expected);
    }
}
