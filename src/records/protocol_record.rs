use serde::Deserialize;

/// One row of the IANA protocol number registry.
///
/// Only the two columns used for name resolution are decoded, the rest of
/// the registry (`Protocol`, `IPv6 Extension Header`, `Reference`) is ignored.
#[derive(Debug, Deserialize)]
pub struct ProtocolRecord {
    #[serde(rename = "Decimal")]
    pub decimal: String,
    #[serde(rename = "Keyword", default)]
    pub keyword: String,
}
