use serde::Deserialize;

/// One row of the tag lookup table.
#[derive(Debug, Deserialize)]
pub struct LookupRecord {
    pub dstport: String,
    #[serde(default)]
    pub protocol: String,
    #[serde(default)]
    pub tag: String,
}
