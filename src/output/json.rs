//! JSON output for subnet data.

use crate::models::Subnet;

/// Serialize subnets as a pretty printed JSON array.
pub fn subnets_json(subnets: &[Subnet]) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(subnets)
}
