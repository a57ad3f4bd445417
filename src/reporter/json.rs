//! JSON report generator

use crate::partitioner::PartitionResult;
use crate::reporter::Reporter;
use anyhow::Result;

pub struct JsonReporter;

impl Reporter for JsonReporter {
    fn generate(result: &PartitionResult) -> Result<String> {
        serde_json::to_string_pretty(result).map_err(|e| e.into())
    }
}
