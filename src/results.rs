use std::{fs, path::Path};

use serde::{Deserialize, Serialize};

use crate::errors::BenchReportError;

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct CpuInfo {
    pub brand_raw: String,
    pub hz_actual_friendly: String,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct MachineInfo {
    pub system: String,
    pub release: String,
    pub cpu: CpuInfo,
    pub python_implementation: String,
    pub python_version: String,
    pub python_compiler: String,
    pub machine: String,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct CommitInfo {
    pub id: String,
    pub branch: String,
    pub time: String,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct BenchParams {
    pub name: String,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct BenchStats {
    pub min: f64,
    pub max: f64,
    pub mean: f64,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct ExtraInfo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_size: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rate: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ratio: Option<f64>,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct BenchmarkRecord {
    pub group: String,
    pub params: BenchParams,
    #[serde(default)]
    pub extra_info: ExtraInfo,
    pub stats: BenchStats,
}

/// Full parsed results document. Read-only once loaded.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct ResultSet {
    pub machine_info: MachineInfo,
    pub commit_info: CommitInfo,
    pub benchmarks: Vec<BenchmarkRecord>,
}

const REQUIRED_KEYS: [&str; 3] = ["machine_info", "commit_info", "benchmarks"];

pub fn load_results(path: &Path) -> Result<ResultSet, BenchReportError> {
    let content = fs::read_to_string(path)
        .map_err(|e| BenchReportError::parse(format!("cannot read {}: {e}", path.display())))?;
    parse_results(&content)
}

pub fn parse_results(content: &str) -> Result<ResultSet, BenchReportError> {
    let root: serde_json::Value =
        serde_json::from_str(content).map_err(|e| BenchReportError::parse(e.to_string()))?;
    for key in REQUIRED_KEYS {
        if root.get(key).is_none() {
            return Err(BenchReportError::schema(format!(
                "missing top-level key {key}"
            )));
        }
    }
    serde_json::from_value(root).map_err(|e| BenchReportError::schema(e.to_string()))
}
