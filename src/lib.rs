//! Benchmark result aggregation and comparison reporting.
//! Loads a harness-produced results document and renders ranked per-group
//! throughput tables with a machine/commit summary header.

pub mod cli;
pub mod errors;
pub mod rate;
pub mod report;
pub mod results;
pub mod table;

pub use crate::errors::BenchReportError;
pub use crate::rate::{BASELINE_FLOOR, BASELINE_TARGET, ReportRow};
pub use crate::report::{generate_report, generate_report_with, render_metainfo};
pub use crate::results::{BenchmarkRecord, CommitInfo, MachineInfo, ResultSet, load_results};
pub use crate::table::TableFormat;
