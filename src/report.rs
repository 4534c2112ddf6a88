use crate::errors::BenchReportError;
use crate::rate::{BASELINE_TARGET, rows_for_group};
use crate::results::ResultSet;
use crate::table::{TableFormat, render_table};

pub const COMPRESS_GROUP: &str = "compress";
pub const DECOMPRESS_GROUP: &str = "decompress";

/// Three-line machine/commit summary. All fields are opaque pass-through
/// strings validated at load time.
pub fn render_metainfo(results: &ResultSet) -> String {
    let machine = &results.machine_info;
    let commit = &results.commit_info;
    let mut out = format!(
        "Machine: {} {} on {}({})\n",
        machine.system, machine.release, machine.cpu.brand_raw, machine.cpu.hz_actual_friendly
    );
    out.push_str(&format!(
        "Python: {} {} [{} {}]\n",
        machine.python_implementation,
        machine.python_version,
        machine.python_compiler,
        machine.machine
    ));
    out.push_str(&format!(
        "Commit: {} on {} in {}\n",
        commit.id, commit.branch, commit.time
    ));
    out
}

/// Assemble the full report. Both group tables are computed before any text
/// is returned, so a failing row never yields a partial report.
pub fn generate_report(
    results: &ResultSet,
    format: TableFormat,
) -> Result<String, BenchReportError> {
    generate_report_with(results, format, BASELINE_TARGET)
}

pub fn generate_report_with(
    results: &ResultSet,
    format: TableFormat,
    sentinel: &str,
) -> Result<String, BenchReportError> {
    let compress = rows_for_group(&results.benchmarks, COMPRESS_GROUP, sentinel)?;
    let decompress = rows_for_group(&results.benchmarks, DECOMPRESS_GROUP, sentinel)?;
    let mut body = String::from("## Benchmark results\n\n");
    body.push_str(&render_metainfo(results));
    body.push_str("\n\n### Compression benchmarks\n\n");
    body.push_str(&render_table(&compress, format));
    body.push_str("\n\n### Decompression benchmarks\n\n");
    body.push_str(&render_table(&decompress, format));
    Ok(body)
}
