use crate::errors::BenchReportError;
use crate::results::BenchmarkRecord;

/// Reference codec whose throughput anchors the per-group ratio column.
pub const BASELINE_TARGET: &str = "lzma2+bcj";

/// Lower bound on the baseline rate in MB/s. Keeps the ratio column finite
/// when the reference measurement is anomalously fast.
pub const BASELINE_FLOOR: f64 = 0.1;

const BYTES_PER_MB: f64 = 1_000_000.0;

#[derive(Clone, Debug, PartialEq)]
pub struct ReportRow {
    pub target: String,
    pub speed: String,
    pub rate: String,
    pub ratio: String,
    pub min: String,
    pub max: String,
    pub mean: String,
}

impl ReportRow {
    pub fn cells(&self) -> [&str; 7] {
        [
            &self.target,
            &self.speed,
            &self.rate,
            &self.ratio,
            &self.min,
            &self.max,
            &self.mean,
        ]
    }
}

/// Throughput in bytes/sec for one record. The harness may have populated
/// `extra_info.rate` already; otherwise it is derived from the data size and
/// the mean elapsed time.
pub fn effective_rate(record: &BenchmarkRecord) -> Result<f64, BenchReportError> {
    if record.stats.mean <= 0.0 {
        return Err(BenchReportError::invalid_measurement(format!(
            "{}: non-positive mean duration {}",
            record.params.name, record.stats.mean
        )));
    }
    if let Some(rate) = record.extra_info.rate {
        return Ok(rate);
    }
    match record.extra_info.data_size {
        Some(size) => Ok(size / record.stats.mean),
        None => Err(BenchReportError::invalid_measurement(format!(
            "{}: no data_size and no precomputed rate",
            record.params.name
        ))),
    }
}

pub fn rate_mbps(record: &BenchmarkRecord) -> Result<f64, BenchReportError> {
    effective_rate(record).map(|rate| rate / BYTES_PER_MB)
}

/// Display rounding tier: two decimals below 10 MB/s, one above.
pub fn round_rate(rate_mbps: f64) -> f64 {
    if rate_mbps < 10.0 {
        (rate_mbps * 100.0).round() / 100.0
    } else {
        (rate_mbps * 10.0).round() / 10.0
    }
}

/// Baseline rate in MB/s for a group: the last record in the full sequence
/// whose target name equals `sentinel` and whose group matches wins
/// (last-write-wins). Clamped to `BASELINE_FLOOR` when found; 1.0 when the
/// group holds no sentinel record, so ratios fall back to raw MB/s.
pub fn select_baseline(
    benchmarks: &[BenchmarkRecord],
    group: &str,
    sentinel: &str,
) -> Result<f64, BenchReportError> {
    let found = benchmarks
        .iter()
        .filter(|bm| bm.group == group && bm.params.name == sentinel)
        .try_fold(None, |_, bm| rate_mbps(bm).map(Some))?;
    Ok(match found {
        Some(rate) => rate.max(BASELINE_FLOOR),
        None => 1.0,
    })
}

/// Build the rows for one group, preserving the source order of matching
/// records. Rounding happens here, at render time only; the ratio column is
/// computed from the exact rate, never from the rounded display value.
pub fn rows_for_group(
    benchmarks: &[BenchmarkRecord],
    group: &str,
    sentinel: &str,
) -> Result<Vec<ReportRow>, BenchReportError> {
    let baseline = select_baseline(benchmarks, group, sentinel)?;
    benchmarks
        .iter()
        .filter(|bm| bm.group == group)
        .map(|bm| build_row(bm, baseline))
        .collect()
}

fn build_row(record: &BenchmarkRecord, baseline: f64) -> Result<ReportRow, BenchReportError> {
    let mbps = rate_mbps(record)?;
    let speed = if mbps < 10.0 {
        format!("{:.2}", round_rate(mbps))
    } else {
        format!("{:.1}", round_rate(mbps))
    };
    let rate = format!("x {}", format_ratio(mbps / baseline));
    let ratio = match record.extra_info.ratio {
        Some(ratio) => format!("{:.1}", (ratio * 100.0 * 10.0).round() / 10.0),
        None => String::new(),
    };
    Ok(ReportRow {
        target: record.params.name.clone(),
        speed,
        rate,
        ratio,
        min: format_seconds(record.stats.min),
        max: format_seconds(record.stats.max),
        mean: format_seconds(record.stats.mean),
    })
}

// Shortest representation of the ratio after rounding to two decimals, with
// integral values keeping a trailing ".0" (so "x 2.0", not "x 2").
fn format_ratio(value: f64) -> String {
    let rounded = (value * 100.0).round() / 100.0;
    if rounded.fract() == 0.0 {
        format!("{rounded:.1}")
    } else {
        format!("{rounded}")
    }
}

// %g-style formatting for the timing columns: six significant digits,
// trailing zeros trimmed, scientific notation when the exponent leaves the
// fixed-point range.
fn format_seconds(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    let sci = format!("{value:.5e}");
    let Some((mantissa, exp)) = sci.split_once('e') else {
        return sci;
    };
    let exp: i32 = exp.parse().unwrap_or(0);
    if (-4..6).contains(&exp) {
        let decimals = (5 - exp).max(0) as usize;
        trim_fraction(&format!("{value:.decimals$}")).to_string()
    } else {
        let mantissa = trim_fraction(mantissa);
        let sign = if exp < 0 { '-' } else { '+' };
        format!("{mantissa}e{sign}{:02}", exp.abs())
    }
}

fn trim_fraction(s: &str) -> &str {
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.')
    } else {
        s
    }
}
