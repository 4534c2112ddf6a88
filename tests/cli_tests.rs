use std::path::PathBuf;

use assert_cmd::Command;
use benchreport::cli::CommandLineConfig;
use benchreport::table::TableFormat;

const SAMPLE_DOC: &str = r#"{
    "machine_info": {
        "system": "Linux",
        "release": "6.1.0",
        "cpu": {"brand_raw": "TestCPU", "hz_actual_friendly": "3.0000 GHz"},
        "python_implementation": "CPython",
        "python_version": "3.11.4",
        "python_compiler": "GCC 12.2.0",
        "machine": "x86_64"
    },
    "commit_info": {"id": "abc123", "branch": "main", "time": "2024-05-01T12:00:00+00:00"},
    "benchmarks": [
        {
            "group": "compress",
            "params": {"name": "lzma2+bcj"},
            "extra_info": {"data_size": 1000000.0, "ratio": 0.37},
            "stats": {"min": 0.09, "max": 0.12, "mean": 0.1}
        },
        {
            "group": "compress",
            "params": {"name": "zstd"},
            "extra_info": {"data_size": 1000000.0, "ratio": 0.29},
            "stats": {"min": 0.04, "max": 0.06, "mean": 0.05}
        }
    ]
}"#;

#[test]
fn test_cli_exits_with_success_on_help() {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_benchreport"));
    cmd.arg("--help");
    cmd.assert().success();
}

#[test]
fn test_cli_renders_plain_report() {
    let path = temp_results_path("benchreport_cli_plain.json");
    std::fs::write(&path, SAMPLE_DOC).expect("write sample");
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_benchreport"));
    cmd.arg(path.to_str().unwrap());
    let assert = cmd.assert().success();
    let stdout = String::from_utf8(assert.get_output().stdout.clone()).expect("utf8");
    assert!(stdout.contains("## Benchmark results"));
    assert!(stdout.contains("Machine: Linux 6.1.0 on TestCPU(3.0000 GHz)"));
    assert!(stdout.contains("x 2.0"));
    assert!(!stdout.contains('|'));
}

#[test]
fn test_cli_renders_markdown_report() {
    let path = temp_results_path("benchreport_cli_markdown.json");
    std::fs::write(&path, SAMPLE_DOC).expect("write sample");
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_benchreport"));
    cmd.args([path.to_str().unwrap(), "--markdown"]);
    let assert = cmd.assert().success();
    let stdout = String::from_utf8(assert.get_output().stdout.clone()).expect("utf8");
    assert!(stdout.contains("| target"));
    assert!(stdout.contains("| zstd"));
}

#[test]
fn test_cli_fails_on_malformed_document() {
    let path = temp_results_path("benchreport_cli_malformed.json");
    std::fs::write(&path, "{not json").expect("write sample");
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_benchreport"));
    cmd.arg(path.to_str().unwrap());
    cmd.assert().failure().code(1);
}

#[test]
fn test_cli_fails_without_results_file() {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_benchreport"));
    cmd.assert().failure().code(2);
}

#[test]
fn test_config_parses_positional_and_flag() {
    let config =
        CommandLineConfig::from_args(&["benchreport", "results.json", "--markdown"]).expect("args");
    assert_eq!(config.results_file, PathBuf::from("results.json"));
    assert!(config.markdown);
    assert_eq!(config.format(), TableFormat::Markup);
}

#[test]
fn test_config_defaults_to_plain_format() {
    let config = CommandLineConfig::from_args(&["benchreport", "results.json"]).expect("args");
    assert!(!config.markdown);
    assert_eq!(config.format(), TableFormat::Plain);
}

#[test]
fn test_config_rejects_unknown_flag() {
    let err = CommandLineConfig::from_args(&["benchreport", "results.json", "--json"]).unwrap_err();
    assert!(err.contains("--json"));
}

#[test]
fn test_config_rejects_extra_positional() {
    let err = CommandLineConfig::from_args(&["benchreport", "a.json", "b.json"]).unwrap_err();
    assert!(err.contains("exactly one"));
}

fn temp_results_path(name: &str) -> PathBuf {
    let path = std::env::temp_dir().join(name);
    let _ = std::fs::remove_file(&path);
    path
}
