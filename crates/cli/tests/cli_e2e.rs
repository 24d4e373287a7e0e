//! End-to-end runs of the `rustful` binary.

use std::io::Write;
use std::process::Command;

use tempfile::TempDir;

fn rustful() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_rustful"));
    cmd.env("RUST_LOG", "rustful=warn");
    cmd
}

fn write_prices(dir: &TempDir, name: &str, prices: &[f64]) -> std::path::PathBuf {
    let path = dir.path().join(name);
    let mut file = std::fs::File::create(&path).unwrap();
    writeln!(file, "Date,Close").unwrap();
    for (i, p) in prices.iter().enumerate() {
        writeln!(file, "2024-01-{:02},{}", i + 1, p).unwrap();
    }
    path
}

#[test]
fn test_var_to_stdout() {
    let dir = TempDir::new().unwrap();
    let input = write_prices(&dir, "prices.csv", &[100.0, 102.0, 101.0, 105.0, 103.0]);

    let out = rustful().arg("var").arg(&input).output().unwrap();
    assert!(out.status.success(), "{}", String::from_utf8_lossy(&out.stderr));

    let json: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    let value = json["value"].as_f64().unwrap();
    assert!((value - 0.019047619047619).abs() < 1e-10);
    assert_eq!(json["observations"], 4);
    assert_eq!(json["parameters"]["method"], "historical_var");
}

#[test]
fn test_config_file_and_output_file() {
    let dir = TempDir::new().unwrap();
    let input = write_prices(&dir, "prices.csv", &[100.0, 102.0, 101.0, 105.0, 103.0]);
    let config = dir.path().join("rustful.json");
    std::fs::write(&config, r#"{"risk": {"periods_per_year": 12}}"#).unwrap();
    let output = dir.path().join("sharpe.json");

    let status = rustful()
        .arg("--config")
        .arg(&config)
        .arg("--output")
        .arg(&output)
        .arg("sharpe")
        .arg(&input)
        .status()
        .unwrap();
    assert!(status.success());

    let json: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&output).unwrap()).unwrap();
    assert_eq!(json["parameters"]["periods_per_year"], 12);
    assert!(json["value"].as_f64().unwrap().is_finite());
}

#[test]
fn test_report_over_several_files() {
    let dir = TempDir::new().unwrap();
    let a = write_prices(&dir, "a.csv", &[100.0, 102.0, 101.0, 105.0, 103.0]);
    let b = write_prices(&dir, "b.csv", &[50.0, 51.0, 49.5, 52.0, 53.5, 52.5]);

    let out = rustful()
        .arg("report")
        .arg(&a)
        .arg(&b)
        .args(["--confidence", "0.9"])
        .output()
        .unwrap();
    assert!(out.status.success());

    let json: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    let reports = json.as_array().unwrap();
    assert_eq!(reports.len(), 2);
    for report in reports {
        assert!(report.get("error").is_none());
        assert!(report["summary"]["value_at_risk"]["value"].is_number());
        assert!(report["summary"]["sharpe_ratio"]["value"].is_number());
    }
}

#[test]
fn test_invalid_input_exit_code() {
    let dir = TempDir::new().unwrap();
    let input = write_prices(&dir, "short.csv", &[100.0, 101.0, 102.0]);

    let out = rustful()
        .arg("decompose")
        .arg(&input)
        .args(["--period", "4"])
        .output()
        .unwrap();
    assert_eq!(out.status.code(), Some(2));
    assert!(out.stdout.is_empty());
}
