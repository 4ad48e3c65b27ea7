use std::process::Command;
use std::path::Path;
use std::collections::HashMap;
use anyhow::{anyhow, Result};

fn run_sample(extra_args: &[&str]) -> Result<String> {
    let binary_path = env!("CARGO_BIN_EXE_transfer-wizard");
    let session_path = Path::new("samples").join("session.csv");

    let output = Command::new(binary_path)
        .arg(session_path)
        .args(extra_args)
        .output()?;

    assert!(output.status.success());

    Ok(String::from_utf8(output.stdout)?)
}

#[test]
fn test_cli_writes_one_row_per_submitted_transfer() -> Result<()> {
    let stdout = run_sample(&[])?;
    let mut lines = stdout.lines();

    assert_eq!(lines.next(), Some("transfer,country,amount_usd,fee_usd,rate,received,currency,recipient"));

    let rows: Vec<&str> = lines.collect();

    assert_eq!(rows.len(), 2);

    for row in rows {
        let fields: Vec<&str> = row.split(',').collect();

        assert_eq!(fields.len(), 8);

        let _: u32 = fields[0].parse()?;
        let _: f64 = fields[2].parse()?;
        let _: f64 = fields[3].parse()?;
        let _: f64 = fields[5].parse()?;
    }

    Ok(())
}

#[test]
fn test_cli_uses_fallback_rates_without_rates_file() -> Result<()> {
    let stdout = run_sample(&["error"])?;
    let results = collect_rows(&stdout);

    let first = results.get("1").ok_or_else(|| anyhow!("transfer 1 missing from output"))?;

    assert_eq!(first, &vec!["GB", "100", "10", "0.8", "72", "GBP", "Jane Doe"]);

    let second = results.get("2").ok_or_else(|| anyhow!("transfer 2 missing from output"))?;

    // fee 50, net 200 * 18.5
    assert_eq!(second, &vec!["ZA", "250", "50", "18.5", "3700", "ZAR", "Sipho Dlamini"]);

    Ok(())
}

#[test]
fn test_cli_applies_rates_file() -> Result<()> {
    let rates_path = Path::new("samples").join("rates.csv");
    let rates_arg = rates_path.to_str().ok_or_else(|| anyhow!("Non UTF-8 rates path"))?;

    let stdout = run_sample(&["error", rates_arg])?;
    let results = collect_rows(&stdout);

    let first = results.get("1").ok_or_else(|| anyhow!("transfer 1 missing from output"))?;

    // 90 * 0.74 = 66.6
    assert_eq!(first[3], "0.74");
    assert_eq!(first[4], "67");

    let second = results.get("2").ok_or_else(|| anyhow!("transfer 2 missing from output"))?;

    // 200 * 17.75 = 3550
    assert_eq!(second[4], "3550");

    Ok(())
}

fn collect_rows(stdout: &str) -> HashMap<String, Vec<String>> {
    let mut results = HashMap::new();

    for line in stdout.lines().skip(1) {
        let fields: Vec<String> = line.split(',').map(str::to_string).collect();
        results.insert(fields[0].clone(), fields[1..].to_vec());
    }

    results
}

#[test]
fn test_cli_fails_when_session_script_is_missing() -> Result<()> {
    let binary_path = env!("CARGO_BIN_EXE_transfer-wizard");

    let output = Command::new(binary_path)
        .arg(Path::new("samples").join("no_such_session.csv"))
        .output()?;

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());

    Ok(())
}
