use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;
use tempfile::NamedTempFile;

#[test]
fn help_works() -> Result<(), Box<dyn std::error::Error>> {
    Command::new(assert_cmd::cargo::cargo_bin!("cvnorm-cli"))
        .arg("--help")
        .assert()
        .success();
    Ok(())
}

#[test]
fn normalizes_a_file() -> Result<(), Box<dyn std::error::Error>> {
    let input = r#"{
        "type": "(tuple (amount uint) (who principal))",
        "value": {
            "amount": {"type": "uint", "value": "5000"},
            "who": {"type": "principal", "value": "ST1PQHQKV0RJXZFY1DGX8MNSNYVE3VGZJSRTPGZGM"}
        }
    }"#;
    let mut tmp = NamedTempFile::new()?;
    write!(tmp, "{}", input)?;

    let output = Command::new(assert_cmd::cargo::cargo_bin!("cvnorm-cli"))
        .arg(tmp.path())
        .output()?;
    assert!(output.status.success());
    let v: serde_json::Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(
        v,
        serde_json::json!({
            "amount": 5000,
            "who": "ST1PQHQKV0RJXZFY1DGX8MNSNYVE3VGZJSRTPGZGM"
        })
    );
    Ok(())
}

#[test]
fn reads_stdin_and_keeps_big_integers() -> Result<(), Box<dyn std::error::Error>> {
    Command::new(assert_cmd::cargo::cargo_bin!("cvnorm-cli"))
        .write_stdin(r#"{"type":"uint","value":"99999999999999999999"}"#)
        .assert()
        .success()
        .stdout(predicate::str::contains("\"99999999999999999999\""));
    Ok(())
}

#[test]
fn outcome_flag_preserves_success() -> Result<(), Box<dyn std::error::Error>> {
    let input = r#"{
        "type": "(response bool uint)",
        "value": {"type": "bool", "value": true},
        "success": true
    }"#;
    let output = Command::new(assert_cmd::cargo::cargo_bin!("cvnorm-cli"))
        .arg("--outcome")
        .write_stdin(input)
        .output()?;
    assert!(output.status.success());
    let v: serde_json::Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(v, serde_json::json!({"success": true, "value": true}));
    Ok(())
}

#[test]
fn outcome_flag_rejects_non_response_input() -> Result<(), Box<dyn std::error::Error>> {
    Command::new(assert_cmd::cargo::cargo_bin!("cvnorm-cli"))
        .arg("--outcome")
        .write_stdin(r#"{"type":"uint","value":"1"}"#)
        .assert()
        .failure()
        .stderr(predicate::str::contains("(response"));
    Ok(())
}

#[test]
fn malformed_json_fails_with_context() -> Result<(), Box<dyn std::error::Error>> {
    Command::new(assert_cmd::cargo::cargo_bin!("cvnorm-cli"))
        .write_stdin("{not json")
        .assert()
        .failure()
        .stderr(predicate::str::contains("decoding input"));
    Ok(())
}

#[test]
fn pretty_prints_on_request() -> Result<(), Box<dyn std::error::Error>> {
    Command::new(assert_cmd::cargo::cargo_bin!("cvnorm-cli"))
        .arg("--pretty")
        .write_stdin(r#"{"type":"(tuple (a uint))","value":{"a":{"type":"uint","value":"1"}}}"#)
        .assert()
        .success()
        .stdout(predicate::str::contains("{\n  \"a\": 1\n}"));
    Ok(())
}
