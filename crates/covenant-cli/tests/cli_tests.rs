use assert_cmd::Command;
use covenant_artifact::import_artifact;
use covenant_test_utils::{pair_artifact, vault_artifact, write_artifact};
use pretty_assertions::assert_eq;
use tempfile::TempDir;

fn covenant() -> Command {
    #[allow(deprecated)]
    Command::cargo_bin("covenant").unwrap()
}

fn stdout_of(cmd: &mut Command) -> String {
    let output = cmd.assert().success().get_output().stdout.clone();
    String::from_utf8(output).unwrap()
}

#[test]
fn specialize_with_yaml_bindings() {
    let dir = TempDir::new().unwrap();
    let input = write_artifact(dir.path(), "pair.json", &pair_artifact());
    let bindings = dir.path().join("bindings.yaml");
    std::fs::write(&bindings, "- ~\n- 16\n").unwrap();
    let output = dir.path().join("out.json");

    let stdout = stdout_of(
        covenant()
            .arg("specialize")
            .arg(&input)
            .arg("--bindings")
            .arg(&bindings)
            .arg("--out")
            .arg(&output),
    );
    assert!(stdout.starts_with("Pair: 2 -> 1 constructor input(s)"));

    let written = import_artifact(&output).unwrap();
    assert_eq!(written.constructor_inputs.len(), 1);
    assert_eq!(written.constructor_inputs[0].name, "a");
    assert_eq!(written.functions[0].asm, ["$a", "10", "OP_ADD", "OP_VERIFY"]);
}

#[test]
fn specialize_failure_exits_nonzero_without_output() {
    let dir = TempDir::new().unwrap();
    let input = write_artifact(dir.path(), "vault.json", &vault_artifact());
    let bindings = dir.path().join("bindings.json");
    // 16 bytes is not an x-only key
    std::fs::write(&bindings, r#"["00112233445566778899aabbccddeeff"]"#).unwrap();
    let output = dir.path().join("out.json");

    let assert = covenant()
        .args(["specialize", "-b"])
        .arg(&bindings)
        .arg("-o")
        .arg(&output)
        .arg(&input)
        .assert()
        .failure();
    let stderr = String::from_utf8_lossy(&assert.get_output().stderr).into_owned();
    assert!(stderr.contains("failed to specialize Vault"), "stderr: {stderr}");
    assert!(!output.exists());
}

#[test]
fn specialize_missing_artifact_fails() {
    let dir = TempDir::new().unwrap();
    covenant()
        .arg("specialize")
        .arg(dir.path().join("absent.json"))
        .arg("--out")
        .arg(dir.path().join("out.json"))
        .assert()
        .failure();
}

#[test]
fn inspect_text() {
    let dir = TempDir::new().unwrap();
    let input = write_artifact(dir.path(), "vault.json", &vault_artifact());

    let stdout = stdout_of(covenant().arg("inspect").arg(&input));
    assert!(stdout.starts_with("contract Vault ("));
    assert!(stdout.contains("  delay: number\n"));
    assert!(stdout.contains("spend (1 inputs, 1 requirements, 2 instructions) uses $owner"));
}

#[test]
fn inspect_json() {
    let dir = TempDir::new().unwrap();
    let input = write_artifact(dir.path(), "pair.json", &pair_artifact());

    let stdout = stdout_of(covenant().args(["inspect", "--json"]).arg(&input));
    let report: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(report["contractName"], "Pair");
    assert_eq!(report["constructorInputs"].as_array().map(Vec::len), Some(2));
    assert_eq!(report["functions"][0]["placeholders"], serde_json::json!(["$a", "$b"]));
}

#[test]
fn no_subcommand_is_usage_error() {
    covenant().assert().failure();
}
