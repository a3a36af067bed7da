/// End-to-end tests for the CLI
use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;

const DATA: &str = "tests/fixtures/data.json";
const SIMPLE: &str = "tests/fixtures/simple.json";

// Exit code tests for CLI
mod exit_code_tests {
    use super::*;

    /// Exit code 0: Success - normal execution
    #[test]
    fn test_exit_code_success() {
        cargo_bin_cmd!("attack-paths")
            .args(["-d", DATA])
            .assert()
            .code(0);
    }

    /// Exit code 0: --help should return success
    #[test]
    fn test_exit_code_help() {
        cargo_bin_cmd!("attack-paths")
            .arg("--help")
            .assert()
            .code(0)
            .stdout(predicate::str::contains("--exposed-only"));
    }

    /// Exit code 0: --version should return success
    #[test]
    fn test_exit_code_version() {
        cargo_bin_cmd!("attack-paths")
            .arg("--version")
            .assert()
            .code(0)
            .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    }

    /// Exit code 2: Invalid arguments
    #[test]
    fn test_exit_code_invalid_argument() {
        cargo_bin_cmd!("attack-paths")
            .arg("--invalid-option")
            .assert()
            .code(2);
    }

    /// Exit code 2: Invalid format value
    #[test]
    fn test_exit_code_invalid_format() {
        cargo_bin_cmd!("attack-paths")
            .args(["-d", DATA, "-f", "invalid_format"])
            .assert()
            .code(2);
    }

    /// Exit code 2: --serve cannot be combined with one-shot output options
    #[test]
    fn test_exit_code_serve_conflicts_with_output() {
        cargo_bin_cmd!("attack-paths")
            .args(["--serve", "-o", "out.json"])
            .assert()
            .code(2);
    }

    /// Exit code 0: PORT is ignored outside serve mode
    #[test]
    fn test_exit_code_invalid_port_env_ignored_for_query() {
        cargo_bin_cmd!("attack-paths")
            .args(["-d", SIMPLE])
            .env("PORT", "abc")
            .assert()
            .code(0);
    }

    /// Exit code 3: an invalid PORT is reported in serve mode
    #[test]
    fn test_exit_code_invalid_port_env_in_serve_mode() {
        cargo_bin_cmd!("attack-paths")
            .args(["-d", SIMPLE, "--serve"])
            .env("PORT", "abc")
            .assert()
            .code(3)
            .stderr(predicate::str::contains("Invalid PORT environment variable"));
    }

    /// Exit code 3: Application error - non-existent data file
    #[test]
    fn test_exit_code_missing_data_file() {
        cargo_bin_cmd!("attack-paths")
            .args(["-d", "/nonexistent/path/data.json"])
            .assert()
            .code(3)
            .stderr(predicate::str::contains("Data file not found"));
    }

    /// Exit code 3: Application error - data file is not valid JSON
    #[test]
    fn test_exit_code_malformed_data_file() {
        cargo_bin_cmd!("attack-paths")
            .args(["-d", "tests/fixtures/malformed.json"])
            .assert()
            .code(3)
            .stderr(predicate::str::contains("Failed to parse data file"));
    }

    /// Exit code 3: Application error - edge starting at an undeclared service
    #[test]
    fn test_exit_code_undeclared_source() {
        cargo_bin_cmd!("attack-paths")
            .args(["-d", "tests/fixtures/undeclared-source.json"])
            .assert()
            .code(3)
            .stderr(predicate::str::contains("Data integrity error"))
            .stderr(predicate::str::contains("ghost"));
    }

    /// Exit code 3: Application error - sink filter on an undeclared destination
    #[test]
    fn test_exit_code_unresolved_destination() {
        cargo_bin_cmd!("attack-paths")
            .args(["-d", "tests/fixtures/unresolved-destination.json", "--sink-only"])
            .assert()
            .code(3)
            .stderr(predicate::str::contains(
                "Unresolved destination node 'phantom-db'",
            ));
    }

    /// Exit code 0: the same snapshot is fine without the sink filter
    #[test]
    fn test_exit_code_unresolved_destination_without_sink_filter() {
        cargo_bin_cmd!("attack-paths")
            .args(["-d", "tests/fixtures/unresolved-destination.json"])
            .assert()
            .code(0)
            .stdout(predicate::str::contains("phantom-db"));
    }

    /// Exit code 1: --fail-on-paths with matching paths
    #[test]
    fn test_exit_code_fail_on_paths_detected() {
        cargo_bin_cmd!("attack-paths")
            .args(["-d", DATA, "--exposed-only", "--sink-only", "--fail-on-paths"])
            .assert()
            .code(1)
            .stderr(predicate::str::contains("path(s) matched the active filters"));
    }

    /// Exit code 0: --fail-on-paths when nothing matches
    #[test]
    fn test_exit_code_fail_on_paths_clean() {
        cargo_bin_cmd!("attack-paths")
            .args([
                "-d",
                SIMPLE,
                "--exposed-only",
                "--sink-only",
                "--vulnerable-only",
                "--fail-on-paths",
            ])
            .assert()
            .code(0)
            .stdout(predicate::str::diff("[]\n"));
    }
}

mod output_tests {
    use super::*;
    use serde_json::Value;

    fn json_stdout(args: &[&str]) -> Value {
        let output = cargo_bin_cmd!("attack-paths")
            .args(args)
            .output()
            .expect("failed to run attack-paths");
        assert!(output.status.success());
        serde_json::from_slice(&output.stdout).expect("stdout should be JSON")
    }

    #[test]
    fn test_json_output_is_array_of_paths() {
        let value = json_stdout(&["-d", SIMPLE]);
        assert_eq!(
            value,
            serde_json::json!([
                [{"name": "A"}, {"name": "B"}],
                [{"name": "A"}, {"name": "C", "vulnerable": "CVE-1"}]
            ])
        );
    }

    #[test]
    fn test_json_output_with_all_filters() {
        let value = json_stdout(&[
            "-d",
            DATA,
            "--exposed-only",
            "--sink-only",
            "--vulnerable-only",
        ]);
        let paths = value.as_array().unwrap();
        assert_eq!(paths.len(), 4);
        assert_eq!(paths[0][0]["name"], "web-frontend");
        assert_eq!(paths[0][3]["name"], "orders-db");
    }

    #[test]
    fn test_custom_sink_kind() {
        let value = json_stdout(&["-d", DATA, "--exposed-only", "--sink-only", "--sink-kind", "rds"]);
        let paths = value.as_array().unwrap();
        assert_eq!(paths.len(), 2);
        assert!(paths
            .iter()
            .all(|p| p.as_array().unwrap().last().unwrap()["name"] == "orders-db"));
    }

    #[test]
    fn test_markdown_output() {
        cargo_bin_cmd!("attack-paths")
            .args(["-d", DATA, "-f", "markdown", "--exposed-only", "--sink-only"])
            .assert()
            .code(0)
            .stdout(predicate::str::contains("# Attack Path Report"))
            .stdout(predicate::str::contains("## Summary"))
            .stdout(predicate::str::contains(
                "web-frontend → api-gateway → order-service → orders-db",
            ))
            .stdout(predicate::str::contains("Sink kinds: rds, sqs"));
    }

    #[test]
    fn test_progress_goes_to_stderr() {
        cargo_bin_cmd!("attack-paths")
            .args(["-d", SIMPLE])
            .assert()
            .code(0)
            .stderr(predicate::str::contains("Loading architecture snapshot"))
            .stdout(predicate::str::contains("Loading").not());
    }

    #[test]
    fn test_output_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("paths.json");

        cargo_bin_cmd!("attack-paths")
            .args(["-d", SIMPLE, "-o"])
            .arg(&out)
            .assert()
            .code(0)
            .stdout(predicate::str::is_empty());

        let written = std::fs::read_to_string(&out).unwrap();
        let value: Value = serde_json::from_str(&written).unwrap();
        assert_eq!(value.as_array().unwrap().len(), 2);
    }

    #[test]
    fn test_output_to_missing_directory_fails() {
        cargo_bin_cmd!("attack-paths")
            .args(["-d", SIMPLE, "-o", "/nonexistent/dir/paths.json"])
            .assert()
            .code(3);
    }
}
