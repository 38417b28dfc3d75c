use assert_cmd::Command;
use predicates::str::contains;

const BINARY_NAME: &str = "salesdash";

#[test]
/// Help command should display usage information.
fn cli_help_displays_usage() {
    let mut cmd = Command::cargo_bin(BINARY_NAME).unwrap();
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(contains("Command-line arguments"));
}

#[test]
/// The subcommands should be listed in the help output.
fn cli_help_lists_subcommands() {
    let mut cmd = Command::cargo_bin(BINARY_NAME).unwrap();
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(contains("start"))
        .stdout(contains("import"))
        .stdout(contains("export"));
}

#[test]
/// Export requires a format argument.
fn export_without_format_fails() {
    let mut cmd = Command::cargo_bin(BINARY_NAME).unwrap();
    cmd.arg("export");
    cmd.assert().failure().stderr(contains("FORMAT"));
}

#[test]
/// Unknown export formats are rejected by clap.
fn export_rejects_unknown_format() {
    let mut cmd = Command::cargo_bin(BINARY_NAME).unwrap();
    cmd.arg("export").arg("docx");
    cmd.assert().failure().stderr(contains("invalid value"));
}

#[test]
/// Configure should create the config file under the user's home.
fn configure_creates_config_file() {
    let tmp = tempfile::tempdir().expect("create temp dir");
    let config_path = tmp.path().join(".salesdash").join("config.json");

    // Ensure the file does not exist initially
    assert!(!config_path.exists());

    let mut cmd = Command::cargo_bin(BINARY_NAME).unwrap();
    cmd.arg("configure")
        .arg("--base-url")
        .arg("http://localhost:9000")
        .arg("--default-venue")
        .arg("The Crown")
        .env("HOME", tmp.path()) // simulate different $HOME
        .assert()
        .success()
        .stdout(contains("Configuration saved"));

    // Confirm the file was created with the given values
    let contents = std::fs::read_to_string(&config_path).unwrap();
    assert!(contents.contains("http://localhost:9000"));
    assert!(contents.contains("The Crown"));
}

#[test]
/// Importing a missing file should fail without reaching the network.
fn import_missing_file_fails() {
    let tmp = tempfile::tempdir().expect("create temp dir");
    let mut cmd = Command::cargo_bin(BINARY_NAME).unwrap();
    cmd.arg("import")
        .arg(tmp.path().join("does-not-exist.csv"))
        .arg("--base-url")
        .arg("http://localhost:1")
        .env("HOME", tmp.path()); // simulate different $HOME
    cmd.assert().failure().stderr(contains("Import failed"));
}
