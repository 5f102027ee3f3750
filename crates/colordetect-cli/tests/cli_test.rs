use colordetect_cli::{CliConfig, run, run_with_config};
use colordetect_model::model_data;
use tempfile::tempdir;

fn args(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

#[test]
fn test_no_command_is_an_error() {
    let err = run(&[]).unwrap_err();
    assert!(err.to_string().contains("No command provided"));
}

#[test]
fn test_unknown_command() {
    let err = run(&args(&["convert"])).unwrap_err();
    assert_eq!(err.to_string(), "Unknown command: convert");
}

#[test]
fn test_help_and_version() {
    assert!(run(&args(&["help"])).is_ok());
    assert!(run(&args(&["--help"])).is_ok());
    assert!(run(&args(&["-v"])).is_ok());
}

#[test]
fn test_info_command() {
    assert!(run(&args(&["info"])).is_ok());
    assert!(run(&args(&["info", "--json"])).is_ok());
    assert!(run(&args(&["info", "--yaml"])).is_err());
}

#[test]
fn test_verify_command() {
    assert!(run(&args(&["verify"])).is_ok());
    assert!(run(&args(&["verify", "--fast"])).is_err());
}

#[test]
fn test_dump_writes_exact_bytes() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("model.tflite");

    run(&args(&["dump", path.to_str().unwrap()])).unwrap();

    let written = std::fs::read(&path).unwrap();
    assert_eq!(written.as_slice(), model_data());
}

#[test]
fn test_dump_requires_one_target() {
    let err = run(&args(&["dump"])).unwrap_err();
    assert!(err.to_string().contains("output path"));
    assert!(run(&args(&["dump", "a", "b"])).is_err());
}

#[test]
fn test_dump_into_missing_directory_fails() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("missing").join("model.tflite");

    let io_err = std::fs::write(&path, b"").unwrap_err();
    let err = run(&args(&["dump", path.to_str().unwrap()])).unwrap_err();
    let message = err.to_string();
    assert!(message.contains("Failed to write model"), "message: {}", message);
    assert!(message.contains(&io_err.to_string()), "cause missing from: {}", message);
}

#[test]
fn test_hexdump_command() {
    let config = CliConfig {
        hexdump_limit: 16,
        ..CliConfig::default()
    };
    assert!(run_with_config(&args(&["hexdump"]), &config).is_ok());
    assert!(run_with_config(&args(&["hexdump", "--offset", "4", "--length", "4"]), &config).is_ok());
    assert!(run_with_config(&args(&["hexdump", "--offset", "1000000"]), &config).is_ok());
    assert!(run_with_config(&args(&["hexdump", "--length"]), &config).is_err());
    assert!(run_with_config(&args(&["hexdump", "--width", "8"]), &config).is_err());
}
