use std::process::Command;
use tempfile::TempDir;

fn relay_command(dir: &TempDir) -> Command {
    let mut command = Command::new(env!("CARGO_BIN_EXE_chat-relay"));
    command
        .current_dir(dir.path())
        .env_remove("GEMINI_API_KEY")
        .env_remove("GEMINI_MODEL")
        .env_remove("GEMINI_BASE_URL")
        .env_remove("HOST")
        .env_remove("PORT")
        .env_remove("RUST_LOG")
        .env_remove("CONFIG_PATH");
    command
}

#[test]
fn test_missing_api_key_refuses_to_start() {
    let dir = tempfile::tempdir().unwrap();

    let output = relay_command(&dir).output().unwrap();

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Failed to load configuration"), "stderr: {stderr}");
    assert!(stderr.contains("GEMINI_API_KEY"), "stderr: {stderr}");
}

#[test]
fn test_blank_api_key_in_config_file_refuses_to_start() {
    let dir = tempfile::tempdir().unwrap();
    let config_path = dir.path().join("relay.yaml");
    std::fs::write(&config_path, "provider:\n  api_key: \"\"\nserver:\n  port: 0\n").unwrap();

    let output = relay_command(&dir)
        .env("CONFIG_PATH", &config_path)
        .output()
        .unwrap();

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("GEMINI_API_KEY"));
}

#[test]
fn test_explicit_missing_config_file_refuses_to_start() {
    let dir = tempfile::tempdir().unwrap();

    let output = relay_command(&dir)
        .env("GEMINI_API_KEY", "test-api-key")
        .env("CONFIG_PATH", dir.path().join("absent.yaml"))
        .output()
        .unwrap();

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("absent.yaml"));
}

#[test]
fn test_invalid_log_level_refuses_to_start() {
    let dir = tempfile::tempdir().unwrap();

    let output = relay_command(&dir)
        .env("GEMINI_API_KEY", "test-api-key")
        .env("RUST_LOG", "verbose")
        .output()
        .unwrap();

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Invalid log level"));
}

#[test]
fn test_directive_list_log_filter_is_accepted() {
    let dir = tempfile::tempdir().unwrap();

    // An unparsable host stops startup right after logging is initialized
    let output = relay_command(&dir)
        .env("GEMINI_API_KEY", "test-api-key")
        .env("RUST_LOG", "chat_relay=debug,tower_http=info")
        .env("HOST", "not-an-address")
        .output()
        .unwrap();

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(!stderr.contains("Invalid log level"), "stderr: {stderr}");
    assert!(stderr.contains("Address parse error"), "stderr: {stderr}");
}

#[test]
fn test_malformed_directive_list_refuses_to_start() {
    let dir = tempfile::tempdir().unwrap();

    let output = relay_command(&dir)
        .env("GEMINI_API_KEY", "test-api-key")
        .env("RUST_LOG", "chat_relay=loud,tower_http=info")
        .output()
        .unwrap();

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Invalid log level"));
}
