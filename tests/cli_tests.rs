//! CLI integration tests

use std::process::Command;

use tempfile::TempDir;

/// Binary with credentials and config isolated from the developer's machine
fn med_translate_bin(config_home: &TempDir) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_med-translate"));
    cmd.env("XDG_CONFIG_HOME", config_home.path())
        .env("HOME", config_home.path())
        .env_remove("DEFAULT_GEMINI_API_KEY")
        .env_remove("GEMINI_API_KEY")
        .env_remove("MED_TRANSLATE_MODEL")
        .env_remove("RUST_LOG")
        .env("NO_COLOR", "1");
    cmd
}

#[test]
fn help_output() {
    let home = TempDir::new().unwrap();
    let output = med_translate_bin(&home)
        .arg("--help")
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("translation"));
    assert!(stdout.contains("--from"));
    assert!(stdout.contains("--to"));
    assert!(stdout.contains("--phrase"));
    assert!(stdout.contains("--listen"));
    assert!(stdout.contains("--speak"));
    assert!(stdout.contains("--api-key"));
    assert!(stdout.contains("session"));
    assert!(!stdout.contains("--gemini-url"));
}

#[test]
fn version_output() {
    let home = TempDir::new().unwrap();
    let output = med_translate_bin(&home)
        .arg("--version")
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("med-translate"));
    assert!(stdout.contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn languages_command() {
    let home = TempDir::new().unwrap();
    let output = med_translate_bin(&home)
        .arg("languages")
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    for name in [
        "English", "Spanish", "French", "German", "Chinese", "Arabic", "Hindi", "Japanese",
    ] {
        assert!(stdout.contains(name), "missing {} in: {}", name, stdout);
    }
}

#[test]
fn phrases_command() {
    let home = TempDir::new().unwrap();
    let output = med_translate_bin(&home)
        .arg("phrases")
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Where does it hurt?"));
    assert!(stdout.contains("Take this medication twice daily"));
    assert!(stdout.contains("I need to examine you"));
}

#[test]
fn config_path_command() {
    let home = TempDir::new().unwrap();
    let output = med_translate_bin(&home)
        .args(["config", "path"])
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("med-translate"));
    assert!(stdout.contains("config.toml"));
}

#[test]
fn config_help() {
    let home = TempDir::new().unwrap();
    let output = med_translate_bin(&home)
        .args(["config", "--help"])
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    for action in ["init", "set", "get", "list", "path"] {
        assert!(stdout.contains(action));
    }
}

#[test]
#[cfg(target_os = "linux")]
fn config_set_then_get() {
    let home = TempDir::new().unwrap();
    let set = med_translate_bin(&home)
        .args(["config", "set", "target_language", "ja"])
        .output()
        .expect("Failed to execute command");
    assert!(set.status.success());

    let get = med_translate_bin(&home)
        .args(["config", "get", "target_language"])
        .output()
        .expect("Failed to execute command");
    assert!(get.status.success());
    assert_eq!(String::from_utf8_lossy(&get.stdout).trim(), "Japanese");
}

#[test]
#[cfg(target_os = "linux")]
fn config_list_masks_api_key() {
    let home = TempDir::new().unwrap();
    let set = med_translate_bin(&home)
        .args(["config", "set", "api_key", "AIzaSyTopSecretValue9876"])
        .output()
        .expect("Failed to execute command");
    assert!(set.status.success());
    assert!(!String::from_utf8_lossy(&set.stderr).contains("TopSecret"));

    let list = med_translate_bin(&home)
        .args(["config", "list"])
        .output()
        .expect("Failed to execute command");
    assert!(list.status.success());
    let stdout = String::from_utf8_lossy(&list.stdout);
    assert!(stdout.contains("AIza...9876"));
    assert!(!stdout.contains("TopSecret"));
}

#[test]
fn invalid_language_is_usage_error() {
    let home = TempDir::new().unwrap();
    let output = med_translate_bin(&home)
        .args(["--to", "klingon", "hello"])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("klingon"), "got: {}", stderr);
}

#[test]
fn invalid_listen_timeout_is_usage_error() {
    let home = TempDir::new().unwrap();
    let output = med_translate_bin(&home)
        .args(["--listen-timeout", "forever", "hello"])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Invalid listen timeout"), "got: {}", stderr);
}

#[test]
fn no_input_is_usage_error() {
    let home = TempDir::new().unwrap();
    let output = med_translate_bin(&home)
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Nothing to translate"), "got: {}", stderr);
}

#[test]
fn text_conflicts_with_listen() {
    let home = TempDir::new().unwrap();
    let output = med_translate_bin(&home)
        .args(["--listen", "hello"])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(2));
}
