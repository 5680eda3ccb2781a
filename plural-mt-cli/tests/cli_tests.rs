use std::fs;
use std::process::Command;
use tempfile::TempDir;

fn plural_mt_cmd() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("plural-mt"))
}

fn stdout_of(output: &std::process::Output) -> String {
    assert!(
        output.status.success(),
        "CLI failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8_lossy(&output.stdout).trim_end().to_string()
}

#[test]
fn test_translate_identity_english_to_czech() {
    let output = plural_mt_cmd()
        .args([
            "translate",
            "--from",
            "en",
            "--to",
            "cs",
            "--text",
            "{count, plural, one {# file} other {# files}}",
        ])
        .output()
        .unwrap();

    assert_eq!(
        stdout_of(&output),
        "{count, plural, one {# file} few {# files} many {# files} other {# files}}"
    );
}

#[test]
fn test_translate_pseudo_from_input_file() {
    let temp_dir = TempDir::new().unwrap();
    let input_file = temp_dir.path().join("message.txt");
    fs::write(&input_file, "{n, plural, one {# apple} other {# apples}}\n").unwrap();

    let output = plural_mt_cmd()
        .args([
            "translate",
            "--from",
            "en",
            "--to",
            "en",
            "--translator",
            "pseudo",
            "-i",
            input_file.to_str().unwrap(),
        ])
        .output()
        .unwrap();

    assert_eq!(
        stdout_of(&output),
        "{n, plural, one {[# apple]} other {[# apples]}}"
    );
}

#[test]
fn test_translate_json_summary() {
    let output = plural_mt_cmd()
        .args([
            "translate",
            "--from",
            "en",
            "--to",
            "ja",
            "--translator",
            "pseudo",
            "--target-language-id",
            "42",
            "--text",
            "{n, plural, other {# days}}",
            "--json",
        ])
        .output()
        .unwrap();

    let value: serde_json::Value = serde_json::from_str(&stdout_of(&output)).unwrap();
    assert_eq!(value["translated_text"], "{n, plural, other {[# days]}}");
    assert_eq!(value["service"], "pseudo");
    assert_eq!(value["target_language_id"], 42);
    assert_eq!(value["context_description"], "pseudo-localized");
    assert!(value["price"].as_u64().unwrap() > 0);
    assert!(value["error"].is_null());
}

#[test]
fn test_examples_for_arabic_target() {
    let output = plural_mt_cmd()
        .args([
            "examples",
            "--from",
            "en",
            "--to",
            "ar",
            "--text",
            "{n, plural, one {# book} other {# books}}",
        ])
        .output()
        .unwrap();

    assert_eq!(
        stdout_of(&output),
        "zero: 0 books\none: 1 book\ntwo: 2 books\nfew: 3 books\nmany: 11 books\nother: 100 books"
    );
}

#[test]
fn test_examples_json() {
    let output = plural_mt_cmd()
        .args([
            "examples",
            "--from",
            "en",
            "--to",
            "ru",
            "--text",
            "{n, plural, one {# day} other {# days}}",
            "--json",
        ])
        .output()
        .unwrap();

    let value: serde_json::Value = serde_json::from_str(&stdout_of(&output)).unwrap();
    assert_eq!(value["one"], "1 day");
    assert_eq!(value["few"], "2 days");
    assert_eq!(value["other"], "0.1 days");
}

#[test]
fn test_config_supplies_languages_and_translator() {
    let temp_dir = TempDir::new().unwrap();
    let config_file = temp_dir.path().join("plural-mt.toml");
    fs::write(
        &config_file,
        r#"
source_language = "en"
target_language = "ru"
translator = "pseudo"
"#,
    )
    .unwrap();

    let output = plural_mt_cmd()
        .args([
            "--config",
            config_file.to_str().unwrap(),
            "translate",
            "--text",
            "{n, plural, other {# items}}",
        ])
        .output()
        .unwrap();

    assert_eq!(
        stdout_of(&output),
        "{n, plural, one {[# items]} few {[# items]} many {[# items]} other {[# items]}}"
    );
}

#[test]
fn test_flags_override_config() {
    let temp_dir = TempDir::new().unwrap();
    let config_file = temp_dir.path().join("plural-mt.toml");
    fs::write(
        &config_file,
        "source_language = \"en\"\ntarget_language = \"ru\"\ntranslator = \"pseudo\"\n",
    )
    .unwrap();

    let output = plural_mt_cmd()
        .args([
            "--config",
            config_file.to_str().unwrap(),
            "translate",
            "--to",
            "ja",
            "--translator",
            "identity",
            "--text",
            "{n, plural, other {# items}}",
        ])
        .output()
        .unwrap();

    assert_eq!(stdout_of(&output), "{n, plural, other {# items}}");
}

#[test]
fn test_missing_target_language_fails() {
    let output = plural_mt_cmd()
        .args(["translate", "--from", "en", "--text", "{n, plural, other {#}}"])
        .output()
        .unwrap();

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Error: --to is required"));
}

#[test]
fn test_non_plural_message_fails() {
    let output = plural_mt_cmd()
        .args(["translate", "--from", "en", "--to", "de", "--text", "Hello"])
        .output()
        .unwrap();

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("missing plural forms"));
}

#[test]
fn test_text_and_input_are_exclusive() {
    let output = plural_mt_cmd()
        .args([
            "examples",
            "--from",
            "en",
            "--to",
            "de",
            "--text",
            "{n, plural, other {#}}",
            "--input",
            "message.txt",
        ])
        .output()
        .unwrap();

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("not both"));
}

#[test]
fn test_invalid_config_reports_path() {
    let temp_dir = TempDir::new().unwrap();
    let config_file = temp_dir.path().join("broken.toml");
    fs::write(&config_file, "unknown_key = 1\n").unwrap();

    let output = plural_mt_cmd()
        .args([
            "--config",
            config_file.to_str().unwrap(),
            "examples",
            "--from",
            "en",
            "--to",
            "de",
            "--text",
            "{n, plural, other {#}}",
        ])
        .output()
        .unwrap();

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Invalid config"));
}

#[test]
fn test_fallback_example_help_describes_keyword_forms() {
    let output = plural_mt_cmd()
        .args(["translate", "--help"])
        .output()
        .unwrap();

    let stdout = stdout_of(&output);
    assert!(stdout.contains("--fallback-example"));
    assert!(stdout.contains("keyword form"));
}

#[test]
fn test_translate_keeps_offset() {
    let output = plural_mt_cmd()
        .args([
            "translate",
            "--from",
            "en",
            "--to",
            "en",
            "--text",
            "{n, plural, offset:1 =0 {nobody} one {you + # other} other {you + # others}}",
        ])
        .output()
        .unwrap();

    assert_eq!(
        stdout_of(&output),
        "{n, plural, offset:1 =0 {nobody} one {you + # other} other {you + # others}}"
    );
}
