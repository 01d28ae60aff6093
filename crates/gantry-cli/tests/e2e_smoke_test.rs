use std::fs;

use tempfile::tempdir;

use gantry_cli::{Args, run};

/// Renders into a temp directory with the hermetic DOT format; PNG/SVG
/// would require a Graphviz installation on the test host.
fn dot_args(output: &std::path::Path) -> Args {
    Args {
        output: Some(output.to_string_lossy().to_string()),
        format: "dot".to_string(),
        config: None,
        log_level: "off".to_string(),
    }
}

#[test]
fn e2e_smoke_test_generates_one_artifact() {
    // Create a temporary directory for test outputs
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let output_path = temp_dir
        .path()
        .join("sock_shop_microservices_architecture.dot");

    let written = run(&dot_args(&output_path)).expect("run should succeed");

    assert_eq!(written, output_path);

    let entries: Vec<_> = fs::read_dir(temp_dir.path())
        .expect("read temp dir")
        .flatten()
        .collect();
    assert_eq!(entries.len(), 1, "exactly one artifact is written");

    let metadata = fs::metadata(&output_path).expect("output file exists");
    assert!(metadata.len() > 0, "output file is non-empty");
}

#[test]
fn e2e_smoke_test_output_is_stable() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let first_path = temp_dir.path().join("first.dot");
    let second_path = temp_dir.path().join("second.dot");

    run(&dot_args(&first_path)).expect("first run");
    run(&dot_args(&second_path)).expect("second run");

    let first = fs::read_to_string(&first_path).expect("first output");
    let second = fs::read_to_string(&second_path).expect("second output");
    assert_eq!(first, second, "re-running produces identical content");
}

#[test]
fn e2e_smoke_test_default_output_name_derives_from_title() {
    // With no explicit output, the artifact lands in the working directory
    // under a name derived from the sanitized diagram title.
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let original_dir = std::env::current_dir().expect("current dir");
    std::env::set_current_dir(temp_dir.path()).expect("enter temp dir");

    let args = Args {
        output: None,
        format: "dot".to_string(),
        config: None,
        log_level: "off".to_string(),
    };
    let result = run(&args);

    std::env::set_current_dir(&original_dir).expect("restore working dir");

    let written = result.expect("run should succeed");
    assert_eq!(
        written.to_string_lossy(),
        "sock_shop_microservices_architecture.dot"
    );
    let artifact = temp_dir.path().join("sock_shop_microservices_architecture.dot");
    assert!(artifact.exists(), "artifact is written to the working directory");
}

#[test]
fn e2e_smoke_test_invalid_format_fails() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let output_path = temp_dir.path().join("out.bmp");

    let args = Args {
        output: Some(output_path.to_string_lossy().to_string()),
        format: "bmp".to_string(),
        config: None,
        log_level: "off".to_string(),
    };

    assert!(run(&args).is_err(), "unsupported format must fail");
    assert!(!output_path.exists(), "no artifact on failure");
}
