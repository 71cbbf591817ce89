use std::fs;
use std::process::Command;

use tempfile::TempDir;

fn dirscope() -> Command {
    Command::new(env!("CARGO_BIN_EXE_dirscope"))
}

fn create_scenario() -> TempDir {
    let temp = TempDir::new().unwrap();
    fs::create_dir(temp.path().join("a")).unwrap();
    fs::create_dir(temp.path().join("b")).unwrap();
    fs::write(temp.path().join("a/data.bin"), vec![0u8; 2048]).unwrap();
    fs::write(temp.path().join("b/data.bin"), vec![0u8; 1024]).unwrap();
    fs::write(temp.path().join("c"), vec![0u8; 512]).unwrap();
    temp
}

#[test]
fn test_list_text() {
    let temp = create_scenario();
    let output = dirscope().arg("list").arg(temp.path()).output().unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("Total size: 3.50 KiB"));
    assert!(stdout.contains("Showing 2 of 2 subdirectories"));

    let a = stdout.find("] a").unwrap();
    let b = stdout.find("] b").unwrap();
    assert!(a < b);
}

#[test]
fn test_list_json() {
    let temp = create_scenario();
    let output = dirscope()
        .args(["list", "--format", "json"])
        .arg(temp.path())
        .output()
        .unwrap();

    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["total_size"], 3584);
    assert_eq!(json["entries"][0]["name"], "a");
    assert_eq!(json["entries"][0]["size"], 2048);
    assert_eq!(json["entries"][1]["name"], "b");
}

#[test]
fn test_list_unreadable_path_fails() {
    let temp = TempDir::new().unwrap();
    let output = dirscope()
        .arg("list")
        .arg(temp.path().join("missing"))
        .output()
        .unwrap();

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("could not scan directory"));
}

#[test]
fn test_interactive_startup_failure_exits_nonzero() {
    let temp = TempDir::new().unwrap();
    let output = dirscope().arg(temp.path().join("missing")).output().unwrap();

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Error: could not scan directory"));
}
