use dupesort::error::ExitCode;
use dupesort::organizer::Organizer;
use dupesort::output::{JsonOutput, TextOutput};
use std::fs;
use tempfile::tempdir;

#[test]
fn test_summary_follows_first_touched_order() {
    let dir = tempdir().unwrap();
    let root = dir.path();
    fs::write(root.join("a.txt"), b"1").unwrap();
    fs::write(root.join("b.txt"), b"1").unwrap();
    fs::write(root.join("c.csv"), b"2").unwrap();

    let mut organizer = Organizer::new(root);
    organizer.organize().unwrap();

    assert_eq!(
        organizer.report().summary,
        vec![
            format!("Moved 1 file(s) to {}", root.join("txt").display()),
            format!("Moved 1 file(s) to {}", root.join("Duplicates").display()),
            format!("Moved 1 file(s) to {}", root.join("csv").display()),
        ]
    );
}

#[test]
fn test_details_in_processing_order() {
    let dir = tempdir().unwrap();
    let root = dir.path();
    fs::write(root.join("Makefile"), b"all:").unwrap();
    fs::write(root.join("main.c"), b"int main;").unwrap();

    let mut organizer = Organizer::new(root);
    organizer.organize().unwrap();

    assert_eq!(
        organizer.report().details,
        vec![
            "File Makefile doesn't have an extension, skipping.".to_string(),
            format!("Moved main.c to {}", root.join("c").display()),
        ]
    );
}

#[test]
fn test_report_is_idempotent() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("x.md"), b"# x").unwrap();

    let mut organizer = Organizer::new(dir.path());
    organizer.organize().unwrap();

    let first = organizer.report();
    let second = organizer.report();
    assert_eq!(first, second);
}

#[test]
fn test_text_output_for_real_run() {
    yansi::disable();
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("x.md"), b"# x").unwrap();
    fs::write(dir.path().join("LICENSE"), b"MIT").unwrap();

    let mut organizer = Organizer::new(dir.path());
    let stats = organizer.organize().unwrap();
    let report = organizer.report();

    let mut buf = Vec::new();
    TextOutput::new(&stats, &report).write_to(&mut buf).unwrap();
    let text = String::from_utf8(buf).unwrap();

    assert!(text.contains("Summary"));
    assert!(text.contains("Details"));
    assert!(text.contains("File LICENSE doesn't have an extension, skipping."));
    assert!(text.contains("2 of 2 file(s) processed"));
}

#[test]
fn test_json_output_for_real_run() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("a.toml"), b"k = 1").unwrap();
    fs::write(dir.path().join(".env"), b"A=1").unwrap();

    let mut organizer = Organizer::new(dir.path());
    let stats = organizer.organize().unwrap();
    let output = JsonOutput::new(dir.path(), &stats, &organizer.report(), ExitCode::Success);

    let value: serde_json::Value = serde_json::from_str(&output.to_json().unwrap()).unwrap();
    assert_eq!(value["total_files"], 2);
    assert_eq!(value["processed_files"], 1);
    assert_eq!(value["summary"].as_array().unwrap().len(), 1);
    assert_eq!(value["details"].as_array().unwrap().len(), 1);
}
