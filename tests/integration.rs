//! Integration tests for heft


use assert_cmd::Command;
use harness::{TestTree, read_report, run_heft};
use predicates::prelude::*;

#[test]
fn test_writes_sorted_report() {
    let tree = TestTree::new();
    tree.add_file("small.pdf", 10);
    tree.add_file("videos/big.mp4", 500);
    tree.add_file("videos/deeper/mid.MP3", 200);
    tree.add_file("notes.txt", 900);

    let (stdout, _stderr, success) = run_heft(tree.path(), &[]);
    assert!(success, "heft should succeed");
    assert!(stdout.contains("Results written to largest_files.csv"));

    let report = read_report(&tree.path().join("largest_files.csv"));
    assert_eq!(
        report,
        vec![
            (false, 500, "big.mp4".to_string()),
            (false, 200, "mid.MP3".to_string()),
            (false, 10, "small.pdf".to_string()),
        ]
    );
}

#[test]
fn test_report_header_and_absolute_paths() {
    let tree = TestTree::new();
    tree.add_file("a.png", 4);

    let (_stdout, _stderr, success) = run_heft(tree.path(), &["-o", "out.csv"]);
    assert!(success);

    let text = std::fs::read_to_string(tree.path().join("out.csv")).unwrap();
    let mut lines = text.lines();
    assert_eq!(lines.next(), Some("Dup,Size,Full_Path"));
    let row = lines.next().expect("one data row");
    let path = row.trim_start_matches(",4,");
    assert!(std::path::Path::new(path).is_absolute(), "path should be absolute: {}", row);
    assert!(path.ends_with("a.png"));
}

#[test]
fn test_top_n_with_duplicates() {
    let tree = TestTree::new();
    // Name order is discovery order: a, b, c, d, e
    for (name, size) in [("a", 10), ("b", 50), ("c", 5), ("d", 100), ("e", 50)] {
        tree.add_file(&format!("{}.wav", name), size);
    }

    let (_stdout, _stderr, success) = run_heft(tree.path(), &["-n", "3", "-e", "wav"]);
    assert!(success);

    let report = read_report(&tree.path().join("largest_files.csv"));
    assert_eq!(
        report,
        vec![
            (false, 100, "d.wav".to_string()),
            (false, 50, "b.wav".to_string()),
            (true, 50, "e.wav".to_string()),
        ]
    );
}

#[test]
fn test_extension_filter_and_presets() {
    let tree = TestTree::new();
    tree.add_file("a.pdf", 1);
    tree.add_file("b.jpg", 2);
    tree.add_file("c.mkv", 3);
    tree.add_file("d.docx", 4);

    let (_stdout, _stderr, success) = run_heft(tree.path(), &["-e", "mkv", "--preset", "image"]);
    assert!(success);
    let names: Vec<String> = read_report(&tree.path().join("largest_files.csv"))
        .into_iter()
        .map(|r| r.2)
        .collect();
    assert_eq!(names, vec!["c.mkv", "b.jpg"]);
}

#[test]
fn test_json_output() {
    let tree = TestTree::new();
    tree.add_file("x.mp4", 7);
    tree.add_file("y.mp4", 7);

    let (stdout, _stderr, success) = run_heft(tree.path(), &["--json", "--no-summary"]);
    assert!(success);
    assert!(stdout.contains("largest_files.json"));
    assert!(!stdout.contains("Largest files"));

    let text = std::fs::read_to_string(tree.path().join("largest_files.json")).unwrap();
    let json: serde_json::Value = serde_json::from_str(&text).unwrap();
    let rows = json.as_array().expect("array of rows");
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0]["dup"], false);
    assert_eq!(rows[1]["dup"], true);
    assert_eq!(rows[1]["size"], 7);
}

#[test]
fn test_summary_printed() {
    let tree = TestTree::new();
    tree.add_file("clip.mp4", 3000);

    Command::cargo_bin("heft")
        .unwrap()
        .current_dir(tree.path())
        .env("NO_COLOR", "1")
        .assert()
        .success()
        .stdout(predicate::str::contains("Largest files"))
        .stdout(predicate::str::contains("2.9K"))
        .stdout(predicate::str::contains("1 directories, 1 files, 1 matched"));
}

#[test]
fn test_ignore_and_level() {
    let tree = TestTree::new();
    tree.add_file("top.pdf", 1);
    tree.add_file("one/mid.pdf", 2);
    tree.add_file("one/two/low.pdf", 3);
    tree.add_file("skip/other.pdf", 4);

    let (_stdout, _stderr, success) = run_heft(tree.path(), &["-L", "2", "-I", "skip"]);
    assert!(success);
    let names: Vec<String> = read_report(&tree.path().join("largest_files.csv"))
        .into_iter()
        .map(|r| r.2)
        .collect();
    assert_eq!(names, vec!["mid.pdf", "top.pdf"]);
}

#[test]
fn test_scan_path_argument() {
    let tree = TestTree::new();
    tree.add_file("media/song.mp3", 12);
    let out = tree.add_dir("reports").join("r.csv");

    let (_stdout, _stderr, success) = run_heft(
        tree.path(),
        &["media", "-o", out.to_str().unwrap(), "--no-summary"],
    );
    assert!(success);
    let report = read_report(&out);
    assert_eq!(report, vec![(false, 12, "song.mp3".to_string())]);
}
