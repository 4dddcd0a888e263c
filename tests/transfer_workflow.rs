use matchcopy::{
    find_all_matches, resolve_specs, transfer_all, write_receipt, PatternSpec, TransferMode,
};
use pretty_assertions::assert_eq;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn touch(root: &Path, relative: &str, contents: &str) -> PathBuf {
    let path = root.join(relative);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(&path, contents).unwrap();
    path
}

fn specs(pattern: &str, exts: &[&str]) -> Vec<PatternSpec> {
    let exts: Vec<String> = exts.iter().map(|e| e.to_string()).collect();
    vec![PatternSpec::new(pattern, &exts)]
}

#[test]
fn copy_run_preserves_structure_and_sources() {
    let src = TempDir::new().unwrap();
    let dst = TempDir::new().unwrap();
    let final_csv = touch(src.path(), "docs/report_final.csv", "final");
    let draft_csv = touch(src.path(), "docs/report_draft.csv", "draft");
    touch(src.path(), "docs/notes.txt", "unrelated");

    let matches = find_all_matches(src.path(), &specs("report_*", &[".csv"])).unwrap();
    assert_eq!(matches.len(), 2);

    let records = transfer_all(&matches, src.path(), dst.path(), TransferMode::Copy).unwrap();
    assert_eq!(records.len(), 2);

    // Both copied under <dst>/docs/, both sources still present
    assert_eq!(
        fs::read_to_string(dst.path().join("docs/report_final.csv")).unwrap(),
        "final"
    );
    assert_eq!(
        fs::read_to_string(dst.path().join("docs/report_draft.csv")).unwrap(),
        "draft"
    );
    assert!(final_csv.exists());
    assert!(draft_csv.exists());
}

#[test]
fn csv_driven_run_matches_only_listed_extensions() {
    let src = TempDir::new().unwrap();
    let dst = TempDir::new().unwrap();
    touch(src.path(), "IMG_001.jpg", "jpg");
    touch(src.path(), "IMG_002.png", "png");
    touch(src.path(), "IMG_003.gif", "gif");

    let input_dir = TempDir::new().unwrap();
    let input_file = input_dir.path().join("patterns.csv");
    fs::write(&input_file, "pattern,extensions\nIMG_*,\".jpg,.png\"\n").unwrap();

    let resolved = resolve_specs(Some(&input_file), &[], &[]).unwrap();
    let matches = find_all_matches(src.path(), &resolved).unwrap();

    let mut names: Vec<String> = matches
        .iter()
        .map(|p| p.file_name().unwrap().to_str().unwrap().to_string())
        .collect();
    names.sort();
    assert_eq!(names, vec!["IMG_001.jpg", "IMG_002.png"]);

    let records = transfer_all(&matches, src.path(), dst.path(), TransferMode::Copy).unwrap();
    assert_eq!(records.len(), 2);
    assert!(!dst.path().join("IMG_003.gif").exists());
}

#[test]
fn move_run_creates_destination_tree_and_removes_sources() {
    let src = TempDir::new().unwrap();
    let dst = TempDir::new().unwrap();
    let source = touch(src.path(), "a/b/c.txt", "moved content");

    let matches = find_all_matches(src.path(), &specs("c", &[])).unwrap();
    let records = transfer_all(&matches, src.path(), dst.path(), TransferMode::Move).unwrap();

    assert_eq!(records.len(), 1);
    assert_eq!(records[0].new_path, dst.path().join("a/b/c.txt"));
    assert_eq!(
        fs::read_to_string(dst.path().join("a/b/c.txt")).unwrap(),
        "moved content"
    );
    assert!(!source.exists());
}

#[test]
fn receipt_reflects_every_transfer() {
    let src = TempDir::new().unwrap();
    let dst = TempDir::new().unwrap();
    let out = TempDir::new().unwrap();
    touch(src.path(), "one.log", "1");
    touch(src.path(), "two.log", "2");
    touch(src.path(), "sub/three.log", "3");

    let matches = find_all_matches(src.path(), &specs("*", &[".log"])).unwrap();
    let records = transfer_all(&matches, src.path(), dst.path(), TransferMode::Copy).unwrap();
    let receipt_path = write_receipt(&records, out.path()).unwrap();

    let contents = fs::read_to_string(&receipt_path).unwrap();
    let header_count: usize = contents
        .lines()
        .next()
        .unwrap()
        .rsplit(' ')
        .next()
        .unwrap()
        .parse()
        .unwrap();

    assert_eq!(header_count, records.len());
    assert_eq!(contents.matches("Old: ").count(), records.len());
    assert_eq!(contents.matches("New: ").count(), records.len());
}

#[test]
fn discovery_matches_a_brute_force_scan() {
    let src = TempDir::new().unwrap();
    touch(src.path(), "data_1.csv", "");
    touch(src.path(), "data_2.txt", "");
    touch(src.path(), "nested/data_3.csv", "");
    touch(src.path(), "nested/other.csv", "");

    let matches = find_all_matches(src.path(), &specs("data_*", &[".csv"])).unwrap();

    // Reference scan: every .csv file whose stem starts with "data_"
    let mut expected: Vec<PathBuf> = walkdir::WalkDir::new(src.path())
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .filter(|e| {
            let name = e.file_name().to_str().unwrap();
            name.starts_with("data_") && name.ends_with(".csv")
        })
        .map(|e| e.into_path())
        .collect();
    expected.sort();

    let mut found = matches.clone();
    found.sort();
    assert_eq!(found, expected);
}
