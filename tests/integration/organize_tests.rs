use dupesort::organizer::{OrganizeStats, Organizer, DUPLICATES_FOLDER_NAME};
use std::fs;
use std::path::Path;
use tempfile::tempdir;

fn write(root: &Path, name: &str, content: &[u8]) {
    fs::write(root.join(name), content).unwrap();
}

fn dir_names(root: &Path) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(root)
        .unwrap()
        .filter_map(Result::ok)
        .filter(|e| e.file_type().unwrap().is_dir())
        .map(|e| e.file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}

fn file_names(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(dir)
        .unwrap()
        .filter_map(Result::ok)
        .filter(|e| e.file_type().unwrap().is_file())
        .map(|e| e.file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}

#[test]
fn test_organize_empty_directory() {
    let dir = tempdir().unwrap();
    let mut organizer = Organizer::new(dir.path());

    let stats = organizer.organize().unwrap();

    assert_eq!(stats, OrganizeStats::default());
    assert!(dir.path().join(DUPLICATES_FOLDER_NAME).is_dir());
    assert!(organizer.report().is_empty());
}

#[test]
fn test_concrete_scenario() {
    let dir = tempdir().unwrap();
    let root = dir.path();
    write(root, "a.txt", b"X");
    write(root, "b.txt", b"X");
    write(root, "c.jpg", b"Y");
    write(root, ".hidden", b"Z");
    write(root, "readme", b"W");

    let mut organizer = Organizer::new(root);
    let stats = organizer.organize().unwrap();

    assert_eq!(stats.total_files, 5);
    assert_eq!(stats.processed_files, 4);

    assert!(root.join("txt/a.txt").exists());
    assert!(root.join("jpg/c.jpg").exists());
    assert!(root.join("Duplicates/b.txt").exists());
    assert!(root.join("readme").exists());
    assert!(root.join(".hidden").exists());
    assert_eq!(fs::read(root.join(".hidden")).unwrap(), b"Z");

    let counts = organizer.move_counts();
    assert_eq!(counts.get(&root.join("txt")), 1);
    assert_eq!(counts.get(&root.join("jpg")), 1);
    assert_eq!(counts.get(&root.join("Duplicates")), 1);

    let report = organizer.report();
    assert_eq!(report.summary.len(), 3);
    assert!(report
        .summary
        .contains(&format!("Moved 1 file(s) to {}", root.join("txt").display())));
    assert!(report
        .summary
        .contains(&format!("Moved 1 file(s) to {}", root.join("jpg").display())));
    assert!(report.summary.contains(&format!(
        "Moved 1 file(s) to {}",
        root.join("Duplicates").display()
    )));
}

#[test]
fn test_extension_partition_without_duplicates() {
    let dir = tempdir().unwrap();
    let root = dir.path();
    write(root, "one.txt", b"1");
    write(root, "two.txt", b"2");
    write(root, "three.md", b"3");
    write(root, "four.rs", b"4");
    write(root, "five.rs", b"5");

    let stats = Organizer::new(root).organize().unwrap();

    assert_eq!(stats.processed_files, 5);
    assert_eq!(dir_names(root), vec!["Duplicates", "md", "rs", "txt"]);
    assert_eq!(file_names(&root.join("txt")), vec!["one.txt", "two.txt"]);
    assert_eq!(file_names(&root.join("md")), vec!["three.md"]);
    assert_eq!(file_names(&root.join("rs")), vec!["five.rs", "four.rs"]);
    assert!(file_names(&root.join("Duplicates")).is_empty());
    assert!(file_names(root).is_empty());
}

#[test]
fn test_rerun_on_organized_tree_processes_nothing() {
    let dir = tempdir().unwrap();
    let root = dir.path();
    write(root, "a.txt", b"A");
    write(root, "b.png", b"B");
    write(root, "c.png", b"B");

    Organizer::new(root).organize().unwrap();

    let mut second = Organizer::new(root);
    let stats = second.organize().unwrap();

    assert_eq!(stats.total_files, 0);
    assert_eq!(stats.processed_files, 0);
    assert!(second.report().is_empty());
    assert!(root.join("png/b.png").exists());
    assert!(root.join("Duplicates/c.png").exists());
}

#[test]
fn test_file_without_extension_is_untouched() {
    let dir = tempdir().unwrap();
    let root = dir.path();
    write(root, "no_extension_file", b"No extension content");

    let mut organizer = Organizer::new(root);
    let stats = organizer.organize().unwrap();

    assert_eq!(stats.processed_files, 1);
    assert!(root.join("no_extension_file").exists());
    let details = organizer.report().details;
    assert_eq!(
        details,
        vec!["File no_extension_file doesn't have an extension, skipping."]
    );
    assert_eq!(dir_names(root), vec!["Duplicates"]);
}

#[test]
fn test_trailing_dot_stays_in_place_but_is_indexed() {
    let dir = tempdir().unwrap();
    let root = dir.path();
    write(root, "draft.", b"Q");
    write(root, "z.txt", b"Q");

    let mut organizer = Organizer::new(root);
    let stats = organizer.organize().unwrap();

    assert_eq!(stats.processed_files, 2);
    assert!(root.join("draft.").exists());
    assert!(root.join("Duplicates").join("z.txt").exists());
    assert!(!root.join("txt").join("z.txt").exists());

    let details = organizer.report().details;
    assert_eq!(details.len(), 1);
    assert!(details[0].starts_with("Moved z.txt to "));
    assert!(!details[0].contains("doesn't have an extension"));
}

#[test]
fn test_hidden_files_are_counted_not_processed() {
    let dir = tempdir().unwrap();
    let root = dir.path();
    write(root, ".DS_Store", b"junk");
    write(root, ".gitignore", b"target/");

    let mut organizer = Organizer::new(root);
    let stats = organizer.organize().unwrap();

    assert_eq!(stats.total_files, 2);
    assert_eq!(stats.processed_files, 0);
    assert!(organizer.report().details.is_empty());
    assert!(root.join(".DS_Store").exists());
    assert!(root.join(".gitignore").exists());
}

#[test]
fn test_subdirectories_are_not_descended() {
    let dir = tempdir().unwrap();
    let root = dir.path();
    fs::create_dir(root.join("photos")).unwrap();
    write(&root.join("photos"), "cat.jpg", b"meow");
    write(root, "dog.jpg", b"woof");

    let stats = Organizer::new(root).organize().unwrap();

    assert_eq!(stats.total_files, 1);
    assert!(root.join("photos/cat.jpg").exists());
    assert!(root.join("jpg/dog.jpg").exists());
}

#[test]
fn test_extension_case_is_preserved() {
    let dir = tempdir().unwrap();
    let root = dir.path();
    write(root, "upper.JPG", b"1");
    write(root, "lower.jpg", b"2");

    Organizer::new(root).organize().unwrap();

    assert!(root.join("JPG/upper.JPG").exists());
    assert!(root.join("jpg/lower.jpg").exists());
}

#[test]
fn test_existing_extension_folder_is_reused() {
    let dir = tempdir().unwrap();
    let root = dir.path();
    fs::create_dir(root.join("pdf")).unwrap();
    write(&root.join("pdf"), "old.pdf", b"old");
    write(root, "new.pdf", b"new");

    Organizer::new(root).organize().unwrap();

    assert_eq!(file_names(&root.join("pdf")), vec!["new.pdf", "old.pdf"]);
}

#[test]
fn test_name_collision_leaves_file_at_root() {
    let dir = tempdir().unwrap();
    let root = dir.path();
    fs::create_dir(root.join("txt")).unwrap();
    write(&root.join("txt"), "notes.txt", b"first version");
    write(root, "notes.txt", b"second version");

    let mut organizer = Organizer::new(root);
    let stats = organizer.organize().unwrap();

    assert_eq!(stats.processed_files, 1);
    assert_eq!(fs::read(root.join("notes.txt")).unwrap(), b"second version");
    assert_eq!(fs::read(root.join("txt/notes.txt")).unwrap(), b"first version");
    assert!(organizer.report().is_empty());
}

#[test]
fn test_original_fixture() {
    let dir = tempdir().unwrap();
    let root = dir.path();
    write(root, "test1.txt", b"Sample content 1");
    write(root, "test2.txt", b"Sample content 2");
    write(root, "duplicate_test1.txt", b"Sample content 1");
    write(root, "image1.jpg", b"Image content");
    write(root, "doc1.docx", b"Document content");
    write(root, "no_extension_file", b"No extension content");

    let stats = Organizer::new(root).organize().unwrap();

    assert_eq!(stats.total_files, 6);
    assert_eq!(stats.processed_files, 6);
    for folder in ["txt", "jpg", "docx", "Duplicates"] {
        assert!(root.join(folder).is_dir(), "{} should exist", folder);
    }
    assert!(root.join("txt/test2.txt").exists());
    assert!(root.join("jpg/image1.jpg").exists());
    assert!(root.join("docx/doc1.docx").exists());
    assert!(root.join("no_extension_file").exists());

    // Listing is sorted by name, so duplicate_test1.txt is seen first.
    assert!(root.join("txt/duplicate_test1.txt").exists());
    assert!(root.join("Duplicates/test1.txt").exists());
}
