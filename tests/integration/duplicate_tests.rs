use dupesort::organizer::{Event, Organizer};
use std::fs;
use tempfile::tempdir;

#[test]
fn test_first_processed_copy_stays() {
    let dir = tempdir().unwrap();
    let root = dir.path();
    fs::write(root.join("a.txt"), b"same").unwrap();
    fs::write(root.join("b.txt"), b"same").unwrap();

    Organizer::new(root).organize().unwrap();

    assert!(root.join("txt/a.txt").exists());
    assert!(root.join("Duplicates/b.txt").exists());
    assert!(!root.join("txt/b.txt").exists());
}

#[test]
fn test_reversed_order_swaps_kept_copy() {
    let dir = tempdir().unwrap();
    let root = dir.path();
    // "a" sorts first, so it is processed first regardless of creation order.
    fs::write(root.join("b.txt"), b"same").unwrap();
    fs::write(root.join("a.txt"), b"same").unwrap();

    Organizer::new(root).organize().unwrap();

    assert!(root.join("txt/a.txt").exists());
    assert!(root.join("Duplicates/b.txt").exists());

    let other = tempdir().unwrap();
    fs::write(other.path().join("a.txt"), b"same").unwrap();
    fs::write(other.path().join("0.txt"), b"same").unwrap();

    Organizer::new(other.path()).organize().unwrap();

    assert!(other.path().join("txt/0.txt").exists());
    assert!(other.path().join("Duplicates/a.txt").exists());
}

#[test]
fn test_duplicate_across_extensions() {
    let dir = tempdir().unwrap();
    let root = dir.path();
    fs::write(root.join("photo.jpeg"), b"pixels").unwrap();
    fs::write(root.join("photo_copy.jpg"), b"pixels").unwrap();

    let mut organizer = Organizer::new(root);
    organizer.organize().unwrap();

    assert!(root.join("jpeg/photo.jpeg").exists());
    assert!(root.join("Duplicates/photo_copy.jpg").exists());
    // The jpg folder is created on lookup even though the file went to Duplicates.
    assert!(root.join("jpg").is_dir());
    assert_eq!(organizer.move_counts().get(&root.join("jpg")), 0);
}

#[test]
fn test_many_copies_all_but_first_are_duplicates() {
    let dir = tempdir().unwrap();
    let root = dir.path();
    for i in 0..5 {
        fs::write(root.join(format!("copy{}.bin", i)), b"payload").unwrap();
    }

    let mut organizer = Organizer::new(root);
    organizer.organize().unwrap();

    assert!(root.join("bin/copy0.bin").exists());
    for i in 1..5 {
        assert!(root.join(format!("Duplicates/copy{}.bin", i)).exists());
    }
    assert_eq!(organizer.move_counts().get(&root.join("Duplicates")), 4);
    assert_eq!(organizer.indexed_hashes(), 1);
}

#[test]
fn test_empty_files_are_duplicates_of_each_other() {
    let dir = tempdir().unwrap();
    let root = dir.path();
    fs::write(root.join("a.log"), b"").unwrap();
    fs::write(root.join("b.log"), b"").unwrap();

    Organizer::new(root).organize().unwrap();

    assert!(root.join("log/a.log").exists());
    assert!(root.join("Duplicates/b.log").exists());
}

#[test]
fn test_large_files_differing_in_last_chunk() {
    let dir = tempdir().unwrap();
    let root = dir.path();
    let mut content = vec![b'x'; 3 * 8192 + 17];
    fs::write(root.join("a.dat"), &content).unwrap();
    *content.last_mut().unwrap() = b'y';
    fs::write(root.join("b.dat"), &content).unwrap();

    Organizer::new(root).organize().unwrap();

    assert!(root.join("dat/a.dat").exists());
    assert!(root.join("dat/b.dat").exists());
}

#[test]
fn test_duplicate_matched_against_collision_skipped_file() {
    let dir = tempdir().unwrap();
    let root = dir.path();
    fs::create_dir(root.join("txt")).unwrap();
    fs::write(root.join("txt/a.txt"), b"already sorted").unwrap();
    fs::write(root.join("a.txt"), b"fresh").unwrap();
    fs::write(root.join("b.txt"), b"fresh").unwrap();

    let mut organizer = Organizer::new(root);
    organizer.organize().unwrap();

    // a.txt is indexed even though it could not be moved, so b.txt is a duplicate.
    assert!(root.join("a.txt").exists());
    assert!(root.join("Duplicates/b.txt").exists());
    assert_eq!(
        organizer.events(),
        &[Event::Moved {
            name: "b.txt".to_string(),
            destination: root.join("Duplicates"),
        }]
    );
}
