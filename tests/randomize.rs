use filename_randomizer::{ErrorCode, RandomizeOptions, Renamer};
use std::collections::HashSet;
use std::fs;
use std::path::Path;

fn seed(dir: &Path, count: usize) {
    for i in 0..count {
        fs::write(dir.join(format!("file{}.txt", i)), format!("content{}", i)).unwrap();
    }
}

fn names_in(dir: &Path) -> HashSet<String> {
    fs::read_dir(dir)
        .unwrap()
        .flatten()
        .filter(|e| e.file_type().unwrap().is_file())
        .map(|e| e.file_name().to_string_lossy().to_string())
        .collect()
}

#[test]
fn real_run_keeps_file_count_and_contents() {
    let dir = tempfile::tempdir().unwrap();
    seed(dir.path(), 25);
    let before = names_in(dir.path());

    let records = Renamer::new(dir.path(), RandomizeOptions::default())
        .unwrap()
        .randomize()
        .unwrap();

    let after = names_in(dir.path());
    assert_eq!(records.len(), 25);
    assert_eq!(after.len(), 25);
    assert!(before.is_disjoint(&after));

    for record in &records {
        let original = record.old_path.file_name().unwrap().to_string_lossy().to_string();
        let index = original.trim_start_matches("file").trim_end_matches(".txt");
        assert_eq!(
            fs::read_to_string(&record.new_path).unwrap(),
            format!("content{}", index)
        );

        let new_name = record.new_path.file_name().unwrap().to_string_lossy().to_string();
        assert_eq!(new_name.len(), 20);
        assert!(new_name.ends_with(".txt"));
    }

    let unique: HashSet<_> = records.iter().map(|r| r.new_path.clone()).collect();
    assert_eq!(unique.len(), records.len());
}

#[test]
fn dry_run_reports_every_file_and_changes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    seed(dir.path(), 5);
    let before = names_in(dir.path());

    let options = RandomizeOptions {
        dry_run: true,
        ..RandomizeOptions::default()
    };
    let records = Renamer::new(dir.path(), options).unwrap().randomize().unwrap();

    assert_eq!(records.len(), 5);
    assert_eq!(names_in(dir.path()), before);
}

#[test]
fn stripped_names_have_no_extension() {
    let dir = tempfile::tempdir().unwrap();
    seed(dir.path(), 3);

    let options = RandomizeOptions {
        preserve_extensions: false,
        length: 4,
        ..RandomizeOptions::default()
    };
    Renamer::new(dir.path(), options).unwrap().randomize().unwrap();

    for name in names_in(dir.path()) {
        assert_eq!(name.len(), 8);
        assert!(!name.contains('.'));
    }
}

#[test]
fn relative_paths_resolve_against_working_directory() {
    let renamer = Renamer::new("relative/target", RandomizeOptions::default()).unwrap();
    let expected = std::env::current_dir().unwrap().join("relative").join("target");

    assert!(renamer.directory().is_absolute());
    assert_eq!(renamer.directory(), expected.as_path());
}

#[test]
fn validation_errors_come_before_any_rename() {
    let missing = Renamer::new("/nonexistent/directory", RandomizeOptions::default()).unwrap();
    assert_eq!(missing.randomize().unwrap_err().code, ErrorCode::DirectoryNotFound);

    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("plain.txt");
    fs::write(&file, "x").unwrap();

    let not_dir = Renamer::new(&file, RandomizeOptions::default()).unwrap();
    assert_eq!(not_dir.randomize().unwrap_err().code, ErrorCode::NotADirectory);
    assert_eq!(names_in(dir.path()).len(), 1);
}
