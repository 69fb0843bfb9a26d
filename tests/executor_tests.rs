// Rename executor and undo against a real temporary folder

use std::fs;
use std::path::Path;

use renamer::config::{ConflictStrategy, Configuration, NumberingPosition};
use renamer::folder::scan_folder;
use renamer::models::{FileEntry, Selection};
use renamer::rename_engine::project_previews;
use renamer::{ErrorKind, History, execute_batch};

fn folder_with(names: &[&str]) -> tempfile::TempDir {
    let dir = tempfile::tempdir().unwrap();
    for name in names {
        fs::write(dir.path().join(name), name.as_bytes()).unwrap();
    }
    dir
}

fn listing(folder: &Path) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(folder)
        .unwrap()
        .map(|entry| entry.unwrap().file_name().to_string_lossy().to_string())
        .collect();
    names.sort();
    names
}

fn with_preview(original: &str, preview: &str) -> FileEntry {
    FileEntry {
        original_name: original.to_string(),
        preview_name: Some(preview.to_string()),
    }
}

#[test]
fn test_vacation_batch_round_trip() {
    let dir = folder_with(&["IMG-001.JPG", "IMG-002.JPG"]);
    let config = Configuration {
        prefix: "Vacation_".to_string(),
        suffix: "_".to_string(),
        add_numbering: true,
        numbering_start: 1,
        numbering_increment: 1,
        numbering_padding: 2,
        numbering_position: NumberingPosition::Suffix,
        ..Configuration::default()
    };
    let mut entries = scan_folder(dir.path(), &config.filter_extension).unwrap();
    project_previews(&mut entries, &config, &Selection::all()).unwrap();

    let previews: Vec<_> = entries.iter().map(|e| e.preview_name.as_deref()).collect();
    assert_eq!(
        previews,
        [Some("Vacation_IMG-001_01.JPG"), Some("Vacation_IMG-002_02.JPG")]
    );

    let mut history = History::new();
    let report = execute_batch(dir.path(), &mut entries, &Selection::all(), &config, &mut history)
        .unwrap();
    assert_eq!(report.recorded, 2);
    assert_eq!(
        listing(dir.path()),
        ["Vacation_IMG-001_01.JPG", "Vacation_IMG-002_02.JPG"]
    );
    assert_eq!(entries[0].original_name, "Vacation_IMG-001_01.JPG");
    assert_eq!(entries[0].preview_name, None);

    history.undo().unwrap();
    assert_eq!(listing(dir.path()), ["IMG-001.JPG", "IMG-002.JPG"]);
    assert_eq!(
        fs::read_to_string(dir.path().join("IMG-001.JPG")).unwrap(),
        "IMG-001.JPG"
    );
}

#[test]
fn test_simulation_leaves_disk_and_names_alone() {
    let dir = folder_with(&["a.txt", "b.txt"]);
    let config = Configuration {
        prefix: "new_".to_string(),
        simulation_mode: true,
        ..Configuration::default()
    };
    let mut entries = scan_folder(dir.path(), "").unwrap();
    project_previews(&mut entries, &config, &Selection::all()).unwrap();

    let mut history = History::new();
    let report = execute_batch(dir.path(), &mut entries, &Selection::all(), &config, &mut history)
        .unwrap();

    assert!(report.simulated);
    assert_eq!(report.recorded, 2);
    assert_eq!(history.depth(), 1);
    assert!(history.last().unwrap().simulated);
    assert_eq!(listing(dir.path()), ["a.txt", "b.txt"]);
    assert_eq!(entries[0].original_name, "a.txt");
    assert_eq!(entries[1].original_name, "b.txt");

    let undo = history.undo().unwrap().unwrap();
    assert!(undo.simulated);
    assert_eq!(undo.reverted, 0);
    assert_eq!(listing(dir.path()), ["a.txt", "b.txt"]);
}

#[test]
fn test_skip_strategy_keeps_source() {
    let dir = folder_with(&["draft.txt", "final.txt"]);
    let config = Configuration {
        conflict_strategy: ConflictStrategy::Skip,
        ..Configuration::default()
    };
    let mut entries = vec![with_preview("draft.txt", "final.txt")];

    let mut history = History::new();
    let report = execute_batch(dir.path(), &mut entries, &Selection::all(), &config, &mut history)
        .unwrap();

    assert_eq!(report.recorded, 0);
    assert_eq!(report.skipped, ["draft.txt"]);
    assert_eq!(listing(dir.path()), ["draft.txt", "final.txt"]);
    assert_eq!(entries[0].original_name, "draft.txt");
    assert_eq!(history.depth(), 1);
    assert!(history.last().unwrap().is_empty());
}

#[test]
fn test_rename_strategy_finds_free_name() {
    let dir = folder_with(&["src.txt", "a.txt", "a_1.txt"]);
    let config = Configuration {
        conflict_strategy: ConflictStrategy::Rename,
        ..Configuration::default()
    };
    let mut entries = vec![with_preview("src.txt", "a.txt")];

    let mut history = History::new();
    execute_batch(dir.path(), &mut entries, &Selection::all(), &config, &mut history).unwrap();

    assert_eq!(entries[0].original_name, "a_2.txt");
    assert_eq!(listing(dir.path()), ["a.txt", "a_1.txt", "a_2.txt"]);
    assert_eq!(fs::read_to_string(dir.path().join("a_2.txt")).unwrap(), "src.txt");

    history.undo().unwrap();
    assert_eq!(listing(dir.path()), ["a.txt", "a_1.txt", "src.txt"]);
}

#[test]
fn test_overwrite_strategy_replaces_target() {
    let dir = folder_with(&["new.txt", "old.txt"]);
    let config = Configuration {
        conflict_strategy: ConflictStrategy::Overwrite,
        ..Configuration::default()
    };
    let mut entries = vec![with_preview("new.txt", "old.txt")];

    let mut history = History::new();
    execute_batch(dir.path(), &mut entries, &Selection::all(), &config, &mut history).unwrap();

    assert_eq!(listing(dir.path()), ["old.txt"]);
    assert_eq!(fs::read_to_string(dir.path().join("old.txt")).unwrap(), "new.txt");
}

#[test]
fn test_only_selected_entries_are_renamed() {
    let dir = folder_with(&["a.txt", "b.txt"]);
    let config = Configuration::default();
    let mut entries = vec![with_preview("a.txt", "x.txt"), with_preview("b.txt", "y.txt")];

    let mut history = History::new();
    let report = execute_batch(dir.path(), &mut entries, &Selection::of([1]), &config, &mut history)
        .unwrap();

    assert_eq!(report.recorded, 1);
    assert_eq!(listing(dir.path()), ["a.txt", "y.txt"]);
}

#[test]
fn test_failed_rename_keeps_earlier_operations() {
    let dir = folder_with(&["a.txt"]);
    let config = Configuration::default();
    let mut entries = vec![
        with_preview("a.txt", "first.txt"),
        with_preview("ghost.txt", "second.txt"),
    ];

    let mut history = History::new();
    let error = execute_batch(dir.path(), &mut entries, &Selection::all(), &config, &mut history)
        .unwrap_err();

    assert_eq!(error.kind(), ErrorKind::RenameFailed);
    assert!(error.to_string().contains("ghost.txt"));
    assert_eq!(listing(dir.path()), ["first.txt"]);
    assert_eq!(history.depth(), 1);
    assert_eq!(history.last().unwrap().len(), 1);

    history.undo().unwrap();
    assert_eq!(listing(dir.path()), ["a.txt"]);
}

#[test]
fn test_empty_run_still_pushes_a_batch() {
    let dir = folder_with(&["a.txt"]);
    let mut entries = scan_folder(dir.path(), "").unwrap();
    let mut history = History::new();

    let report = execute_batch(
        dir.path(),
        &mut entries,
        &Selection::all(),
        &Configuration::default(),
        &mut history,
    )
    .unwrap();

    assert_eq!(report.recorded, 0);
    assert_eq!(history.depth(), 1);
    assert_eq!(history.undo().unwrap().unwrap().reverted, 0);
    assert_eq!(listing(dir.path()), ["a.txt"]);
}

#[test]
fn test_undo_failure_discards_batch() {
    let dir = folder_with(&["a.txt"]);
    let config = Configuration::default();
    let mut entries = vec![with_preview("a.txt", "b.txt")];
    let mut history = History::new();
    execute_batch(dir.path(), &mut entries, &Selection::all(), &config, &mut history).unwrap();

    fs::remove_file(dir.path().join("b.txt")).unwrap();
    let error = history.undo().unwrap_err();

    assert_eq!(error.kind(), ErrorKind::UndoFailed);
    assert!(!history.can_undo());
}

#[test]
fn test_chained_batches_undo_one_at_a_time() {
    let dir = folder_with(&["a.txt"]);
    let config = Configuration {
        suffix: "+".to_string(),
        ..Configuration::default()
    };
    let mut entries = scan_folder(dir.path(), "").unwrap();
    let mut history = History::new();

    for _ in 0..2 {
        project_previews(&mut entries, &config, &Selection::all()).unwrap();
        execute_batch(dir.path(), &mut entries, &Selection::all(), &config, &mut history).unwrap();
    }
    assert_eq!(listing(dir.path()), ["a++.txt"]);

    history.undo().unwrap();
    assert_eq!(listing(dir.path()), ["a+.txt"]);
    history.undo().unwrap();
    assert_eq!(listing(dir.path()), ["a.txt"]);
    assert!(history.undo().unwrap().is_none());
}
