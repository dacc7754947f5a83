use std::fs;

use kana_core::model::{ProgressRecord, Script};
use storage::{JsonFileRepository, ProgressRepository, StorageError};

fn sample_record() -> ProgressRecord {
    let mut record = ProgressRecord::default();
    for _ in 0..3 {
        record.record_correct(Script::Hiragana);
        record.record_answered(true);
    }
    record.record_wrong(Script::Katakana);
    record.record_answered(false);
    record.mark_mastered(Script::Hiragana, "ka");
    record.mark_mastered(Script::Hiragana, "shi");
    record.mark_mastered(Script::Katakana, "n");
    record
}

#[test]
fn missing_file_loads_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let repo = JsonFileRepository::new(dir.path().join("user_stats.json"));
    assert!(repo.load().unwrap().is_none());
}

#[test]
fn save_then_load_round_trips() {
    let dir = tempfile::tempdir().unwrap();
    let repo = JsonFileRepository::new(dir.path().join("nested/data/user_stats.json"));
    let record = sample_record();

    repo.save(&record).unwrap();
    let loaded = repo.load().unwrap().expect("record persisted");

    assert_eq!(loaded, record);
}

#[test]
fn written_file_uses_persisted_shape() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("user_stats.json");
    let repo = JsonFileRepository::new(&path);
    repo.save(&sample_record()).unwrap();

    let raw: serde_json::Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(raw["practice"]["totalAnswered"], 4);
    assert_eq!(raw["practice"]["totalCorrect"], 3);
    assert_eq!(raw["hiragana"]["streak"], 3);
    assert_eq!(raw["katakana"]["wrong"], 1);
    assert_eq!(raw["hiragana"]["mastered"], serde_json::json!(["ka", "shi"]));
}

#[test]
fn partial_file_fills_missing_sections() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("user_stats.json");
    fs::write(&path, r#"{ "katakana": { "streak": 2 } }"#).unwrap();

    let loaded = JsonFileRepository::new(&path).load().unwrap().unwrap();
    assert_eq!(loaded.katakana.streak, 2);
    assert_eq!(loaded.practice.total_answered, 0);
    assert!(loaded.hiragana.mastered.is_empty());
}

#[test]
fn corrupt_file_reports_serialization_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("user_stats.json");
    fs::write(&path, "not json").unwrap();

    let err = JsonFileRepository::new(&path).load().unwrap_err();
    assert!(matches!(err, StorageError::Serialization(_)));
}
