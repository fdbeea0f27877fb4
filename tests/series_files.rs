//! Series files on disk.

use std::fs;

use fourier_fun::series::loader::{self, export_samples_csv};
use fourier_fun::series::{ComponentStore, EvaluationSettings};

fn sample_store() -> ComponentStore {
    let mut store = ComponentStore::new();
    store
        .replace_with([(0.5, 2.0), (0.3, 5.0), (0.2, 8.0)])
        .expect("valid components");
    store
}

#[test]
fn json_file_loads_back_same_components() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("series.json");
    let spec = sample_store().components().unwrap();

    loader::save_file(&path, &spec).expect("save json");
    let records = loader::load_file(&path).expect("load json");

    let mut reloaded = ComponentStore::new();
    reloaded
        .replace_with(records.into_iter().map(Into::into))
        .unwrap();
    assert_eq!(reloaded.components().unwrap(), spec);
}

#[test]
fn csv_file_loads_back_same_components() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("series.CSV");
    let spec = sample_store().components().unwrap();

    loader::save_file(&path, &spec).expect("save csv");
    let records = loader::load_file(&path).expect("load csv");
    assert_eq!(records.len(), 3);
    assert_eq!(records[2].amplitude, 0.2);
    assert_eq!(records[2].frequency, 8.0);
}

#[test]
fn invalid_file_components_are_rejected_by_store() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("bad.csv");
    fs::write(&path, "amplitude,frequency\n1.0,-3.0\n").unwrap();

    let records = loader::load_file(&path).expect("file parses");
    let mut store = sample_store();
    assert!(store.replace_with(records.into_iter().map(Into::into)).is_err());
    assert_eq!(store.collected_count(), 3);
}

#[test]
fn unknown_extension_is_an_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("series.txt");
    fs::write(&path, "").unwrap();

    let err = loader::load_file(&path).unwrap_err();
    assert!(err.to_string().contains(".txt"));

    let spec = sample_store().components().unwrap();
    assert!(loader::save_file(&path, &spec).is_err());
}

#[test]
fn samples_export_as_t_value_rows() {
    let mut store = sample_store();
    let settings = EvaluationSettings {
        sample_count: 4,
        ..EvaluationSettings::default()
    };
    let samples = store.evaluate(&settings).unwrap();

    let mut out = Vec::new();
    export_samples_csv(&mut out, &samples).unwrap();
    let text = String::from_utf8(out).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines[0], "t,value");
    assert_eq!(lines.len(), 5);
    assert!(lines[4].starts_with("1,") || lines[4].starts_with("1.0,"));
}
