use std::io::Write;

use ndarray::array;
use tempfile::NamedTempFile;

use mnist_sampler::data::{loader, sampler};
use mnist_sampler::DataError;

/// Header plus `rows` data lines; row `i` has label `i % 10` and pixels
/// `[i, i + 1, i + 2]`.
fn write_csv(rows: usize) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("temp file");
    writeln!(file, "label,1x1,1x2,1x3").unwrap();
    for i in 0..rows {
        writeln!(file, "{},{},{},{}", i % 10, i, i + 1, i + 2).unwrap();
    }
    file.flush().unwrap();
    file
}

#[test]
fn capped_load_starts_at_second_line() {
    let file = write_csv(100);
    let ds = loader::load(file.path(), Some(5)).unwrap();

    assert_eq!(ds.len(), 5);
    assert_eq!(ds.labels().len(), ds.features().nrows());
    assert_eq!(ds.features().row(0), array![0.0, 1.0, 2.0]);
    assert_eq!(ds.labels(), array![0.0, 1.0, 2.0, 3.0, 4.0]);
}

#[test]
fn every_cap_up_to_file_length_is_exact() {
    let file = write_csv(12);
    for n in 1..=12 {
        let ds = loader::load(file.path(), Some(n)).unwrap();
        assert_eq!(ds.len(), n);
        assert_eq!(ds.features().nrows(), n);
    }
}

#[test]
fn unbounded_load_skips_only_the_header() {
    let file = write_csv(100);
    let ds = loader::load(file.path(), None).unwrap();

    assert_eq!(ds.len(), 100);
    assert_eq!(ds.n_features(), 3);
    assert_eq!(ds.features().row(99), array![99.0, 100.0, 101.0]);
}

#[test]
fn load_then_sample_picks_first_of_each_digit() {
    let file = write_csv(100);
    let ds = loader::load(file.path(), None).unwrap();
    let classes = sampler::sample_per_class(&ds);

    assert_eq!(
        classes.labels,
        array![0.0, 1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0]
    );
    for (label, sample) in classes.iter() {
        assert_eq!(sample, array![label, label + 1.0, label + 2.0]);
    }
    assert!(classes.missing.is_empty());
}

#[test]
fn externally_supplied_label_without_rows_is_zero_filled() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "label,a,b").unwrap();
    writeln!(file, "5,1,2").unwrap();
    writeln!(file, "5,3,4").unwrap();
    file.flush().unwrap();

    let ds = loader::load(file.path(), None).unwrap();
    let classes = sampler::sample_for_labels(&ds, array![3.0, 5.0].view());

    assert_eq!(classes.get(3.0).unwrap(), array![0.0, 0.0]);
    assert_eq!(classes.get(5.0).unwrap(), array![1.0, 2.0]);
    assert_eq!(classes.missing, vec![3.0]);
}

#[test]
fn malformed_file_reports_parse_error() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "label,a").unwrap();
    writeln!(file, "1,oops").unwrap();
    file.flush().unwrap();

    let err = loader::load(file.path(), None).unwrap_err();
    assert!(matches!(err, DataError::Parse { line: 2, column: 1, .. }));
}

#[test]
fn class_samples_serialize_to_json() {
    let file = write_csv(3);
    let ds = loader::load(file.path(), None).unwrap();
    let classes = sampler::sample_per_class(&ds);

    let json = serde_json::to_value(&classes).unwrap();
    assert_eq!(json["labels"]["data"], serde_json::json!([0.0, 1.0, 2.0]));
    assert_eq!(json["missing"], serde_json::json!([]));
}
