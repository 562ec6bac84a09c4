use std::collections::{BTreeMap, BTreeSet};

use log::warn;
use ndarray::{Array1, Array2, ArrayView1};

use super::model::{ClassLabel, ClassSamples, LabeledDataset};

/// Ascending, deduplicated label values.
pub fn unique_labels(labels: ArrayView1<'_, f64>) -> Array1<f64> {
    let distinct: BTreeSet<ClassLabel> = labels.iter().map(|&v| ClassLabel::new(v)).collect();
    distinct.into_iter().map(ClassLabel::value).collect()
}

/// Pick the first row of every class present in `dataset`, in ascending
/// label order.
pub fn sample_per_class(dataset: &LabeledDataset) -> ClassSamples {
    let labels = unique_labels(dataset.labels());
    sample_for_labels(dataset, labels.view())
}

/// Pick the first row of `dataset` for each of `labels`, keeping the given
/// label order.
///
/// A label with no matching row produces an all-zero sample row, is listed
/// in [`ClassSamples::missing`] and logs a warning.
pub fn sample_for_labels(dataset: &LabeledDataset, labels: ArrayView1<'_, f64>) -> ClassSamples {
    let first_rows = first_occurrences(dataset.labels());
    let features = dataset.features();

    let mut samples = Array2::zeros((labels.len(), dataset.n_features()));
    let mut missing = Vec::new();

    for (i, &label) in labels.iter().enumerate() {
        let class = ClassLabel::new(label);
        match first_rows.get(&class) {
            Some(&row) => samples.row_mut(i).assign(&features.row(row)),
            None => {
                warn!("Class {class} not present.");
                missing.push(label);
            }
        }
    }

    ClassSamples {
        samples,
        labels: labels.to_owned(),
        missing,
    }
}

/// Label → index of the first row carrying it, in one pass.
/// NaN never equals a label, so NaN rows are never picked.
fn first_occurrences(labels: ArrayView1<'_, f64>) -> BTreeMap<ClassLabel, usize> {
    let mut first = BTreeMap::new();
    for (row, &label) in labels.iter().enumerate() {
        let class = ClassLabel::new(label);
        if class.is_nan() {
            continue;
        }
        first.entry(class).or_insert(row);
    }
    first
}
