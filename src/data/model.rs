use std::cmp::Ordering;
use std::fmt;

use ndarray::{Array1, Array2, ArrayView1, ArrayView2};
use serde::Serialize;

use crate::error::{DataError, Result};

// ---------------------------------------------------------------------------
// ClassLabel – a label value usable as an ordered key
// ---------------------------------------------------------------------------

/// A class label stored as `f64`, the way the CSV encodes it.
/// Ordering follows `f64::total_cmp` so labels can live in `BTreeMap` /
/// `BTreeSet`. On construction `-0.0` is folded into `0.0` and every NaN
/// into one positive NaN, which sorts after all numbers.
#[derive(Debug, Clone, Copy)]
pub struct ClassLabel(f64);

impl ClassLabel {
    pub fn new(value: f64) -> Self {
        if value.is_nan() {
            ClassLabel(f64::NAN)
        } else if value == 0.0 {
            ClassLabel(0.0)
        } else {
            ClassLabel(value)
        }
    }

    pub fn is_nan(self) -> bool {
        self.0.is_nan()
    }

    pub fn value(self) -> f64 {
        self.0
    }
}

// -- Manual Eq/Ord so ClassLabel can key ordered collections --

impl PartialEq for ClassLabel {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for ClassLabel {}

impl PartialOrd for ClassLabel {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ClassLabel {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl fmt::Display for ClassLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ---------------------------------------------------------------------------
// LabeledDataset – feature matrix plus parallel label vector
// ---------------------------------------------------------------------------

/// Parsed dataset: one feature row per record, one label per row.
#[derive(Debug, Clone, PartialEq)]
pub struct LabeledDataset {
    features: Array2<f64>,
    labels: Array1<f64>,
}

impl LabeledDataset {
    /// Pair a feature matrix with its labels. Fails if the row count and
    /// label count differ.
    pub fn new(features: Array2<f64>, labels: Array1<f64>) -> Result<Self> {
        if features.nrows() != labels.len() {
            return Err(DataError::LengthMismatch {
                rows: features.nrows(),
                labels: labels.len(),
            });
        }
        Ok(LabeledDataset { features, labels })
    }

    /// Feature matrix `X`.
    pub fn features(&self) -> ArrayView2<'_, f64> {
        self.features.view()
    }

    /// Label vector `y`.
    pub fn labels(&self) -> ArrayView1<'_, f64> {
        self.labels.view()
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Width of each feature row (pixel count).
    pub fn n_features(&self) -> usize {
        self.features.ncols()
    }

    pub fn into_parts(self) -> (Array2<f64>, Array1<f64>) {
        (self.features, self.labels)
    }
}

// ---------------------------------------------------------------------------
// ClassSamples – one representative row per class
// ---------------------------------------------------------------------------

/// Result of per-class sampling. `samples` row `i` belongs to `labels[i]`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClassSamples {
    pub samples: Array2<f64>,
    pub labels: Array1<f64>,
    /// Labels that had no matching row; their sample rows are all zero.
    pub missing: Vec<f64>,
}

impl ClassSamples {
    /// Number of classes.
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Sample row for `label`, if the label is part of this result.
    pub fn get(&self, label: f64) -> Option<ArrayView1<'_, f64>> {
        let wanted = ClassLabel::new(label);
        self.labels
            .iter()
            .position(|&l| ClassLabel::new(l) == wanted)
            .map(|i| self.samples.row(i))
    }

    /// `(label, sample row)` pairs in label order.
    pub fn iter(&self) -> impl Iterator<Item = (f64, ArrayView1<'_, f64>)> + '_ {
        self.labels.iter().copied().zip(self.samples.rows())
    }

    pub fn into_parts(self) -> (Array2<f64>, Array1<f64>) {
        (self.samples, self.labels)
    }
}
