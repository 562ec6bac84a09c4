/// Data layer: core types, loading, and per-class sampling.
///
/// Architecture:
/// ```text
///  mnist_train.csv   (header + label,pixel,pixel,...)
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse file → LabeledDataset
///   └──────────┘
///        │
///        ▼
///   ┌────────────────┐
///   │ LabeledDataset │  Array2 features, Array1 labels
///   └────────────────┘
///        │
///        ▼
///   ┌──────────┐
///   │ sampler   │  first row per class → ClassSamples
///   └──────────┘
/// ```

pub mod loader;
pub mod model;
pub mod sampler;

pub use loader::{load, load_default, load_from_reader};
pub use model::{ClassLabel, ClassSamples, LabeledDataset};
pub use sampler::{sample_for_labels, sample_per_class, unique_labels};
