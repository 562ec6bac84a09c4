pub mod config;
pub mod data;
pub mod error;
pub mod render;

pub use data::{load, sample_per_class, ClassSamples, LabeledDataset};
pub use error::{ConfigError, DataError, Result};
