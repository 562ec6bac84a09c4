use std::fs::File;
use std::io::BufWriter;

use anyhow::{Context, Result};
use log::info;

use mnist_sampler::config::Config;
use mnist_sampler::data::{loader, sampler};
use mnist_sampler::render::{image_side, render_ascii};

fn main() -> Result<()> {
    // Default filter: info.
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = Config::from_env().context("reading configuration")?;

    let dataset = loader::load(&config.data_path, config.max_rows)
        .with_context(|| format!("loading {}", config.data_path.display()))?;
    info!(
        "Dataset: {} rows, {} features",
        dataset.len(),
        dataset.n_features()
    );

    let classes = sampler::sample_per_class(&dataset);
    info!("Classes: {}", classes.labels);

    // Non-square rows are printed on a single line.
    let width = image_side(dataset.n_features()).unwrap_or(dataset.n_features());
    for (label, sample) in classes.iter() {
        println!("Class {label}:");
        println!("{}\n", render_ascii(sample, width));
    }

    if let Some(out_path) = &config.export_path {
        let file = File::create(out_path)
            .with_context(|| format!("creating {}", out_path.display()))?;
        serde_json::to_writer_pretty(BufWriter::new(file), &classes)
            .context("writing class samples")?;
        info!(
            "Wrote {} class samples to {}",
            classes.len(),
            out_path.display()
        );
    }

    Ok(())
}
