use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use mnist_sampler::data::loader::DEFAULT_DATA_PATH;

const SIDE: usize = 28;
const DEFAULT_ROWS: usize = 1_000;
const SEED: u64 = 42;

/// Seven-segment strokes as `(row_start, row_end, col_start, col_end)`,
/// in order a, b, c, d, e, f, g.
const SEGMENTS: [(usize, usize, usize, usize); 7] = [
    (4, 7, 8, 20),   // a: top
    (4, 14, 17, 20), // b: upper right
    (14, 24, 17, 20), // c: lower right
    (21, 24, 8, 20), // d: bottom
    (14, 24, 8, 11), // e: lower left
    (4, 14, 8, 11),  // f: upper left
    (12, 15, 8, 20), // g: middle
];

/// Lit segments per digit, bit 0 = a ... bit 6 = g.
const DIGIT_SEGMENTS: [u8; 10] = [
    0b011_1111, // 0
    0b000_0110, // 1
    0b101_1011, // 2
    0b100_1111, // 3
    0b110_0110, // 4
    0b110_1101, // 5
    0b111_1101, // 6
    0b000_0111, // 7
    0b111_1111, // 8
    0b110_1111, // 9
];

/// Draw a jittered seven-segment digit into a `SIDE * SIDE` pixel row.
fn draw_digit(digit: usize, rng: &mut StdRng) -> Vec<u8> {
    let mut pixels = vec![0u8; SIDE * SIDE];
    let dr: isize = rng.gen_range(-2..=2);
    let dc: isize = rng.gen_range(-3..=3);

    for (bit, &(r0, r1, c0, c1)) in SEGMENTS.iter().enumerate() {
        if DIGIT_SEGMENTS[digit] & (1 << bit) == 0 {
            continue;
        }
        for r in r0..r1 {
            for c in c0..c1 {
                let (Some(row), Some(col)) = (r.checked_add_signed(dr), c.checked_add_signed(dc))
                else {
                    continue;
                };
                if row < SIDE && col < SIDE {
                    pixels[row * SIDE + col] = rng.gen_range(180..=255);
                }
            }
        }
    }

    // Sparse background noise.
    for px in pixels.iter_mut().filter(|px| **px == 0) {
        if rng.gen_bool(0.02) {
            *px = rng.gen_range(1..60);
        }
    }
    pixels
}

fn write_dataset(path: &Path, rows: usize, rng: &mut StdRng) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("creating {}", parent.display()))?;
    }

    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("creating {}", path.display()))?;

    let mut header = vec!["label".to_string()];
    for r in 1..=SIDE {
        for c in 1..=SIDE {
            header.push(format!("{r}x{c}"));
        }
    }
    writer.write_record(&header).context("writing header")?;

    for _ in 0..rows {
        let digit = rng.gen_range(0..DIGIT_SEGMENTS.len());
        let mut record = Vec::with_capacity(SIDE * SIDE + 1);
        record.push(digit.to_string());
        record.extend(draw_digit(digit, rng).iter().map(|p| p.to_string()));
        writer.write_record(&record).context("writing row")?;
    }

    writer.flush().context("flushing CSV")?;
    Ok(())
}

fn main() -> Result<()> {
    let mut args = std::env::args().skip(1);
    let output_path = args
        .next()
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_PATH));
    let rows = match args.next() {
        Some(n) => n
            .parse::<usize>()
            .with_context(|| format!("'{n}' is not a row count"))?,
        None => DEFAULT_ROWS,
    };

    let mut rng = StdRng::seed_from_u64(SEED);
    write_dataset(&output_path, rows, &mut rng)?;

    println!(
        "Wrote {rows} digits ({SIDE}x{SIDE} pixels each) to {}",
        output_path.display()
    );
    Ok(())
}
