use ndarray::ArrayView1;

/// Dark to bright.
const RAMP: &[char] = &[' ', '.', ':', '-', '=', '+', '*', '#', '%', '@'];

/// Largest pixel intensity in MNIST data.
const MAX_INTENSITY: f64 = 255.0;

/// Render one sample row as text, `width` pixels per line.
///
/// Intensities are clamped to `0..=255` and mapped onto a ten-step
/// character ramp. A zero `width` renders nothing.
pub fn render_ascii(pixels: ArrayView1<'_, f64>, width: usize) -> String {
    if width == 0 {
        return String::new();
    }

    let mut out = String::with_capacity(pixels.len() + pixels.len() / width);
    for (i, &value) in pixels.iter().enumerate() {
        if i > 0 && i % width == 0 {
            out.push('\n');
        }
        out.push(shade(value));
    }
    out
}

/// Side length of a square image with `n_pixels` pixels.
pub fn image_side(n_pixels: usize) -> Option<usize> {
    let side = (n_pixels as f64).sqrt().round() as usize;
    (side > 0 && side * side == n_pixels).then_some(side)
}

fn shade(value: f64) -> char {
    let level = if value.is_nan() {
        0.0
    } else {
        (value / MAX_INTENSITY).clamp(0.0, 1.0)
    };
    let idx = (level * (RAMP.len() - 1) as f64).round() as usize;
    RAMP[idx]
}

#[cfg(test)]
mod tests {
    use ndarray::array;

    use super::*;

    #[test]
    fn renders_rows_of_given_width() {
        let pixels = array![0.0, 255.0, 255.0, 0.0];
        assert_eq!(render_ascii(pixels.view(), 2), " @\n@ ");
    }

    #[test]
    fn out_of_range_values_are_clamped() {
        let pixels = array![-40.0, 1_000.0, f64::NAN];
        assert_eq!(render_ascii(pixels.view(), 3), " @ ");
    }

    #[test]
    fn short_last_line_is_kept() {
        let pixels = array![255.0, 255.0, 255.0];
        assert_eq!(render_ascii(pixels.view(), 2), "@@\n@");
    }

    #[test]
    fn zero_width_renders_nothing() {
        assert_eq!(render_ascii(array![1.0].view(), 0), "");
    }

    #[test]
    fn square_sides() {
        assert_eq!(image_side(784), Some(28));
        assert_eq!(image_side(4), Some(2));
        assert_eq!(image_side(5), None);
        assert_eq!(image_side(0), None);
    }
}
