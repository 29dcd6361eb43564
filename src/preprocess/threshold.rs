//! Binarization: Otsu's global threshold and an adaptive mean alternative.
//!
//! Otsu selects the threshold maximizing the between-class variance of the
//! intensity histogram; ties resolve to the smallest candidate so results are
//! reproducible. The adaptive method thresholds each pixel against the mean
//! of its surrounding block (integral-image box window), which copes with
//! illumination gradients a single global threshold cannot.
use crate::detector::options::Polarity;
use crate::image::ImageU8;
use crate::mask::BinaryMask;

/// 256-bin intensity histogram.
fn histogram(image: &ImageU8) -> [u64; 256] {
    let mut hist = [0u64; 256];
    for y in 0..image.h {
        for &v in image.row(y) {
            hist[v as usize] += 1;
        }
    }
    hist
}

/// Otsu's threshold: maximize between-class variance, smallest t on ties.
///
/// The split at candidate `t` places intensities `<= t` in the first class.
/// A constant image has zero variance at every candidate and returns 0.
pub fn otsu_threshold(image: &ImageU8) -> u8 {
    let hist = histogram(image);
    let total: u64 = hist.iter().sum();
    let sum_all: f64 = hist
        .iter()
        .enumerate()
        .map(|(i, &n)| i as f64 * n as f64)
        .sum();

    let mut best_t = 0u8;
    let mut best_var = f64::NEG_INFINITY;
    let mut w0 = 0u64;
    let mut sum0 = 0.0f64;

    for t in 0..256usize {
        w0 += hist[t];
        sum0 += t as f64 * hist[t] as f64;
        let w1 = total - w0;
        if w0 == 0 || w1 == 0 {
            continue;
        }
        let mean0 = sum0 / w0 as f64;
        let mean1 = (sum_all - sum0) / w1 as f64;
        let diff = mean0 - mean1;
        let between = w0 as f64 * w1 as f64 * diff * diff;
        if between > best_var {
            best_var = between;
            best_t = t as u8;
        }
    }
    best_t
}

/// Binarize against a global threshold `t`.
///
/// `DarkObjects` marks intensities `<= t` as foreground (objects darker than
/// the surface); `LightObjects` marks `> t`.
pub fn binarize_global(image: &ImageU8, t: u8, polarity: Polarity) -> BinaryMask {
    let mut mask = BinaryMask::new(image.w, image.h);
    for y in 0..image.h {
        let row = image.row(y);
        for (x, &v) in row.iter().enumerate() {
            let fg = match polarity {
                Polarity::DarkObjects => v <= t,
                Polarity::LightObjects => v > t,
            };
            mask.set(x, y, fg);
        }
    }
    mask
}

/// Adaptive mean threshold over a clamped `block_size` window.
///
/// For `DarkObjects`, a pixel is foreground when its intensity falls at least
/// `c` below the local mean; `LightObjects` requires it at least `c` above.
pub fn binarize_adaptive(
    image: &ImageU8,
    block_size: usize,
    c: f64,
    polarity: Polarity,
) -> BinaryMask {
    let (w, h) = (image.w, image.h);
    let radius = block_size / 2;

    // integral image with one extra row/column of zeros
    let mut integral = vec![0u64; (w + 1) * (h + 1)];
    for y in 0..h {
        let row = image.row(y);
        let mut run = 0u64;
        for x in 0..w {
            run += row[x] as u64;
            integral[(y + 1) * (w + 1) + (x + 1)] = integral[y * (w + 1) + (x + 1)] + run;
        }
    }
    let box_sum = |x0: usize, y0: usize, x1: usize, y1: usize| -> u64 {
        // inclusive corners
        integral[(y1 + 1) * (w + 1) + (x1 + 1)] + integral[y0 * (w + 1) + x0]
            - integral[y0 * (w + 1) + (x1 + 1)]
            - integral[(y1 + 1) * (w + 1) + x0]
    };

    let mut mask = BinaryMask::new(w, h);
    for y in 0..h {
        let y0 = y.saturating_sub(radius);
        let y1 = (y + radius).min(h - 1);
        let row = image.row(y);
        for x in 0..w {
            let x0 = x.saturating_sub(radius);
            let x1 = (x + radius).min(w - 1);
            let count = ((x1 - x0 + 1) * (y1 - y0 + 1)) as f64;
            let mean = box_sum(x0, y0, x1, y1) as f64 / count;
            let v = row[x] as f64;
            let fg = match polarity {
                Polarity::DarkObjects => v <= mean - c,
                Polarity::LightObjects => v >= mean + c,
            };
            mask.set(x, y, fg);
        }
    }
    mask
}
