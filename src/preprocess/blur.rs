//! Separable binomial smoothing for sensor-noise suppression.
//!
//! The 1D kernel is the binomial row of the requested odd size, normalized to
//! unit sum (size 5 gives [1,4,6,4,1]/16, the usual Gaussian approximation).
//! Border handling clamps sample coordinates to the image (replicate border).
//! Accumulation runs in f32 with a single rounding per pixel, so a constant
//! image passes through unchanged.
use crate::image::ImageU8;

/// Normalized binomial kernel of odd length `size`.
fn binomial_kernel(size: usize) -> Vec<f32> {
    debug_assert!(size % 2 == 1 && size >= 1);
    let mut row = vec![1.0f64];
    for _ in 1..size {
        let mut next = vec![1.0f64; row.len() + 1];
        for i in 1..row.len() {
            next[i] = row[i - 1] + row[i];
        }
        row = next;
    }
    let sum: f64 = row.iter().sum();
    row.iter().map(|&v| (v / sum) as f32).collect()
}

/// Blur `src` with a separable binomial kernel of odd `kernel_size`.
///
/// Size 1 is the identity and simply copies the pixels.
pub fn blur_u8(src: &ImageU8, kernel_size: usize) -> Vec<u8> {
    let (w, h) = (src.w, src.h);
    if kernel_size <= 1 {
        let mut out = Vec::with_capacity(w * h);
        for y in 0..h {
            out.extend_from_slice(src.row(y));
        }
        return out;
    }

    let kernel = binomial_kernel(kernel_size);
    let radius = kernel_size / 2;

    // horizontal pass
    let mut tmp = vec![0.0f32; w * h];
    for y in 0..h {
        let row = src.row(y);
        for x in 0..w {
            let mut acc = 0.0f32;
            for (k, &weight) in kernel.iter().enumerate() {
                let xs = (x + k).saturating_sub(radius).min(w - 1);
                acc += row[xs] as f32 * weight;
            }
            tmp[y * w + x] = acc;
        }
    }

    // vertical pass
    let mut out = vec![0u8; w * h];
    for y in 0..h {
        for x in 0..w {
            let mut acc = 0.0f32;
            for (k, &weight) in kernel.iter().enumerate() {
                let ys = (y + k).saturating_sub(radius).min(h - 1);
                acc += tmp[ys * w + x] * weight;
            }
            out[y * w + x] = acc.round().clamp(0.0, 255.0) as u8;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn view(w: usize, h: usize, data: &[u8]) -> ImageU8<'_> {
        ImageU8 {
            w,
            h,
            stride: w,
            data,
        }
    }

    #[test]
    fn binomial_kernel_matches_pascal_row() {
        let k = binomial_kernel(5);
        let expected = [1.0, 4.0, 6.0, 4.0, 1.0].map(|v: f32| v / 16.0);
        for (got, want) in k.iter().zip(expected.iter()) {
            assert!((got - want).abs() < 1e-6, "kernel {k:?}");
        }
    }

    #[test]
    fn constant_image_is_unchanged() {
        let data = vec![128u8; 16 * 16];
        let out = blur_u8(&view(16, 16, &data), 5);
        assert!(out.iter().all(|&v| v == 128), "blur must preserve flats");
    }

    #[test]
    fn impulse_spreads_symmetrically() {
        let mut data = vec![0u8; 9 * 9];
        data[4 * 9 + 4] = 160;
        let out = blur_u8(&view(9, 9, &data), 3);
        // separable [1,2,1]/4: center keeps (2/4)^2 of the impulse
        assert_eq!(out[4 * 9 + 4], 40);
        assert_eq!(out[4 * 9 + 3], out[4 * 9 + 5]);
        assert_eq!(out[3 * 9 + 4], out[5 * 9 + 4]);
    }

    #[test]
    fn kernel_size_one_is_identity() {
        let data: Vec<u8> = (0..64).map(|v| (v * 3) as u8).collect();
        let out = blur_u8(&view(8, 8, &data), 1);
        assert_eq!(out, data);
    }
}
