//! Preprocessing stage: smoothing and binarization.
//!
//! Consumes the raw intensity image and produces the binary mask the rest of
//! the pipeline works on. Smoothing is a separable binomial blur sized to
//! suppress sensor noise without eroding small objects; binarization is
//! either Otsu's automatic global threshold or an adaptive local-mean
//! threshold for scenes with uneven illumination. Foreground polarity selects
//! whether objects are darker or lighter than the surface.
//!
//! A degenerate (constant-intensity) input yields an empty or full mask; that
//! is not an error and simply propagates as zero detected regions.

mod blur;
mod threshold;

pub use blur::blur_u8;
pub use threshold::{binarize_adaptive, binarize_global, otsu_threshold};

use crate::detector::options::{Binarization, DetectorParams};
use crate::image::ImageU8;
use crate::mask::BinaryMask;
use log::debug;

/// Output of the preprocessing stage.
pub struct PreprocessOutput {
    pub mask: BinaryMask,
    /// Chosen global threshold; `None` for the adaptive method.
    pub threshold: Option<u8>,
}

/// Blur and binarize `image` according to `params`.
pub fn preprocess(image: &ImageU8, params: &DetectorParams) -> PreprocessOutput {
    let blurred = blur_u8(image, params.blur_kernel_size);
    let blurred_view = ImageU8 {
        w: image.w,
        h: image.h,
        stride: image.w,
        data: &blurred,
    };

    match params.binarization {
        Binarization::Otsu => {
            let t = otsu_threshold(&blurred_view);
            let mask = binarize_global(&blurred_view, t, params.polarity);
            debug!(
                "preprocess: otsu t={} foreground={}px",
                t,
                mask.foreground_count()
            );
            PreprocessOutput {
                mask,
                threshold: Some(t),
            }
        }
        Binarization::Adaptive { block_size, c } => {
            let mask = binarize_adaptive(&blurred_view, block_size, c, params.polarity);
            debug!(
                "preprocess: adaptive block={} c={} foreground={}px",
                block_size,
                c,
                mask.foreground_count()
            );
            PreprocessOutput {
                mask,
                threshold: None,
            }
        }
    }
}
