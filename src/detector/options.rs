//! Parameter types configuring the pipeline stages.
//!
//! Defaults are tuned for dark objects on a light tabletop captured from
//! overhead at common webcam resolutions. For tuning, start with
//! `filters.min_area` (the `area_sweep` tool prints survivor counts over a
//! ladder of values) and the blur kernel size.

use crate::error::DetectError;
use crate::filters::{FilterChain, RegionFilter};
use crate::morphology::KernelShape;
use serde::{Deserialize, Serialize};

/// Binarization method used by the preprocessor.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "method", rename_all = "snake_case")]
pub enum Binarization {
    /// Automatic global threshold maximizing between-class variance.
    Otsu,
    /// Local-mean threshold for scenes with uneven illumination.
    Adaptive { block_size: usize, c: f64 },
}

/// Which side of the threshold is foreground.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Polarity {
    /// Objects darker than the surface: pixels at or below threshold.
    DarkObjects,
    /// Objects lighter than the surface: pixels above threshold.
    LightObjects,
}

/// Morphological cleaning parameters.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct MorphParams {
    /// Structuring element size (odd).
    pub kernel_size: usize,
    pub kernel_shape: KernelShape,
    /// Erosion/dilation passes per opening and closing.
    pub iterations: usize,
}

impl Default for MorphParams {
    fn default() -> Self {
        Self {
            kernel_size: 3,
            kernel_shape: KernelShape::Square,
            iterations: 2,
        }
    }
}

/// Thresholds for the three filter predicates.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterParams {
    /// Fraction of image height treated as a capture-overlay band.
    pub top_margin_fraction: f64,
    /// Minimum region area in pixels.
    pub min_area: u64,
    /// Maximum elongation max(w,h)/min(w,h).
    pub max_aspect_ratio: f64,
}

impl Default for FilterParams {
    fn default() -> Self {
        Self {
            top_margin_fraction: 0.15,
            min_area: 2000,
            max_aspect_ratio: 8.0,
        }
    }
}

impl FilterParams {
    /// Standard chain: size first (cheapest reject), then position, then shape.
    pub fn to_chain(&self) -> FilterChain {
        FilterChain::new(vec![
            RegionFilter::Size {
                min_area: self.min_area,
            },
            RegionFilter::Position {
                top_margin_fraction: self.top_margin_fraction,
            },
            RegionFilter::Shape {
                max_aspect_ratio: self.max_aspect_ratio,
            },
        ])
    }
}

/// Detector-wide parameters threaded immutably through every stage.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct DetectorParams {
    /// Smoothing kernel size (odd); 1 disables smoothing.
    pub blur_kernel_size: usize,
    pub binarization: Binarization,
    pub polarity: Polarity,
    pub morph: MorphParams,
    pub filters: FilterParams,
}

impl Default for DetectorParams {
    fn default() -> Self {
        Self {
            blur_kernel_size: 5,
            binarization: Binarization::Otsu,
            polarity: Polarity::DarkObjects,
            morph: MorphParams::default(),
            filters: FilterParams::default(),
        }
    }
}

impl DetectorParams {
    /// Reject parameter combinations the stages cannot honor.
    pub fn validate(&self) -> Result<(), DetectError> {
        if self.blur_kernel_size == 0 || self.blur_kernel_size % 2 == 0 {
            return Err(DetectError::InvalidParams {
                reason: format!("blur_kernel_size must be odd, got {}", self.blur_kernel_size),
            });
        }
        if self.morph.kernel_size == 0 || self.morph.kernel_size % 2 == 0 {
            return Err(DetectError::InvalidParams {
                reason: format!(
                    "morph.kernel_size must be odd, got {}",
                    self.morph.kernel_size
                ),
            });
        }
        if let Binarization::Adaptive { block_size, .. } = self.binarization {
            if block_size < 3 || block_size % 2 == 0 {
                return Err(DetectError::InvalidParams {
                    reason: format!("adaptive block_size must be odd and >= 3, got {block_size}"),
                });
            }
        }
        if !(0.0..=1.0).contains(&self.filters.top_margin_fraction) {
            return Err(DetectError::InvalidParams {
                reason: format!(
                    "filters.top_margin_fraction must be in [0, 1], got {}",
                    self.filters.top_margin_fraction
                ),
            });
        }
        if self.filters.max_aspect_ratio < 1.0 {
            return Err(DetectError::InvalidParams {
                reason: format!(
                    "filters.max_aspect_ratio must be >= 1, got {}",
                    self.filters.max_aspect_ratio
                ),
            });
        }
        Ok(())
    }
}
