#![doc = include_str!("../README.md")]

// Public modules (stable-ish surface)
pub mod annotate;
pub mod config;
pub mod detector;
pub mod error;
pub mod image;
pub mod report;
pub mod types;

// Pipeline stages – public for tools and tests, but considered internals.
pub mod filters;
pub mod labeling;
pub mod mask;
pub mod measure;
pub mod morphology;
pub mod preprocess;

// --- High-level re-exports -------------------------------------------------

// Main entry points: detector + results.
pub use crate::detector::{DetectorParams, ObjectDetector};
pub use crate::error::DetectError;
pub use crate::types::{DetectionReport, DetectionResult, ObjectRecord};

// --- Prelude ---------------------------------------------------------------

/// Small prelude for quick experiments.
///
/// ```no_run
/// use tabletop_detector::prelude::*;
///
/// # fn main() {
/// let (w, h) = (640usize, 480usize);
/// let gray = vec![220u8; w * h];
/// let img = ImageU8 { w, h, stride: w, data: &gray };
///
/// let detector = ObjectDetector::new(DetectorParams::default());
/// let report = detector.process(img).expect("valid image");
/// println!(
///     "objects={} latency_ms={:.3}",
///     report.result.objects.len(),
///     report.result.latency_ms
/// );
/// # }
/// ```
pub mod prelude {
    pub use crate::image::ImageU8;
    pub use crate::{DetectionReport, DetectorParams, ObjectDetector, ObjectRecord};
}
