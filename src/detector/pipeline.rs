//! Detector pipeline orchestrating end-to-end object detection.
//!
//! Stages run strictly forward, each consuming the previous stage's output:
//! preprocess (blur + binarize) → morphological clean (in place) → label →
//! measure → filter → assemble. The pipeline is a pure function of the input
//! pixels and the parameter set; re-running it on identical input produces
//! bit-identical results.
use super::options::DetectorParams;
use crate::error::DetectError;
use crate::filters::FilterOutcome;
use crate::image::ImageU8;
use crate::labeling::label_regions;
use crate::measure::measure_regions;
use crate::morphology::{self, StructuringElement};
use crate::preprocess::{preprocess, PreprocessOutput};
use crate::types::{DetectionReport, DetectionResult};
use log::{debug, warn};
use std::time::Instant;

/// Object detector running the full segmentation-and-measurement pipeline.
pub struct ObjectDetector {
    params: DetectorParams,
}

impl ObjectDetector {
    /// Create a detector with the supplied parameters.
    pub fn new(params: DetectorParams) -> Self {
        Self { params }
    }

    pub fn params(&self) -> &DetectorParams {
        &self.params
    }

    /// Run the full pipeline on one grayscale frame.
    ///
    /// Fails fast on malformed input (empty dimensions, short buffer, invalid
    /// parameters) before any stage runs. Zero detected regions is a valid,
    /// empty result.
    pub fn process(&self, image: ImageU8) -> Result<DetectionReport, DetectError> {
        validate_input(&image)?;
        self.params.validate()?;
        let total_start = Instant::now();

        let stage_start = Instant::now();
        let PreprocessOutput { mut mask, threshold } = preprocess(&image, &self.params);
        debug!(
            "stage preprocess: {:.3} ms",
            stage_start.elapsed().as_secs_f64() * 1000.0
        );
        let fg = mask.foreground_count();
        if fg == 0 || fg == image.w * image.h {
            warn!("degenerate binarization: {fg} foreground pixel(s)");
        }

        let stage_start = Instant::now();
        let element = StructuringElement::new(self.params.morph.kernel_shape, self.params.morph.kernel_size);
        morphology::clean(&mut mask, &element, self.params.morph.iterations);
        debug!(
            "stage clean: {:.3} ms, foreground {}px",
            stage_start.elapsed().as_secs_f64() * 1000.0,
            mask.foreground_count()
        );

        let stage_start = Instant::now();
        let label_map = label_regions(&mask);
        debug!(
            "stage label: {:.3} ms, {} region(s)",
            stage_start.elapsed().as_secs_f64() * 1000.0,
            label_map.num_labels()
        );

        let stage_start = Instant::now();
        let candidates = measure_regions(&label_map);
        debug!(
            "stage measure: {:.3} ms, {} candidate(s)",
            stage_start.elapsed().as_secs_f64() * 1000.0,
            candidates.len()
        );

        let stage_start = Instant::now();
        let chain = self.params.filters.to_chain();
        let FilterOutcome {
            survivors,
            rejected_position,
            rejected_size,
            rejected_shape,
        } = chain.apply(candidates, image.h);
        debug!(
            "stage filter: {:.3} ms, kept {} (rejected: position={} size={} shape={})",
            stage_start.elapsed().as_secs_f64() * 1000.0,
            survivors.len(),
            rejected_position,
            rejected_size,
            rejected_shape
        );

        // assemble: pure packaging, label order already preserved
        let result = DetectionResult {
            objects: survivors,
            width: image.w,
            height: image.h,
            threshold,
            latency_ms: total_start.elapsed().as_secs_f64() * 1000.0,
        };
        Ok(DetectionReport { result, label_map })
    }
}

fn validate_input(image: &ImageU8) -> Result<(), DetectError> {
    if image.w == 0 || image.h == 0 {
        return Err(DetectError::EmptyImage {
            width: image.w,
            height: image.h,
        });
    }
    if image.stride < image.w {
        return Err(DetectError::ShortBuffer {
            stride: image.stride,
            height: image.h,
            needed: image.w * image.h,
            actual: image.data.len(),
        });
    }
    let needed = image.stride * (image.h - 1) + image.w;
    if image.data.len() < needed {
        return Err(DetectError::ShortBuffer {
            stride: image.stride,
            height: image.h,
            needed,
            actual: image.data.len(),
        });
    }
    Ok(())
}
