use serde::Serialize;

use crate::labeling::LabelMap;

/// Final per-object descriptor, derived once from region statistics.
///
/// `aspect_ratio` is the elongation `max(w, h) / min(w, h)` (always ≥ 1), so
/// a single upper threshold rejects both thin-wide and thin-tall regions.
/// `orientation_rad` is the major-axis direction of the best-fit ellipse in
/// radians; symmetric regions with no defined major axis report 0.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ObjectRecord {
    /// Source label in the label map (1-based; 0 is background).
    pub label: u32,
    pub centroid_x: f64,
    pub centroid_y: f64,
    /// Pixel count of the region.
    pub area: u64,
    /// Bounding box origin (top-left) and extent in pixels.
    pub left: usize,
    pub top: usize,
    pub width: usize,
    pub height: usize,
    pub aspect_ratio: f64,
    pub orientation_rad: f64,
}

/// Ordered object list plus run metadata, ready for serialization.
#[derive(Clone, Debug, Default, Serialize)]
pub struct DetectionResult {
    /// Surviving objects in original label order.
    pub objects: Vec<ObjectRecord>,
    /// Input image width in pixels.
    pub width: usize,
    /// Input image height in pixels.
    pub height: usize,
    /// Global threshold chosen by Otsu binarization; `None` for the adaptive
    /// method, which has no single global value.
    pub threshold: Option<u8>,
    pub latency_ms: f64,
}

/// Detection result paired with the label map consumed by annotators.
///
/// Label values in the map are consistent with the surviving records'
/// `label` fields.
#[derive(Clone, Debug)]
pub struct DetectionReport {
    pub result: DetectionResult,
    pub label_map: LabelMap,
}
