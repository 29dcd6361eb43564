//! Object detector orchestrating the segmentation-and-measurement pipeline.
//!
//! Overview
//! - Preprocesses the raw frame: separable blur, then Otsu or adaptive-mean
//!   binarization with selectable foreground polarity.
//! - Cleans the binary mask with morphological opening and closing.
//! - Labels 8-connected foreground regions in deterministic row-major order.
//! - Measures each region from pixel moments: centroid, area, bounding box,
//!   elongation, principal-axis orientation.
//! - Applies the position/size/shape filter chain and assembles the ordered
//!   object list together with the label map.
//!
//! Modules
//! - [`options`] – configuration types used by the detector and CLI.
//! - `pipeline` – the main [`ObjectDetector`] implementation.

pub mod options;
mod pipeline;

pub use options::{Binarization, DetectorParams, FilterParams, MorphParams, Polarity};
pub use pipeline::ObjectDetector;
