//! Region measurement from label-map pixel statistics.
//!
//! A single pass over the label map fills an arena of per-label accumulators
//! (label count is known after labeling, so the arena is a plain vector
//! indexed by label id). Each region then yields one candidate
//! [`ObjectRecord`] regardless of plausibility; all accept/reject policy
//! lives in the filter chain.
//!
//! Orientation is the principal-axis direction of the best-fit ellipse,
//! derived from second-order central moments:
//!
//!   μ20 = Σx²/n − cx²,  μ02 = Σy²/n − cy²,  μ11 = Σxy/n − cx·cy
//!   θ = 0.5 · atan2(2·μ11, μ20 − μ02)
//!
//! The two-argument arctangent resolves the quadrant. A fully symmetric
//! region (μ20 == μ02 and μ11 == 0) has no defined major axis and reports 0.

mod accumulator;

pub use accumulator::RegionStats;

use crate::labeling::LabelMap;
use crate::types::ObjectRecord;

/// Accumulate per-label statistics in one row-major pass.
pub fn accumulate_stats(labels: &LabelMap) -> Vec<RegionStats> {
    // arena indexed by label id; entry 0 (background) stays empty
    let mut stats = vec![RegionStats::default(); labels.num_labels() as usize + 1];
    for y in 0..labels.h {
        for x in 0..labels.w {
            let label = labels.label(x, y);
            if label != 0 {
                stats[label as usize].push(x, y);
            }
        }
    }
    stats
}

/// Derive one candidate record per label, in label order.
pub fn measure_regions(labels: &LabelMap) -> Vec<ObjectRecord> {
    let stats = accumulate_stats(labels);
    stats
        .iter()
        .enumerate()
        .skip(1)
        .filter(|(_, s)| s.count > 0)
        .map(|(label, s)| record_from_stats(label as u32, s))
        .collect()
}

fn record_from_stats(label: u32, stats: &RegionStats) -> ObjectRecord {
    let n = stats.count as f64;
    let cx = stats.sum_x as f64 / n;
    let cy = stats.sum_y as f64 / n;

    let mu20 = stats.sum_xx as f64 / n - cx * cx;
    let mu02 = stats.sum_yy as f64 / n - cy * cy;
    let mu11 = stats.sum_xy as f64 / n - cx * cy;

    let orientation_rad = if mu20 == mu02 && mu11 == 0.0 {
        0.0
    } else {
        0.5 * (2.0 * mu11).atan2(mu20 - mu02)
    };

    let (width, height) = stats.bbox_extent();
    let long = width.max(height).max(1) as f64;
    let short = width.min(height).max(1) as f64;

    ObjectRecord {
        label,
        centroid_x: cx,
        centroid_y: cy,
        area: stats.count,
        left: stats.min_x,
        top: stats.min_y,
        width,
        height,
        aspect_ratio: long / short,
        orientation_rad,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::labeling::label_regions;
    use crate::mask::BinaryMask;
    use std::f64::consts::{FRAC_PI_2, FRAC_PI_4};

    fn rect_mask(w: usize, h: usize, x0: usize, y0: usize, rw: usize, rh: usize) -> BinaryMask {
        let mut mask = BinaryMask::new(w, h);
        for y in y0..y0 + rh {
            for x in x0..x0 + rw {
                mask.set(x, y, true);
            }
        }
        mask
    }

    #[test]
    fn wide_rectangle_measures_exactly() {
        let mask = rect_mask(32, 32, 4, 6, 4, 2);
        let records = measure_regions(&label_regions(&mask));
        assert_eq!(records.len(), 1);
        let r = &records[0];
        assert_eq!(r.label, 1);
        assert_eq!(r.area, 8);
        assert_eq!((r.left, r.top, r.width, r.height), (4, 6, 4, 2));
        assert!((r.centroid_x - 5.5).abs() < 1e-12);
        assert!((r.centroid_y - 6.5).abs() < 1e-12);
        assert!((r.aspect_ratio - 2.0).abs() < 1e-12);
        // horizontal major axis
        assert!(r.orientation_rad.abs() < 1e-12);
    }

    #[test]
    fn tall_rectangle_is_oriented_vertically() {
        let mask = rect_mask(32, 32, 10, 4, 2, 8);
        let records = measure_regions(&label_regions(&mask));
        let r = &records[0];
        assert!(
            (r.orientation_rad - FRAC_PI_2).abs() < 1e-12,
            "tall region must report a vertical major axis, got {}",
            r.orientation_rad
        );
        assert!((r.aspect_ratio - 4.0).abs() < 1e-12);
    }

    #[test]
    fn symmetric_square_defaults_to_zero_orientation() {
        let mask = rect_mask(32, 32, 8, 8, 6, 6);
        let records = measure_regions(&label_regions(&mask));
        assert_eq!(records[0].orientation_rad, 0.0);
        assert_eq!(records[0].aspect_ratio, 1.0);
    }

    #[test]
    fn diagonal_line_reports_quarter_pi() {
        let mut mask = BinaryMask::new(32, 32);
        for i in 4..16 {
            mask.set(i, i, true);
        }
        let records = measure_regions(&label_regions(&mask));
        let r = &records[0];
        assert!(
            (r.orientation_rad - FRAC_PI_4).abs() < 1e-12,
            "y-down diagonal must report pi/4, got {}",
            r.orientation_rad
        );
    }

    #[test]
    fn one_record_per_label_in_label_order() {
        let mut mask = BinaryMask::new(32, 32);
        mask.set(5, 1, true);
        for y in 10..14 {
            for x in 2..8 {
                mask.set(x, y, true);
            }
        }
        let records = measure_regions(&label_regions(&mask));
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].label, 1);
        assert_eq!(records[1].label, 2);
        assert_eq!(records[0].area, 1, "candidates are emitted unfiltered");
    }
}
