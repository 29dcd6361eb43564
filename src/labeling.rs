//! Connected-component labeling under 8-connectivity.
//!
//! Scans the mask in row-major order and grows a region from every unlabeled
//! foreground seed with an explicit stack (no recursion, bounded memory).
//! Labels are assigned in first-encounter order, so identical input always
//! produces the identical label map. There is no cap on region count beyond
//! the pixel count; a fragmented mask degrades into many tiny regions that
//! the size filter removes later.
use crate::mask::BinaryMask;
use log::debug;

const NEIGH_OFFSETS: [(isize, isize); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// W×H grid of region labels; 0 is background, labels start at 1.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LabelMap {
    pub w: usize,
    pub h: usize,
    num_labels: u32,
    data: Vec<u32>,
}

impl LabelMap {
    #[inline]
    pub fn label(&self, x: usize, y: usize) -> u32 {
        self.data[y * self.w + x]
    }

    #[inline]
    pub fn label_idx(&self, idx: usize) -> u32 {
        self.data[idx]
    }

    /// Number of distinct foreground regions.
    pub fn num_labels(&self) -> u32 {
        self.num_labels
    }

    pub fn labels(&self) -> &[u32] {
        &self.data
    }
}

/// Partition the mask's foreground into 8-connected regions.
pub fn label_regions(mask: &BinaryMask) -> LabelMap {
    let (w, h) = (mask.w, mask.h);
    let mut data = vec![0u32; w * h];
    let mut stack: Vec<usize> = Vec::with_capacity(64);
    let mut next_label = 0u32;

    for seed in 0..w * h {
        if data[seed] != 0 || !mask.is_foreground_idx(seed) {
            continue;
        }
        next_label += 1;
        data[seed] = next_label;
        stack.push(seed);

        while let Some(idx) = stack.pop() {
            let x = idx % w;
            let y = idx / w;
            for (dx, dy) in NEIGH_OFFSETS {
                let xn = x as isize + dx;
                let yn = y as isize + dy;
                if xn < 0 || yn < 0 || xn >= w as isize || yn >= h as isize {
                    continue;
                }
                let nidx = yn as usize * w + xn as usize;
                if data[nidx] != 0 || !mask.is_foreground_idx(nidx) {
                    continue;
                }
                data[nidx] = next_label;
                stack.push(nidx);
            }
        }
    }

    debug!("labeling: {} region(s)", next_label);
    LabelMap {
        w,
        h,
        num_labels: next_label,
        data,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_mask_has_no_labels() {
        let mask = BinaryMask::new(8, 8);
        let labels = label_regions(&mask);
        assert_eq!(labels.num_labels(), 0);
        assert!(labels.labels().iter().all(|&l| l == 0));
    }

    #[test]
    fn diagonal_pixels_join_under_8_connectivity() {
        let mut mask = BinaryMask::new(8, 8);
        mask.set(2, 2, true);
        mask.set(3, 3, true);
        let labels = label_regions(&mask);
        assert_eq!(labels.num_labels(), 1);
        assert_eq!(labels.label(2, 2), labels.label(3, 3));
    }

    #[test]
    fn separated_regions_get_row_major_labels() {
        let mut mask = BinaryMask::new(16, 16);
        mask.set(10, 2, true); // encountered first (lower row)
        mask.set(1, 8, true);
        let labels = label_regions(&mask);
        assert_eq!(labels.num_labels(), 2);
        assert_eq!(labels.label(10, 2), 1);
        assert_eq!(labels.label(1, 8), 2);
    }

    #[test]
    fn every_foreground_pixel_is_labeled() {
        let mut mask = BinaryMask::new(12, 12);
        for y in 3..9 {
            for x in 2..7 {
                mask.set(x, y, true);
            }
        }
        let labels = label_regions(&mask);
        for y in 0..12 {
            for x in 0..12 {
                assert_eq!(
                    labels.label(x, y) != 0,
                    mask.is_foreground(x, y),
                    "label/foreground mismatch at ({x}, {y})"
                );
            }
        }
    }
}
