//! Morphological cleaning of the binary mask.
//!
//! Opening (erosion then dilation) removes isolated noise specks; closing
//! (dilation then erosion) fills small holes inside object silhouettes. Each
//! primitive runs `iterations` passes, so opening with n iterations erodes n
//! times before dilating n times. Out-of-image neighbors count as background
//! for both primitives (zero padding), so foreground touching the border is
//! eroded like any other boundary.
//!
//! The cleaner converges quickly: once a mask is stable under `clean`, a
//! second application leaves it unchanged.
use crate::mask::BinaryMask;
use serde::{Deserialize, Serialize};

/// Structuring element shape.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KernelShape {
    /// Full `size × size` square.
    Square,
    /// Horizontal and vertical arms through the center.
    Cross,
}

/// Structuring element: a set of neighbor offsets around the center pixel.
#[derive(Clone, Debug)]
pub struct StructuringElement {
    offsets: Vec<(isize, isize)>,
}

impl StructuringElement {
    /// Build an element of odd `size` with the given shape.
    pub fn new(shape: KernelShape, size: usize) -> Self {
        debug_assert!(size % 2 == 1 && size >= 1);
        let r = (size / 2) as isize;
        let mut offsets = Vec::with_capacity(size * size);
        for dy in -r..=r {
            for dx in -r..=r {
                let keep = match shape {
                    KernelShape::Square => true,
                    KernelShape::Cross => dx == 0 || dy == 0,
                };
                if keep {
                    offsets.push((dx, dy));
                }
            }
        }
        Self { offsets }
    }
}

fn erode(mask: &mut BinaryMask, element: &StructuringElement) {
    let (w, h) = (mask.w, mask.h);
    let mut out = BinaryMask::new(w, h);
    for y in 0..h {
        for x in 0..w {
            if !mask.is_foreground(x, y) {
                continue;
            }
            let all_fg = element.offsets.iter().all(|&(dx, dy)| {
                let xn = x as isize + dx;
                let yn = y as isize + dy;
                xn >= 0
                    && yn >= 0
                    && xn < w as isize
                    && yn < h as isize
                    && mask.is_foreground(xn as usize, yn as usize)
            });
            if all_fg {
                out.set(x, y, true);
            }
        }
    }
    mask.replace_data(out.take_data());
}

fn dilate(mask: &mut BinaryMask, element: &StructuringElement) {
    let (w, h) = (mask.w, mask.h);
    let mut out = BinaryMask::new(w, h);
    for y in 0..h {
        for x in 0..w {
            let any_fg = element.offsets.iter().any(|&(dx, dy)| {
                let xn = x as isize + dx;
                let yn = y as isize + dy;
                xn >= 0
                    && yn >= 0
                    && xn < w as isize
                    && yn < h as isize
                    && mask.is_foreground(xn as usize, yn as usize)
            });
            if any_fg {
                out.set(x, y, true);
            }
        }
    }
    mask.replace_data(out.take_data());
}

/// Opening: `iterations` erosions followed by `iterations` dilations.
pub fn open(mask: &mut BinaryMask, element: &StructuringElement, iterations: usize) {
    for _ in 0..iterations {
        erode(mask, element);
    }
    for _ in 0..iterations {
        dilate(mask, element);
    }
}

/// Closing: `iterations` dilations followed by `iterations` erosions.
pub fn close(mask: &mut BinaryMask, element: &StructuringElement, iterations: usize) {
    for _ in 0..iterations {
        dilate(mask, element);
    }
    for _ in 0..iterations {
        erode(mask, element);
    }
}

/// Full cleaning pass: opening to drop specks, then closing to fill holes.
pub fn clean(mask: &mut BinaryMask, element: &StructuringElement, iterations: usize) {
    open(mask, element, iterations);
    close(mask, element, iterations);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn block(mask: &mut BinaryMask, x0: usize, y0: usize, w: usize, h: usize) {
        for y in y0..y0 + h {
            for x in x0..x0 + w {
                mask.set(x, y, true);
            }
        }
    }

    fn element3() -> StructuringElement {
        StructuringElement::new(KernelShape::Square, 3)
    }

    #[test]
    fn opening_removes_isolated_speck() {
        let mut mask = BinaryMask::new(16, 16);
        mask.set(8, 8, true);
        open(&mut mask, &element3(), 1);
        assert_eq!(mask.foreground_count(), 0, "1px speck must not survive");
    }

    #[test]
    fn opening_restores_solid_block() {
        let mut mask = BinaryMask::new(20, 20);
        block(&mut mask, 5, 5, 8, 8);
        open(&mut mask, &element3(), 1);
        assert_eq!(
            mask.foreground_count(),
            64,
            "solid block away from the border must survive opening intact"
        );
    }

    #[test]
    fn closing_fills_small_hole() {
        let mut mask = BinaryMask::new(20, 20);
        block(&mut mask, 5, 5, 8, 8);
        mask.set(8, 8, false);
        close(&mut mask, &element3(), 1);
        assert!(mask.is_foreground(8, 8), "interior hole must be filled");
        assert_eq!(mask.foreground_count(), 64);
    }

    #[test]
    fn cross_element_is_sparser_than_square() {
        let square = StructuringElement::new(KernelShape::Square, 3);
        let cross = StructuringElement::new(KernelShape::Cross, 3);
        assert_eq!(square.offsets.len(), 9);
        assert_eq!(cross.offsets.len(), 5);
    }

    #[test]
    fn clean_is_idempotent_once_converged() {
        let mut mask = BinaryMask::new(32, 32);
        block(&mut mask, 6, 6, 10, 7);
        mask.set(20, 20, true); // speck
        mask.set(9, 9, false); // hole
        let element = element3();

        clean(&mut mask, &element, 2);
        let once = mask.clone();
        clean(&mut mask, &element, 2);
        assert_eq!(mask, once, "second cleaning pass must be a no-op");
    }
}
