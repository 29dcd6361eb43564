//! Overlay rendering for detection results.
//!
//! Draws bounding boxes, centroid markers, and orientation rays onto an RGB
//! copy of the input frame, and renders the label map as a grayscale image
//! for inspection. Consumes the assembled result without recomputing
//! anything; label values in the map match the records' `label` fields.
use crate::image::ImageU8;
use crate::labeling::LabelMap;
use crate::types::ObjectRecord;
use image::{Rgb, RgbImage};

const BBOX_COLOR: Rgb<u8> = Rgb([0, 255, 0]);
const CENTROID_COLOR: Rgb<u8> = Rgb([255, 0, 0]);
const ORIENTATION_COLOR: Rgb<u8> = Rgb([255, 0, 255]);

const CENTROID_RADIUS: i64 = 4;
const ORIENTATION_RAY_LEN: f64 = 30.0;

/// Render the grayscale input with per-object overlays.
pub fn annotate(image: &ImageU8, objects: &[ObjectRecord]) -> RgbImage {
    let mut canvas = RgbImage::new(image.w as u32, image.h as u32);
    for y in 0..image.h {
        let row = image.row(y);
        for (x, &v) in row.iter().enumerate() {
            canvas.put_pixel(x as u32, y as u32, Rgb([v, v, v]));
        }
    }

    for obj in objects {
        draw_rect(&mut canvas, obj.left, obj.top, obj.width, obj.height);
        draw_orientation_ray(&mut canvas, obj.centroid_x, obj.centroid_y, obj.orientation_rad);
        draw_disc(&mut canvas, obj.centroid_x, obj.centroid_y);
    }
    canvas
}

/// Render the label map to grayscale, spreading labels over the value range.
///
/// Background stays black; labels map to evenly spaced intensities so
/// adjacent label ids remain distinguishable.
pub fn render_label_map(labels: &LabelMap) -> Vec<u8> {
    let n = labels.num_labels();
    labels
        .labels()
        .iter()
        .map(|&l| {
            if l == 0 || n == 0 {
                0u8
            } else {
                (55 + (l as u64 * 200) / n as u64) as u8
            }
        })
        .collect()
}

fn put_safe(canvas: &mut RgbImage, x: i64, y: i64, color: Rgb<u8>) {
    if x >= 0 && y >= 0 && (x as u32) < canvas.width() && (y as u32) < canvas.height() {
        canvas.put_pixel(x as u32, y as u32, color);
    }
}

fn draw_rect(canvas: &mut RgbImage, left: usize, top: usize, w: usize, h: usize) {
    let (x0, y0) = (left as i64, top as i64);
    let (x1, y1) = (x0 + w as i64 - 1, y0 + h as i64 - 1);
    for x in x0..=x1 {
        put_safe(canvas, x, y0, BBOX_COLOR);
        put_safe(canvas, x, y1, BBOX_COLOR);
    }
    for y in y0..=y1 {
        put_safe(canvas, x0, y, BBOX_COLOR);
        put_safe(canvas, x1, y, BBOX_COLOR);
    }
}

fn draw_disc(canvas: &mut RgbImage, cx: f64, cy: f64) {
    let (cxi, cyi) = (cx.round() as i64, cy.round() as i64);
    for dy in -CENTROID_RADIUS..=CENTROID_RADIUS {
        for dx in -CENTROID_RADIUS..=CENTROID_RADIUS {
            if dx * dx + dy * dy <= CENTROID_RADIUS * CENTROID_RADIUS {
                put_safe(canvas, cxi + dx, cyi + dy, CENTROID_COLOR);
            }
        }
    }
}

fn draw_orientation_ray(canvas: &mut RgbImage, cx: f64, cy: f64, angle_rad: f64) {
    let steps = ORIENTATION_RAY_LEN.ceil() as i64;
    for s in 0..=steps {
        let t = s as f64;
        let x = (cx + t * angle_rad.cos()).round() as i64;
        let y = (cy + t * angle_rad.sin()).round() as i64;
        put_safe(canvas, x, y, ORIENTATION_COLOR);
    }
}
