//! Synthetic grayscale scenes for pipeline tests.
//!
//! All scenes use dark objects (intensity 40) on a light surface (220),
//! matching the default foreground polarity.

pub const SURFACE: u8 = 220;
pub const OBJECT: u8 = 40;

/// Uniform surface with no objects.
pub fn constant_u8(width: usize, height: usize, value: u8) -> Vec<u8> {
    assert!(width > 0 && height > 0, "image dimensions must be positive");
    vec![value; width * height]
}

/// Paint a filled axis-aligned rectangle.
pub fn fill_rect(
    img: &mut [u8],
    width: usize,
    x0: usize,
    y0: usize,
    rect_w: usize,
    rect_h: usize,
    value: u8,
) {
    for y in y0..y0 + rect_h {
        for x in x0..x0 + rect_w {
            img[y * width + x] = value;
        }
    }
}

/// Paint a filled disc of the given radius.
pub fn fill_disc(img: &mut [u8], width: usize, cx: usize, cy: usize, radius: usize, value: u8) {
    let r = radius as isize;
    for dy in -r..=r {
        for dx in -r..=r {
            if dx * dx + dy * dy <= r * r {
                let x = cx as isize + dx;
                let y = cy as isize + dy;
                img[y as usize * width + x as usize] = value;
            }
        }
    }
}

/// 640x480 surface with a single 100x50 dark rectangle whose center sits at
/// 60% of image height: area 5000, aspect ratio 2:1, horizontal major axis.
pub fn rectangle_scene() -> (Vec<u8>, usize, usize) {
    let (w, h) = (640usize, 480usize);
    let mut img = constant_u8(w, h, SURFACE);
    // center (320, 288): x in [270, 370), y in [263, 313)
    fill_rect(&mut img, w, 270, 263, 100, 50, OBJECT);
    (img, w, h)
}

/// The rectangle scene plus a 10px-diameter noise speck.
pub fn rectangle_and_speck_scene() -> (Vec<u8>, usize, usize) {
    let (mut img, w, h) = rectangle_scene();
    fill_disc(&mut img, w, 100, 150, 5, OBJECT);
    (img, w, h)
}
