mod common;

use common::synthetic_image::{constant_u8, fill_rect, OBJECT, SURFACE};
use std::f64::consts::PI;
use tabletop_detector::image::ImageU8;
use tabletop_detector::{DetectorParams, ObjectDetector};

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn view<'a>(w: usize, h: usize, data: &'a [u8]) -> ImageU8<'a> {
    ImageU8 {
        w,
        h,
        stride: w,
        data,
    }
}

#[test]
fn repeated_runs_are_bit_identical() {
    init_logger();
    let (w, h) = (320usize, 240usize);
    let mut buffer = constant_u8(w, h, SURFACE);
    fill_rect(&mut buffer, w, 40, 60, 80, 60, OBJECT);
    fill_rect(&mut buffer, w, 180, 120, 70, 90, OBJECT);

    let detector = ObjectDetector::new(DetectorParams::default());
    let first = detector.process(view(w, h, &buffer)).expect("first run");
    let second = detector.process(view(w, h, &buffer)).expect("second run");

    assert_eq!(
        first.label_map, second.label_map,
        "label maps must be bit-identical"
    );
    assert_eq!(
        first.result.objects, second.result.objects,
        "object records must be bit-identical"
    );
    assert_eq!(first.result.threshold, second.result.threshold);
}

#[test]
fn rotating_a_bar_by_90_degrees_rotates_its_orientation() {
    init_logger();
    let (w, h) = (320usize, 240usize);
    let params = DetectorParams {
        blur_kernel_size: 1,
        ..Default::default()
    };
    let detector = ObjectDetector::new(params);

    // horizontal bar, then the same bar rotated 90 degrees
    let mut horizontal = constant_u8(w, h, SURFACE);
    fill_rect(&mut horizontal, w, 100, 140, 80, 26, OBJECT);
    let mut vertical = constant_u8(w, h, SURFACE);
    fill_rect(&mut vertical, w, 140, 100, 26, 80, OBJECT);

    let obj_h = detector
        .process(view(w, h, &horizontal))
        .expect("horizontal bar")
        .result
        .objects
        .remove(0);
    let obj_v = detector
        .process(view(w, h, &vertical))
        .expect("vertical bar")
        .result
        .objects
        .remove(0);

    let delta = (obj_v.orientation_rad - obj_h.orientation_rad).rem_euclid(PI);
    assert!(
        (delta - PI / 2.0).abs() < 1e-9,
        "expected a pi/2 shift mod pi, got {delta}"
    );
}

#[test]
fn serialized_result_is_stable_across_runs() {
    init_logger();
    let (w, h) = (320usize, 240usize);
    let mut buffer = constant_u8(w, h, SURFACE);
    fill_rect(&mut buffer, w, 50, 100, 90, 45, OBJECT);

    let detector = ObjectDetector::new(DetectorParams::default());
    let a = detector.process(view(w, h, &buffer)).expect("run a");
    let b = detector.process(view(w, h, &buffer)).expect("run b");

    let json_a = serde_json::to_string(&a.result.objects).expect("serialize a");
    let json_b = serde_json::to_string(&b.result.objects).expect("serialize b");
    assert_eq!(json_a, json_b);
}
