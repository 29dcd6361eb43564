//! Re-runs detection over a ladder of `min_area` values to help pick a
//! threshold for a new scene.
use std::env;
use std::path::PathBuf;

use tabletop_detector::error::DetectError;
use tabletop_detector::image::io::load_grayscale_image;
use tabletop_detector::{DetectorParams, ObjectDetector};

const LADDER: [u64; 9] = [100, 500, 1000, 1500, 2000, 3000, 5000, 8000, 10000];

fn main() {
    env_logger::init();
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), DetectError> {
    let image_path = parse_cli()?;
    let gray = load_grayscale_image(&image_path)?;

    println!(
        "min_area sweep over {} ({}x{})",
        image_path.display(),
        gray.width(),
        gray.height()
    );

    for min_area in LADDER {
        let mut params = DetectorParams::default();
        params.filters.min_area = min_area;
        let report = ObjectDetector::new(params).process(gray.as_view())?;
        let objects = &report.result.objects;
        let areas: Vec<u64> = objects.iter().map(|o| o.area).collect();
        if areas.is_empty() {
            println!("min_area = {min_area:5} -> no objects");
        } else {
            println!(
                "min_area = {min_area:5} -> {} object(s) | areas: {areas:?}",
                objects.len()
            );
        }
    }
    Ok(())
}

fn parse_cli() -> Result<PathBuf, DetectError> {
    let mut args = env::args();
    let program = args.next().unwrap_or_else(|| "area_sweep".to_string());
    match (args.next(), args.next()) {
        (Some(path), None) => Ok(PathBuf::from(path)),
        _ => Err(DetectError::InvalidParams {
            reason: format!("usage: {program} <image>"),
        }),
    }
}
