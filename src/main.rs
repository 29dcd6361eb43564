use std::env;
use std::path::{Path, PathBuf};

use tabletop_detector::annotate::{annotate, render_label_map};
use tabletop_detector::config::{load_config, RuntimeConfig};
use tabletop_detector::error::DetectError;
use tabletop_detector::image::io::{load_grayscale_image, save_grayscale_u8};
use tabletop_detector::report::{write_csv_report, write_json_report, write_text_report};
use tabletop_detector::types::DetectionReport;
use tabletop_detector::ObjectDetector;

fn main() {
    env_logger::init();
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), DetectError> {
    let config_path = parse_cli()?;
    let config = load_config(&config_path)?;

    let gray = load_grayscale_image(&config.input)?;
    let detector = ObjectDetector::new(config.detector);
    let report = detector.process(gray.as_view())?;

    print_summary(&report);
    write_artifacts(&config, &gray.as_view(), &report)?;
    Ok(())
}

fn parse_cli() -> Result<PathBuf, DetectError> {
    let mut args = env::args();
    let program = args.next().unwrap_or_else(|| "tabletop_detector".to_string());
    match (args.next(), args.next()) {
        (Some(path), None) => Ok(PathBuf::from(path)),
        _ => Err(DetectError::InvalidParams {
            reason: format!("usage: {program} <config.json>"),
        }),
    }
}

fn print_summary(report: &DetectionReport) {
    let res = &report.result;
    println!("Detection summary");
    println!("  image: {}x{}", res.width, res.height);
    match res.threshold {
        Some(t) => println!("  threshold: {t}"),
        None => println!("  threshold: adaptive"),
    }
    println!("  raw regions: {}", report.label_map.num_labels());
    println!("  objects: {}", res.objects.len());
    println!("  latency_ms: {:.3}", res.latency_ms);
    for obj in &res.objects {
        println!(
            "  object {}: centroid=({:.1}, {:.1}) area={}px bbox={}x{} aspect={:.2} angle={:.3} rad",
            obj.label,
            obj.centroid_x,
            obj.centroid_y,
            obj.area,
            obj.width,
            obj.height,
            obj.aspect_ratio,
            obj.orientation_rad
        );
    }
}

fn write_artifacts(
    config: &RuntimeConfig,
    gray: &tabletop_detector::image::ImageU8,
    report: &DetectionReport,
) -> Result<(), DetectError> {
    let output = &config.output;
    if let Some(path) = &output.json_out {
        write_json_report(path, &report.result)?;
        announce(path, "JSON report");
    }
    if let Some(path) = &output.csv_out {
        write_csv_report(path, &report.result)?;
        announce(path, "CSV report");
    }
    if let Some(path) = &output.txt_out {
        write_text_report(path, &report.result)?;
        announce(path, "text report");
    }
    if let Some(path) = &output.annotated_out {
        let canvas = annotate(gray, &report.result.objects);
        tabletop_detector::image::io::ensure_parent_dir(path)?;
        canvas.save(path).map_err(|source| DetectError::Image {
            path: path.clone(),
            source,
        })?;
        announce(path, "annotated image");
    }
    if let Some(path) = &output.label_map_out {
        let rendered = render_label_map(&report.label_map);
        save_grayscale_u8(report.label_map.w, report.label_map.h, rendered, path)?;
        announce(path, "label map");
    }
    if let Some(path) = &output.mask_out {
        // every labeled pixel was foreground in the cleaned mask
        let mask: Vec<u8> = report
            .label_map
            .labels()
            .iter()
            .map(|&l| if l == 0 { 0u8 } else { 255u8 })
            .collect();
        save_grayscale_u8(report.label_map.w, report.label_map.h, mask, path)?;
        announce(path, "binary mask");
    }
    Ok(())
}

fn announce(path: &Path, what: &str) {
    println!("{what} written to {}", path.display());
}
