//! Report writers over the assembled object list.
//!
//! Pure consumers of [`DetectionResult`]: they never reach back into the
//! pipeline stages. Field set and ordering are stable across runs. JSON and
//! CSV carry orientation in radians; only the human-readable text report
//! converts to degrees, labelled as such.
use crate::error::DetectError;
use crate::image::io::{ensure_parent_dir, write_json_file};
use crate::types::DetectionResult;
use std::fs;
use std::path::Path;

const RULE: &str = "======================================================================";

/// Write the machine-readable JSON report (pretty-printed).
pub fn write_json_report(path: &Path, result: &DetectionResult) -> Result<(), DetectError> {
    write_json_file(path, result)
}

/// Write one CSV row per object with a fixed header.
pub fn write_csv_report(path: &Path, result: &DetectionResult) -> Result<(), DetectError> {
    ensure_parent_dir(path)?;
    let mut out = String::from(
        "id,centroid_x,centroid_y,area,width,height,aspect_ratio,orientation_rad,bbox_x,bbox_y,bbox_w,bbox_h\n",
    );
    for obj in &result.objects {
        out.push_str(&format!(
            "{},{:.2},{:.2},{},{},{},{:.2},{:.4},{},{},{},{}\n",
            obj.label,
            obj.centroid_x,
            obj.centroid_y,
            obj.area,
            obj.width,
            obj.height,
            obj.aspect_ratio,
            obj.orientation_rad,
            obj.left,
            obj.top,
            obj.width,
            obj.height,
        ));
    }
    fs::write(path, out).map_err(|source| DetectError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Write the human-readable analysis log.
pub fn write_text_report(path: &Path, result: &DetectionResult) -> Result<(), DetectError> {
    ensure_parent_dir(path)?;
    fs::write(path, render_text_report(result)).map_err(|source| DetectError::Io {
        path: path.to_path_buf(),
        source,
    })
}

fn render_text_report(result: &DetectionResult) -> String {
    let mut out = String::new();
    out.push_str(RULE);
    out.push_str("\nTABLETOP OBJECT DETECTION ANALYSIS LOG\n");
    out.push_str(RULE);
    out.push('\n');
    out.push_str(&format!(
        "Image:                  {}x{}\n",
        result.width, result.height
    ));
    if let Some(t) = result.threshold {
        out.push_str(&format!("Global Threshold:       {t}\n"));
    }
    out.push_str(&format!(
        "Total Objects Detected: {}\n",
        result.objects.len()
    ));
    out.push_str(RULE);
    out.push_str("\n\n");

    for obj in &result.objects {
        out.push_str(&format!("--- Object ID: {} ---\n", obj.label));
        out.push_str(&format!(
            "  Centroid (x, y):      ({:.2}, {:.2})\n",
            obj.centroid_x, obj.centroid_y
        ));
        out.push_str(&format!("  Area (pixels):        {}\n", obj.area));
        out.push_str(&format!(
            "  Dimensions (W x H):   {} x {}\n",
            obj.width, obj.height
        ));
        out.push_str(&format!(
            "  Aspect Ratio:         {:.2}\n",
            obj.aspect_ratio
        ));
        out.push_str(&format!(
            "  Orientation (deg):    {:.2}\n",
            obj.orientation_rad.to_degrees()
        ));
        out.push_str(&format!(
            "  Bounding Box:         ({}, {}, {}, {})\n",
            obj.left, obj.top, obj.width, obj.height
        ));
        out.push('\n');
    }

    out.push_str(RULE);
    out.push_str("\nEND OF LOG\n");
    out.push_str(RULE);
    out.push('\n');
    out
}
