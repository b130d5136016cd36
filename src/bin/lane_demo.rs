use lane_detector::config::demo;
use lane_detector::image::io::{load_rgb_image, save_gray_image, save_rgb_image, write_json_file};
use lane_detector::{draw_lanes, DetectionReport, LaneDetector, LaneParams};
use serde::Serialize;
use std::env;
use std::path::Path;

fn main() {
    env_logger::init();
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let config_path = env::args().nth(1).ok_or_else(usage)?;
    let config = demo::load_config(Path::new(&config_path)).map_err(|e| e.to_string())?;

    let frame = load_rgb_image(&config.input).map_err(|e| e.to_string())?;
    let detector = LaneDetector::new(config.params.clone());
    let (report, masks) = detector
        .process_with_masks(&frame)
        .map_err(|e| e.to_string())?;

    let overlay = draw_lanes(&frame, &report.lanes, &config.overlay);
    save_rgb_image(&overlay, &config.output.overlay_image).map_err(|e| e.to_string())?;

    if let Some(path) = &config.output.color_mask {
        save_gray_image(&masks.color_mask, path).map_err(|e| e.to_string())?;
    }
    if let Some(path) = &config.output.roi_mask {
        save_gray_image(&masks.restricted, path).map_err(|e| e.to_string())?;
    }

    let output = LaneDemoOutput {
        input: config.input.display().to_string(),
        params: &config.params,
        report: &report,
    };
    write_json_file(&config.output.report_json, &output).map_err(|e| e.to_string())?;

    let counts = &report.trace.lanes.counts;
    println!(
        "{}x{}: {} segments ({} left, {} right) found={} in {:.2} ms",
        report.trace.input.width,
        report.trace.input.height,
        counts.total,
        counts.left,
        counts.right,
        report.lanes.is_found(),
        report.trace.timings.total_ms
    );
    for stage in &report.trace.timings.stages {
        println!("  {:<9} {:.2} ms", stage.label, stage.elapsed_ms);
    }
    if report.lanes.is_found() {
        println!(
            "right {:?} -> {:?}, left {:?} -> {:?}",
            report.lanes.right_near,
            report.lanes.right_far,
            report.lanes.left_near,
            report.lanes.left_far
        );
    }
    println!("Saved overlay to {}", config.output.overlay_image.display());
    println!("Saved report to {}", config.output.report_json.display());
    Ok(())
}

fn usage() -> String {
    "Usage: lane_demo <config.json>".to_string()
}

#[derive(Serialize)]
struct LaneDemoOutput<'a> {
    input: String,
    params: &'a LaneParams,
    report: &'a DetectionReport,
}
