mod common;

use std::fs;

use approx::assert_relative_eq;
use chrono::{DateTime, TimeZone, Utc};
use ndarray::Array2;

use depthgrab_core::convert::DepthConverter;
use depthgrab_core::correct::y_axis_correction;
use depthgrab_core::snapshot::{center_distance, SnapshotExporter};
use depthgrab_core::status::SensorStatus;

use common::{frame_from, uniform_frame};

fn stamp() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, 9, 12, 30, 15).unwrap()
}

#[test]
fn end_to_end_uniform_grid() {
    let frame = uniform_frame(4, 4, 500);
    let mut converter = DepthConverter::new(frame.desc);
    assert!(converter.process_depth_frame(&frame));
    assert_eq!(converter.pixels(), vec![244u8; 16].as_slice());

    let dir = tempfile::tempdir().unwrap();
    let mut exporter = SnapshotExporter::new(dir.path());
    let outcome = exporter.export_at(&frame, converter.pixels(), stamp());

    assert!(outcome.data_written);
    assert!(outcome.image_written);
    assert_eq!(outcome.status(), SensorStatus::ScreenshotSaved(outcome.paths.image.clone()));

    // CSV: 4 lines, 4 corrected values each, trailing comma per line.
    let csv = fs::read_to_string(&outcome.paths.csv).unwrap();
    let lines: Vec<&str> = csv.lines().collect();
    assert_eq!(lines.len(), 4);
    for (row, line) in lines.iter().enumerate() {
        let v = 500.0 + y_axis_correction(row as f64);
        assert_eq!(*line, format!("{0},{0},{0},{0},", v));
    }

    // Summary: no zeros, so the counter stays at 0.
    let summary = fs::read_to_string(&outcome.paths.summary).unwrap();
    let lines: Vec<&str> = summary.lines().collect();
    assert_eq!(lines[0], "Fraction unreliable: 0 / 16");
    assert_eq!(lines[1], "Percentage unreliable: 0%");
    let a = 500.0 + y_axis_correction(2.0);
    let b = 500.0 + y_axis_correction(3.0);
    let center = (a + a + b + b) / 4.0;
    assert_eq!(lines[2], format!("Center distance: {}", center));

    // PNG: the displayed grayscale buffer, not the corrected grid.
    let img = image::open(&outcome.paths.image).unwrap().to_luma8();
    assert_eq!(img.dimensions(), (4, 4));
    assert!(img.pixels().all(|p| p.0[0] == 244));
}

#[test]
fn csv_rows_come_out_in_sensor_column_order() {
    // The reorder pass mirrors each row and the CSV pass iterates stored
    // columns in reverse, so the emitted values land back in sensor order.
    let frame = frame_from(2, 2, vec![1, 2, 3, 4]);
    let dir = tempfile::tempdir().unwrap();
    let mut exporter = SnapshotExporter::new(dir.path());
    let outcome = exporter.export_at(&frame, &[0u8; 4], stamp());

    let csv = fs::read_to_string(&outcome.paths.csv).unwrap();
    let lines: Vec<&str> = csv.lines().collect();
    let y0 = y_axis_correction(0.0);
    let y1 = y_axis_correction(1.0);
    assert_eq!(lines[0], format!("{},{},", 1.0 + y0, 2.0 + y0));
    assert_eq!(lines[1], format!("{},{},", 3.0 + y1, 4.0 + y1));
}

#[test]
fn unreliable_counter_accumulates_across_exports() {
    let frame = frame_from(2, 2, vec![0, 100, 0, 200]);
    let dir = tempfile::tempdir().unwrap();
    let mut exporter = SnapshotExporter::new(dir.path());

    exporter.export_at(&frame, &[0u8; 4], stamp());
    assert_eq!(exporter.unreliable_total(), 2);

    // Identical input doubles the cumulative count; it is never reset
    // between exports.
    let outcome = exporter.export_at(&frame, &[0u8; 4], stamp());
    assert_eq!(exporter.unreliable_total(), 4);

    let summary = fs::read_to_string(&outcome.paths.summary).unwrap();
    assert!(summary.starts_with("Fraction unreliable: 4 / 4"));

    exporter.reset_unreliable_total();
    assert_eq!(exporter.unreliable_total(), 0);
}

#[test]
fn same_second_exports_collide_on_paths() {
    // Second-granularity filenames: two exports in one wall-clock second
    // write the same three paths and the later one wins.
    let dir = tempfile::tempdir().unwrap();
    let mut exporter = SnapshotExporter::new(dir.path());

    let first = exporter.export_at(&uniform_frame(2, 2, 500), &[0u8; 4], stamp());
    let second = exporter.export_at(&uniform_frame(2, 2, 700), &[0u8; 4], stamp());

    assert_eq!(first.paths, second.paths);

    let csv = fs::read_to_string(&second.paths.csv).unwrap();
    let v = 700.0 + y_axis_correction(0.0);
    assert!(csv.starts_with(&format!("{},", v)));
}

#[test]
fn image_failure_is_surfaced_as_status_only() {
    let frame = uniform_frame(2, 2, 500);
    let dir = tempfile::tempdir().unwrap();
    let mut exporter = SnapshotExporter::new(dir.path());

    // Displayed buffer of the wrong size: the data stage still runs, the
    // image stage fails, nothing propagates.
    let outcome = exporter.export_at(&frame, &[0u8; 3], stamp());

    assert!(outcome.data_written);
    assert!(!outcome.image_written);
    assert_eq!(
        outcome.status(),
        SensorStatus::ScreenshotFailed(outcome.paths.image.clone())
    );
    assert!(outcome.paths.csv.exists());
}

#[test]
fn data_stage_failure_is_suppressed() {
    let frame = frame_from(2, 2, vec![0, 500, 0, 500]);
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("does-not-exist");
    let mut exporter = SnapshotExporter::new(missing);

    let outcome = exporter.export_at(&frame, &[0u8; 4], stamp());

    assert!(!outcome.data_written);
    assert!(!outcome.image_written);
    // The reorder pass ran before the write failed, so the counter moved.
    assert_eq!(exporter.unreliable_total(), 2);
}

#[test]
fn center_distance_averages_the_center_block() {
    let grid = Array2::from_shape_vec(
        (3, 3),
        vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0],
    )
    .unwrap();
    assert_relative_eq!(center_distance(&grid), (5.0 + 6.0 + 8.0 + 9.0) / 4.0);
}

#[test]
fn center_distance_on_uniform_grid_is_the_constant_plus_correction() {
    let frame = uniform_frame(4, 4, 1000);
    let dir = tempfile::tempdir().unwrap();
    let mut exporter = SnapshotExporter::new(dir.path());
    let outcome = exporter.export_at(&frame, &[0u8; 16], stamp());

    let summary = fs::read_to_string(&outcome.paths.summary).unwrap();
    let line = summary.lines().nth(2).unwrap();
    let reported: f64 = line
        .strip_prefix("Center distance: ")
        .unwrap()
        .parse()
        .unwrap();

    let expected =
        1000.0 + (y_axis_correction(2.0) + y_axis_correction(3.0)) / 2.0;
    assert_relative_eq!(reported, expected, max_relative = 1e-12);
}
