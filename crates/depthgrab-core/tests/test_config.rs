use std::fs;
use std::path::PathBuf;

use depthgrab_core::config::CaptureConfig;
use depthgrab_core::frame::ReliableRange;

#[test]
fn defaults_widen_the_reliable_range() {
    let config = CaptureConfig::default();
    assert_eq!(config.reliable_range(), ReliableRange::widened(0));
    assert_eq!(config.output.directory, PathBuf::from("KinectData"));
    assert_eq!(config.output.prefix, "KinectScreenshot");
}

#[test]
fn empty_toml_yields_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("capture.toml");
    fs::write(&path, "").unwrap();

    let config = CaptureConfig::from_toml(&path).unwrap();
    assert_eq!(config.reliable_range(), ReliableRange::widened(0));
}

#[test]
fn explicit_bounds_are_honored() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("capture.toml");
    fs::write(
        &path,
        r#"
[output]
directory = "scans"
prefix = "Bench"

[depth]
min_reliable = 500
max_reliable = 4500
"#,
    )
    .unwrap();

    let config = CaptureConfig::from_toml(&path).unwrap();
    assert_eq!(config.output.directory, PathBuf::from("scans"));
    assert_eq!(config.output.prefix, "Bench");
    assert_eq!(config.reliable_range(), ReliableRange::new(500, 4500));
}

#[test]
fn min_without_max_widens() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("capture.toml");
    fs::write(&path, "[depth]\nmin_reliable = 500\n").unwrap();

    let config = CaptureConfig::from_toml(&path).unwrap();
    assert_eq!(config.reliable_range(), ReliableRange::widened(500));
}

#[test]
fn malformed_toml_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("capture.toml");
    fs::write(&path, "[depth\nmin_reliable = ").unwrap();

    assert!(CaptureConfig::from_toml(&path).is_err());
}
