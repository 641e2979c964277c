use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use chrono::{DateTime, Utc};
use ndarray::Array2;
use tracing::{error, info};

use crate::consts::{NO_READING, SNAPSHOT_PREFIX, SNAPSHOT_TIME_FORMAT};
use crate::correct::{apply_correction, correction_matrix};
use crate::error::Result;
use crate::frame::{DepthFrame, FrameDescription};
use crate::io::image::save_grayscale_png;
use crate::status::SensorStatus;

/// The three artifact paths for one export.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SnapshotPaths {
    pub csv: PathBuf,
    pub summary: PathBuf,
    pub image: PathBuf,
}

/// What an export attempt actually produced. Partial artifacts are
/// possible and are not cleaned up.
#[derive(Clone, Debug)]
pub struct SnapshotOutcome {
    pub paths: SnapshotPaths,
    /// CSV and summary text were both written.
    pub data_written: bool,
    /// The PNG of the displayed image was written.
    pub image_written: bool,
}

impl SnapshotOutcome {
    /// Status text for the image stage, the only failure surfaced to the
    /// user.
    pub fn status(&self) -> SensorStatus {
        if self.image_written {
            SensorStatus::ScreenshotSaved(self.paths.image.clone())
        } else {
            SensorStatus::ScreenshotFailed(self.paths.image.clone())
        }
    }
}

/// One-shot exporter: corrected-depth CSV, summary text, and a PNG of the
/// currently displayed grayscale image.
///
/// The unreliable-sample counter accumulates across every export performed
/// by this instance; it is never reset implicitly. Use
/// [`reset_unreliable_total`](Self::reset_unreliable_total) to start a new
/// accumulation window.
pub struct SnapshotExporter {
    output_dir: PathBuf,
    prefix: String,
    unreliable_total: u64,
}

impl SnapshotExporter {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
            prefix: SNAPSHOT_PREFIX.to_string(),
            unreliable_total: 0,
        }
    }

    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    /// Cumulative count of no-reading samples seen across all exports.
    pub fn unreliable_total(&self) -> u64 {
        self.unreliable_total
    }

    pub fn reset_unreliable_total(&mut self) {
        self.unreliable_total = 0;
    }

    /// Artifact paths for a given timestamp. Second granularity: exports
    /// within the same second map to the same paths and the later one wins.
    pub fn paths_for(&self, stamp: &DateTime<Utc>) -> SnapshotPaths {
        let time = stamp.format(SNAPSHOT_TIME_FORMAT);
        SnapshotPaths {
            csv: self
                .output_dir
                .join(format!("{}-Depth-{}-Output.csv", self.prefix, time)),
            summary: self
                .output_dir
                .join(format!("{}-Depth-{}-Output.txt", self.prefix, time)),
            image: self
                .output_dir
                .join(format!("{}-Depth-{}-Image.png", self.prefix, time)),
        }
    }

    /// Export the given frame and the displayed grayscale buffer, stamped
    /// with the current UTC time.
    pub fn export(&mut self, frame: &DepthFrame, displayed: &[u8]) -> SnapshotOutcome {
        self.export_at(frame, displayed, Utc::now())
    }

    /// Export with an explicit timestamp.
    ///
    /// The numeric stage (reorder, correct, CSV, summary) runs first; any
    /// failure there is logged and suppressed, and the image stage runs
    /// regardless. Image I/O failure is reported only through the outcome.
    pub fn export_at(
        &mut self,
        frame: &DepthFrame,
        displayed: &[u8],
        stamp: DateTime<Utc>,
    ) -> SnapshotOutcome {
        let paths = self.paths_for(&stamp);

        let data_written = match self.write_data_artifacts(frame, &paths) {
            Ok(()) => true,
            Err(err) => {
                error!(%err, "snapshot data stage failed");
                false
            }
        };

        let image_written = match save_grayscale_png(displayed, &frame.desc, &paths.image) {
            Ok(()) => {
                info!(path = %paths.image.display(), "saved screenshot");
                true
            }
            Err(err) => {
                error!(%err, path = %paths.image.display(), "screenshot write failed");
                false
            }
        };

        SnapshotOutcome {
            paths,
            data_written,
            image_written,
        }
    }

    fn write_data_artifacts(&mut self, frame: &DepthFrame, paths: &SnapshotPaths) -> Result<()> {
        let mut grid = self.reorder(frame);
        let matrix = correction_matrix(&frame.desc);
        apply_correction(&mut grid, &matrix);

        write_csv(&grid, &paths.csv)?;
        self.write_summary(&grid, &frame.desc, &paths.summary)?;
        Ok(())
    }

    /// Copy the raw samples into a float grid, reading in reverse row-major
    /// order so each stored row ends up column-mirrored. Every no-reading
    /// sample encountered bumps the cumulative counter.
    fn reorder(&mut self, frame: &DepthFrame) -> Array2<f64> {
        let w = frame.desc.width as usize;
        let h = frame.desc.height as usize;
        let mut grid = Array2::<f64>::zeros((h, w));

        let mut k = frame.samples.len();
        for y in (0..h).rev() {
            for x in 0..w {
                k -= 1;
                let sample = frame.samples[k];
                if sample == NO_READING {
                    self.unreliable_total += 1;
                }
                grid[[y, x]] = sample as f64;
            }
        }
        grid
    }

    fn write_summary(
        &self,
        grid: &Array2<f64>,
        desc: &FrameDescription,
        path: &std::path::Path,
    ) -> Result<()> {
        let total = desc.pixel_count() as u64;
        let percentage = self.unreliable_total as f64 / total as f64 * 100.0;
        let center = center_distance(grid);

        let mut file = BufWriter::new(File::create(path)?);
        writeln!(
            file,
            "Fraction unreliable: {} / {}",
            self.unreliable_total, total
        )?;
        writeln!(file, "Percentage unreliable: {}%", percentage)?;
        writeln!(file, "Center distance: {}", center)?;
        writeln!(file)?;
        Ok(())
    }
}

/// One CSV line per stored row, columns iterated in reverse stored order
/// (which restores sensor column order), with a trailing comma before each
/// newline.
fn write_csv(grid: &Array2<f64>, path: &std::path::Path) -> Result<()> {
    let (h, w) = grid.dim();
    let mut file = BufWriter::new(File::create(path)?);
    for y in 0..h {
        let mut line = String::new();
        for x in (0..w).rev() {
            line.push_str(&format!("{},", grid[[y, x]]));
        }
        writeln!(file, "{}", line)?;
    }
    Ok(())
}

/// Mean corrected depth of the 2x2 stored-grid block nearest the image
/// center. Falls back to the single available pixel on grids narrower than
/// two pixels in either direction.
pub fn center_distance(grid: &Array2<f64>) -> f64 {
    let (h, w) = grid.dim();
    let cy = h / 2;
    let cx = w / 2;
    if w < 2 || h < 2 {
        return grid[[cy.min(h - 1), cx.min(w - 1)]];
    }
    let cy1 = (cy + 1).min(h - 1);
    let cx1 = (cx + 1).min(w - 1);
    (grid[[cy, cx]] + grid[[cy, cx1]] + grid[[cy1, cx]] + grid[[cy1, cx1]]) / 4.0
}
