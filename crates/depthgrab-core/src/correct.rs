use ndarray::Array2;

use crate::consts::{X_CORRECTION_COEFFS, Y_CORRECTION_COEFFS};
use crate::frame::FrameDescription;

/// Additive lens correction for a pixel's column coordinate.
pub fn x_axis_correction(x: f64) -> f64 {
    horner(&X_CORRECTION_COEFFS, x)
}

/// Additive lens correction for a pixel's row coordinate.
pub fn y_axis_correction(y: f64) -> f64 {
    horner(&Y_CORRECTION_COEFFS, y)
}

fn horner(coeffs: &[f64], v: f64) -> f64 {
    coeffs.iter().fold(0.0, |acc, c| acc * v + c)
}

/// Build the per-pixel correction matrix for a frame, shape (height, width).
///
/// Two passes: the column polynomial fills the matrix first, then the row
/// pass runs. The row pass computes a blend with the column term but stores
/// the row term alone, so the final entry for (x, y) is `y_axis_correction(y)`
/// regardless of x. This matches the shipped calibration behavior; callers
/// relying on the column term should not.
pub fn correction_matrix(desc: &FrameDescription) -> Array2<f64> {
    let w = desc.width as usize;
    let h = desc.height as usize;
    let mut matrix = Array2::<f64>::zeros((h, w));

    for x in 0..w {
        let cx = x_axis_correction(x as f64);
        for y in 0..h {
            matrix[[y, x]] = cx;
        }
    }

    for y in 0..h {
        let cy = y_axis_correction(y as f64);
        for x in 0..w {
            // Blend is computed but never stored.
            let _blend = (matrix[[y, x]] + cy) / 2.0;
            matrix[[y, x]] = cy;
        }
    }

    matrix
}

/// Add the correction matrix to a depth grid in place, clamping below at
/// zero. No upper clamp.
pub fn apply_correction(grid: &mut Array2<f64>, matrix: &Array2<f64>) {
    for (value, correction) in grid.iter_mut().zip(matrix.iter()) {
        let corrected = *value + correction;
        *value = if corrected < 0.0 { 0.0 } else { corrected };
    }
}
