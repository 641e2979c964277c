/// Divisor mapping a 16-bit depth sample onto the display byte range.
/// At 1, samples are narrowed to u8 directly; values above 255 wrap.
pub const DEPTH_TO_BYTE_DIVISOR: u16 = 1;

/// Sample value the driver delivers when a pixel has no reliable reading.
pub const NO_READING: u16 = 0;

/// Degree-5 lens correction polynomial over the column coordinate,
/// coefficients highest power first. Fitted offline against a flat target;
/// 95% confidence bounds on the fit are in the calibration notes.
pub const X_CORRECTION_COEFFS: [f64; 6] = [
    5.237e-12, -7.065e-9, 3.218e-6, -4.947e-4, -3.215e-2, 9.665,
];

/// Degree-4 lens correction polynomial over the row coordinate,
/// coefficients highest power first.
pub const Y_CORRECTION_COEFFS: [f64; 5] = [2.085e-9, -2.043e-6, 7.17e-4, -0.1262, 9.532];

/// Filename prefix shared by the three snapshot artifacts.
pub const SNAPSHOT_PREFIX: &str = "KinectScreenshot";

/// chrono format string for the timestamp embedded in artifact filenames.
/// Second granularity: two exports within one second collide on purpose.
pub const SNAPSHOT_TIME_FORMAT: &str = "%H-%M-%S";
