use std::fmt;
use std::path::PathBuf;

/// The fixed set of user-visible status states.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SensorStatus {
    Running,
    NoSensor,
    SensorUnavailable,
    ScreenshotSaved(PathBuf),
    ScreenshotFailed(PathBuf),
}

impl fmt::Display for SensorStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SensorStatus::Running => write!(f, "Sensor running"),
            SensorStatus::NoSensor => write!(f, "No ready sensor found"),
            SensorStatus::SensorUnavailable => write!(f, "Sensor not available"),
            SensorStatus::ScreenshotSaved(path) => {
                write!(f, "Saved screenshot to {}", path.display())
            }
            SensorStatus::ScreenshotFailed(path) => {
                write!(f, "Failed to write screenshot to {}", path.display())
            }
        }
    }
}
