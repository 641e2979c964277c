use tracing::debug;

use crate::consts::DEPTH_TO_BYTE_DIVISOR;
use crate::frame::{DepthFrame, FrameDescription, RawDepthBuffer, ReliableRange};

/// Converts raw 16-bit depth frames into the 8-bit grayscale buffer shown
/// on screen. The buffer is allocated once and reused across frames.
///
/// A successful conversion overwrites the whole buffer; a rejected frame
/// leaves it untouched, so the displayed image is never partially stale.
pub struct DepthConverter {
    desc: FrameDescription,
    pixels: Vec<u8>,
}

impl DepthConverter {
    pub fn new(desc: FrameDescription) -> Self {
        Self {
            desc,
            pixels: vec![0; desc.pixel_count()],
        }
    }

    pub fn description(&self) -> FrameDescription {
        self.desc
    }

    /// The currently displayed grayscale buffer, row-major.
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// Convert a driver-delivered raw buffer. Returns `true` if the buffer
    /// was converted and the caller should push one full-frame update to
    /// its display surface.
    ///
    /// A size or alignment mismatch is not an error: the frame is dropped
    /// silently and the previous image stays up.
    pub fn process_frame(&mut self, raw: &RawDepthBuffer, range: ReliableRange) -> bool {
        if raw.description() != self.desc {
            debug!(
                got = ?raw.description(),
                expected = ?self.desc,
                "frame description mismatch, dropping frame"
            );
            return false;
        }
        let Some(samples) = raw.samples() else {
            debug!(
                got = raw.len(),
                expected = self.desc.byte_size(),
                "raw buffer size mismatch, dropping frame"
            );
            return false;
        };
        self.shade(samples, range);
        true
    }

    /// Convert an owned frame (the mailbox consumer path).
    pub fn process_depth_frame(&mut self, frame: &DepthFrame) -> bool {
        if frame.samples.len() != self.pixels.len() {
            debug!(
                got = frame.samples.len(),
                expected = self.pixels.len(),
                "frame pixel count mismatch, dropping frame"
            );
            return false;
        }
        self.shade(&frame.samples, frame.range);
        true
    }

    fn shade(&mut self, samples: &[u16], range: ReliableRange) {
        for (out, &sample) in self.pixels.iter_mut().zip(samples) {
            // Out-of-range samples render black. In-range samples narrow
            // to a byte; depths past 255 sensor units wrap.
            *out = if range.contains(sample) {
                (sample / DEPTH_TO_BYTE_DIVISOR) as u8
            } else {
                0
            };
        }
    }
}
