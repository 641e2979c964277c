use crate::consts::NO_READING;
use crate::error::{DepthError, Result};

/// Geometry of the depth stream as reported by the sensor driver.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FrameDescription {
    pub width: u32,
    pub height: u32,
    pub bytes_per_sample: u32,
}

impl FrameDescription {
    /// Description for a 16-bit depth stream.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            bytes_per_sample: 2,
        }
    }

    pub fn pixel_count(&self) -> usize {
        (self.width as usize)
            .checked_mul(self.height as usize)
            .expect("Frame dimensions too large")
    }

    /// Expected size in bytes of one raw frame buffer.
    pub fn byte_size(&self) -> usize {
        self.pixel_count()
            .checked_mul(self.bytes_per_sample as usize)
            .expect("Frame size calculation overflow")
    }
}

/// The [min, max] distance band the driver considers trustworthy for a frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReliableRange {
    pub min: u16,
    pub max: u16,
}

impl ReliableRange {
    pub fn new(min: u16, max: u16) -> Self {
        Self { min, max }
    }

    /// Range with the far bound widened to the full representable depth,
    /// so less reliable far-field samples still render.
    pub fn widened(min: u16) -> Self {
        Self {
            min,
            max: u16::MAX,
        }
    }

    pub fn contains(&self, sample: u16) -> bool {
        sample >= self.min && sample <= self.max
    }
}

/// One owned depth frame: row-major 16-bit distance samples in sensor-native
/// units, 0 meaning "no reliable reading".
#[derive(Clone, Debug)]
pub struct DepthFrame {
    pub desc: FrameDescription,
    pub samples: Vec<u16>,
    pub range: ReliableRange,
}

impl DepthFrame {
    pub fn from_samples(
        desc: FrameDescription,
        samples: Vec<u16>,
        range: ReliableRange,
    ) -> Result<Self> {
        if samples.len() != desc.pixel_count() {
            return Err(DepthError::GeometryMismatch {
                got: samples.len() * desc.bytes_per_sample as usize,
                expected: desc.byte_size(),
            });
        }
        Ok(Self {
            desc,
            samples,
            range,
        })
    }

    pub fn sample(&self, x: u32, y: u32) -> u16 {
        self.samples[(y * self.desc.width + x) as usize]
    }

    /// Count of samples carrying no reliable reading.
    pub fn unreliable_count(&self) -> usize {
        self.samples.iter().filter(|&&s| s == NO_READING).count()
    }
}

/// Borrowed view of a driver-owned raw frame buffer, valid only for the
/// duration of the delivery callback. No copy is made; `samples` is a
/// bounds- and alignment-checked reinterpretation of the bytes.
#[derive(Clone, Copy, Debug)]
pub struct RawDepthBuffer<'a> {
    desc: FrameDescription,
    data: &'a [u8],
}

impl<'a> RawDepthBuffer<'a> {
    pub fn new(data: &'a [u8], desc: FrameDescription) -> Self {
        Self { desc, data }
    }

    pub fn description(&self) -> FrameDescription {
        self.desc
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Whether the declared buffer size matches the frame geometry.
    pub fn matches_description(&self) -> bool {
        self.data.len() == self.desc.byte_size()
    }

    /// Typed view of the buffer as 16-bit samples. `None` if the buffer
    /// size does not match the description or the bytes are misaligned.
    pub fn samples(&self) -> Option<&'a [u16]> {
        if !self.matches_description() {
            return None;
        }
        bytemuck::try_cast_slice(self.data).ok()
    }
}
