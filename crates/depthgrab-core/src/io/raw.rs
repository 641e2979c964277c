use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

use byteorder::{LittleEndian, ReadBytesExt, WriteBytesExt};

use crate::error::{DepthError, Result};
use crate::frame::{DepthFrame, FrameDescription, ReliableRange};

/// Load a raw depth capture: little-endian u16 samples, row-major, no
/// header. Dimensions are supplied out of band.
pub fn load_raw(
    path: &Path,
    desc: FrameDescription,
    range: ReliableRange,
) -> Result<DepthFrame> {
    let file = File::open(path)?;
    let expected = desc.byte_size();
    let actual = file.metadata()?.len() as usize;
    if actual < expected {
        return Err(DepthError::TruncatedCapture {
            expected,
            got: actual,
        });
    }

    let mut reader = BufReader::new(file);
    let mut samples = vec![0u16; desc.pixel_count()];
    reader.read_u16_into::<LittleEndian>(&mut samples)?;

    DepthFrame::from_samples(desc, samples, range)
}

/// Write a depth frame back out in the raw capture format.
pub fn save_raw(frame: &DepthFrame, path: &Path) -> Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    for &sample in &frame.samples {
        writer.write_u16::<LittleEndian>(sample)?;
    }
    Ok(())
}
