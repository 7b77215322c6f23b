//! Rendering of channel readings
//!
//! Two sinks are supported:
//! - human-readable text, one ` <value>,` token per channel, written to any
//!   [`core::fmt::Write`];
//! - a flat byte buffer with each value as a big-endian `i16`.
//!
//! A failed channel never shortens the output: it prints [`PLACEHOLDER`] or
//! packs two zero bytes.

use core::fmt::{self, Write};

use crate::channels::{ChannelReading, Sample};

/// Token printed in place of a failed channel
pub const PLACEHOLDER: &str = "----";

/// How printed values are rendered
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum OutputMode {
    /// Sign-extended decimal value
    #[default]
    Decimal,
    /// Raw register bytes, MSB first
    Hex,
}

/// Write one channel token
///
/// # Errors
///
/// Returns an error if the sink rejects the write.
pub fn write_reading<W: Write>(
    sink: &mut W,
    reading: &ChannelReading,
    mode: OutputMode,
) -> fmt::Result {
    match (reading, mode) {
        (ChannelReading::Failed, _) => write!(sink, " {PLACEHOLDER},"),
        (ChannelReading::Ok(Sample { value, .. }), OutputMode::Decimal) => {
            write!(sink, " {value},")
        }
        (ChannelReading::Ok(Sample { msb, lsb: Some(lsb), .. }), OutputMode::Hex) => {
            write!(sink, " 0x{msb:02x} 0x{lsb:02x},")
        }
        (ChannelReading::Ok(Sample { msb, lsb: None, .. }), OutputMode::Hex) => {
            write!(sink, " 0x{msb:02x},")
        }
    }
}

/// Write every reading in order
///
/// # Errors
///
/// Returns an error if the sink rejects a write.
pub fn write_readings<W: Write>(
    sink: &mut W,
    readings: &[ChannelReading],
    mode: OutputMode,
) -> fmt::Result {
    readings
        .iter()
        .try_for_each(|reading| write_reading(sink, reading, mode))
}

/// Pack readings into `buffer`, MSB first, two bytes per channel
///
/// Returns the number of bytes written, or `None` if `buffer` is shorter than
/// `2 * readings.len()` (nothing is written in that case).
#[must_use]
pub fn pack_readings(readings: &[ChannelReading], buffer: &mut [u8]) -> Option<usize> {
    let required = readings.len() * 2;
    let out = buffer.get_mut(..required)?;

    let mut index = 0;
    for (reading, pair) in readings.iter().zip(out.chunks_exact_mut(2)) {
        let bytes = match reading {
            ChannelReading::Ok(sample) => sample.to_be_bytes(),
            ChannelReading::Failed => [0, 0],
        };
        pair.copy_from_slice(&bytes);
        index += pair.len();
    }

    Some(index)
}
