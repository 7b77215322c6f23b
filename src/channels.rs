//! Output channel tables and per-read results
//!
//! Each die reports a fixed, ordered list of channels. The driver walks that
//! list for every multi-channel read, so the order here is the order values
//! appear in printed lines and packed buffers.

use crate::codec::{BitLayout, decode};
use crate::registers::{accel, gyro, mag};
use crate::Die;

/// Largest number of channels any die reports
pub const MAX_CHANNELS: usize = 4;

/// Output channel of a die
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Channel {
    /// X axis
    X,
    /// Y axis
    Y,
    /// Z axis
    Z,
    /// Accelerometer die temperature
    Temperature,
    /// Magnetometer Hall resistance, used for temperature compensation
    Rhall,
}

/// Where a channel lives and how it is packed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ChannelSpec {
    /// Which channel this is
    pub channel: Channel,
    /// Address of the first (LSB) output register
    pub register: u8,
    /// Bit layout of the register pair
    pub layout: BitLayout,
}

impl ChannelSpec {
    const fn new(channel: Channel, register: u8, layout: BitLayout) -> Self {
        Self {
            channel,
            register,
            layout,
        }
    }
}

/// Accelerometer: X, Y, Z, temperature
pub const ACCEL_CHANNELS: [ChannelSpec; 4] = [
    ChannelSpec::new(Channel::X, accel::ACCD_X_LSB, BitLayout::BITS_12),
    ChannelSpec::new(Channel::Y, accel::ACCD_Y_LSB, BitLayout::BITS_12),
    ChannelSpec::new(Channel::Z, accel::ACCD_Z_LSB, BitLayout::BITS_12),
    ChannelSpec::new(Channel::Temperature, accel::ACCD_TEMP, BitLayout::BITS_8),
];

/// Gyroscope: X, Y, Z
pub const GYRO_CHANNELS: [ChannelSpec; 3] = [
    ChannelSpec::new(Channel::X, gyro::RATE_X_LSB, BitLayout::BITS_16),
    ChannelSpec::new(Channel::Y, gyro::RATE_Y_LSB, BitLayout::BITS_16),
    ChannelSpec::new(Channel::Z, gyro::RATE_Z_LSB, BitLayout::BITS_16),
];

/// Magnetometer: X, Y, Z, RHALL
pub const MAG_CHANNELS: [ChannelSpec; 4] = [
    ChannelSpec::new(Channel::X, mag::X_LSB, BitLayout::BITS_13),
    ChannelSpec::new(Channel::Y, mag::Y_LSB, BitLayout::BITS_13),
    ChannelSpec::new(Channel::Z, mag::Z_LSB, BitLayout::BITS_15),
    ChannelSpec::new(Channel::Rhall, mag::RHALL_LSB, BitLayout::BITS_14),
];

/// A successfully decoded channel value together with the bytes it came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Sample {
    /// Sign-extended value
    pub value: i32,
    /// Raw MSB register byte
    pub msb: u8,
    /// Raw LSB register byte, absent for single-register channels
    pub lsb: Option<u8>,
}

impl Sample {
    /// Decode a sample from the bytes of a burst read (LSB first)
    ///
    /// Returns `None` unless `bytes` holds exactly `layout.byte_count()`
    /// bytes. A single byte is taken as the MSB.
    #[must_use]
    pub fn from_bus_bytes(bytes: &[u8], layout: BitLayout) -> Option<Self> {
        if bytes.len() != layout.byte_count() {
            return None;
        }

        let sample = match *bytes {
            [lsb, msb] => Self {
                value: decode(msb, lsb, layout),
                msb,
                lsb: Some(lsb),
            },
            [msb] => Self {
                value: decode(msb, 0, layout),
                msb,
                lsb: None,
            },
            _ => return None,
        };
        Some(sample)
    }

    /// Value as the big-endian pair written by buffer packing
    #[must_use]
    pub const fn to_be_bytes(self) -> [u8; 2] {
        // Every layout is at most 16 bits wide
        #[allow(clippy::cast_possible_truncation)]
        let value = self.value as i16;
        value.to_be_bytes()
    }
}

/// Result of reading one channel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ChannelReading {
    /// The bus transaction succeeded
    Ok(Sample),
    /// The bus transaction failed
    Failed,
}

impl ChannelReading {
    /// Decoded value, if the read succeeded
    #[must_use]
    pub const fn value(&self) -> Option<i32> {
        match self {
            Self::Ok(sample) => Some(sample.value),
            Self::Failed => None,
        }
    }

    /// Whether the read failed
    #[must_use]
    pub const fn is_failed(&self) -> bool {
        matches!(self, Self::Failed)
    }
}

/// Readings of every channel of one die, in reporting order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Readings {
    die: Die,
    values: [ChannelReading; MAX_CHANNELS],
    len: usize,
}

impl Readings {
    pub(crate) const fn new(die: Die) -> Self {
        Self {
            die,
            values: [ChannelReading::Failed; MAX_CHANNELS],
            len: 0,
        }
    }

    pub(crate) fn push(&mut self, reading: ChannelReading) {
        if let Some(slot) = self.values.get_mut(self.len) {
            *slot = reading;
            self.len += 1;
        }
    }

    /// Die these readings came from
    #[must_use]
    pub const fn die(&self) -> Die {
        self.die
    }

    /// Readings in channel order
    #[must_use]
    pub fn as_slice(&self) -> &[ChannelReading] {
        &self.values[..self.len]
    }

    /// Reading of a particular channel
    #[must_use]
    pub fn get(&self, channel: Channel) -> Option<ChannelReading> {
        self.die
            .channels()
            .iter()
            .zip(self.as_slice())
            .find(|(spec, _)| spec.channel == channel)
            .map(|(_, reading)| *reading)
    }

    /// Number of channels that failed
    #[must_use]
    pub fn failures(&self) -> usize {
        self.as_slice().iter().filter(|r| r.is_failed()).count()
    }

    /// Number of channels read
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Whether no channel was read
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }
}
