#![no_std]
#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

pub mod channels;
pub mod codec;
pub mod device;
pub mod interface;
pub mod output;
pub mod registers;
pub mod sensors;

// Re-export main types
pub use channels::{Channel, ChannelReading, ChannelSpec, MAX_CHANNELS, Readings, Sample};
pub use codec::{BitLayout, decode, encode};
pub use device::{Bmx055Driver, DeviceState};
pub use interface::{BusAddress, I2cInterface, NoSupplyControl, SupplyControl};
pub use output::{OutputMode, PLACEHOLDER};
pub use sensors::{
    AccelConfig, AccelRange, GyroBandwidth, GyroConfig, GyroPowerMode, GyroRange, MagConfig,
    MagDataRate, MagOpMode,
};

use core::ops::RangeInclusive;

/// Accelerometer I2C address with SDO1 pulled low (default: 0x18)
pub const ACCEL_ADDRESS_DEFAULT: u8 = 0x18;

/// Accelerometer I2C address with SDO1 pulled high (0x19)
pub const ACCEL_ADDRESS_ALTERNATE: u8 = 0x19;

/// Gyroscope I2C address with SDO2 pulled low (default: 0x68)
pub const GYRO_ADDRESS_DEFAULT: u8 = 0x68;

/// Gyroscope I2C address with SDO2 pulled high (0x69)
pub const GYRO_ADDRESS_ALTERNATE: u8 = 0x69;

/// Magnetometer I2C address with CSB3 and SDO3 low (default: 0x10)
///
/// The other strap combinations select 0x11, 0x12 and 0x13.
pub const MAG_ADDRESS_DEFAULT: u8 = 0x10;

/// One of the three independent sensing dies in the package
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Die {
    /// 12-bit triaxial accelerometer with an 8-bit temperature channel
    Accelerometer,
    /// 16-bit triaxial gyroscope
    Gyroscope,
    /// Triaxial geomagnetic sensor with a Hall resistance channel
    Magnetometer,
}

impl Die {
    /// All dies, in the order the driver reports them
    pub const ALL: [Self; 3] = [Self::Accelerometer, Self::Gyroscope, Self::Magnetometer];

    /// Register addresses this die accepts
    #[must_use]
    pub const fn register_window(self) -> RangeInclusive<u8> {
        match self {
            Self::Accelerometer => registers::accel::WINDOW,
            Self::Gyroscope => registers::gyro::WINDOW,
            Self::Magnetometer => registers::mag::WINDOW,
        }
    }

    /// Whether `register` lies inside this die's register window
    #[must_use]
    pub fn accepts(self, register: u8) -> bool {
        self.register_window().contains(&register)
    }

    /// Output channels of this die, in reporting order
    #[must_use]
    pub const fn channels(self) -> &'static [ChannelSpec] {
        match self {
            Self::Accelerometer => &channels::ACCEL_CHANNELS,
            Self::Gyroscope => &channels::GYRO_CHANNELS,
            Self::Magnetometer => &channels::MAG_CHANNELS,
        }
    }

    /// Value the die's chip ID register reads back
    #[must_use]
    pub const fn chip_id(self) -> u8 {
        match self {
            Self::Accelerometer => 0xFA,
            Self::Gyroscope => 0x0F,
            Self::Magnetometer => 0x32,
        }
    }

    /// Number of bytes `pack_channels` writes for this die
    #[must_use]
    pub const fn packed_len(self) -> usize {
        self.channels().len() * 2
    }
}

/// Driver errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error<E> {
    /// Communication error with the device (NACK, timeout, arbitration loss)
    Bus(E),
    /// Register address outside the die's window; no bus access was made
    BadRegisterAddress {
        /// Die the access was addressed to
        die: Die,
        /// Rejected register address
        register: u8,
    },
    /// Output buffer cannot hold the packed channel values
    BufferTooSmall {
        /// Bytes needed
        required: usize,
        /// Bytes provided
        available: usize,
    },
}

impl<E> From<E> for Error<E> {
    fn from(error: E) -> Self {
        Self::Bus(error)
    }
}

impl<E> Error<E> {
    /// Whether this error came from the bus rather than from the caller
    #[must_use]
    pub const fn is_bus(&self) -> bool {
        matches!(self, Self::Bus(_))
    }
}
