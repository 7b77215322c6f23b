//! Gyroscope configuration
//!
//! Provides range, bandwidth and power-mode settings for the BMX055's 16-bit
//! gyroscope die.

use super::hbw_payload;

/// Gyroscope angular-rate range (`RANGE` codes)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum GyroRange {
    /// ±2000 °/s (least sensitive, most range)
    Dps2000 = 0,
    /// ±1000 °/s
    Dps1000 = 1,
    /// ±500 °/s
    Dps500 = 2,
    /// ±250 °/s
    Dps250 = 3,
    /// ±125 °/s (most sensitive, least range)
    Dps125 = 4,
}

impl GyroRange {
    /// Register code written to `RANGE`
    #[must_use]
    pub const fn code(self) -> u8 {
        self as u8
    }

    /// Get the maximum value in degrees per second
    #[must_use]
    pub const fn max_value(self) -> u16 {
        match self {
            Self::Dps2000 => 2000,
            Self::Dps1000 => 1000,
            Self::Dps500 => 500,
            Self::Dps250 => 250,
            Self::Dps125 => 125,
        }
    }
}

/// Gyroscope filter bandwidth and output data rate (`BW` codes)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum GyroBandwidth {
    /// 2000 Hz ODR, unfiltered (523 Hz)
    Odr2000Unfiltered = 0,
    /// 2000 Hz ODR, 230 Hz bandwidth
    Odr2000Bw230 = 1,
    /// 1000 Hz ODR, 116 Hz bandwidth
    Odr1000Bw116 = 2,
    /// 400 Hz ODR, 47 Hz bandwidth
    Odr400Bw47 = 3,
    /// 200 Hz ODR, 23 Hz bandwidth
    Odr200Bw23 = 4,
    /// 100 Hz ODR, 12 Hz bandwidth
    Odr100Bw12 = 5,
    /// 200 Hz ODR, 64 Hz bandwidth
    Odr200Bw64 = 6,
    /// 100 Hz ODR, 32 Hz bandwidth
    Odr100Bw32 = 7,
}

impl GyroBandwidth {
    /// Register code written to `BW`
    #[must_use]
    pub const fn code(self) -> u8 {
        self as u8
    }

    /// Output data rate in Hz
    #[must_use]
    pub const fn odr_hz(self) -> u16 {
        match self {
            Self::Odr2000Unfiltered | Self::Odr2000Bw230 => 2000,
            Self::Odr1000Bw116 => 1000,
            Self::Odr400Bw47 => 400,
            Self::Odr200Bw23 | Self::Odr200Bw64 => 200,
            Self::Odr100Bw12 | Self::Odr100Bw32 => 100,
        }
    }

    /// Filter bandwidth in Hz
    #[must_use]
    pub const fn bandwidth_hz(self) -> u16 {
        match self {
            Self::Odr2000Unfiltered => 523,
            Self::Odr2000Bw230 => 230,
            Self::Odr1000Bw116 => 116,
            Self::Odr400Bw47 => 47,
            Self::Odr200Bw23 => 23,
            Self::Odr100Bw12 => 12,
            Self::Odr200Bw64 => 64,
            Self::Odr100Bw32 => 32,
        }
    }
}

/// Gyroscope power mode (`LPM1` payload)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum GyroPowerMode {
    /// Normal mode
    Normal = 0x00,
    /// Deep suspend, only the interface stays alive
    DeepSuspend = 0x20,
    /// Suspend
    Suspend = 0x80,
}

impl GyroPowerMode {
    /// Register code written to `LPM1`
    #[must_use]
    pub const fn code(self) -> u8 {
        self as u8
    }
}

/// Gyroscope configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct GyroConfig {
    /// Angular-rate range
    pub range: GyroRange,
    /// Filter bandwidth and output data rate
    pub bandwidth: GyroBandwidth,
    /// Power mode
    pub power_mode: GyroPowerMode,
    /// Bypass the data filter (`data_high_bw`)
    pub unfiltered: bool,
    /// Disable MSB/LSB shadowing (`shadow_dis`)
    pub shadow_disabled: bool,
}

impl Default for GyroConfig {
    fn default() -> Self {
        Self {
            range: GyroRange::Dps2000,
            bandwidth: GyroBandwidth::Odr2000Unfiltered,
            power_mode: GyroPowerMode::Normal,
            unfiltered: false,
            shadow_disabled: false,
        }
    }
}

impl GyroConfig {
    /// Payloads for `RANGE`, `BW`, `LPM1` and `RATE_HBW`, in write order
    #[must_use]
    pub const fn payloads(&self) -> [u8; 4] {
        [
            self.range.code(),
            self.bandwidth.code(),
            self.power_mode.code(),
            hbw_payload(self.unfiltered, self.shadow_disabled),
        ]
    }
}
