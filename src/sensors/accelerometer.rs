//! Accelerometer configuration
//!
//! Provides the g-range and data-path settings for the BMX055's 12-bit
//! accelerometer die.

use super::hbw_payload;

/// Accelerometer g-range (`PMU_RANGE` codes)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AccelRange {
    /// ±2g range (most sensitive, least range)
    G2 = 0x03,
    /// ±4g range
    G4 = 0x05,
    /// ±8g range
    G8 = 0x08,
    /// ±16g range (least sensitive, most range)
    G16 = 0x0C,
}

impl AccelRange {
    /// Register code written to `PMU_RANGE`
    #[must_use]
    pub const fn code(self) -> u8 {
        self as u8
    }

    /// Get the maximum value in g
    #[must_use]
    pub const fn max_value(self) -> u8 {
        match self {
            Self::G2 => 2,
            Self::G4 => 4,
            Self::G8 => 8,
            Self::G16 => 16,
        }
    }

    /// Parse a `PMU_RANGE` register value
    #[must_use]
    pub const fn from_code(code: u8) -> Option<Self> {
        match code & 0x0F {
            0x03 => Some(Self::G2),
            0x05 => Some(Self::G4),
            0x08 => Some(Self::G8),
            0x0C => Some(Self::G16),
            _ => None,
        }
    }
}

/// Accelerometer configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AccelConfig {
    /// g-range
    pub range: AccelRange,
    /// Bypass the data filter (`data_high_bw`)
    pub unfiltered: bool,
    /// Disable MSB/LSB shadowing (`shadow_dis`)
    pub shadow_disabled: bool,
}

impl Default for AccelConfig {
    fn default() -> Self {
        Self {
            range: AccelRange::G2,
            unfiltered: false,
            shadow_disabled: false,
        }
    }
}

impl AccelConfig {
    /// Payload for `PMU_RANGE`
    #[must_use]
    pub const fn pmu_range(&self) -> u8 {
        self.range.code()
    }

    /// Payload for `ACCD_HBW`
    #[must_use]
    pub const fn accd_hbw(&self) -> u8 {
        hbw_payload(self.unfiltered, self.shadow_disabled)
    }
}
