//! Magnetometer configuration
//!
//! The magnetometer die powers up in suspend mode. Setting the power control
//! bit moves it to sleep mode, after which the operation mode register selects
//! normal, forced or sleep operation and the output data rate.

/// Power control bit of the power control register
const POWER_CONTROL_BIT: u8 = 1 << 0;

/// Magnetometer output data rate in normal mode (operation mode bits 5:3)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MagDataRate {
    /// 10 Hz (default)
    Hz10 = 0,
    /// 2 Hz
    Hz2 = 1,
    /// 6 Hz
    Hz6 = 2,
    /// 8 Hz
    Hz8 = 3,
    /// 15 Hz
    Hz15 = 4,
    /// 20 Hz
    Hz20 = 5,
    /// 25 Hz
    Hz25 = 6,
    /// 30 Hz
    Hz30 = 7,
}

impl MagDataRate {
    /// Rate in Hz
    #[must_use]
    pub const fn hz(self) -> u8 {
        match self {
            Self::Hz10 => 10,
            Self::Hz2 => 2,
            Self::Hz6 => 6,
            Self::Hz8 => 8,
            Self::Hz15 => 15,
            Self::Hz20 => 20,
            Self::Hz25 => 25,
            Self::Hz30 => 30,
        }
    }
}

/// Magnetometer operation mode (operation mode bits 2:1)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MagOpMode {
    /// Continuous measurement at the configured data rate
    Normal = 0b00,
    /// Single measurement, then back to sleep
    Forced = 0b01,
    /// Sleep
    Sleep = 0b11,
}

/// Magnetometer configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct MagConfig {
    /// Leave suspend mode
    pub powered: bool,
    /// Output data rate
    pub data_rate: MagDataRate,
    /// Operation mode
    pub mode: MagOpMode,
}

impl Default for MagConfig {
    fn default() -> Self {
        Self {
            powered: true,
            data_rate: MagDataRate::Hz10,
            mode: MagOpMode::Normal,
        }
    }
}

impl MagConfig {
    /// Payload for the power control register
    #[must_use]
    pub const fn power_ctrl(&self) -> u8 {
        if self.powered { POWER_CONTROL_BIT } else { 0 }
    }

    /// Payload for the operation mode register
    #[must_use]
    pub const fn op_mode(&self) -> u8 {
        ((self.data_rate as u8) << 3) | ((self.mode as u8) << 1)
    }
}
