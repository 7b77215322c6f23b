//! Typed configuration for each BMX055 die
//!
//! Each config renders the raw payload bytes written by the driver's
//! `configure_*` calls:
//! - Accelerometer: `PMU_RANGE`, `ACCD_HBW`
//! - Gyroscope: `RANGE`, `BW`, `LPM1`, `RATE_HBW`
//! - Magnetometer: power control, operation mode
//!
//! The driver never converts readings to physical units; these types only
//! describe what gets written.

pub mod accelerometer;
pub mod gyroscope;
pub mod magnetometer;

// Re-export main types
pub use accelerometer::{AccelConfig, AccelRange};
pub use gyroscope::{GyroBandwidth, GyroConfig, GyroPowerMode, GyroRange};
pub use magnetometer::{MagConfig, MagDataRate, MagOpMode};

/// `data_high_bw` bit of `ACCD_HBW` / `RATE_HBW`: unfiltered output
pub(crate) const HBW_DATA_HIGH_BW: u8 = 1 << 7;

/// `shadow_dis` bit of `ACCD_HBW` / `RATE_HBW`: disable MSB/LSB shadowing
pub(crate) const HBW_SHADOW_DIS: u8 = 1 << 6;

/// Render the shared high-bandwidth register layout
pub(crate) const fn hbw_payload(unfiltered: bool, shadow_disabled: bool) -> u8 {
    let mut payload = 0;
    if unfiltered {
        payload |= HBW_DATA_HIGH_BW;
    }
    if shadow_disabled {
        payload |= HBW_SHADOW_DIS;
    }
    payload
}
