//! Register map of the BMX055
//!
//! Each die answers on its own I2C address and has its own register window. The
//! accelerometer and gyroscope share the same window layout (0x00-0x3F) but are
//! different devices; the magnetometer lives at 0x40-0x52.
//!
//! Output registers are listed by their LSB address. A two-byte burst read
//! starting there returns the LSB first and the MSB second.

/// Accelerometer registers
pub mod accel {
    use core::ops::RangeInclusive;

    /// Legal register window
    pub const WINDOW: RangeInclusive<u8> = 0x00..=0x3F;

    /// `BGW_CHIPID`, reads 0xFA
    pub const CHIP_ID: u8 = 0x00;
    /// `ACCD_X_LSB`
    pub const ACCD_X_LSB: u8 = 0x02;
    /// `ACCD_X_MSB`
    pub const ACCD_X_MSB: u8 = 0x03;
    /// `ACCD_Y_LSB`
    pub const ACCD_Y_LSB: u8 = 0x04;
    /// `ACCD_Y_MSB`
    pub const ACCD_Y_MSB: u8 = 0x05;
    /// `ACCD_Z_LSB`
    pub const ACCD_Z_LSB: u8 = 0x06;
    /// `ACCD_Z_MSB`
    pub const ACCD_Z_MSB: u8 = 0x07;
    /// `ACCD_TEMP`, single byte
    pub const ACCD_TEMP: u8 = 0x08;
    /// `PMU_RANGE` - g-range selection
    pub const PMU_RANGE: u8 = 0x0F;
    /// `PMU_BW` - filter bandwidth
    pub const PMU_BW: u8 = 0x10;
    /// `ACCD_HBW` - unfiltered data and shadowing control
    pub const ACCD_HBW: u8 = 0x13;
}

/// Gyroscope registers
pub mod gyro {
    use core::ops::RangeInclusive;

    /// Legal register window
    pub const WINDOW: RangeInclusive<u8> = 0x00..=0x3F;

    /// `CHIP_ID`, reads 0x0F
    pub const CHIP_ID: u8 = 0x00;
    /// `RATE_X_LSB`
    pub const RATE_X_LSB: u8 = 0x02;
    /// `RATE_X_MSB`
    pub const RATE_X_MSB: u8 = 0x03;
    /// `RATE_Y_LSB`
    pub const RATE_Y_LSB: u8 = 0x04;
    /// `RATE_Y_MSB`
    pub const RATE_Y_MSB: u8 = 0x05;
    /// `RATE_Z_LSB`
    pub const RATE_Z_LSB: u8 = 0x06;
    /// `RATE_Z_MSB`
    pub const RATE_Z_MSB: u8 = 0x07;
    /// `RANGE` - angular rate range
    pub const RANGE: u8 = 0x0F;
    /// `BW` - filter bandwidth and output data rate
    pub const BW: u8 = 0x10;
    /// `LPM1` - power mode
    pub const LPM1: u8 = 0x11;
    /// `RATE_HBW` - unfiltered data and shadowing control
    pub const RATE_HBW: u8 = 0x13;
}

/// Magnetometer registers
pub mod mag {
    use core::ops::RangeInclusive;

    /// Legal register window
    pub const WINDOW: RangeInclusive<u8> = 0x40..=0x52;

    /// Chip ID, reads 0x32 once powered
    pub const CHIP_ID: u8 = 0x40;
    /// `DATAX_LSB`
    pub const X_LSB: u8 = 0x42;
    /// `DATAX_MSB`
    pub const X_MSB: u8 = 0x43;
    /// `DATAY_LSB`
    pub const Y_LSB: u8 = 0x44;
    /// `DATAY_MSB`
    pub const Y_MSB: u8 = 0x45;
    /// `DATAZ_LSB`
    pub const Z_LSB: u8 = 0x46;
    /// `DATAZ_MSB`
    pub const Z_MSB: u8 = 0x47;
    /// `RHALL_LSB`
    pub const RHALL_LSB: u8 = 0x48;
    /// `RHALL_MSB`
    pub const RHALL_MSB: u8 = 0x49;
    /// Power control, soft reset and SPI 3-wire mode
    pub const POWER_CTRL: u8 = 0x4B;
    /// Operation mode, output data rate and self-test
    pub const OP_MODE: u8 = 0x4C;
}
