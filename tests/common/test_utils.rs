//! Test utilities and helper functions

use crate::common::mock_interface::{MockBus, MockInterface, MockSupply};
use bmx055::{Bmx055Driver, DeviceState};
use std::fmt;

/// Accelerometer address used by the mock driver
pub const ACCEL: u8 = bmx055::ACCEL_ADDRESS_DEFAULT;
/// Gyroscope address used by the mock driver
pub const GYRO: u8 = bmx055::GYRO_ADDRESS_DEFAULT;
/// Magnetometer address used by the mock driver
pub const MAG: u8 = bmx055::MAG_ADDRESS_DEFAULT;

/// Supply voltage of the accelerometer and gyroscope dies
pub const SUPPLY_MV: u16 = 3000;
/// Supply voltage of the magnetometer die, deliberately different
pub const MAG_SUPPLY_MV: u16 = 2500;

/// Driver type used throughout the tests
pub type MockDriver = Bmx055Driver<MockInterface, MockSupply>;

/// Create a mock driver for testing
/// Returns (driver, bus) where bus shares state with the driver
pub fn create_mock_driver() -> (MockDriver, MockBus) {
    let bus = MockBus::new();
    bus.set_register(ACCEL, 0x00, 0xFA);
    bus.set_register(GYRO, 0x00, 0x0F);
    bus.set_register(MAG, 0x40, 0x32);

    let driver = Bmx055Driver::new(
        DeviceState::new(bus.interface(ACCEL), SUPPLY_MV),
        DeviceState::new(bus.interface(GYRO), SUPPLY_MV),
        DeviceState::new(bus.interface(MAG), MAG_SUPPLY_MV),
        bus.supply(),
    );
    (driver, bus)
}

/// Sink that rejects every write
pub struct RejectingSink;

impl fmt::Write for RejectingSink {
    fn write_str(&mut self, _s: &str) -> fmt::Result {
        Err(fmt::Error)
    }
}
