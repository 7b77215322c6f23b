//! Unit tests for communication failures during channel sequences

use crate::common::{ACCEL, GYRO, MAG, MockError, Operation, create_mock_driver};
use bmx055::registers::{accel, gyro, mag};
use bmx055::{BitLayout, Channel, ChannelReading, Die, Error};

#[test]
fn test_every_read_fails_sequence_completes() {
    let (mut driver, bus) = create_mock_driver();
    bus.fail_all_reads(true);

    let readings = driver.read_channels(Die::Accelerometer);

    assert_eq!(readings.len(), 4);
    assert_eq!(readings.failures(), 4);
    assert!(readings.as_slice().iter().all(ChannelReading::is_failed));

    // Every channel was still attempted
    let attempts = bus
        .bus_operations()
        .into_iter()
        .filter(|op| matches!(op, Operation::Failed { device, .. } if *device == ACCEL))
        .count();
    assert_eq!(attempts, 4);
}

#[test]
fn test_single_channel_failure_is_isolated() {
    let (mut driver, bus) = create_mock_driver();

    bus.set_channel(MAG, mag::X_LSB, BitLayout::BITS_13, 10);
    bus.set_channel(MAG, mag::Y_LSB, BitLayout::BITS_13, 20);
    bus.set_channel(MAG, mag::Z_LSB, BitLayout::BITS_15, 30);
    bus.set_channel(MAG, mag::RHALL_LSB, BitLayout::BITS_14, 40);
    bus.fail_register(MAG, mag::Y_LSB);

    let readings = driver.read_channels(Die::Magnetometer);

    assert_eq!(readings.get(Channel::X).and_then(|r| r.value()), Some(10));
    assert_eq!(readings.get(Channel::Y), Some(ChannelReading::Failed));
    assert_eq!(readings.get(Channel::Z).and_then(|r| r.value()), Some(30));
    assert_eq!(readings.get(Channel::Rhall).and_then(|r| r.value()), Some(40));
}

#[test]
fn test_read_channel_failure_is_a_reading_not_an_error() {
    let (mut driver, bus) = create_mock_driver();
    bus.fail_next_read();

    let result = driver.read_channel(Die::Gyroscope, gyro::RATE_Z_LSB, BitLayout::BITS_16);
    assert_eq!(result, Ok(ChannelReading::Failed));
}

#[test]
fn test_read_register_failure_propagates() {
    let (mut driver, bus) = create_mock_driver();
    bus.fail_next_read();

    let result = driver.read_register(Die::Accelerometer, accel::ACCD_TEMP, 1);
    assert_eq!(result, Err(Error::Bus(MockError::Communication)));
}

#[test]
fn test_read_failure_recovery() {
    let (mut driver, bus) = create_mock_driver();

    bus.set_channel(GYRO, gyro::RATE_X_LSB, BitLayout::BITS_16, -500);
    bus.fail_all_reads(true);
    assert_eq!(driver.read_channels(Die::Gyroscope).failures(), 3);

    bus.clear_failures();
    let readings = driver.read_channels(Die::Gyroscope);
    assert_eq!(readings.failures(), 0);
    assert_eq!(readings.get(Channel::X).and_then(|r| r.value()), Some(-500));
}

#[test]
fn test_failure_on_one_die_leaves_others_alone() {
    let (mut driver, bus) = create_mock_driver();

    bus.set_channel(ACCEL, accel::ACCD_Z_LSB, BitLayout::BITS_12, 512);
    for spec in Die::Gyroscope.channels() {
        bus.fail_register(GYRO, spec.register);
    }

    assert_eq!(driver.read_channels(Die::Gyroscope).failures(), 3);
    let accel = driver.read_channels(Die::Accelerometer);
    assert_eq!(accel.failures(), 0);
    assert_eq!(accel.get(Channel::Z).and_then(|r| r.value()), Some(512));
}
