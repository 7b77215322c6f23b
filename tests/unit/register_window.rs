//! Unit tests for register window validation

use crate::common::{ACCEL, GYRO, MAG, MockBus, create_mock_driver};
use bmx055::{BitLayout, Die, Error};

fn assert_no_traffic(bus: &MockBus) {
    assert!(
        bus.operations().is_empty(),
        "Rejected access must not touch the bus or the supply: {:?}",
        bus.operations()
    );
}

#[test]
fn test_accel_write_outside_window_rejected() {
    let (mut driver, bus) = create_mock_driver();

    let result = driver.write_register(Die::Accelerometer, 0x40, 0x03);

    assert_eq!(
        result,
        Err(Error::BadRegisterAddress {
            die: Die::Accelerometer,
            register: 0x40,
        })
    );
    assert_no_traffic(&bus);
}

#[test]
fn test_accel_and_gyro_window_edges() {
    let (mut driver, bus) = create_mock_driver();

    driver.write_register(Die::Accelerometer, 0x00, 0x11).unwrap();
    driver.write_register(Die::Accelerometer, 0x3F, 0x22).unwrap();
    driver.write_register(Die::Gyroscope, 0x3F, 0x33).unwrap();

    assert_eq!(bus.get_register(ACCEL, 0x00), 0x11);
    assert_eq!(bus.get_register(ACCEL, 0x3F), 0x22);
    assert_eq!(bus.get_register(GYRO, 0x3F), 0x33);

    bus.clear_operations();
    assert!(driver.write_register(Die::Gyroscope, 0x40, 0).is_err());
    assert!(driver.write_register(Die::Gyroscope, 0xFF, 0).is_err());
    assert_no_traffic(&bus);
}

#[test]
fn test_mag_window_edges() {
    let (mut driver, bus) = create_mock_driver();

    driver.write_register(Die::Magnetometer, 0x40, 0x01).unwrap();
    driver.write_register(Die::Magnetometer, 0x52, 0x02).unwrap();
    assert_eq!(bus.get_register(MAG, 0x52), 0x02);

    bus.clear_operations();
    for register in [0x00, 0x3F, 0x53, 0x7F] {
        let result = driver.write_register(Die::Magnetometer, register, 0);
        assert!(
            matches!(result, Err(Error::BadRegisterAddress { register: r, .. }) if r == register),
            "register {register:#04x} should be rejected"
        );
    }
    assert_no_traffic(&bus);
}

#[test]
fn test_read_channel_outside_window_rejected() {
    let (mut driver, bus) = create_mock_driver();

    let result = driver.read_channel(Die::Magnetometer, 0x02, BitLayout::BITS_13);
    assert_eq!(
        result,
        Err(Error::BadRegisterAddress {
            die: Die::Magnetometer,
            register: 0x02,
        })
    );

    let result = driver.read_register(Die::Accelerometer, 0x42, 2);
    assert!(matches!(result, Err(Error::BadRegisterAddress { .. })));
    assert_no_traffic(&bus);
}

#[test]
fn test_read_register_longer_than_raw_buffer() {
    let (mut driver, bus) = create_mock_driver();

    let result = driver.read_register(Die::Accelerometer, 0x02, 3);
    assert_eq!(
        result,
        Err(Error::BufferTooSmall {
            required: 3,
            available: 2,
        })
    );
    assert_no_traffic(&bus);
}

#[test]
fn test_bad_address_is_not_a_bus_error() {
    let (mut driver, _bus) = create_mock_driver();

    let error = driver
        .write_register(Die::Accelerometer, 0x40, 0)
        .unwrap_err();
    assert!(!error.is_bus());
}

#[test]
fn test_channel_running_past_window_end_rejected() {
    let (mut driver, bus) = create_mock_driver();

    // A 12-bit channel at 0x3F would also read 0x40
    let result = driver.read_channel(Die::Accelerometer, 0x3F, BitLayout::BITS_12);
    assert_eq!(
        result,
        Err(Error::BadRegisterAddress {
            die: Die::Accelerometer,
            register: 0x40,
        })
    );

    let result = driver.read_channel(Die::Magnetometer, 0x52, BitLayout::BITS_13);
    assert_eq!(
        result,
        Err(Error::BadRegisterAddress {
            die: Die::Magnetometer,
            register: 0x53,
        })
    );

    let result = driver.read_register(Die::Magnetometer, 0x52, 2);
    assert!(matches!(
        result,
        Err(Error::BadRegisterAddress { register: 0x53, .. })
    ));
    assert_no_traffic(&bus);
}

#[test]
fn test_span_ending_on_window_edge_accepted() {
    let (mut driver, bus) = create_mock_driver();
    bus.set_register(ACCEL, 0x3F, 0x7F);

    let reading = driver
        .read_channel(Die::Accelerometer, 0x3F, BitLayout::BITS_8)
        .unwrap();
    assert_eq!(reading.value(), Some(127));

    assert_eq!(driver.read_register(Die::Magnetometer, 0x51, 2).unwrap().len(), 2);
    assert_eq!(driver.read_register(Die::Gyroscope, 0x3E, 2).unwrap().len(), 2);
}
