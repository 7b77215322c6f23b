//! Bus and power collaborators for the BMX055
//!
//! Every die is reached through its own `device-driver` register interface
//! bound to that die's I2C address. All three dies normally sit on one physical
//! bus; share it with a bus-sharing wrapper such as
//! `embedded_hal_bus::i2c::RefCellDevice` and hand one wrapper to each
//! [`I2cInterface`].
//!
//! Bus timing (baud rate and timeout) belongs to the HAL's I2C peripheral and is
//! set when that peripheral is constructed.

use device_driver::RegisterInterface;
use embedded_hal::i2c::{Operation, SevenBitAddress};

/// A register interface bound to one device address
///
/// The driver reports the address of each die through this trait, so the
/// address it shows is always the one its transactions go to.
pub trait BusAddress {
    /// 7-bit address every transaction of this interface targets
    fn bus_address(&self) -> SevenBitAddress;
}

/// I2C interface for one BMX055 die
pub struct I2cInterface<I2C> {
    i2c: I2C,
    address: SevenBitAddress,
}

impl<I2C> I2cInterface<I2C> {
    /// Create a new I2C interface for the die at `address`
    ///
    /// # Arguments
    /// * `i2c` - The I2C peripheral (or a shared-bus device)
    /// * `address` - 7-bit address of the die, e.g. [`crate::ACCEL_ADDRESS_DEFAULT`]
    ///
    /// # Example
    /// ```ignore
    /// let bus = RefCell::new(i2c);
    /// let accel = I2cInterface::new(RefCellDevice::new(&bus), bmx055::ACCEL_ADDRESS_DEFAULT);
    /// let gyro = I2cInterface::new(RefCellDevice::new(&bus), bmx055::GYRO_ADDRESS_DEFAULT);
    /// ```
    pub const fn new(i2c: I2C, address: SevenBitAddress) -> Self {
        Self { i2c, address }
    }

    /// Address this interface talks to
    pub const fn address(&self) -> SevenBitAddress {
        self.address
    }

    /// Consume the interface and return the I2C peripheral
    pub fn release(self) -> I2C {
        self.i2c
    }
}

impl<I2C, E> RegisterInterface for I2cInterface<I2C>
where
    I2C: embedded_hal::i2c::I2c<Error = E>,
{
    type Error = E;
    type AddressType = u8;

    fn read_register(
        &mut self,
        address: Self::AddressType,
        _size_bits: u32,
        read_data: &mut [u8],
    ) -> Result<(), Self::Error> {
        self.i2c.write_read(self.address, &[address], read_data)
    }

    fn write_register(
        &mut self,
        address: Self::AddressType,
        _size_bits: u32,
        write_data: &[u8],
    ) -> Result<(), Self::Error> {
        // Adjacent writes go out as one bus write: register, then payload
        self.i2c.transaction(
            self.address,
            &mut [Operation::Write(&[address]), Operation::Write(write_data)],
        )
    }
}

impl<I2C> BusAddress for I2cInterface<I2C> {
    fn bus_address(&self) -> SevenBitAddress {
        self.address
    }
}

/// Board power hooks invoked before every bus transaction
///
/// Both calls must be idempotent. The driver does not remember that it has
/// already scaled the supply, since another part of the system may have changed
/// the power domain in between.
pub trait SupplyControl {
    /// Bring the sensor supply rail to `millivolts`
    fn scale_supply_voltage(&mut self, millivolts: u16);

    /// Route and enable the I2C pins
    fn enable_bus_pins(&mut self);
}

/// [`SupplyControl`] for boards with a fixed sensor rail and dedicated I2C pins
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct NoSupplyControl;

impl SupplyControl for NoSupplyControl {
    fn scale_supply_voltage(&mut self, _millivolts: u16) {}

    fn enable_bus_pins(&mut self) {}
}

impl<S: SupplyControl + ?Sized> SupplyControl for &mut S {
    fn scale_supply_voltage(&mut self, millivolts: u16) {
        (**self).scale_supply_voltage(millivolts);
    }

    fn enable_bus_pins(&mut self) {
        (**self).enable_bus_pins();
    }
}
