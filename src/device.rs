//! High-level driver API for the BMX055
//!
//! The driver owns one [`DeviceState`] per die and the board's
//! [`SupplyControl`]. Every register access:
//!
//! 1. checks every register the access covers against the die's window,
//! 2. scales the supply to the die's operating voltage and enables the bus pins,
//! 3. issues one blocking transaction through the die's register interface.
//!
//! Failures stay local to the access that caused them. Multi-channel reads
//! report a failed channel as [`ChannelReading::Failed`] and carry on;
//! multi-register configuration attempts every write and reports the first
//! error.

use core::fmt;

use device_driver::RegisterInterface;
use embedded_hal::i2c::SevenBitAddress;

use crate::channels::{ChannelReading, Readings, Sample};
use crate::codec::BitLayout;
use crate::interface::{BusAddress, I2cInterface, SupplyControl};
use crate::output::{self, OutputMode};
use crate::registers::{accel, gyro, mag};
use crate::sensors::{AccelConfig, GyroConfig, MagConfig};
use crate::{
    ACCEL_ADDRESS_DEFAULT, Die, Error, GYRO_ADDRESS_DEFAULT, MAG_ADDRESS_DEFAULT,
};

/// Size of the per-die raw receive buffer
pub const RAW_BUFFER_LEN: usize = 2;

/// Per-die state: bus interface, supply voltage and last raw bytes
///
/// The die's bus address lives in the interface. [`DeviceState::address`]
/// reads it back from there.
pub struct DeviceState<I> {
    interface: I,
    supply_millivolts: u16,
    buffer: [u8; RAW_BUFFER_LEN],
    received: usize,
}

impl<I> DeviceState<I> {
    /// Create the state for one die
    ///
    /// # Arguments
    /// * `interface` - Register interface bound to the die's bus address
    /// * `supply_millivolts` - Operating voltage applied before every transaction
    pub const fn new(interface: I, supply_millivolts: u16) -> Self {
        Self {
            interface,
            supply_millivolts,
            buffer: [0; RAW_BUFFER_LEN],
            received: 0,
        }
    }

    /// Operating supply voltage in millivolts
    pub const fn supply_millivolts(&self) -> u16 {
        self.supply_millivolts
    }

    /// Change the operating supply voltage used for subsequent transactions
    pub fn set_supply_millivolts(&mut self, millivolts: u16) {
        self.supply_millivolts = millivolts;
    }

    /// Bytes received by the most recent read, in bus order (LSB first)
    ///
    /// Empty before the first read and after a failed one.
    pub fn raw_buffer(&self) -> &[u8] {
        &self.buffer[..self.received]
    }

    /// Consume the state and return the register interface
    pub fn release(self) -> I {
        self.interface
    }
}

impl<I2C> DeviceState<I2cInterface<I2C>> {
    /// Create the state for a die at `address` on an I2C bus
    pub const fn new_i2c(i2c: I2C, address: SevenBitAddress, supply_millivolts: u16) -> Self {
        Self::new(I2cInterface::new(i2c, address), supply_millivolts)
    }
}

impl<I: BusAddress> DeviceState<I> {
    /// 7-bit bus address of the die
    pub fn address(&self) -> SevenBitAddress {
        self.interface.bus_address()
    }
}

/// Main driver for the BMX055
pub struct Bmx055Driver<I, S> {
    accel: DeviceState<I>,
    gyro: DeviceState<I>,
    mag: DeviceState<I>,
    supply: S,
}

impl<I2C, S> Bmx055Driver<I2cInterface<I2C>, S>
where
    I2C: embedded_hal::i2c::I2c,
    S: SupplyControl,
{
    /// Create a driver for a package strapped to the default addresses
    ///
    /// Each argument is a handle to the shared bus, e.g. an
    /// `embedded_hal_bus::i2c::RefCellDevice`. All dies run at
    /// `supply_millivolts`.
    ///
    /// # Example
    /// ```ignore
    /// let bus = RefCell::new(i2c);
    /// let mut imu = Bmx055Driver::new_i2c(
    ///     RefCellDevice::new(&bus),
    ///     RefCellDevice::new(&bus),
    ///     RefCellDevice::new(&bus),
    ///     NoSupplyControl,
    ///     3000,
    /// );
    /// ```
    pub const fn new_i2c(
        accel: I2C,
        gyro: I2C,
        mag: I2C,
        supply: S,
        supply_millivolts: u16,
    ) -> Self {
        Self::new(
            DeviceState::new_i2c(accel, ACCEL_ADDRESS_DEFAULT, supply_millivolts),
            DeviceState::new_i2c(gyro, GYRO_ADDRESS_DEFAULT, supply_millivolts),
            DeviceState::new_i2c(mag, MAG_ADDRESS_DEFAULT, supply_millivolts),
            supply,
        )
    }
}

impl<I, S> Bmx055Driver<I, S> {
    /// Create a driver from the three per-die states
    pub const fn new(
        accel: DeviceState<I>,
        gyro: DeviceState<I>,
        mag: DeviceState<I>,
        supply: S,
    ) -> Self {
        Self {
            accel,
            gyro,
            mag,
            supply,
        }
    }

    /// State of one die
    pub const fn state(&self, die: Die) -> &DeviceState<I> {
        match die {
            Die::Accelerometer => &self.accel,
            Die::Gyroscope => &self.gyro,
            Die::Magnetometer => &self.mag,
        }
    }

    /// Mutable state of one die
    pub const fn state_mut(&mut self, die: Die) -> &mut DeviceState<I> {
        match die {
            Die::Accelerometer => &mut self.accel,
            Die::Gyroscope => &mut self.gyro,
            Die::Magnetometer => &mut self.mag,
        }
    }

    /// Consume the driver and return the die states and supply control
    pub fn release(self) -> (DeviceState<I>, DeviceState<I>, DeviceState<I>, S) {
        (self.accel, self.gyro, self.mag, self.supply)
    }

    fn split(&mut self, die: Die) -> (&mut DeviceState<I>, &mut S) {
        let state = match die {
            Die::Accelerometer => &mut self.accel,
            Die::Gyroscope => &mut self.gyro,
            Die::Magnetometer => &mut self.mag,
        };
        (state, &mut self.supply)
    }
}

impl<I, S> Bmx055Driver<I, S>
where
    I: RegisterInterface<AddressType = u8>,
    S: SupplyControl,
{
    /// Check that `len` registers starting at `register` all lie in the window
    ///
    /// Reports the first register outside the window.
    fn check_registers(die: Die, register: u8, len: usize) -> Result<(), Error<I::Error>> {
        let end = *die.register_window().end();
        let rejected = if !die.accepts(register) {
            Some(register)
        } else if usize::from(register) + len.saturating_sub(1) > usize::from(end) {
            Some(end.saturating_add(1))
        } else {
            None
        };

        match rejected {
            None => Ok(()),
            Some(register) => {
                #[cfg(feature = "defmt")]
                defmt::warn!("{} register {=u8:#x} outside window", die, register);
                Err(Error::BadRegisterAddress { die, register })
            }
        }
    }

    fn power_up(state: &DeviceState<I>, supply: &mut S) {
        supply.scale_supply_voltage(state.supply_millivolts);
        supply.enable_bus_pins();
    }

    /// Receive `len` bytes into the die's raw buffer; `len <= RAW_BUFFER_LEN`
    fn receive(&mut self, die: Die, register: u8, len: usize) -> Result<(), I::Error> {
        let (state, supply) = self.split(die);
        Self::power_up(state, supply);

        #[allow(clippy::cast_possible_truncation)]
        let size_bits = (len * 8) as u32;
        state.received = 0;
        state
            .interface
            .read_register(register, size_bits, &mut state.buffer[..len])?;
        state.received = len;
        Ok(())
    }

    /// Read one channel whose register is already known to be in range
    fn fetch(&mut self, die: Die, register: u8, layout: BitLayout) -> ChannelReading {
        let len = layout.byte_count();
        match self.receive(die, register, len) {
            Ok(()) => Sample::from_bus_bytes(self.state(die).raw_buffer(), layout)
                .map_or(ChannelReading::Failed, ChannelReading::Ok),
            Err(_) => {
                #[cfg(feature = "defmt")]
                defmt::warn!("{} read of {=u8:#x} failed", die, register);
                ChannelReading::Failed
            }
        }
    }

    /// Write a single configuration register
    ///
    /// # Errors
    ///
    /// Returns [`Error::BadRegisterAddress`] without touching the bus if
    /// `register` is outside the die's window, or [`Error::Bus`] if the
    /// transaction fails.
    pub fn write_register(
        &mut self,
        die: Die,
        register: u8,
        payload: u8,
    ) -> Result<(), Error<I::Error>> {
        Self::check_registers(die, register, 1)?;

        let (state, supply) = self.split(die);
        Self::power_up(state, supply);
        state.interface.write_register(register, 8, &[payload])?;

        #[cfg(feature = "defmt")]
        defmt::debug!("{} wrote {=u8:#x} = {=u8:#x}", die, register, payload);
        Ok(())
    }

    /// Read `len` consecutive registers starting at `register`
    ///
    /// The bytes are also kept in the die's raw buffer until the next read.
    ///
    /// # Errors
    ///
    /// Returns [`Error::BufferTooSmall`] if `len` exceeds [`RAW_BUFFER_LEN`],
    /// [`Error::BadRegisterAddress`] if any of the `len` registers is outside
    /// the die's window, or [`Error::Bus`] if the transaction fails.
    pub fn read_register(
        &mut self,
        die: Die,
        register: u8,
        len: usize,
    ) -> Result<&[u8], Error<I::Error>> {
        if len > RAW_BUFFER_LEN {
            return Err(Error::BufferTooSmall {
                required: len,
                available: RAW_BUFFER_LEN,
            });
        }
        Self::check_registers(die, register, len)?;

        self.receive(die, register, len)?;
        Ok(self.state(die).raw_buffer())
    }

    /// Read the die's chip ID register
    ///
    /// Expected values are given by [`Die::chip_id`]. The magnetometer only
    /// answers once it has left suspend mode.
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn read_chip_id(&mut self, die: Die) -> Result<u8, Error<I::Error>> {
        let register = match die {
            Die::Accelerometer => accel::CHIP_ID,
            Die::Gyroscope => gyro::CHIP_ID,
            Die::Magnetometer => mag::CHIP_ID,
        };
        let bytes = self.read_register(die, register, 1)?;
        Ok(bytes[0])
    }

    /// Read and decode a single output channel
    ///
    /// A failed bus transaction is not an error here: it yields
    /// [`ChannelReading::Failed`] so the caller can print a placeholder.
    ///
    /// # Errors
    ///
    /// Returns [`Error::BadRegisterAddress`] (with no bus access) if any
    /// register the channel covers is outside the die's window.
    pub fn read_channel(
        &mut self,
        die: Die,
        register: u8,
        layout: BitLayout,
    ) -> Result<ChannelReading, Error<I::Error>> {
        Self::check_registers(die, register, layout.byte_count())?;
        Ok(self.fetch(die, register, layout))
    }

    /// Read every output channel of a die, in reporting order
    ///
    /// Each channel is an independent transaction; a failure on one does not
    /// stop the others.
    pub fn read_channels(&mut self, die: Die) -> Readings {
        let mut readings = Readings::new(die);
        for spec in die.channels() {
            readings.push(self.fetch(die, spec.register, spec.layout));
        }
        readings
    }

    /// Read every channel of a die and print it to `sink`
    ///
    /// Emits one ` <value>,` token per channel, ` ----,` for failed channels.
    ///
    /// # Errors
    ///
    /// Returns an error only if the sink rejects a write.
    pub fn print_channels<W: fmt::Write>(
        &mut self,
        die: Die,
        mode: OutputMode,
        sink: &mut W,
    ) -> fmt::Result {
        let readings = self.read_channels(die);
        output::write_readings(sink, readings.as_slice(), mode)
    }

    /// Read every channel of a die and pack it into `buffer`
    ///
    /// Each value is written as a big-endian `i16`; a failed channel is
    /// written as two zero bytes. Returns the number of bytes written.
    ///
    /// # Errors
    ///
    /// Returns [`Error::BufferTooSmall`] before any bus access if `buffer`
    /// cannot hold [`Die::packed_len`] bytes.
    pub fn pack_channels(&mut self, die: Die, buffer: &mut [u8]) -> Result<usize, Error<I::Error>> {
        let too_small = Error::BufferTooSmall {
            required: die.packed_len(),
            available: buffer.len(),
        };
        if buffer.len() < die.packed_len() {
            return Err(too_small);
        }

        let readings = self.read_channels(die);
        output::pack_readings(readings.as_slice(), buffer).ok_or(too_small)
    }

    /// Write several registers of one die, attempting every write
    ///
    /// Returns the first error encountered after all writes were attempted.
    fn write_all(&mut self, die: Die, writes: &[(u8, u8)]) -> Result<(), Error<I::Error>> {
        let mut first_error = None;
        for &(register, payload) in writes {
            if let Err(error) = self.write_register(die, register, payload) {
                #[cfg(feature = "defmt")]
                defmt::warn!("{} write of {=u8:#x} failed", die, register);
                if first_error.is_none() {
                    first_error = Some(error);
                }
            }
        }

        match first_error {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }

    /// Write the accelerometer's `PMU_RANGE` and `ACCD_HBW` registers
    ///
    /// Both writes are attempted even if the first fails.
    ///
    /// # Errors
    ///
    /// Returns the first error if either write fails.
    pub fn configure_accelerometer_raw(
        &mut self,
        pmu_range: u8,
        accd_hbw: u8,
    ) -> Result<(), Error<I::Error>> {
        self.write_all(
            Die::Accelerometer,
            &[(accel::PMU_RANGE, pmu_range), (accel::ACCD_HBW, accd_hbw)],
        )
    }

    /// Configure the accelerometer
    ///
    /// # Errors
    ///
    /// Returns the first error if any register write fails.
    pub fn configure_accelerometer(&mut self, config: AccelConfig) -> Result<(), Error<I::Error>> {
        self.configure_accelerometer_raw(config.pmu_range(), config.accd_hbw())
    }

    /// Write the gyroscope's `RANGE`, `BW`, `LPM1` and `RATE_HBW` registers
    ///
    /// All four writes are attempted regardless of earlier failures.
    ///
    /// # Errors
    ///
    /// Returns the first error if any write fails.
    pub fn configure_gyroscope_raw(
        &mut self,
        range: u8,
        bandwidth: u8,
        lpm1: u8,
        rate_hbw: u8,
    ) -> Result<(), Error<I::Error>> {
        self.write_all(
            Die::Gyroscope,
            &[
                (gyro::RANGE, range),
                (gyro::BW, bandwidth),
                (gyro::LPM1, lpm1),
                (gyro::RATE_HBW, rate_hbw),
            ],
        )
    }

    /// Configure the gyroscope
    ///
    /// # Errors
    ///
    /// Returns the first error if any register write fails.
    pub fn configure_gyroscope(&mut self, config: GyroConfig) -> Result<(), Error<I::Error>> {
        let [range, bandwidth, lpm1, rate_hbw] = config.payloads();
        self.configure_gyroscope_raw(range, bandwidth, lpm1, rate_hbw)
    }

    /// Write the magnetometer's power control and operation mode registers
    ///
    /// Both writes are attempted even if the first fails.
    ///
    /// # Errors
    ///
    /// Returns the first error if either write fails.
    pub fn configure_magnetometer_raw(
        &mut self,
        power_ctrl: u8,
        op_mode: u8,
    ) -> Result<(), Error<I::Error>> {
        self.write_all(
            Die::Magnetometer,
            &[(mag::POWER_CTRL, power_ctrl), (mag::OP_MODE, op_mode)],
        )
    }

    /// Configure the magnetometer
    ///
    /// # Errors
    ///
    /// Returns the first error if any register write fails.
    pub fn configure_magnetometer(&mut self, config: MagConfig) -> Result<(), Error<I::Error>> {
        self.configure_magnetometer_raw(config.power_ctrl(), config.op_mode())
    }
}
