//! Bit layouts and sign extension for BMX055 output registers
//!
//! Every output channel is split across an LSB and an MSB register. The MSB
//! register always carries eight data bits; the LSB register carries the
//! remaining low bits in its *upper* part, with the bottom `lsb_shift` bits
//! holding flags (data-ready, self-test) or nothing at all.
//!
//! ```text
//!   12-bit accel:   MSB[7:0] LSB[7:4]          lsb_shift = 4
//!   13-bit mag X/Y: MSB[7:0] LSB[7:3]          lsb_shift = 3
//!   14-bit RHALL:   MSB[7:0] LSB[7:2]          lsb_shift = 2
//!   15-bit mag Z:   MSB[7:0] LSB[7:1]          lsb_shift = 1
//!   16-bit gyro:    MSB[7:0] LSB[7:0]          lsb_shift = 0
//!    8-bit temp:    MSB[7:0]                   lsb_shift = 8 (single byte)
//! ```

/// Bit layout of one output channel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BitLayout {
    significant_bits: u8,
    lsb_shift: u8,
}

impl BitLayout {
    /// 8-bit single-register channel (accelerometer temperature)
    pub const BITS_8: Self = Self::new(8);
    /// 12-bit channel (accelerometer X/Y/Z)
    pub const BITS_12: Self = Self::new(12);
    /// 13-bit channel (magnetometer X/Y)
    pub const BITS_13: Self = Self::new(13);
    /// 14-bit channel (magnetometer RHALL)
    pub const BITS_14: Self = Self::new(14);
    /// 15-bit channel (magnetometer Z)
    pub const BITS_15: Self = Self::new(15);
    /// Full 16-bit channel (gyroscope X/Y/Z)
    pub const BITS_16: Self = Self::new(16);

    /// Layout with `significant_bits` data bits, MSB register on top
    ///
    /// # Panics
    ///
    /// Panics (at compile time when used in a const) if `significant_bits` is
    /// not in `8..=16`.
    #[must_use]
    pub const fn new(significant_bits: u8) -> Self {
        assert!(
            significant_bits >= 8 && significant_bits <= 16,
            "a channel holds between 8 and 16 significant bits"
        );
        Self {
            significant_bits,
            lsb_shift: 16 - significant_bits,
        }
    }

    /// Number of meaningful bits before sign extension
    #[must_use]
    pub const fn significant_bits(self) -> u8 {
        self.significant_bits
    }

    /// Number of low bits of the LSB register that are not data
    #[must_use]
    pub const fn lsb_shift(self) -> u8 {
        self.lsb_shift
    }

    /// Position of the sign bit in the combined value
    #[must_use]
    pub const fn sign_bit(self) -> u8 {
        self.significant_bits - 1
    }

    /// Number of registers a read of this channel covers
    #[must_use]
    pub const fn byte_count(self) -> usize {
        if self.lsb_shift >= 8 { 1 } else { 2 }
    }

    /// Mask covering the significant bits
    #[must_use]
    pub const fn mask(self) -> u32 {
        (1u32 << self.significant_bits) - 1
    }

    /// Smallest value the channel can report
    #[must_use]
    pub const fn min_value(self) -> i32 {
        -(1i32 << self.sign_bit())
    }

    /// Largest value the channel can report
    #[must_use]
    pub const fn max_value(self) -> i32 {
        (1i32 << self.sign_bit()) - 1
    }

    /// Combine the two register bytes into the unsigned packed value
    #[must_use]
    pub const fn combine(self, msb: u8, lsb: u8) -> u32 {
        ((msb as u32) << (8 - self.lsb_shift)) | ((lsb as u32) >> self.lsb_shift)
    }

    /// Sign-extend a packed value that occupies `significant_bits` bits
    #[must_use]
    pub const fn sign_extend(self, raw: u32) -> i32 {
        if self.significant_bits == 16 {
            // Already a two's-complement i16 bit pattern
            #[allow(clippy::cast_possible_truncation)]
            let pattern = raw as u16;
            return i16::from_be_bytes(pattern.to_be_bytes()) as i32;
        }

        let bias = 1i32 << self.sign_bit();
        #[allow(clippy::cast_possible_wrap)]
        let raw = (raw & self.mask()) as i32;
        (raw ^ bias) - bias
    }
}

/// Decode one channel from its MSB and LSB register bytes
///
/// For single-byte layouts the LSB is ignored.
///
/// ```
/// use bmx055::{decode, BitLayout};
///
/// assert_eq!(decode(0x01, 0xF0, BitLayout::BITS_12), 31);
/// assert_eq!(decode(0xFF, 0xF0, BitLayout::BITS_12), -1);
/// ```
#[must_use]
pub const fn decode(msb: u8, lsb: u8, layout: BitLayout) -> i32 {
    layout.sign_extend(layout.combine(msb, lsb))
}

/// Place a signed value back into its `(msb, lsb)` register form
///
/// The non-data bits of the LSB register are left clear. Values outside the
/// layout's range are truncated to its significant bits.
#[must_use]
pub const fn encode(value: i32, layout: BitLayout) -> (u8, u8) {
    #[allow(clippy::cast_sign_loss)]
    let raw = (value as u32) & layout.mask();
    #[allow(clippy::cast_possible_truncation)]
    let msb = (raw >> (8 - layout.lsb_shift)) as u8;
    #[allow(clippy::cast_possible_truncation)]
    let lsb = if layout.lsb_shift >= 8 {
        0
    } else {
        (raw << layout.lsb_shift) as u8
    };
    (msb, lsb)
}
