use bitflags::bitflags;

bitflags! {
    /// Bit layout of the F register.
    ///
    /// - bit 7: Z (zero)
    /// - bit 6: N (subtract)
    /// - bit 5: H (half carry)
    /// - bit 4: C (carry)
    /// - bits 0–3 are always zero.
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub struct FlagBits: u8 {
        const Z = 1 << 7;
        const N = 1 << 6;
        const H = 1 << 5;
        const C = 1 << 4;
    }
}

/// The four CPU flags as independent booleans.
///
/// This is the only place that knows how the flags are packed into F;
/// the execution engine works on the booleans.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Flags {
    pub zero: bool,
    pub subtract: bool,
    pub half_carry: bool,
    pub carry: bool,
}

impl Flags {
    pub const fn new(zero: bool, subtract: bool, half_carry: bool, carry: bool) -> Self {
        Self {
            zero,
            subtract,
            half_carry,
            carry,
        }
    }

    /// Pack into an F register value. The low nibble is always zero.
    pub fn encode(self) -> u8 {
        let mut bits = FlagBits::empty();
        bits.set(FlagBits::Z, self.zero);
        bits.set(FlagBits::N, self.subtract);
        bits.set(FlagBits::H, self.half_carry);
        bits.set(FlagBits::C, self.carry);
        bits.bits()
    }

    /// Unpack an F register value, ignoring the unused low nibble.
    pub fn decode(value: u8) -> Self {
        let bits = FlagBits::from_bits_truncate(value);
        Self {
            zero: bits.contains(FlagBits::Z),
            subtract: bits.contains(FlagBits::N),
            half_carry: bits.contains(FlagBits::H),
            carry: bits.contains(FlagBits::C),
        }
    }
}

impl From<u8> for Flags {
    fn from(value: u8) -> Self {
        Flags::decode(value)
    }
}

impl From<Flags> for u8 {
    fn from(flags: Flags) -> Self {
        flags.encode()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_combinations_round_trip() {
        for n in 0u8..16 {
            let flags = Flags::new(n & 8 != 0, n & 4 != 0, n & 2 != 0, n & 1 != 0);
            assert_eq!(Flags::decode(flags.encode()), flags);
            assert_eq!(flags.encode() & 0x0F, 0);
        }
    }

    #[test]
    fn bit_positions_match_hardware_layout() {
        assert_eq!(Flags::new(true, false, false, false).encode(), 0x80);
        assert_eq!(Flags::new(false, true, false, false).encode(), 0x40);
        assert_eq!(Flags::new(false, false, true, false).encode(), 0x20);
        assert_eq!(Flags::new(false, false, false, true).encode(), 0x10);
    }

    #[test]
    fn decode_masks_unused_bits() {
        assert_eq!(Flags::decode(0x0F), Flags::default());
        assert_eq!(Flags::decode(0xB7), Flags::new(true, false, true, true));
    }
}
