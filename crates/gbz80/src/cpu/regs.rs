use super::flags::Flags;

/// 8-bit registers addressable by instructions and by the public API.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Reg8 {
    A,
    F,
    B,
    C,
    D,
    E,
    H,
    L,
}

/// 16-bit register views. `AF`, `BC`, `DE` and `HL` are pairs of 8-bit
/// registers; `SP` is a standalone 16-bit register.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Reg16 {
    AF,
    BC,
    DE,
    HL,
    SP,
}

impl Reg8 {
    pub const fn name(self) -> &'static str {
        match self {
            Reg8::A => "A",
            Reg8::F => "F",
            Reg8::B => "B",
            Reg8::C => "C",
            Reg8::D => "D",
            Reg8::E => "E",
            Reg8::H => "H",
            Reg8::L => "L",
        }
    }
}

impl Reg16 {
    pub const fn name(self) -> &'static str {
        match self {
            Reg16::AF => "AF",
            Reg16::BC => "BC",
            Reg16::DE => "DE",
            Reg16::HL => "HL",
            Reg16::SP => "SP",
        }
    }
}

/// Register file for the Game Boy CPU (LR35902).
///
/// F is not stored as a raw byte. The four flags live in `flags` and are
/// packed through [`Flags::encode`] whenever F (or AF) is read, so the low
/// nibble of F can never hold stale bits.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Registers {
    pub a: u8,
    pub b: u8,
    pub c: u8,
    pub d: u8,
    pub e: u8,
    pub h: u8,
    pub l: u8,
    pub flags: Flags,
    pub sp: u16,
    pub pc: u16,
}

impl Registers {
    #[inline]
    pub fn f(&self) -> u8 {
        self.flags.encode()
    }

    #[inline]
    pub fn set_f(&mut self, value: u8) {
        self.flags = Flags::decode(value);
    }

    /// A in the high byte, packed flags in the low byte.
    #[inline]
    pub fn af(&self) -> u16 {
        u16::from_be_bytes([self.a, self.f()])
    }

    #[inline]
    pub fn set_af(&mut self, value: u16) {
        let [a, f] = value.to_be_bytes();
        self.a = a;
        // POP AF can carry garbage in bits 0-3; decoding drops it.
        self.set_f(f);
    }

    pub fn bc(&self) -> u16 {
        u16::from_be_bytes([self.b, self.c])
    }

    pub fn set_bc(&mut self, value: u16) {
        let [b, c] = value.to_be_bytes();
        self.b = b;
        self.c = c;
    }

    pub fn de(&self) -> u16 {
        u16::from_be_bytes([self.d, self.e])
    }

    pub fn set_de(&mut self, value: u16) {
        let [d, e] = value.to_be_bytes();
        self.d = d;
        self.e = e;
    }

    /// HL doubles as the memory pointer for `(HL)` operands.
    pub fn hl(&self) -> u16 {
        u16::from_be_bytes([self.h, self.l])
    }

    pub fn set_hl(&mut self, value: u16) {
        let [h, l] = value.to_be_bytes();
        self.h = h;
        self.l = l;
    }

    /// Read any 8-bit register by selector. F comes back with its low
    /// nibble clear.
    pub fn get8(&self, reg: Reg8) -> u8 {
        match reg {
            Reg8::A => self.a,
            Reg8::F => self.f(),
            Reg8::B => self.b,
            Reg8::C => self.c,
            Reg8::D => self.d,
            Reg8::E => self.e,
            Reg8::H => self.h,
            Reg8::L => self.l,
        }
    }

    pub fn set8(&mut self, reg: Reg8, value: u8) {
        match reg {
            Reg8::A => self.a = value,
            Reg8::F => self.set_f(value),
            Reg8::B => self.b = value,
            Reg8::C => self.c = value,
            Reg8::D => self.d = value,
            Reg8::E => self.e = value,
            Reg8::H => self.h = value,
            Reg8::L => self.l = value,
        }
    }

    pub fn get16(&self, reg: Reg16) -> u16 {
        match reg {
            Reg16::AF => self.af(),
            Reg16::BC => self.bc(),
            Reg16::DE => self.de(),
            Reg16::HL => self.hl(),
            Reg16::SP => self.sp,
        }
    }

    pub fn set16(&mut self, reg: Reg16, value: u16) {
        match reg {
            Reg16::AF => self.set_af(value),
            Reg16::BC => self.set_bc(value),
            Reg16::DE => self.set_de(value),
            Reg16::HL => self.set_hl(value),
            Reg16::SP => self.sp = value,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pair_writes_split_into_high_and_low_halves() {
        let mut regs = Registers::default();
        for value in 0..=u16::MAX {
            regs.set_bc(value);
            assert_eq!(u16::from_be_bytes([regs.b, regs.c]), value);
            regs.set16(Reg16::DE, value);
            assert_eq!(regs.get8(Reg8::D), (value >> 8) as u8);
            assert_eq!(regs.get8(Reg8::E), value as u8);
            regs.set_hl(value);
            assert_eq!(regs.get16(Reg16::HL), value);
        }
    }

    #[test]
    fn halves_reassemble_into_pair() {
        let mut regs = Registers::default();
        regs.set8(Reg8::B, 0xBE);
        regs.set8(Reg8::C, 0xEF);
        assert_eq!(regs.bc(), 0xBEEF);
        regs.h = 0x12;
        regs.l = 0x34;
        assert_eq!(regs.get16(Reg16::HL), 0x1234);
    }

    #[test]
    fn af_drops_low_nibble_of_f() {
        let mut regs = Registers::default();
        regs.set_af(0x12FF);
        assert_eq!(regs.a, 0x12);
        assert_eq!(regs.f(), 0xF0);
        assert_eq!(regs.af(), 0x12F0);

        regs.set8(Reg8::F, 0x5A);
        assert_eq!(regs.get8(Reg8::F), 0x50);
    }

    #[test]
    fn sp_is_a_plain_16_bit_register() {
        let mut regs = Registers::default();
        regs.set16(Reg16::SP, 0xC0DE);
        assert_eq!(regs.sp, 0xC0DE);
        assert_eq!(regs.get16(Reg16::SP), 0xC0DE);
    }
}
