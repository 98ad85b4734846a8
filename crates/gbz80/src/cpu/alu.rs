use super::{Cpu, Flags};
use crate::opcodes::AluOp;

impl Cpu {
    /// Apply one of the eight accumulator operations.
    pub(super) fn alu(&mut self, op: AluOp, value: u8) {
        match op {
            AluOp::Add => self.alu_add(value, false),
            AluOp::Adc => self.alu_add(value, true),
            AluOp::Sub => self.alu_sub(value, false),
            AluOp::Sbc => self.alu_sub(value, true),
            AluOp::And => self.alu_and(value),
            AluOp::Xor => self.alu_xor(value),
            AluOp::Or => self.alu_or(value),
            AluOp::Cp => self.alu_cp(value),
        }
    }

    /// `ADD A,x` / `ADC A,x` (the latter when `use_carry`).
    pub(super) fn alu_add(&mut self, value: u8, use_carry: bool) {
        let a = self.regs.a;
        let carry_in = (use_carry && self.regs.flags.carry) as u8;

        let half = (a & 0x0F) + (value & 0x0F) + carry_in;
        let full = (a as u16) + (value as u16) + (carry_in as u16);
        let result = full as u8;

        self.regs.a = result;
        self.regs.flags = Flags::new(result == 0, false, half > 0x0F, full > 0xFF);
    }

    /// `SUB x` / `SBC A,x` (the latter when `use_carry`).
    pub(super) fn alu_sub(&mut self, value: u8, use_carry: bool) {
        self.regs.a = self.subtract(value, use_carry);
    }

    /// `CP x`: flags of `A - value`, result discarded.
    #[inline]
    pub(super) fn alu_cp(&mut self, value: u8) {
        self.subtract(value, false);
    }

    fn subtract(&mut self, value: u8, use_carry: bool) -> u8 {
        let a = self.regs.a;
        let carry_in = (use_carry && self.regs.flags.carry) as i16;

        let half = (a & 0x0F) as i16 - (value & 0x0F) as i16 - carry_in;
        let full = a as i16 - value as i16 - carry_in;
        let result = full as u8;

        self.regs.flags = Flags::new(result == 0, true, half < 0, full < 0);
        result
    }

    #[inline]
    pub(super) fn alu_and(&mut self, value: u8) {
        let result = self.regs.a & value;
        self.regs.a = result;
        self.regs.flags = Flags::new(result == 0, false, true, false);
    }

    #[inline]
    pub(super) fn alu_or(&mut self, value: u8) {
        let result = self.regs.a | value;
        self.regs.a = result;
        self.regs.flags = Flags::new(result == 0, false, false, false);
    }

    #[inline]
    pub(super) fn alu_xor(&mut self, value: u8) {
        let result = self.regs.a ^ value;
        self.regs.a = result;
        self.regs.flags = Flags::new(result == 0, false, false, false);
    }

    /// `DAA`: correct A back to packed BCD after an add or subtract.
    /// N is preserved.
    pub(super) fn alu_daa(&mut self) {
        let flags = self.regs.flags;
        let mut a = self.regs.a;
        let mut adjust: u8 = if flags.carry { 0x60 } else { 0x00 };
        if flags.half_carry {
            adjust |= 0x06;
        }

        if !flags.subtract {
            if (a & 0x0F) > 0x09 {
                adjust |= 0x06;
            }
            if a > 0x99 {
                adjust |= 0x60;
            }
            a = a.wrapping_add(adjust);
        } else {
            a = a.wrapping_sub(adjust);
        }

        self.regs.flags = Flags::new(a == 0, flags.subtract, false, adjust >= 0x60);
        self.regs.a = a;
    }

    /// 8-bit increment used by INC r and INC (HL). C is left alone.
    #[inline]
    pub(super) fn alu_inc8(&mut self, value: u8) -> u8 {
        let result = value.wrapping_add(1);
        let flags = &mut self.regs.flags;
        flags.zero = result == 0;
        flags.subtract = false;
        flags.half_carry = (value & 0x0F) == 0x0F;
        result
    }

    /// 8-bit decrement used by DEC r and DEC (HL). C is left alone.
    #[inline]
    pub(super) fn alu_dec8(&mut self, value: u8) -> u8 {
        let result = value.wrapping_sub(1);
        let flags = &mut self.regs.flags;
        flags.zero = result == 0;
        flags.subtract = true;
        flags.half_carry = (value & 0x0F) == 0;
        result
    }

    /// `ADD HL,rr`.
    ///
    /// Z is unaffected; N is cleared; H is the carry out of bit 11 and C
    /// the carry out of bit 15.
    #[inline]
    pub(super) fn alu_add16_hl(&mut self, value: u16) {
        let hl = self.regs.hl();
        let full = (hl as u32) + (value as u32);

        let flags = &mut self.regs.flags;
        flags.subtract = false;
        flags.half_carry = (hl & 0x0FFF) + (value & 0x0FFF) > 0x0FFF;
        flags.carry = full > 0xFFFF;

        self.regs.set_hl(full as u16);
    }

    /// Add a signed 8-bit immediate to a 16-bit base (ADD SP,e8 and
    /// LD HL,SP+e8).
    ///
    /// Z and N are cleared; H and C come from the unsigned low-byte add.
    #[inline]
    pub(super) fn alu_add16_signed(&mut self, base: u16, imm8: u8) -> u16 {
        let offset = imm8 as i8 as i16 as u16;
        self.regs.flags = Flags::new(
            false,
            false,
            (base & 0x000F) + (offset & 0x000F) > 0x000F,
            (base & 0x00FF) + (offset & 0x00FF) > 0x00FF,
        );
        base.wrapping_add(offset)
    }
}
