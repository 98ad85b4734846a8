use super::{Bus, Cpu};
use crate::opcodes::{Condition, Instruction, Operand8};

impl Cpu {
    /// Memory address an operand refers to, or `None` for registers and
    /// immediates.
    fn operand_address(&self, op: Operand8, ins: &Instruction) -> Option<u16> {
        match op {
            Operand8::Reg(_) | Operand8::Imm => None,
            Operand8::Indirect(rr) => Some(self.regs.get16(rr)),
            Operand8::HlInc | Operand8::HlDec => Some(self.regs.hl()),
            Operand8::Absolute => Some(ins.operand),
            Operand8::HighImm => Some(0xFF00 | ins.imm8() as u16),
            Operand8::HighC => Some(0xFF00 | self.regs.c as u16),
        }
    }

    /// Apply the HL post-increment/decrement of `(HL+)`/`(HL-)`.
    #[inline]
    fn post_adjust_hl(&mut self, op: Operand8) {
        match op {
            Operand8::HlInc => self.regs.set_hl(self.regs.hl().wrapping_add(1)),
            Operand8::HlDec => self.regs.set_hl(self.regs.hl().wrapping_sub(1)),
            _ => {}
        }
    }

    pub(super) fn read_operand<B: Bus>(&mut self, bus: &mut B, op: Operand8, ins: &Instruction) -> u8 {
        let value = match (op, self.operand_address(op, ins)) {
            (Operand8::Reg(r), _) => self.regs.get8(r),
            (Operand8::Imm, _) => ins.imm8(),
            (_, Some(addr)) => bus.read8(addr),
            (_, None) => 0xFF,
        };
        self.post_adjust_hl(op);
        value
    }

    /// Store to an operand. Writing to `Imm` is meaningless and ignored.
    pub(super) fn write_operand<B: Bus>(
        &mut self,
        bus: &mut B,
        op: Operand8,
        ins: &Instruction,
        value: u8,
    ) {
        match (op, self.operand_address(op, ins)) {
            (Operand8::Reg(r), _) => self.regs.set8(r, value),
            (_, Some(addr)) => bus.write8(addr, value),
            (_, None) => {}
        }
        self.post_adjust_hl(op);
    }

    #[inline]
    pub(super) fn condition(&self, cc: Option<Condition>) -> bool {
        let flags = self.regs.flags;
        match cc {
            None => true,
            Some(Condition::NotZero) => !flags.zero,
            Some(Condition::Zero) => flags.zero,
            Some(Condition::NotCarry) => !flags.carry,
            Some(Condition::Carry) => flags.carry,
        }
    }

    #[inline]
    pub(super) fn push_u16<B: Bus>(&mut self, bus: &mut B, value: u16) {
        let [hi, lo] = value.to_be_bytes();
        // Stack grows downward: memory[SP] = low, memory[SP+1] = high.
        self.regs.sp = self.regs.sp.wrapping_sub(1);
        bus.write8(self.regs.sp, hi);
        self.regs.sp = self.regs.sp.wrapping_sub(1);
        bus.write8(self.regs.sp, lo);
    }

    #[inline]
    pub(super) fn pop_u16<B: Bus>(&mut self, bus: &mut B) -> u16 {
        let lo = bus.read8(self.regs.sp);
        let hi = bus.read8(self.regs.sp.wrapping_add(1));
        self.regs.sp = self.regs.sp.wrapping_add(2);
        u16::from_le_bytes([lo, hi])
    }
}
