use super::{Bus, Cpu, Flags};
use crate::opcodes::{Instruction, Operand8, Shift};

impl Cpu {
    /// Rotates and shifts shared by the CB space and the accumulator
    /// rotates. Sets Z from the result and C from the bit shifted out;
    /// N and H are cleared.
    pub(super) fn shift(&mut self, kind: Shift, value: u8) -> u8 {
        let carry_in = self.regs.flags.carry;
        let (result, carry) = match kind {
            Shift::Rlc => (value.rotate_left(1), value & 0x80 != 0),
            Shift::Rrc => (value.rotate_right(1), value & 0x01 != 0),
            Shift::Rl => ((value << 1) | carry_in as u8, value & 0x80 != 0),
            Shift::Rr => ((value >> 1) | ((carry_in as u8) << 7), value & 0x01 != 0),
            Shift::Sla => (value << 1, value & 0x80 != 0),
            Shift::Sra => ((value >> 1) | (value & 0x80), value & 0x01 != 0),
            Shift::Swap => (value.rotate_left(4), false),
            Shift::Srl => (value >> 1, value & 0x01 != 0),
        };
        self.regs.flags = Flags::new(result == 0, false, false, carry);
        result
    }

    pub(super) fn exec_cb_shift<B: Bus>(
        &mut self,
        bus: &mut B,
        ins: &Instruction,
        kind: Shift,
        target: Operand8,
    ) -> u32 {
        let value = self.read_operand(bus, target, ins);
        let result = self.shift(kind, value);
        self.write_operand(bus, target, ins, result);
        ins.descriptor.cycles as u32
    }

    /// BIT b,r: Z is set when the bit is clear. C is left alone.
    pub(super) fn exec_cb_bit<B: Bus>(
        &mut self,
        bus: &mut B,
        ins: &Instruction,
        bit: u8,
        target: Operand8,
    ) -> u32 {
        let value = self.read_operand(bus, target, ins);
        let flags = &mut self.regs.flags;
        flags.zero = value & (1 << bit) == 0;
        flags.subtract = false;
        flags.half_carry = true;
        ins.descriptor.cycles as u32
    }

    pub(super) fn exec_cb_res<B: Bus>(
        &mut self,
        bus: &mut B,
        ins: &Instruction,
        bit: u8,
        target: Operand8,
    ) -> u32 {
        let value = self.read_operand(bus, target, ins);
        self.write_operand(bus, target, ins, value & !(1 << bit));
        ins.descriptor.cycles as u32
    }

    pub(super) fn exec_cb_set<B: Bus>(
        &mut self,
        bus: &mut B,
        ins: &Instruction,
        bit: u8,
        target: Operand8,
    ) -> u32 {
        let value = self.read_operand(bus, target, ins);
        self.write_operand(bus, target, ins, value | (1 << bit));
        ins.descriptor.cycles as u32
    }
}
