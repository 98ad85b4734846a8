use super::cost;
use crate::cpu::{Bus, Cpu, Reg16};
use crate::opcodes::{Instruction, Operand8};

impl Cpu {
    pub(super) fn exec_inc8<B: Bus>(&mut self, bus: &mut B, ins: &Instruction, target: Operand8) -> u32 {
        let value = self.read_operand(bus, target, ins);
        let result = self.alu_inc8(value);
        self.write_operand(bus, target, ins, result);
        cost(ins, false)
    }

    pub(super) fn exec_dec8<B: Bus>(&mut self, bus: &mut B, ins: &Instruction, target: Operand8) -> u32 {
        let value = self.read_operand(bus, target, ins);
        let result = self.alu_dec8(value);
        self.write_operand(bus, target, ins, result);
        cost(ins, false)
    }

    /// 16-bit INC rr. No flags are affected.
    pub(super) fn exec_inc16(&mut self, ins: &Instruction, rr: Reg16) -> u32 {
        let value = self.regs.get16(rr).wrapping_add(1);
        self.regs.set16(rr, value);
        cost(ins, false)
    }

    /// 16-bit DEC rr. No flags are affected.
    pub(super) fn exec_dec16(&mut self, ins: &Instruction, rr: Reg16) -> u32 {
        let value = self.regs.get16(rr).wrapping_sub(1);
        self.regs.set16(rr, value);
        cost(ins, false)
    }
}
