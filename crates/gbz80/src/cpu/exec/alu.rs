use super::cost;
use crate::cpu::{Bus, Cpu, Reg16};
use crate::opcodes::{AluOp, Instruction, Operand8, Shift};

impl Cpu {
    pub(super) fn exec_alu<B: Bus>(
        &mut self,
        bus: &mut B,
        ins: &Instruction,
        op: AluOp,
        src: Operand8,
    ) -> u32 {
        let value = self.read_operand(bus, src, ins);
        self.alu(op, value);
        cost(ins, false)
    }

    pub(super) fn exec_add_hl_rr(&mut self, ins: &Instruction, rr: Reg16) -> u32 {
        let value = self.regs.get16(rr);
        self.alu_add16_hl(value);
        cost(ins, false)
    }

    pub(super) fn exec_add_sp_e8(&mut self, ins: &Instruction) -> u32 {
        self.regs.sp = self.alu_add16_signed(self.regs.sp, ins.imm8());
        cost(ins, false)
    }

    /// RLCA/RRCA/RLA/RRA: like their CB counterparts on A, except Z is
    /// always cleared.
    pub(super) fn exec_rotate_a(&mut self, ins: &Instruction, kind: Shift) -> u32 {
        self.regs.a = self.shift(kind, self.regs.a);
        self.regs.flags.zero = false;
        cost(ins, false)
    }

    pub(super) fn exec_daa(&mut self, ins: &Instruction) -> u32 {
        self.alu_daa();
        cost(ins, false)
    }

    pub(super) fn exec_cpl(&mut self, ins: &Instruction) -> u32 {
        self.regs.a = !self.regs.a;
        self.regs.flags.subtract = true;
        self.regs.flags.half_carry = true;
        cost(ins, false)
    }

    pub(super) fn exec_scf(&mut self, ins: &Instruction) -> u32 {
        let flags = &mut self.regs.flags;
        flags.subtract = false;
        flags.half_carry = false;
        flags.carry = true;
        cost(ins, false)
    }

    pub(super) fn exec_ccf(&mut self, ins: &Instruction) -> u32 {
        let flags = &mut self.regs.flags;
        flags.subtract = false;
        flags.half_carry = false;
        flags.carry = !flags.carry;
        cost(ins, false)
    }
}
