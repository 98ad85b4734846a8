use super::cost;
use crate::cpu::{Bus, Cpu, Reg16};
use crate::opcodes::{Instruction, Operand8};

impl Cpu {
    /// Every 8-bit transfer: register/register, immediates, indirect,
    /// `(HL±)`, absolute and high-page forms.
    pub(super) fn exec_ld<B: Bus>(
        &mut self,
        bus: &mut B,
        ins: &Instruction,
        dst: Operand8,
        src: Operand8,
    ) -> u32 {
        let value = self.read_operand(bus, src, ins);
        self.write_operand(bus, dst, ins, value);
        cost(ins, false)
    }

    pub(super) fn exec_ld_rr_d16(&mut self, ins: &Instruction, rr: Reg16) -> u32 {
        self.regs.set16(rr, ins.operand);
        cost(ins, false)
    }

    /// LD (a16),SP: low byte first.
    pub(super) fn exec_ld_a16_sp<B: Bus>(&mut self, bus: &mut B, ins: &Instruction) -> u32 {
        let [lo, hi] = self.regs.sp.to_le_bytes();
        bus.write8(ins.operand, lo);
        bus.write8(ins.operand.wrapping_add(1), hi);
        cost(ins, false)
    }

    pub(super) fn exec_ld_sp_hl(&mut self, ins: &Instruction) -> u32 {
        self.regs.sp = self.regs.hl();
        cost(ins, false)
    }

    pub(super) fn exec_ld_hl_sp_e8(&mut self, ins: &Instruction) -> u32 {
        let value = self.alu_add16_signed(self.regs.sp, ins.imm8());
        self.regs.set_hl(value);
        cost(ins, false)
    }
}
