use super::cost;
use crate::cpu::{Bus, Cpu, Reg16};
use crate::opcodes::{Condition, Instruction};

impl Cpu {
    pub(super) fn exec_push<B: Bus>(&mut self, bus: &mut B, ins: &Instruction, rr: Reg16) -> u32 {
        let value = self.regs.get16(rr);
        self.push_u16(bus, value);
        cost(ins, false)
    }

    /// POP rr. `POP AF` goes through the flags codec, so the low nibble of
    /// F stays zero.
    pub(super) fn exec_pop<B: Bus>(&mut self, bus: &mut B, ins: &Instruction, rr: Reg16) -> u32 {
        let value = self.pop_u16(bus);
        self.regs.set16(rr, value);
        cost(ins, false)
    }

    pub(super) fn exec_call<B: Bus>(
        &mut self,
        bus: &mut B,
        ins: &Instruction,
        cc: Option<Condition>,
    ) -> u32 {
        let taken = self.condition(cc);
        if taken {
            let ret = self.regs.pc;
            self.push_u16(bus, ret);
            self.regs.pc = ins.operand;
        }
        cost(ins, taken)
    }

    pub(super) fn exec_ret<B: Bus>(
        &mut self,
        bus: &mut B,
        ins: &Instruction,
        cc: Option<Condition>,
    ) -> u32 {
        let taken = self.condition(cc);
        if taken {
            self.regs.pc = self.pop_u16(bus);
        }
        cost(ins, taken)
    }

    pub(super) fn exec_reti<B: Bus>(&mut self, bus: &mut B, ins: &Instruction) -> u32 {
        self.regs.pc = self.pop_u16(bus);
        self.ime = true;
        cost(ins, false)
    }

    pub(super) fn exec_rst<B: Bus>(&mut self, bus: &mut B, ins: &Instruction, vector: u8) -> u32 {
        let ret = self.regs.pc;
        self.push_u16(bus, ret);
        self.regs.pc = vector as u16;
        cost(ins, false)
    }
}
