use super::cost;
use crate::cpu::Cpu;
use crate::opcodes::{Condition, Instruction};

impl Cpu {
    /// JP a16 / JP cc,a16.
    pub(super) fn exec_jp(&mut self, ins: &Instruction, cc: Option<Condition>) -> u32 {
        let taken = self.condition(cc);
        if taken {
            self.regs.pc = ins.operand;
        }
        cost(ins, taken)
    }

    /// JP HL: PC takes the value of HL, not the byte it points at.
    pub(super) fn exec_jp_hl(&mut self, ins: &Instruction) -> u32 {
        self.regs.pc = self.regs.hl();
        cost(ins, false)
    }

    /// JR e8 / JR cc,e8.
    ///
    /// The displacement is relative to the address following the operand.
    pub(super) fn exec_jr(&mut self, ins: &Instruction, cc: Option<Condition>) -> u32 {
        let taken = self.condition(cc);
        if taken {
            let offset = ins.imm8() as i8;
            self.regs.pc = self.regs.pc.wrapping_add(offset as u16);
        }
        cost(ins, taken)
    }
}
