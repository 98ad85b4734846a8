mod alu;
mod control;
mod incdec;
mod ld;
mod stack;
mod system;

use super::{Bus, Cpu};
use crate::opcodes::{Instruction, Operation};

/// T-cycles charged for `ins`, depending on whether its branch was taken.
#[inline]
fn cost(ins: &Instruction, taken: bool) -> u32 {
    if taken {
        ins.descriptor.cycles_taken as u32
    } else {
        ins.descriptor.cycles as u32
    }
}

impl Cpu {
    /// Execute a decoded instruction and return the number of T-cycles.
    ///
    /// PC already points past the instruction; control flow operations
    /// overwrite it.
    pub(super) fn execute<B: Bus>(&mut self, bus: &mut B, ins: &Instruction) -> u32 {
        match ins.descriptor.operation {
            Operation::Nop => cost(ins, false),
            Operation::Stop => self.exec_stop(ins),
            Operation::Halt => self.exec_halt(ins),
            Operation::Di => self.exec_di(ins),
            Operation::Ei => self.exec_ei(ins),

            Operation::Load { dst, src } => self.exec_ld(bus, ins, dst, src),
            Operation::LoadWordImm(rr) => self.exec_ld_rr_d16(ins, rr),
            Operation::StoreSp => self.exec_ld_a16_sp(bus, ins),
            Operation::LoadSpHl => self.exec_ld_sp_hl(ins),
            Operation::LoadHlSpOffset => self.exec_ld_hl_sp_e8(ins),

            Operation::Alu(op, src) => self.exec_alu(bus, ins, op, src),
            Operation::AddHl(rr) => self.exec_add_hl_rr(ins, rr),
            Operation::AddSpOffset => self.exec_add_sp_e8(ins),
            Operation::RotateA(shift) => self.exec_rotate_a(ins, shift),
            Operation::Daa => self.exec_daa(ins),
            Operation::Cpl => self.exec_cpl(ins),
            Operation::Scf => self.exec_scf(ins),
            Operation::Ccf => self.exec_ccf(ins),

            Operation::Inc(target) => self.exec_inc8(bus, ins, target),
            Operation::Dec(target) => self.exec_dec8(bus, ins, target),
            Operation::IncWord(rr) => self.exec_inc16(ins, rr),
            Operation::DecWord(rr) => self.exec_dec16(ins, rr),

            Operation::Jump(cc) => self.exec_jp(ins, cc),
            Operation::JumpHl => self.exec_jp_hl(ins),
            Operation::JumpRelative(cc) => self.exec_jr(ins, cc),
            Operation::Call(cc) => self.exec_call(bus, ins, cc),
            Operation::Return(cc) => self.exec_ret(bus, ins, cc),
            Operation::ReturnInterrupt => self.exec_reti(bus, ins),
            Operation::Restart(vector) => self.exec_rst(bus, ins, vector),
            Operation::Push(rr) => self.exec_push(bus, ins, rr),
            Operation::Pop(rr) => self.exec_pop(bus, ins, rr),

            Operation::Shift(kind, target) => self.exec_cb_shift(bus, ins, kind, target),
            Operation::Bit(bit, target) => self.exec_cb_bit(bus, ins, bit, target),
            Operation::Res(bit, target) => self.exec_cb_res(bus, ins, bit, target),
            Operation::Set(bit, target) => self.exec_cb_set(bus, ins, bit, target),

            // `Instruction::fetch` resolves the prefix and rejects holes.
            Operation::Prefix | Operation::Illegal => 0,
        }
    }
}
