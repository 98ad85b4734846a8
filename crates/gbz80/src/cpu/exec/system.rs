use super::cost;
use crate::cpu::Cpu;
use crate::opcodes::Instruction;

impl Cpu {
    /// STOP. The padding byte has already been skipped by the decoder.
    pub(super) fn exec_stop(&mut self, ins: &Instruction) -> u32 {
        log::debug!("GB CPU STOP at PC=0x{:04X}", ins.address);
        self.stopped = true;
        self.halted = false;
        cost(ins, false)
    }

    /// HALT. The CPU idles until an enabled interrupt becomes pending.
    pub(super) fn exec_halt(&mut self, ins: &Instruction) -> u32 {
        log::debug!("GB CPU HALT at PC=0x{:04X}", ins.address);
        self.halted = true;
        cost(ins, false)
    }

    pub(super) fn exec_di(&mut self, ins: &Instruction) -> u32 {
        self.ime = false;
        self.ime_enable_pending = false;
        self.ime_enable_delay = false;
        cost(ins, false)
    }

    pub(super) fn exec_ei(&mut self, ins: &Instruction) -> u32 {
        // IME becomes 1 after the *next* instruction completes.
        self.ime_enable_pending = true;
        cost(ins, false)
    }
}
