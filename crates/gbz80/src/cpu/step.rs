use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use super::{Bus, Cpu};
use crate::error::CpuError;
use crate::opcodes::Instruction;

/// Cloneable flag that asks [`Cpu::run`] to return before the next
/// instruction.
#[derive(Clone, Debug, Default)]
pub struct StopSignal(Arc<AtomicBool>);

impl StopSignal {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn raise(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    pub fn is_raised(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }

    pub fn clear(&self) {
        self.0.store(false, Ordering::SeqCst);
    }

    /// Consume a raised signal.
    fn take(&self) -> bool {
        self.0.swap(false, Ordering::SeqCst)
    }
}

/// Why [`Cpu::run`] returned.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExitReason {
    /// The instruction limit was reached.
    BudgetExhausted,
    /// HALT with no enabled interrupt pending.
    Halted,
    /// STOP with no enabled interrupt pending.
    Stopped,
    /// The [`StopSignal`] was raised.
    StopRequested,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RunSummary {
    /// Instructions executed by this call.
    pub instructions: u64,
    /// T-cycles consumed by this call, including interrupt entries and
    /// idle HALT slots.
    pub cycles: u64,
    pub exit: ExitReason,
}

/// What one scheduling slot did.
enum Slot {
    Executed(u32),
    Interrupt(u32),
    Idle(u32),
}

impl Slot {
    fn cycles(&self) -> u32 {
        match *self {
            Slot::Executed(c) | Slot::Interrupt(c) | Slot::Idle(c) => c,
        }
    }
}

impl Cpu {
    /// Execute a single instruction and return the number of T-cycles taken.
    ///
    /// A pending enabled interrupt is entered instead (20 cycles); a halted
    /// CPU idles for 4 and a stopped one returns 0. On error nothing is applied and PC still points at
    /// the offending opcode.
    pub fn step<B: Bus>(&mut self, bus: &mut B) -> Result<u32, CpuError> {
        self.step_slot(bus, 0).map(|slot| slot.cycles())
    }

    /// Run up to `limit` instructions (unbounded with `None`).
    ///
    /// Returns early when the CPU halts or stops with nothing pending, or
    /// when the stop signal is raised. Errors are logged before they are
    /// returned.
    pub fn run<B: Bus>(&mut self, bus: &mut B, limit: Option<u64>) -> Result<RunSummary, CpuError> {
        let mut instructions = 0u64;
        let mut cycles = 0u64;

        let exit = loop {
            if limit.is_some_and(|limit| instructions >= limit) {
                break ExitReason::BudgetExhausted;
            }
            if self.stop_signal.take() {
                log::debug!("GB CPU run interrupted by stop signal at PC=0x{:04X}", self.regs.pc);
                break ExitReason::StopRequested;
            }
            if (self.halted || self.stopped) && self.pending_interrupts(bus) == 0 {
                break if self.stopped {
                    ExitReason::Stopped
                } else {
                    ExitReason::Halted
                };
            }

            match self.step_slot(bus, instructions) {
                Ok(slot) => {
                    if let Slot::Executed(_) = slot {
                        instructions += 1;
                    }
                    cycles += slot.cycles() as u64;
                }
                Err(err) => {
                    log::error!(
                        "GB CPU stopped: {err} (SP=0x{sp:04X} AF=0x{af:04X} BC=0x{bc:04X} DE=0x{de:04X} HL=0x{hl:04X} IME={ime})",
                        sp = self.regs.sp,
                        af = self.regs.af(),
                        bc = self.regs.bc(),
                        de = self.regs.de(),
                        hl = self.regs.hl(),
                        ime = self.ime,
                    );
                    return Err(err);
                }
            }
        };

        Ok(RunSummary {
            instructions,
            cycles,
            exit,
        })
    }

    fn step_slot<B: Bus>(&mut self, bus: &mut B, executed: u64) -> Result<Slot, CpuError> {
        if self.stopped {
            if self.pending_interrupts(bus) == 0 {
                // The system clock is frozen in STOP: no cycles pass and
                // peripherals are not ticked.
                return Ok(Slot::Idle(0));
            }
            log::debug!("GB CPU leaving STOP at PC=0x{:04X}", self.regs.pc);
            self.stopped = false;
        }

        if let Some(cycles) = self.handle_interrupts(bus) {
            self.cycles += cycles as u64;
            bus.tick(cycles);
            return Ok(Slot::Interrupt(cycles));
        }

        if self.halted {
            self.cycles += 4;
            bus.tick(4);
            return Ok(Slot::Idle(4));
        }

        let pc = self.regs.pc;
        let ins =
            Instruction::fetch(bus, pc).map_err(|fault| CpuError::from_fault(fault, pc, executed))?;

        if log::log_enabled!(log::Level::Trace) {
            log::trace!(
                "{pc:04X}: {text:<18} AF={af:04X} BC={bc:04X} DE={de:04X} HL={hl:04X} SP={sp:04X}",
                text = ins.to_string(),
                af = self.regs.af(),
                bc = self.regs.bc(),
                de = self.regs.de(),
                hl = self.regs.hl(),
                sp = self.regs.sp,
            );
        }

        self.regs.pc = ins.next_address();
        let cycles = self.execute(bus, &ins);

        self.cycles += cycles as u64;
        self.instructions += 1;
        bus.tick(cycles);
        self.apply_ime_delay();
        Ok(Slot::Executed(cycles))
    }
}
