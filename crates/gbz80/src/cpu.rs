mod alu;
mod bus;
mod cb;
mod exec;
mod flags;
mod helpers;
mod init;
mod interrupts;
mod regs;
mod step;

pub use bus::Bus;
pub use flags::{FlagBits, Flags};
pub use init::BootProfile;
pub use interrupts::{Interrupt, IE_ADDR, IF_ADDR};
pub use regs::{Reg16, Reg8, Registers};
pub use step::{ExitReason, RunSummary, StopSignal};

/// Game Boy CPU core (LR35902).
///
/// Holds the register file and the control state (`ime`, HALT/STOP, the
/// EI delay). Memory is not owned here; every entry point borrows a
/// [`Bus`] for the duration of the call.
#[derive(Clone, Debug)]
pub struct Cpu {
    pub regs: Registers,
    pub ime: bool,
    pub halted: bool,
    /// STOP low-power state. Cleared once an enabled interrupt is pending.
    stopped: bool,
    ime_enable_pending: bool,
    ime_enable_delay: bool,
    /// Total T-cycles consumed since construction or the last reset.
    cycles: u64,
    /// Total instructions executed (interrupt entries and idle slots are
    /// not counted).
    instructions: u64,
    stop_signal: StopSignal,
}

impl Default for Cpu {
    fn default() -> Self {
        Self::new()
    }
}

impl Cpu {
    /// A CPU in the DMG post-boot state, starting at `0x0100`.
    pub fn new() -> Self {
        Self::with_boot(BootProfile::Dmg, 0x0100)
    }

    pub fn with_boot(boot: BootProfile, entry_point: u16) -> Self {
        let mut cpu = Self {
            regs: Registers::default(),
            ime: false,
            halted: false,
            stopped: false,
            ime_enable_pending: false,
            ime_enable_delay: false,
            cycles: 0,
            instructions: 0,
            stop_signal: StopSignal::new(),
        };
        cpu.apply_boot_state(boot, entry_point);
        cpu
    }

    /// Reset the CPU to the given boot state. The stop signal handle is
    /// kept so clones held elsewhere stay connected.
    pub fn reset(&mut self, boot: BootProfile, entry_point: u16) {
        self.ime = false;
        self.halted = false;
        self.stopped = false;
        self.ime_enable_pending = false;
        self.ime_enable_delay = false;
        self.cycles = 0;
        self.instructions = 0;
        self.stop_signal.clear();
        self.apply_boot_state(boot, entry_point);
    }

    #[inline]
    pub fn flags(&self) -> Flags {
        self.regs.flags
    }

    #[inline]
    pub fn cycles(&self) -> u64 {
        self.cycles
    }

    #[inline]
    pub fn instructions(&self) -> u64 {
        self.instructions
    }

    #[inline]
    pub fn is_stopped(&self) -> bool {
        self.stopped
    }

    /// Leave the STOP state without waiting for an interrupt.
    pub fn resume(&mut self) {
        self.stopped = false;
    }

    /// A handle that can ask a running [`Cpu::run`] to return.
    pub fn stop_signal(&self) -> StopSignal {
        self.stop_signal.clone()
    }
}
