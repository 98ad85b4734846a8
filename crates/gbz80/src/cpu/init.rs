use super::{Cpu, Registers};

/// Register values the CPU starts from.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BootProfile {
    /// The state the DMG boot ROM leaves behind when it hands control to
    /// the cartridge.
    #[default]
    Dmg,
    /// Every register zero except SP.
    Zeroed,
}

impl Cpu {
    /// Initialize registers from `boot` and place PC at `entry_point`.
    ///
    /// IME is clear either way; the program enables interrupts through
    /// EI/RETI.
    pub(super) fn apply_boot_state(&mut self, boot: BootProfile, entry_point: u16) {
        self.regs = Registers::default();
        if boot == BootProfile::Dmg {
            self.regs.a = 0x01;
            self.regs.set_f(0xB0); // Z=1 N=0 H=1 C=1
            self.regs.b = 0x00;
            self.regs.c = 0x13;
            self.regs.d = 0x00;
            self.regs.e = 0xD8;
            self.regs.h = 0x01;
            self.regs.l = 0x4D;
        }
        self.regs.sp = 0xFFFE;
        self.regs.pc = entry_point;
        self.ime = false;
    }
}
