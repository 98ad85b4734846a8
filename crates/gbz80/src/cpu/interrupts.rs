use super::{Bus, Cpu};

/// Interrupt enable register.
pub const IE_ADDR: u16 = 0xFFFF;
/// Interrupt request (flag) register.
pub const IF_ADDR: u16 = 0xFF0F;

/// Maskable interrupt sources, in priority order (highest first).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Interrupt {
    VBlank,
    LcdStat,
    Timer,
    Serial,
    Joypad,
}

impl Interrupt {
    pub const ALL: [Interrupt; 5] = [
        Interrupt::VBlank,
        Interrupt::LcdStat,
        Interrupt::Timer,
        Interrupt::Serial,
        Interrupt::Joypad,
    ];

    #[inline]
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Bit in IE/IF.
    #[inline]
    pub const fn bit(self) -> u8 {
        1 << self.index()
    }

    /// Handler address: `0x0040 + 8 * index`.
    #[inline]
    pub const fn vector(self) -> u16 {
        0x0040 + (self.index() as u16) * 8
    }
}

impl Cpu {
    /// Bits that are both requested and enabled.
    #[inline]
    pub(super) fn pending_interrupts<B: Bus>(&self, bus: &mut B) -> u8 {
        bus.read8(IE_ADDR) & bus.read8(IF_ADDR) & 0x1F
    }

    /// Enter the highest-priority pending interrupt when IME is set.
    ///
    /// Anything pending wakes a halted CPU, even with IME clear. Yields the
    /// entry cost when a vector was taken.
    pub(super) fn handle_interrupts<B: Bus>(&mut self, bus: &mut B) -> Option<u32> {
        let pending = self.pending_interrupts(bus);
        if pending == 0 {
            return None;
        }

        self.halted = false;
        if !self.ime {
            return None;
        }

        // Lowest set bit wins (VBlank > LCD STAT > Timer > Serial > Joypad).
        let index = pending.trailing_zeros() as usize;
        let interrupt = Interrupt::ALL[index];

        self.ime = false;
        self.ime_enable_pending = false;
        self.ime_enable_delay = false;

        let pc = self.regs.pc;
        self.push_u16(bus, pc);

        let iflags = bus.read8(IF_ADDR);
        bus.write8(IF_ADDR, iflags & !interrupt.bit());
        self.regs.pc = interrupt.vector();

        log::debug!(
            "GB CPU interrupt: {:?} vector=0x{:04X} pc=0x{:04X} sp=0x{:04X}",
            interrupt,
            interrupt.vector(),
            pc,
            self.regs.sp,
        );

        Some(20)
    }

    /// Advance the EI delay by one instruction.
    #[inline]
    pub(super) fn apply_ime_delay(&mut self) {
        if self.ime_enable_delay {
            self.ime = true;
            self.ime_enable_delay = false;
        } else if self.ime_enable_pending {
            self.ime_enable_pending = false;
            self.ime_enable_delay = true;
        }
    }
}
