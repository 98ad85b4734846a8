use crate::config::MachineConfig;
use crate::cpu::{Bus, Cpu, Flags, Interrupt, Registers, RunSummary, StopSignal};
use crate::error::CpuError;
use crate::memory::{Device, MemoryBus, Region};
use crate::opcodes;

/// High-level machine: one CPU and the bus it drives.
///
/// This is the entry point for callers that just want to load a ROM and
/// run it.
pub struct Machine {
    pub cpu: Cpu,
    pub bus: MemoryBus,
    config: MachineConfig,
}

impl Machine {
    /// MBC1 cartridge, DMG register state, PC at `entry_point`.
    pub fn new(rom: Vec<u8>, entry_point: u16) -> Self {
        Self::from_config(MachineConfig::builder().rom(rom).entry_point(entry_point).build())
    }

    pub fn from_config(config: MachineConfig) -> Self {
        log::debug!(
            "machine: {} byte ROM, {:?} mapper, {} RAM banks, entry 0x{:04X}",
            config.rom.len(),
            config.mapper,
            config.ram_banks,
            config.entry_point,
        );
        Self {
            cpu: Cpu::with_boot(config.boot, config.entry_point),
            bus: MemoryBus::with_mapper(config.rom.clone(), config.mapper, config.ram_banks),
            config,
        }
    }

    /// Put CPU and bus back into their construction state. Attached
    /// devices are replaced by plain RAM.
    pub fn reset(&mut self) {
        self.cpu.reset(self.config.boot, self.config.entry_point);
        self.bus = MemoryBus::with_mapper(
            self.config.rom.clone(),
            self.config.mapper,
            self.config.ram_banks,
        );
    }

    pub fn step(&mut self) -> Result<u32, CpuError> {
        self.cpu.step(&mut self.bus)
    }

    /// Run up to `limit` instructions; see [`Cpu::run`].
    pub fn run(&mut self, limit: Option<u64>) -> Result<RunSummary, CpuError> {
        self.cpu.run(&mut self.bus, limit)
    }

    pub fn registers(&self) -> &Registers {
        &self.cpu.regs
    }

    pub fn flags(&self) -> Flags {
        self.cpu.flags()
    }

    pub fn cycles(&self) -> u64 {
        self.cpu.cycles()
    }

    pub fn instructions(&self) -> u64 {
        self.cpu.instructions()
    }

    pub fn stop_signal(&self) -> StopSignal {
        self.cpu.stop_signal()
    }

    pub fn request_interrupt(&mut self, interrupt: Interrupt) {
        self.bus.request_interrupt(interrupt);
    }

    pub fn attach_device(&mut self, region: Region, device: Box<dyn Device>) -> Box<dyn Device> {
        self.bus.attach_device(region, device)
    }

    pub fn read8(&mut self, addr: u16) -> u8 {
        self.bus.read8(addr)
    }

    pub fn write8(&mut self, addr: u16, value: u8) {
        self.bus.write8(addr, value);
    }

    /// Disassemble the instruction at PC.
    pub fn current_instruction(&mut self) -> String {
        let pc = self.cpu.regs.pc;
        opcodes::disassemble(&mut self.bus, pc).0
    }
}

#[cfg(test)]
mod tests;
