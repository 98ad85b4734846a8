//! The system bus: cartridge ROM/RAM, the internal memories and I/O
//! behind one total 16-bit address space.

mod cartridge;
mod device;

pub use cartridge::MapperKind;
pub use device::{Device, Ram, Region};

use cartridge::Cartridge;

use crate::cpu::{Bus, Interrupt, IE_ADDR, IF_ADDR};

/// Memory bus for a single cartridge.
///
/// Reads and writes are total: unmapped or disabled areas read `0xFF` and
/// swallow writes. IE (`0xFFFF`) and IF (`0xFF0F`) are held by the bus
/// itself so interrupt bookkeeping works whatever is attached to the I/O
/// region.
pub struct MemoryBus {
    cartridge: Cartridge,
    devices: [Box<dyn Device>; 5],
    if_reg: u8,
    ie_reg: u8,
}

impl MemoryBus {
    /// MBC1 cartridge without external RAM.
    pub fn new(rom: Vec<u8>) -> Self {
        Self::with_mapper(rom, MapperKind::default(), 0)
    }

    pub fn with_mapper(rom: Vec<u8>, mapper: MapperKind, ram_banks: u8) -> Self {
        Self {
            cartridge: Cartridge::new(rom, mapper, ram_banks),
            devices: Region::ALL.map(|region| Box::new(Ram::new(region)) as Box<dyn Device>),
            if_reg: 0,
            ie_reg: 0,
        }
    }

    /// Back `region` with `device`, returning the one it replaces.
    pub fn attach_device(&mut self, region: Region, device: Box<dyn Device>) -> Box<dyn Device> {
        log::debug!("attaching device to {:?} ({:04X?})", region, region.range());
        std::mem::replace(&mut self.devices[region.slot()], device)
    }

    /// Currently mapped switchable ROM bank (never 0).
    pub fn rom_bank(&self) -> u16 {
        self.cartridge.rom_bank()
    }

    pub fn rom_bank_count(&self) -> u16 {
        self.cartridge.rom_bank_count()
    }

    /// Map bank `raw` into `0x4000..=0x7FFF` and return the bank actually
    /// selected. 0 becomes 1; values past the last bank wrap.
    pub fn select_rom_bank(&mut self, raw: u16) -> u16 {
        self.cartridge.select_rom_bank(raw)
    }

    /// Set the IF bit for `interrupt`.
    pub fn request_interrupt(&mut self, interrupt: Interrupt) {
        self.if_reg |= interrupt.bit();
    }

    #[inline]
    fn device(&mut self, region: Region) -> &mut dyn Device {
        self.devices[region.slot()].as_mut()
    }
}

impl Bus for MemoryBus {
    fn read8(&mut self, addr: u16) -> u8 {
        match addr {
            0x0000..=0x7FFF => self.cartridge.rom_read(addr),
            0x8000..=0x9FFF => self.device(Region::VideoRam).read(addr),
            0xA000..=0xBFFF => self.cartridge.ram_read(addr),
            0xC000..=0xDFFF => self.device(Region::WorkRam).read(addr),
            // Echo RAM mirrors C000-DDFF.
            0xE000..=0xFDFF => self.device(Region::WorkRam).read(addr - 0x2000),
            0xFE00..=0xFE9F => self.device(Region::Oam).read(addr),
            0xFEA0..=0xFEFF => 0xFF,
            IF_ADDR => self.if_reg | 0xE0,
            0xFF00..=0xFF7F => self.device(Region::Io).read(addr),
            0xFF80..=0xFFFE => self.device(Region::HighRam).read(addr),
            IE_ADDR => self.ie_reg,
        }
    }

    fn write8(&mut self, addr: u16, value: u8) {
        match addr {
            0x0000..=0x7FFF => self.cartridge.rom_write(addr, value),
            0x8000..=0x9FFF => self.device(Region::VideoRam).write(addr, value),
            0xA000..=0xBFFF => self.cartridge.ram_write(addr, value),
            0xC000..=0xDFFF => self.device(Region::WorkRam).write(addr, value),
            0xE000..=0xFDFF => self.device(Region::WorkRam).write(addr - 0x2000, value),
            0xFE00..=0xFE9F => self.device(Region::Oam).write(addr, value),
            0xFEA0..=0xFEFF => {}
            IF_ADDR => self.if_reg = value & 0x1F,
            0xFF00..=0xFF7F => self.device(Region::Io).write(addr, value),
            0xFF80..=0xFFFE => self.device(Region::HighRam).write(addr, value),
            IE_ADDR => self.ie_reg = value,
        }
    }

    fn tick(&mut self, cycles: u32) {
        for device in self.devices.iter_mut() {
            device.tick(cycles);
        }
    }
}

#[cfg(test)]
mod tests;
