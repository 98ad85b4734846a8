mod mbc1;

use mbc1::Mbc1Cartridge;

pub(crate) const ROM_BANK_SIZE: usize = 0x4000;
pub(crate) const RAM_BANK_SIZE: usize = 0x2000;

/// Which bank controller interprets writes into the ROM area.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MapperKind {
    /// No controller; ROM writes are ignored.
    RomOnly,
    #[default]
    Mbc1,
}

/// ROM image plus the switchable-bank selection shared by every mapper.
///
/// Banks are numbered from 0 (bank k starts at offset `k * 0x4000`). The
/// switchable window never shows bank 0.
pub(super) struct RomBanks {
    rom: Vec<u8>,
    bank_count: u16,
    bank: u16,
}

impl RomBanks {
    fn new(rom: Vec<u8>) -> Self {
        let bank_count = rom.len().div_ceil(ROM_BANK_SIZE).max(2) as u16;
        Self {
            rom,
            bank_count,
            bank: 1,
        }
    }

    /// Select the switchable bank. Values past the last bank wrap, and a
    /// selection of bank 0 becomes bank 1.
    pub(super) fn select(&mut self, raw: u16) -> u16 {
        let mut bank = raw % self.bank_count;
        if bank == 0 {
            bank = 1;
        }
        if bank != self.bank {
            log::debug!("cartridge ROM bank {} -> {} (requested {})", self.bank, bank, raw);
        }
        self.bank = bank;
        bank
    }

    #[inline]
    pub(super) fn bank(&self) -> u16 {
        self.bank
    }

    #[inline]
    pub(super) fn bank_count(&self) -> u16 {
        self.bank_count
    }

    /// Bytes past the end of the image read `0xFF`.
    pub(super) fn read(&self, addr: u16) -> u8 {
        let bank = if addr < 0x4000 { 0 } else { self.bank as usize };
        let index = bank * ROM_BANK_SIZE + (addr as usize & (ROM_BANK_SIZE - 1));
        self.rom.get(index).copied().unwrap_or(0xFF)
    }
}

/// Wrapper enum for supported cartridge mappers.
pub(super) enum Cartridge {
    RomOnly(RomBanks),
    Mbc1(Mbc1Cartridge),
}

impl Cartridge {
    pub(super) fn new(rom: Vec<u8>, mapper: MapperKind, ram_banks: u8) -> Self {
        let banks = RomBanks::new(rom);
        match mapper {
            MapperKind::RomOnly => Cartridge::RomOnly(banks),
            MapperKind::Mbc1 => Cartridge::Mbc1(Mbc1Cartridge::new(banks, ram_banks)),
        }
    }

    fn banks(&self) -> &RomBanks {
        match self {
            Cartridge::RomOnly(banks) => banks,
            Cartridge::Mbc1(m) => m.banks(),
        }
    }

    pub(super) fn rom_bank(&self) -> u16 {
        self.banks().bank()
    }

    pub(super) fn rom_bank_count(&self) -> u16 {
        self.banks().bank_count()
    }

    pub(super) fn select_rom_bank(&mut self, raw: u16) -> u16 {
        match self {
            Cartridge::RomOnly(banks) => banks.select(raw),
            Cartridge::Mbc1(m) => m.select_rom_bank(raw),
        }
    }

    pub(super) fn rom_read(&self, addr: u16) -> u8 {
        self.banks().read(addr)
    }

    /// Writes into `0x0000..=0x7FFF` go to the bank controller, never to ROM.
    pub(super) fn rom_write(&mut self, addr: u16, value: u8) {
        match self {
            Cartridge::RomOnly(_) => {}
            Cartridge::Mbc1(m) => m.rom_write(addr, value),
        }
    }

    pub(super) fn ram_read(&self, addr: u16) -> u8 {
        match self {
            Cartridge::RomOnly(_) => 0xFF,
            Cartridge::Mbc1(m) => m.ram_read(addr),
        }
    }

    pub(super) fn ram_write(&mut self, addr: u16, value: u8) {
        match self {
            Cartridge::RomOnly(_) => {}
            Cartridge::Mbc1(m) => m.ram_write(addr, value),
        }
    }
}
