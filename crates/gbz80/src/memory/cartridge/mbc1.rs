use super::{RomBanks, RAM_BANK_SIZE};

/// MBC1 cartridge state.
///
/// ROM banking via the 5-bit bank register plus two high bits, and
/// optional external RAM. In mode 1 the high bits also select the RAM
/// bank. Battery persistence is not modelled.
pub(in super::super) struct Mbc1Cartridge {
    banks: RomBanks,
    ram: Vec<u8>,
    num_ram_banks: u8,
    rom_bank_low5: u8,
    rom_bank_high2: u8,
    ram_enable: bool,
    banking_mode: u8,
}

impl Mbc1Cartridge {
    pub(super) fn new(banks: RomBanks, num_ram_banks: u8) -> Self {
        let ram_bytes = num_ram_banks as usize * RAM_BANK_SIZE;
        Self {
            banks,
            ram: vec![0xFF; ram_bytes],
            num_ram_banks,
            rom_bank_low5: 1,
            rom_bank_high2: 0,
            ram_enable: false,
            banking_mode: 0,
        }
    }

    #[inline]
    pub(super) fn banks(&self) -> &RomBanks {
        &self.banks
    }

    /// Select a ROM bank directly, keeping the bank registers in sync.
    pub(super) fn select_rom_bank(&mut self, raw: u16) -> u16 {
        let bank = self.banks.select(raw);
        // The low register never holds 0, even when the bank is a multiple
        // of 0x20.
        self.rom_bank_low5 = ((bank & 0x1F) as u8).max(1);
        self.rom_bank_high2 = ((bank >> 5) & 0x03) as u8;
        bank
    }

    fn apply_rom_bank(&mut self) {
        let raw = ((self.rom_bank_high2 as u16) << 5) | self.rom_bank_low5 as u16;
        self.banks.select(raw);
    }

    fn ram_offset(&self, addr: u16) -> Option<usize> {
        if !self.ram_enable || self.num_ram_banks == 0 {
            return None;
        }
        let offset = addr.checked_sub(0xA000)? as usize;
        if offset >= RAM_BANK_SIZE {
            return None;
        }
        let bank = if self.banking_mode == 1 {
            self.rom_bank_high2.min(self.num_ram_banks - 1)
        } else {
            0
        };
        Some(bank as usize * RAM_BANK_SIZE + offset)
    }

    pub(super) fn ram_read(&self, addr: u16) -> u8 {
        self.ram_offset(addr)
            .and_then(|i| self.ram.get(i).copied())
            .unwrap_or(0xFF)
    }

    pub(super) fn ram_write(&mut self, addr: u16, value: u8) {
        if let Some(slot) = self.ram_offset(addr).and_then(|i| self.ram.get_mut(i)) {
            *slot = value;
        }
    }

    pub(super) fn rom_write(&mut self, addr: u16, value: u8) {
        match addr {
            0x0000..=0x1FFF => {
                // 0x?A enables external RAM, anything else disables it.
                self.ram_enable = (value & 0x0F) == 0x0A;
            }
            0x2000..=0x3FFF => {
                self.rom_bank_low5 = value & 0x1F;
                if self.rom_bank_low5 == 0 {
                    self.rom_bank_low5 = 1;
                }
                self.apply_rom_bank();
            }
            0x4000..=0x5FFF => {
                // ROM bank bits 5-6, or RAM bank in mode 1.
                self.rom_bank_high2 = value & 0x03;
                self.apply_rom_bank();
            }
            0x6000..=0x7FFF => {
                self.banking_mode = value & 0x01;
            }
            _ => {}
        }
    }
}
