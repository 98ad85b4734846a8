use std::cell::RefCell;
use std::rc::Rc;

use super::*;

/// ROM where every byte of bank k holds k.
fn banked_rom(banks: usize) -> Vec<u8> {
    (0..banks)
        .flat_map(|bank| std::iter::repeat(bank as u8).take(0x4000))
        .collect()
}

#[test]
fn rom_is_read_only() {
    let mut bus = MemoryBus::with_mapper(vec![0x11; 0x8000], MapperKind::RomOnly, 0);
    bus.write8(0x0100, 0x22);
    bus.write8(0x4100, 0x22);
    assert_eq!(bus.read8(0x0100), 0x11);
    assert_eq!(bus.read8(0x4100), 0x11);
    assert_eq!(bus.rom_bank(), 1);
}

#[test]
fn reads_past_end_of_rom_are_open_bus() {
    let mut bus = MemoryBus::new(vec![0x00; 0x100]);
    assert_eq!(bus.read8(0x00FF), 0x00);
    assert_eq!(bus.read8(0x0100), 0xFF);
    assert_eq!(bus.read8(0x4000), 0xFF);
}

#[test]
fn selecting_bank_zero_maps_bank_one() {
    let mut bus = MemoryBus::new(banked_rom(4));
    assert_eq!(bus.select_rom_bank(0), 1);
    assert_eq!(bus.rom_bank(), 1);
    assert_eq!(bus.read8(0x4000), 1);
}

#[test]
fn selecting_an_existing_bank_maps_it() {
    let mut bus = MemoryBus::new(banked_rom(4));
    assert_eq!(bus.select_rom_bank(3), 3);
    assert_eq!(bus.read8(0x4000), 3);
    assert_eq!(bus.read8(0x7FFF), 3);
    // Bank 0 stays fixed underneath.
    assert_eq!(bus.read8(0x0000), 0);
}

#[test]
fn out_of_range_banks_wrap() {
    let mut bus = MemoryBus::new(banked_rom(4));
    assert_eq!(bus.rom_bank_count(), 4);
    assert_eq!(bus.select_rom_bank(6), 2);
    // 4 % 4 == 0, which is coerced again.
    assert_eq!(bus.select_rom_bank(4), 1);
}

#[test]
fn tiny_roms_still_have_two_banks() {
    let bus = MemoryBus::new(vec![0; 0x10]);
    assert_eq!(bus.rom_bank_count(), 2);
}

#[test]
fn mbc1_register_writes_switch_banks() {
    let mut bus = MemoryBus::new(banked_rom(64));
    bus.write8(0x2000, 0x05);
    assert_eq!(bus.rom_bank(), 5);
    assert_eq!(bus.read8(0x4000), 5);

    bus.write8(0x2000, 0x00);
    assert_eq!(bus.rom_bank(), 1);

    // High bits select banks 0x20+.
    bus.write8(0x2000, 0x02);
    bus.write8(0x4000, 0x01);
    assert_eq!(bus.rom_bank(), 0x22);
    assert_eq!(bus.read8(0x4000), 0x22);
}

#[test]
fn direct_selection_keeps_mbc1_registers_consistent() {
    let mut direct = MemoryBus::new(banked_rom(128));
    assert_eq!(direct.select_rom_bank(0x20), 0x20);
    direct.write8(0x4000, 0x01);

    let mut registers = MemoryBus::new(banked_rom(128));
    registers.write8(0x2000, 0x00);
    registers.write8(0x4000, 0x01);

    assert_eq!(registers.rom_bank(), 0x21);
    assert_eq!(direct.rom_bank(), registers.rom_bank());
    assert_eq!(direct.read8(0x4000), 0x21);
}

#[test]
fn rom_only_cartridge_ignores_bank_writes() {
    let mut bus = MemoryBus::with_mapper(banked_rom(4), MapperKind::RomOnly, 0);
    bus.write8(0x2000, 0x03);
    assert_eq!(bus.rom_bank(), 1);
}

#[test]
fn external_ram_requires_enable() {
    let mut bus = MemoryBus::with_mapper(banked_rom(2), MapperKind::Mbc1, 1);
    bus.write8(0xA000, 0x42);
    assert_eq!(bus.read8(0xA000), 0xFF);

    bus.write8(0x0000, 0x0A);
    bus.write8(0xA000, 0x42);
    assert_eq!(bus.read8(0xA000), 0x42);

    bus.write8(0x0000, 0x00);
    assert_eq!(bus.read8(0xA000), 0xFF);
}

#[test]
fn mbc1_mode_one_banks_external_ram() {
    let mut bus = MemoryBus::with_mapper(banked_rom(2), MapperKind::Mbc1, 4);
    bus.write8(0x0000, 0x0A);
    bus.write8(0x6000, 0x01);

    bus.write8(0x4000, 0x00);
    bus.write8(0xA123, 0xAA);
    bus.write8(0x4000, 0x02);
    bus.write8(0xA123, 0xBB);

    bus.write8(0x4000, 0x00);
    assert_eq!(bus.read8(0xA123), 0xAA);
    bus.write8(0x4000, 0x02);
    assert_eq!(bus.read8(0xA123), 0xBB);
}

#[test]
fn missing_external_ram_reads_ff() {
    let mut bus = MemoryBus::new(banked_rom(2));
    bus.write8(0x0000, 0x0A);
    bus.write8(0xB000, 0x12);
    assert_eq!(bus.read8(0xB000), 0xFF);
}

#[test]
fn echo_ram_mirrors_work_ram() {
    let mut bus = MemoryBus::new(banked_rom(2));
    bus.write8(0xC123, 0x5A);
    assert_eq!(bus.read8(0xE123), 0x5A);
    bus.write8(0xFDFF, 0x77);
    assert_eq!(bus.read8(0xDDFF), 0x77);
}

#[test]
fn unusable_region_reads_ff() {
    let mut bus = MemoryBus::new(banked_rom(2));
    bus.write8(0xFEA0, 0x00);
    assert_eq!(bus.read8(0xFEA0), 0xFF);
    assert_eq!(bus.read8(0xFEFF), 0xFF);
}

#[test]
fn internal_memories_are_read_write() {
    let mut bus = MemoryBus::new(banked_rom(2));
    for addr in [0x8000, 0x9FFF, 0xC000, 0xDFFF, 0xFE00, 0xFE9F, 0xFF00, 0xFF80, 0xFFFE] {
        bus.write8(addr, 0xA5);
        assert_eq!(bus.read8(addr), 0xA5, "addr {addr:04X}");
    }
}

#[test]
fn interrupt_registers_are_bus_owned() {
    let mut bus = MemoryBus::new(banked_rom(2));
    assert_eq!(bus.read8(IF_ADDR), 0xE0);

    bus.request_interrupt(Interrupt::Timer);
    assert_eq!(bus.read8(IF_ADDR), 0xE4);

    bus.write8(IF_ADDR, 0xFF);
    assert_eq!(bus.read8(IF_ADDR), 0xFF);
    bus.write8(IF_ADDR, 0x00);
    assert_eq!(bus.read8(IF_ADDR), 0xE0);

    bus.write8(IE_ADDR, 0x1F);
    assert_eq!(bus.read8(IE_ADDR), 0x1F);
}

#[derive(Default)]
struct Probe {
    log: Vec<(u16, u8)>,
    ticks: u32,
}

struct SharedProbe(Rc<RefCell<Probe>>);

impl Device for SharedProbe {
    fn read(&mut self, addr: u16) -> u8 {
        addr as u8
    }

    fn write(&mut self, addr: u16, value: u8) {
        self.0.borrow_mut().log.push((addr, value));
    }

    fn tick(&mut self, cycles: u32) {
        self.0.borrow_mut().ticks += cycles;
    }
}

#[test]
fn attached_devices_see_absolute_addresses_and_ticks() {
    let probe = Rc::new(RefCell::new(Probe::default()));
    let mut bus = MemoryBus::new(banked_rom(2));
    bus.attach_device(Region::Io, Box::new(SharedProbe(probe.clone())));

    assert_eq!(bus.read8(0xFF44), 0x44);
    bus.write8(0xFF40, 0x91);
    // IF is still intercepted by the bus.
    bus.write8(IF_ADDR, 0x01);
    bus.tick(12);
    bus.tick(4);

    let probe = probe.borrow();
    assert_eq!(probe.log, vec![(0xFF40, 0x91)]);
    assert_eq!(probe.ticks, 16);
}
