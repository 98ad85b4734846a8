use std::cell::Cell;
use std::rc::Rc;

use anyhow::{ensure, Result};

use super::*;
use crate::config::{BootProfile, MapperKind};
use crate::cpu::ExitReason;

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// 32 KiB ROM with `program` at `0x0100`.
fn rom_with_program(program: &[u8]) -> Vec<u8> {
    let mut rom = vec![0x00; 0x8000];
    rom[0x0100..0x0100 + program.len()].copy_from_slice(program);
    rom
}

fn run_to_halt(machine: &mut Machine) -> Result<RunSummary> {
    let summary = machine.run(Some(10_000))?;
    ensure!(
        summary.exit == ExitReason::Halted,
        "program did not halt: {:?}",
        summary
    );
    Ok(summary)
}

#[test]
fn machine_starts_from_dmg_state_at_entry_point() {
    init_logger();
    let machine = Machine::new(rom_with_program(&[]), 0x0150);
    assert_eq!(machine.registers().pc, 0x0150);
    assert_eq!(machine.registers().af(), 0x01B0);
    assert_eq!(machine.flags(), Flags::new(true, false, true, true));
    assert_eq!(machine.cycles(), 0);
}

#[test]
fn copy_loop_runs_to_halt() -> Result<()> {
    init_logger();
    // LD HL,$C000; LD B,$04; LD A,$11
    // loop: LD (HL+),A; INC A; DEC B; JR NZ,loop; HALT
    let program = [
        0x21, 0x00, 0xC0, 0x06, 0x04, 0x3E, 0x11, 0x22, 0x3C, 0x05, 0x20, 0xFB, 0x76,
    ];
    let mut machine = Machine::new(rom_with_program(&program), 0x0100);
    let summary = run_to_halt(&mut machine)?;

    for (i, expected) in [0x11, 0x12, 0x13, 0x14].into_iter().enumerate() {
        assert_eq!(machine.read8(0xC000 + i as u16), expected);
    }
    assert_eq!(machine.registers().hl(), 0xC004);
    assert_eq!(summary.instructions, 3 + 4 * 4 + 1);
    assert_eq!(machine.instructions(), summary.instructions);
    assert_eq!(machine.cycles(), summary.cycles);
    Ok(())
}

#[test]
fn call_into_switched_bank() -> Result<()> {
    init_logger();
    let mut rom = rom_with_program(&[
        0x3E, 0x02, // LD A,$02
        0xEA, 0x00, 0x20, // LD ($2000),A  -> select bank 2
        0xCD, 0x00, 0x40, // CALL $4000
        0x76, // HALT
    ]);
    rom.resize(0x4000 * 4, 0x00);
    // Bank 2: LD B,$B2; RET
    rom[0x8000..0x8003].copy_from_slice(&[0x06, 0xB2, 0xC9]);

    let mut machine = Machine::new(rom, 0x0100);
    run_to_halt(&mut machine)?;
    assert_eq!(machine.bus.rom_bank(), 2);
    assert_eq!(machine.registers().b, 0xB2);
    assert_eq!(machine.registers().sp, 0xFFFE);
    Ok(())
}

#[test]
fn unknown_opcode_is_reported_with_location() {
    init_logger();
    let mut machine = Machine::new(rom_with_program(&[0x00, 0xED]), 0x0100);
    let err = machine.run(None).unwrap_err();
    assert_eq!(
        err,
        CpuError::UnknownOpcode {
            pc: 0x0101,
            opcode: 0xED,
            executed: 1,
        }
    );
    assert_eq!(
        err.to_string(),
        "unknown opcode 0xED at PC=0x0101 (after 1 instructions)"
    );
    assert_eq!(machine.current_instruction(), "DB $ED");
}

#[test]
fn requested_interrupt_is_serviced() -> Result<()> {
    init_logger();
    // EI; LD A,$01; LDH ($FF),A -> IE = VBlank; loop: JR loop
    let mut rom = rom_with_program(&[0xFB, 0x3E, 0x01, 0xE0, 0xFF, 0x18, 0xFE]);
    // VBlank handler: LD C,$AA; HALT
    rom[0x0040..0x0043].copy_from_slice(&[0x0E, 0xAA, 0x76]);
    let mut machine = Machine::new(rom, 0x0100);

    let summary = machine.run(Some(5))?;
    assert_eq!(summary.exit, ExitReason::BudgetExhausted);
    assert_eq!(machine.registers().pc, 0x0105);

    machine.request_interrupt(Interrupt::VBlank);
    run_to_halt(&mut machine)?;
    assert_eq!(machine.registers().c, 0xAA);
    assert!(!machine.cpu.ime);
    assert_eq!(machine.read8(0xFF0F) & 0x1F, 0);
    Ok(())
}

struct CycleCounter(Rc<Cell<u64>>);

impl Device for CycleCounter {
    fn read(&mut self, _addr: u16) -> u8 {
        0xFF
    }

    fn write(&mut self, _addr: u16, _value: u8) {}

    fn tick(&mut self, cycles: u32) {
        self.0.set(self.0.get() + cycles as u64);
    }
}

#[test]
fn attached_devices_are_clocked_by_the_cpu() -> Result<()> {
    init_logger();
    let counter = Rc::new(Cell::new(0));
    let mut machine = Machine::new(rom_with_program(&[0x00, 0x00, 0x76]), 0x0100);
    machine.attach_device(Region::Io, Box::new(CycleCounter(counter.clone())));

    let summary = run_to_halt(&mut machine)?;
    assert_eq!(counter.get(), summary.cycles);
    assert_eq!(summary.cycles, 12);
    Ok(())
}

#[test]
fn config_selects_boot_profile_and_mapper() {
    init_logger();
    let mut rom = vec![0x00; 0x4000 * 4];
    rom[0x4000 * 3] = 0x33;
    let config = MachineConfig::builder()
        .rom(rom)
        .boot(BootProfile::Zeroed)
        .mapper(MapperKind::RomOnly)
        .entry_point(0x0000)
        .build();
    let mut machine = Machine::from_config(config);
    assert_eq!(machine.registers().af(), 0x0000);
    assert_eq!(machine.registers().sp, 0xFFFE);
    assert_eq!(machine.registers().pc, 0x0000);

    machine.write8(0x2000, 0x03);
    assert_eq!(machine.bus.rom_bank(), 1);
    assert_eq!(machine.bus.select_rom_bank(3), 3);
    assert_eq!(machine.read8(0x4000), 0x33);
}

#[test]
fn reset_restores_construction_state() -> Result<()> {
    init_logger();
    let mut machine = Machine::new(rom_with_program(&[0x3E, 0x42, 0xEA, 0x00, 0xC0, 0x76]), 0x0100);
    run_to_halt(&mut machine)?;
    assert_eq!(machine.read8(0xC000), 0x42);

    machine.reset();
    assert_eq!(machine.registers().pc, 0x0100);
    assert_eq!(machine.cycles(), 0);
    assert_eq!(machine.read8(0xC000), 0x00);
    assert!(!machine.cpu.halted);
    Ok(())
}

#[test]
fn stop_signal_from_machine_handle() {
    init_logger();
    let mut machine = Machine::new(rom_with_program(&[0x18, 0xFE]), 0x0100);
    machine.stop_signal().raise();
    let summary = machine.run(None).unwrap();
    assert_eq!(summary.exit, ExitReason::StopRequested);
}

#[test]
fn current_instruction_is_rendered() {
    let mut machine = Machine::new(rom_with_program(&[0xCB, 0x7C]), 0x0100);
    assert_eq!(machine.current_instruction(), "BIT 7,H");
    assert_eq!(machine.step(), Ok(8));
    assert_eq!(machine.current_instruction(), "NOP");
}
