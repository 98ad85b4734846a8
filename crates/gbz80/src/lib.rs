//! Instruction-execution core for the Game Boy CPU (Sharp LR35902).
//!
//! [`Cpu`] fetches, decodes and executes instructions against any [`Bus`];
//! [`MemoryBus`] provides the cartridge-backed address space and
//! [`Machine`] ties the two together.

pub mod config;
pub mod cpu;
mod error;
pub mod machine;
pub mod memory;
pub mod opcodes;

pub use config::{BootProfile, MachineConfig, MapperKind};
pub use cpu::{Bus, Cpu, ExitReason, Flags, Interrupt, Reg16, Reg8, Registers, RunSummary, StopSignal};
pub use error::CpuError;
pub use machine::Machine;
pub use memory::{Device, MemoryBus, Region};
