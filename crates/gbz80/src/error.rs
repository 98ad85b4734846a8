use crate::opcodes::DecodeFault;

/// Reasons the CPU refuses to execute the instruction at PC.
///
/// In both cases PC is left pointing at the offending opcode and nothing
/// from the failing instruction has been applied. `executed` counts the
/// instructions the current `run` call completed before the fault (always
/// zero for a single `step`).
#[derive(thiserror::Error, Clone, Debug, PartialEq, Eq)]
pub enum CpuError {
    #[error("unknown opcode 0x{opcode:02X} at PC=0x{pc:04X} (after {executed} instructions)")]
    UnknownOpcode { pc: u16, opcode: u8, executed: u64 },
    #[error(
        "malformed instruction 0x{opcode:02X} at PC=0x{pc:04X}: operands run past 0xFFFF (after {executed} instructions)"
    )]
    MalformedInstruction { pc: u16, opcode: u8, executed: u64 },
}

impl CpuError {
    pub(crate) fn from_fault(fault: DecodeFault, pc: u16, executed: u64) -> Self {
        match fault {
            DecodeFault::Illegal { opcode } => CpuError::UnknownOpcode {
                pc,
                opcode,
                executed,
            },
            DecodeFault::Truncated { opcode } => CpuError::MalformedInstruction {
                pc,
                opcode,
                executed,
            },
        }
    }

    pub fn pc(&self) -> u16 {
        match *self {
            CpuError::UnknownOpcode { pc, .. } | CpuError::MalformedInstruction { pc, .. } => pc,
        }
    }

    pub fn opcode(&self) -> u8 {
        match *self {
            CpuError::UnknownOpcode { opcode, .. }
            | CpuError::MalformedInstruction { opcode, .. } => opcode,
        }
    }

    pub fn executed(&self) -> u64 {
        match *self {
            CpuError::UnknownOpcode { executed, .. }
            | CpuError::MalformedInstruction { executed, .. } => executed,
        }
    }
}
