use std::fmt;

use super::operation::Render;
use super::{decode, decode_extended, Descriptor};
use crate::cpu::Bus;

/// Why the bytes at an address do not form an executable instruction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum DecodeFault {
    #[error("illegal opcode 0x{opcode:02X}")]
    Illegal { opcode: u8 },
    /// The encoding would extend past `0xFFFF`.
    #[error("truncated instruction 0x{opcode:02X}")]
    Truncated { opcode: u8 },
}

impl DecodeFault {
    pub fn opcode(&self) -> u8 {
        match *self {
            DecodeFault::Illegal { opcode } | DecodeFault::Truncated { opcode } => opcode,
        }
    }
}

/// A decoded instruction: where it lives, what it is, and its immediate
/// operand (zero when the encoding has none).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Instruction {
    pub address: u16,
    pub descriptor: &'static Descriptor,
    pub operand: u16,
}

impl Instruction {
    /// Read and decode the instruction at `address`.
    ///
    /// Resolves the `0xCB` prefix and reads exactly the operand bytes the
    /// descriptor calls for. Never reads past `0xFFFF`.
    pub fn fetch<B: Bus>(bus: &mut B, address: u16) -> Result<Self, DecodeFault> {
        let opcode = bus.read8(address);
        let mut descriptor = decode(opcode);

        if descriptor.is_illegal() {
            return Err(DecodeFault::Illegal { opcode });
        }

        let last = address as u32 + descriptor.length as u32 - 1;
        if last > 0xFFFF {
            return Err(DecodeFault::Truncated { opcode });
        }

        let operand = if descriptor.is_prefix() {
            descriptor = decode_extended(bus.read8(address.wrapping_add(1)));
            0
        } else {
            match descriptor.length {
                2 => bus.read8(address.wrapping_add(1)) as u16,
                3 => {
                    let lo = bus.read8(address.wrapping_add(1));
                    let hi = bus.read8(address.wrapping_add(2));
                    u16::from_le_bytes([lo, hi])
                }
                _ => 0,
            }
        };

        Ok(Self {
            address,
            descriptor,
            operand,
        })
    }

    #[inline]
    pub fn len(&self) -> u8 {
        self.descriptor.length
    }

    /// Address of the byte after this instruction.
    #[inline]
    pub fn next_address(&self) -> u16 {
        self.address.wrapping_add(self.descriptor.length as u16)
    }

    #[inline]
    pub fn imm8(&self) -> u8 {
        self.operand as u8
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Render {
            operation: &self.descriptor.operation,
            operand: Some(self.operand),
            next_pc: Some(self.next_address()),
        }
        .fmt(f)
    }
}

/// Render the instruction at `address` with concrete operand values.
///
/// Returns the text and the number of bytes consumed. Bytes that do not
/// decode are shown as a single `DB $XX` data byte.
pub fn disassemble<B: Bus>(bus: &mut B, address: u16) -> (String, u8) {
    match Instruction::fetch(bus, address) {
        Ok(instruction) => (instruction.to_string(), instruction.len()),
        Err(fault) => (format!("DB ${:02X}", fault.opcode()), 1),
    }
}
