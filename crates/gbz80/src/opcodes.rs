//! Opcode tables for the unprefixed and `0xCB`-prefixed instruction spaces.
//!
//! Both tables are total: every byte maps to a [`Descriptor`]. Unassigned
//! bytes map to [`Operation::Illegal`].

mod instruction;
mod operation;
mod table;

use lazy_static::lazy_static;

pub use instruction::{disassemble, DecodeFault, Instruction};
pub use operation::{AluOp, Condition, Operand8, Operation, Shift};
pub use table::Descriptor;

/// The byte that selects the extended table.
pub const PREFIX: u8 = 0xCB;

lazy_static! {
    static ref BASE: Vec<Descriptor> = table::build_base_table();
    static ref EXTENDED: Vec<Descriptor> = table::build_extended_table();
}

/// Look up an unprefixed opcode.
#[inline]
pub fn decode(opcode: u8) -> &'static Descriptor {
    &BASE[opcode as usize]
}

/// Look up the byte following a `0xCB` prefix.
#[inline]
pub fn decode_extended(opcode: u8) -> &'static Descriptor {
    &EXTENDED[opcode as usize]
}
