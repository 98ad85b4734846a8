use std::fmt;

use super::operation::{AluOp, Condition, Operand8, Operation, Render, Shift};
use crate::cpu::{Reg16, Reg8};

/// Static information about one opcode.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Descriptor {
    /// Opcode byte (the second byte for prefixed instructions).
    pub opcode: u8,
    /// Whether this entry lives in the `0xCB` table.
    pub prefixed: bool,
    pub mnemonic: &'static str,
    pub operation: Operation,
    /// Encoded length in bytes, prefix included.
    pub length: u8,
    /// T-cycles when the instruction does not branch.
    pub cycles: u8,
    /// T-cycles when a conditional branch is taken. Equal to `cycles` for
    /// everything else.
    pub cycles_taken: u8,
}

impl Descriptor {
    fn new(opcode: u8, prefixed: bool, operation: Operation) -> Self {
        let (cycles, cycles_taken) = cycle_cost(&operation);
        Self {
            opcode,
            prefixed,
            mnemonic: operation.mnemonic(),
            operation,
            length: encoded_length(&operation),
            cycles,
            cycles_taken,
        }
    }

    pub fn is_illegal(&self) -> bool {
        self.operation == Operation::Illegal
    }

    pub fn is_prefix(&self) -> bool {
        self.operation == Operation::Prefix
    }
}

impl fmt::Display for Descriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Render {
            operation: &self.operation,
            operand: None,
            next_pc: None,
        }
        .fmt(f)
    }
}

fn encoded_length(op: &Operation) -> u8 {
    match *op {
        Operation::Load { dst, src } => 1 + dst.operand_bytes() + src.operand_bytes(),
        Operation::Alu(_, src) => 1 + src.operand_bytes(),
        Operation::LoadWordImm(_)
        | Operation::StoreSp
        | Operation::Jump(_)
        | Operation::Call(_) => 3,
        Operation::LoadHlSpOffset
        | Operation::AddSpOffset
        | Operation::JumpRelative(_)
        | Operation::Stop
        | Operation::Prefix
        | Operation::Shift(..)
        | Operation::Bit(..)
        | Operation::Res(..)
        | Operation::Set(..) => 2,
        _ => 1,
    }
}

/// Returns `(not_taken, taken)` T-cycle costs.
fn cycle_cost(op: &Operation) -> (u8, u8) {
    let fixed = |c: u8| (c, c);
    match *op {
        Operation::Nop
        | Operation::Stop
        | Operation::Halt
        | Operation::Di
        | Operation::Ei
        | Operation::RotateA(_)
        | Operation::Daa
        | Operation::Cpl
        | Operation::Scf
        | Operation::Ccf
        | Operation::JumpHl
        | Operation::Prefix => fixed(4),
        Operation::Load { dst, src } => fixed(4 + dst.access_cost() + src.access_cost()),
        Operation::LoadWordImm(_) => fixed(12),
        Operation::StoreSp => fixed(20),
        Operation::LoadSpHl => fixed(8),
        Operation::LoadHlSpOffset => fixed(12),
        Operation::Alu(_, src) => fixed(4 + src.access_cost()),
        // Read-modify-write: one access to fetch, one to store.
        Operation::Inc(t) | Operation::Dec(t) => fixed(4 + 2 * t.access_cost()),
        Operation::IncWord(_) | Operation::DecWord(_) | Operation::AddHl(_) => fixed(8),
        Operation::AddSpOffset => fixed(16),
        Operation::Jump(None) => fixed(16),
        Operation::Jump(Some(_)) => (12, 16),
        Operation::JumpRelative(None) => fixed(12),
        Operation::JumpRelative(Some(_)) => (8, 12),
        Operation::Call(None) => fixed(24),
        Operation::Call(Some(_)) => (12, 24),
        Operation::Return(None) => fixed(16),
        Operation::Return(Some(_)) => (8, 20),
        Operation::ReturnInterrupt | Operation::Restart(_) | Operation::Push(_) => fixed(16),
        Operation::Pop(_) => fixed(12),
        Operation::Shift(_, t) | Operation::Res(_, t) | Operation::Set(_, t) => {
            fixed(8 + 2 * t.access_cost())
        }
        Operation::Bit(_, t) => fixed(8 + t.access_cost()),
        Operation::Illegal => fixed(0),
    }
}

/// Register operand encoding used by the opcode bit fields:
/// 0=B, 1=C, 2=D, 3=E, 4=H, 5=L, 6=(HL), 7=A.
fn r(index: u8) -> Operand8 {
    match index & 0x07 {
        0 => Operand8::Reg(Reg8::B),
        1 => Operand8::Reg(Reg8::C),
        2 => Operand8::Reg(Reg8::D),
        3 => Operand8::Reg(Reg8::E),
        4 => Operand8::Reg(Reg8::H),
        5 => Operand8::Reg(Reg8::L),
        6 => Operand8::Indirect(Reg16::HL),
        _ => Operand8::Reg(Reg8::A),
    }
}

fn rp(index: u8) -> Reg16 {
    match index & 0x03 {
        0 => Reg16::BC,
        1 => Reg16::DE,
        2 => Reg16::HL,
        _ => Reg16::SP,
    }
}

/// Same as `rp` but with AF in place of SP (PUSH/POP).
fn rp2(index: u8) -> Reg16 {
    match index & 0x03 {
        0 => Reg16::BC,
        1 => Reg16::DE,
        2 => Reg16::HL,
        _ => Reg16::AF,
    }
}

fn cc(index: u8) -> Condition {
    match index & 0x03 {
        0 => Condition::NotZero,
        1 => Condition::Zero,
        2 => Condition::NotCarry,
        _ => Condition::Carry,
    }
}

fn alu(index: u8) -> AluOp {
    match index & 0x07 {
        0 => AluOp::Add,
        1 => AluOp::Adc,
        2 => AluOp::Sub,
        3 => AluOp::Sbc,
        4 => AluOp::And,
        5 => AluOp::Xor,
        6 => AluOp::Or,
        _ => AluOp::Cp,
    }
}

fn shift(index: u8) -> Shift {
    match index & 0x07 {
        0 => Shift::Rlc,
        1 => Shift::Rrc,
        2 => Shift::Rl,
        3 => Shift::Rr,
        4 => Shift::Sla,
        5 => Shift::Sra,
        6 => Shift::Swap,
        _ => Shift::Srl,
    }
}

const A: Operand8 = Operand8::Reg(Reg8::A);

/// Decode an unprefixed opcode into its operation.
///
/// The byte is split into the usual `x` (bits 7-6), `y` (bits 5-3) and `z`
/// (bits 2-0) fields; `p`/`q` split `y` further for the 16-bit groups.
fn base_operation(opcode: u8) -> Operation {
    let x = opcode >> 6;
    let y = (opcode >> 3) & 0x07;
    let z = opcode & 0x07;
    let p = y >> 1;
    let q = y & 0x01;

    match (x, z) {
        (0, 0) => match y {
            0 => Operation::Nop,
            1 => Operation::StoreSp,
            2 => Operation::Stop,
            3 => Operation::JumpRelative(None),
            _ => Operation::JumpRelative(Some(cc(y - 4))),
        },
        (0, 1) if q == 0 => Operation::LoadWordImm(rp(p)),
        (0, 1) => Operation::AddHl(rp(p)),
        (0, 2) => {
            let mem = match p {
                0 => Operand8::Indirect(Reg16::BC),
                1 => Operand8::Indirect(Reg16::DE),
                2 => Operand8::HlInc,
                _ => Operand8::HlDec,
            };
            if q == 0 {
                Operation::Load { dst: mem, src: A }
            } else {
                Operation::Load { dst: A, src: mem }
            }
        }
        (0, 3) if q == 0 => Operation::IncWord(rp(p)),
        (0, 3) => Operation::DecWord(rp(p)),
        (0, 4) => Operation::Inc(r(y)),
        (0, 5) => Operation::Dec(r(y)),
        (0, 6) => Operation::Load {
            dst: r(y),
            src: Operand8::Imm,
        },
        (0, _) => match y {
            0 => Operation::RotateA(Shift::Rlc),
            1 => Operation::RotateA(Shift::Rrc),
            2 => Operation::RotateA(Shift::Rl),
            3 => Operation::RotateA(Shift::Rr),
            4 => Operation::Daa,
            5 => Operation::Cpl,
            6 => Operation::Scf,
            _ => Operation::Ccf,
        },
        (1, 6) if y == 6 => Operation::Halt,
        (1, _) => Operation::Load {
            dst: r(y),
            src: r(z),
        },
        (2, _) => Operation::Alu(alu(y), r(z)),
        (_, 0) => match y {
            0..=3 => Operation::Return(Some(cc(y))),
            4 => Operation::Load {
                dst: Operand8::HighImm,
                src: A,
            },
            5 => Operation::AddSpOffset,
            6 => Operation::Load {
                dst: A,
                src: Operand8::HighImm,
            },
            _ => Operation::LoadHlSpOffset,
        },
        (_, 1) if q == 0 => Operation::Pop(rp2(p)),
        (_, 1) => match p {
            0 => Operation::Return(None),
            1 => Operation::ReturnInterrupt,
            2 => Operation::JumpHl,
            _ => Operation::LoadSpHl,
        },
        (_, 2) => match y {
            0..=3 => Operation::Jump(Some(cc(y))),
            4 => Operation::Load {
                dst: Operand8::HighC,
                src: A,
            },
            5 => Operation::Load {
                dst: Operand8::Absolute,
                src: A,
            },
            6 => Operation::Load {
                dst: A,
                src: Operand8::HighC,
            },
            _ => Operation::Load {
                dst: A,
                src: Operand8::Absolute,
            },
        },
        (_, 3) => match y {
            0 => Operation::Jump(None),
            1 => Operation::Prefix,
            6 => Operation::Di,
            7 => Operation::Ei,
            _ => Operation::Illegal,
        },
        (_, 4) => match y {
            0..=3 => Operation::Call(Some(cc(y))),
            _ => Operation::Illegal,
        },
        (_, 5) if q == 0 => Operation::Push(rp2(p)),
        (_, 5) => match p {
            0 => Operation::Call(None),
            _ => Operation::Illegal,
        },
        (_, 6) => Operation::Alu(alu(y), Operand8::Imm),
        (_, _) => Operation::Restart(y * 8),
    }
}

fn extended_operation(opcode: u8) -> Operation {
    let y = (opcode >> 3) & 0x07;
    let target = r(opcode);
    match opcode >> 6 {
        0 => Operation::Shift(shift(y), target),
        1 => Operation::Bit(y, target),
        2 => Operation::Res(y, target),
        _ => Operation::Set(y, target),
    }
}

pub(super) fn build_base_table() -> Vec<Descriptor> {
    (0..=u8::MAX)
        .map(|opcode| Descriptor::new(opcode, false, base_operation(opcode)))
        .collect()
}

pub(super) fn build_extended_table() -> Vec<Descriptor> {
    (0..=u8::MAX)
        .map(|opcode| Descriptor::new(opcode, true, extended_operation(opcode)))
        .collect()
}
