use std::fmt;

use crate::cpu::{Reg16, Reg8};

/// Where an 8-bit operand lives.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operand8 {
    /// A register (never F).
    Reg(Reg8),
    /// `d8`: the byte following the opcode.
    Imm,
    /// `(BC)`, `(DE)` or `(HL)`.
    Indirect(Reg16),
    /// `(HL+)`: memory at HL, HL incremented afterwards.
    HlInc,
    /// `(HL-)`: memory at HL, HL decremented afterwards.
    HlDec,
    /// `(a16)`: memory at the 16-bit address following the opcode.
    Absolute,
    /// `(FF00+a8)`: high page, offset taken from the operand byte.
    HighImm,
    /// `(FF00+C)`: high page, offset taken from register C.
    HighC,
}

impl Operand8 {
    /// Number of operand bytes this addressing mode consumes.
    pub const fn operand_bytes(self) -> u8 {
        match self {
            Operand8::Imm | Operand8::HighImm => 1,
            Operand8::Absolute => 2,
            _ => 0,
        }
    }

    /// Extra T-cycles for one access through this addressing mode.
    pub const fn access_cost(self) -> u8 {
        match self {
            Operand8::Reg(_) => 0,
            Operand8::Imm
            | Operand8::Indirect(_)
            | Operand8::HlInc
            | Operand8::HlDec
            | Operand8::HighC => 4,
            Operand8::HighImm => 8,
            Operand8::Absolute => 12,
        }
    }
}

/// Branch condition. Each one reads exactly one flag.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Condition {
    NotZero,
    Zero,
    NotCarry,
    Carry,
}

impl Condition {
    pub const fn name(self) -> &'static str {
        match self {
            Condition::NotZero => "NZ",
            Condition::Zero => "Z",
            Condition::NotCarry => "NC",
            Condition::Carry => "C",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AluOp {
    Add,
    Adc,
    Sub,
    Sbc,
    And,
    Xor,
    Or,
    Cp,
}

impl AluOp {
    pub const fn name(self) -> &'static str {
        match self {
            AluOp::Add => "ADD",
            AluOp::Adc => "ADC",
            AluOp::Sub => "SUB",
            AluOp::Sbc => "SBC",
            AluOp::And => "AND",
            AluOp::Xor => "XOR",
            AluOp::Or => "OR",
            AluOp::Cp => "CP",
        }
    }
}

/// Rotate/shift family shared by the CB space and the unprefixed
/// accumulator rotates.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Shift {
    Rlc,
    Rrc,
    Rl,
    Rr,
    Sla,
    Sra,
    Swap,
    Srl,
}

impl Shift {
    pub const fn name(self) -> &'static str {
        match self {
            Shift::Rlc => "RLC",
            Shift::Rrc => "RRC",
            Shift::Rl => "RL",
            Shift::Rr => "RR",
            Shift::Sla => "SLA",
            Shift::Sra => "SRA",
            Shift::Swap => "SWAP",
            Shift::Srl => "SRL",
        }
    }
}

/// Every operation the CPU can perform, with its operands.
///
/// Conditional control flow carries `Option<Condition>`; `None` is the
/// unconditional form.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operation {
    Nop,
    Stop,
    Halt,
    Di,
    Ei,

    Load { dst: Operand8, src: Operand8 },
    LoadWordImm(Reg16),
    StoreSp,
    LoadSpHl,
    LoadHlSpOffset,

    Alu(AluOp, Operand8),
    Inc(Operand8),
    Dec(Operand8),
    IncWord(Reg16),
    DecWord(Reg16),
    AddHl(Reg16),
    AddSpOffset,
    RotateA(Shift),
    Daa,
    Cpl,
    Scf,
    Ccf,

    Jump(Option<Condition>),
    JumpHl,
    JumpRelative(Option<Condition>),
    Call(Option<Condition>),
    Return(Option<Condition>),
    ReturnInterrupt,
    Restart(u8),
    Push(Reg16),
    Pop(Reg16),

    /// The `0xCB` prefix byte; the real instruction comes from the
    /// extended table.
    Prefix,
    Shift(Shift, Operand8),
    Bit(u8, Operand8),
    Res(u8, Operand8),
    Set(u8, Operand8),

    /// Unassigned opcode.
    Illegal,
}

impl Operation {
    pub fn mnemonic(&self) -> &'static str {
        match *self {
            Operation::Nop => "NOP",
            Operation::Stop => "STOP",
            Operation::Halt => "HALT",
            Operation::Di => "DI",
            Operation::Ei => "EI",
            Operation::Load { dst, src } => {
                if dst == Operand8::HighImm || src == Operand8::HighImm {
                    "LDH"
                } else {
                    "LD"
                }
            }
            Operation::LoadWordImm(_)
            | Operation::StoreSp
            | Operation::LoadSpHl
            | Operation::LoadHlSpOffset => "LD",
            Operation::Alu(op, _) => op.name(),
            Operation::Inc(_) | Operation::IncWord(_) => "INC",
            Operation::Dec(_) | Operation::DecWord(_) => "DEC",
            Operation::AddHl(_) | Operation::AddSpOffset => "ADD",
            Operation::RotateA(shift) => match shift {
                Shift::Rlc => "RLCA",
                Shift::Rrc => "RRCA",
                Shift::Rl => "RLA",
                Shift::Rr => "RRA",
                other => other.name(),
            },
            Operation::Daa => "DAA",
            Operation::Cpl => "CPL",
            Operation::Scf => "SCF",
            Operation::Ccf => "CCF",
            Operation::Jump(_) | Operation::JumpHl => "JP",
            Operation::JumpRelative(_) => "JR",
            Operation::Call(_) => "CALL",
            Operation::Return(_) => "RET",
            Operation::ReturnInterrupt => "RETI",
            Operation::Restart(_) => "RST",
            Operation::Push(_) => "PUSH",
            Operation::Pop(_) => "POP",
            Operation::Prefix => "PREFIX",
            Operation::Shift(shift, _) => shift.name(),
            Operation::Bit(..) => "BIT",
            Operation::Res(..) => "RES",
            Operation::Set(..) => "SET",
            Operation::Illegal => "ILLEGAL",
        }
    }

    /// Whether the cost depends on a branch being taken.
    pub fn is_conditional(&self) -> bool {
        matches!(
            self,
            Operation::Jump(Some(_))
                | Operation::JumpRelative(Some(_))
                | Operation::Call(Some(_))
                | Operation::Return(Some(_))
        )
    }
}

/// Renders an operation in assembler syntax. When `operand` is `None` the
/// immediate operands are shown as placeholders (`d8`, `a16`, `r8`, ...).
pub(crate) struct Render<'a> {
    pub(crate) operation: &'a Operation,
    pub(crate) operand: Option<u16>,
    /// Address of the following instruction, used to resolve JR targets.
    pub(crate) next_pc: Option<u16>,
}

impl Render<'_> {
    fn operand8(&self, f: &mut fmt::Formatter<'_>, op: Operand8) -> fmt::Result {
        match (op, self.operand) {
            (Operand8::Reg(r), _) => f.write_str(r.name()),
            (Operand8::Imm, None) => f.write_str("d8"),
            (Operand8::Imm, Some(v)) => write!(f, "${:02X}", v as u8),
            (Operand8::Indirect(rr), _) => write!(f, "({})", rr.name()),
            (Operand8::HlInc, _) => f.write_str("(HL+)"),
            (Operand8::HlDec, _) => f.write_str("(HL-)"),
            (Operand8::Absolute, None) => f.write_str("(a16)"),
            (Operand8::Absolute, Some(v)) => write!(f, "(${v:04X})"),
            (Operand8::HighImm, None) => f.write_str("(FF00+a8)"),
            (Operand8::HighImm, Some(v)) => write!(f, "(${:04X})", 0xFF00 | (v & 0xFF)),
            (Operand8::HighC, _) => f.write_str("(FF00+C)"),
        }
    }

    fn word(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.operand {
            Some(v) => write!(f, "${v:04X}"),
            None => f.write_str("a16"),
        }
    }

    fn offset(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.operand {
            Some(v) => {
                let e = v as u8 as i8;
                if e < 0 {
                    write!(f, "-{}", (e as i16).unsigned_abs())
                } else {
                    write!(f, "+{e}")
                }
            }
            None => f.write_str("+e8"),
        }
    }

    fn condition(f: &mut fmt::Formatter<'_>, cc: Option<Condition>) -> fmt::Result {
        match cc {
            Some(cc) => write!(f, "{},", cc.name()),
            None => Ok(()),
        }
    }
}

impl fmt::Display for Render<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let op = self.operation;
        f.write_str(op.mnemonic())?;
        match *op {
            Operation::Load { dst, src } => {
                f.write_str(" ")?;
                self.operand8(f, dst)?;
                f.write_str(",")?;
                self.operand8(f, src)
            }
            Operation::LoadWordImm(rr) => {
                write!(f, " {},", rr.name())?;
                match self.operand {
                    Some(v) => write!(f, "${v:04X}"),
                    None => f.write_str("d16"),
                }
            }
            Operation::StoreSp => {
                f.write_str(" ")?;
                self.operand8(f, Operand8::Absolute)?;
                f.write_str(",SP")
            }
            Operation::LoadSpHl => f.write_str(" SP,HL"),
            Operation::LoadHlSpOffset => {
                f.write_str(" HL,SP")?;
                self.offset(f)
            }
            Operation::Alu(_, src) => {
                f.write_str(" A,")?;
                self.operand8(f, src)
            }
            Operation::Inc(target) | Operation::Dec(target) | Operation::Shift(_, target) => {
                f.write_str(" ")?;
                self.operand8(f, target)
            }
            Operation::IncWord(rr) | Operation::DecWord(rr) => write!(f, " {}", rr.name()),
            Operation::Push(rr) | Operation::Pop(rr) => write!(f, " {}", rr.name()),
            Operation::AddHl(rr) => write!(f, " HL,{}", rr.name()),
            Operation::AddSpOffset => {
                f.write_str(" SP,")?;
                match self.operand {
                    Some(_) => self.offset(f),
                    None => f.write_str("e8"),
                }
            }
            Operation::Jump(cc) | Operation::Call(cc) => {
                f.write_str(" ")?;
                Self::condition(f, cc)?;
                self.word(f)
            }
            Operation::JumpHl => f.write_str(" HL"),
            Operation::JumpRelative(cc) => {
                f.write_str(" ")?;
                Self::condition(f, cc)?;
                match (self.operand, self.next_pc) {
                    (Some(v), Some(next)) => {
                        let target = next.wrapping_add(v as u8 as i8 as u16);
                        write!(f, "${target:04X}")
                    }
                    _ => f.write_str("r8"),
                }
            }
            Operation::Return(Some(cc)) => write!(f, " {}", cc.name()),
            Operation::Restart(vector) => write!(f, " ${vector:02X}"),
            Operation::Bit(bit, target) | Operation::Res(bit, target) | Operation::Set(bit, target) => {
                write!(f, " {bit},")?;
                self.operand8(f, target)
            }
            _ => Ok(()),
        }
    }
}
