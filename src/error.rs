//! Error types for the executor.
//!
//! `VmError` covers every way a running machine can fault; `SnapshotError`
//! (see [`crate::snapshot`]) is kept separate so a bad save/load path can
//! never be mistaken for a fault of the program itself.

use thiserror::Error;

/// Everything that can stop a [`crate::vm::Vm`] from making progress.
#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum VmError {
    #[error("program image ended on an odd byte boundary")]
    ShortImage,

    #[error("program image is larger than the 32768-word address space")]
    ImageTooLarge,

    #[error("pop from an empty stack at address {pc}")]
    EmptyStackPop { pc: u16 },

    #[error("operand {word} at address {pc} does not name a literal or a register")]
    InvalidOperand { pc: u16, word: u16 },

    #[error("address {addr} is outside the 32768-word address space")]
    InvalidAddress { addr: u32 },

    #[error("opcode {opcode} at address {pc} is not a defined instruction")]
    InvalidInstruction { pc: u16, opcode: u16 },

    #[error("mod by zero at address {pc}")]
    DivisionByZero { pc: u16 },

    #[error("input exhausted while executing `in` at address {pc}")]
    InputExhausted { pc: u16 },
}
