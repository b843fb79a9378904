//! ## Overview
//! This crate interprets programs for a small 16-bit stack-and-register
//! architecture: 22 opcodes, a 15-bit address space, 8 general registers,
//! and an unbounded call/data stack. Every memory cell and register holds a
//! 15-bit semantic value in `[0, 32768)`; arithmetic wraps at that modulus.
//!
//! ## Architecture
//! Memory is a flat array of 32768 words, addressed 0 through 32767.
//! Registers are addressed by raw words in `[32768, 32776)`; any other raw
//! word above 32767 is not a valid operand encoding. Every 3-operand
//! arithmetic instruction follows the same shape: two source operands
//! (literal or register, resolved by `value_of`) and one destination
//! operand (literal names a memory cell, register names itself).
//!
//! ## Execution model
//! The program counter starts at 0. Each step decodes one instruction,
//! executes it against the current memory/register/stack state, and
//! advances the program counter by `1 + arity` unless the instruction is a
//! jump, `call`, or `ret`, which assign the program counter directly.
//! `halt` and a `ret` against an empty stack both terminate the run
//! cleanly; every other way to get stuck (an invalid opcode, an
//! out-of-range operand or address, a `mod` by zero, an empty `pop`, or an
//! exhausted input stream) is a fault, reported as a [`error::VmError`] that
//! preserves the machine's state at the point of failure.
//!
//! ## Input and Output
//! `in` and `out` are byte-oriented. `in` pulls the next byte from a
//! [`input::ByteSource`]; `out` writes one byte per execution to any
//! `std::io::Write`. [`debugger::Debugger`] sits in front of a
//! [`input::LineSource`] instead, recognising meta-commands (`set`, `get`,
//! `save state`, `load state`) on whole lines before their bytes ever reach
//! the executor, and tracing every instruction from the first `in` onward.
//! It delegates all opcode semantics to the same [`vm::Vm::step`] the plain
//! `run` path uses — it never reimplements an operation.
//!
//! ## Disassembly and snapshots
//! [`disassembler::disassemble`] sweeps memory linearly using the same
//! opcode/arity table the executor decodes with, rendering undecodable
//! cells as data rather than failing. [`snapshot::Snapshot`] captures
//! `(memory, registers, stack, pc)` as JSON, letting a debugging session
//! save and restore a machine exactly.

pub mod debugger;
pub mod disassembler;
pub mod error;
pub mod input;
pub mod instruction;
pub mod memory;
pub mod program;
pub mod registers;
pub mod snapshot;
pub mod stack;
pub mod vm;
pub mod word;

pub use debugger::Debugger;
pub use disassembler::{disassemble, Line};
pub use error::VmError;
pub use instruction::{Instruction, Operand};
pub use memory::Memory;
pub use program::Program;
pub use registers::Registers;
pub use snapshot::{Snapshot, SnapshotError};
pub use stack::Stack;
pub use vm::{Vm, VmState};
