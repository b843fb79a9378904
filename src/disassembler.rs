//! Linear disassembly: a single sweep of memory, decoding every cell as
//! either an instruction or raw data by the same arity table the executor
//! uses to decode.

use crate::instruction::op_codes;
use crate::memory::Memory;
use std::fmt;

/// One disassembled line: an instruction with its operands, or a data word.
pub enum Line {
    Instruction { addr: u16, text: String },
    Data { addr: u16, word: u16 },
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Line::Instruction { addr, text } => write!(f, "{}: {}", addr, text),
            Line::Data { addr, word } => write!(f, "{}: {}", addr, word),
        }
    }
}

/// Sweeps every cell of `memory` from address 0, advancing by `1 + arity`
/// for recognised opcodes and by 1 for anything else. Never errors: an
/// out-of-range operand or a trailing partial instruction near the top of
/// memory is rendered as data instead of failing, since a disassembler
/// must stay total over every cell.
pub fn disassemble(memory: &Memory) -> Vec<Line> {
    let cells = memory.as_slice();
    let mut lines = Vec::new();
    let mut addr: usize = 0;

    while addr < cells.len() {
        let opcode = cells[addr];
        match op_codes::arity(opcode) {
            Some(arity) if addr + arity as usize + 1 <= cells.len() => {
                let mnemonic = op_codes::mnemonic(opcode).unwrap();
                let operands = &cells[addr + 1..addr + 1 + arity as usize];
                let text = if operands.is_empty() {
                    mnemonic.to_string()
                } else {
                    let rendered: Vec<String> = operands.iter().map(render_operand).collect();
                    format!("{} {}", mnemonic, rendered.join(" "))
                };
                lines.push(Line::Instruction { addr: addr as u16, text });
                addr += 1 + arity as usize;
            }
            _ => {
                lines.push(Line::Data { addr: addr as u16, word: opcode });
                addr += 1;
            }
        }
    }

    lines
}

fn render_operand(word: &u16) -> String {
    match crate::word::addr_of(*word) {
        Some((index, true)) => format!("r{}", index),
        Some((value, false)) => value.to_string(),
        None => format!("<{}>", word),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sweeps_the_whole_address_space_exactly_once() {
        let memory = Memory::new();
        let lines = disassemble(&memory);
        let total: usize = lines
            .iter()
            .map(|line| match line {
                Line::Instruction { text, .. } => 1 + text.split_whitespace().count() - 1,
                Line::Data { .. } => 1,
            })
            .sum();
        assert_eq!(total, crate::word::MEMORY_SIZE);
    }

    #[test]
    fn renders_known_instruction_with_operands() {
        let mut memory = Memory::new();
        memory.write(0, 9).unwrap();
        memory.write(1, 32768).unwrap();
        memory.write(2, 1).unwrap();
        memory.write(3, 2).unwrap();
        let lines = disassemble_prefix(&memory, 4);
        match &lines[0] {
            Line::Instruction { addr, text } => {
                assert_eq!(*addr, 0);
                assert_eq!(text, "add r0 1 2");
            }
            Line::Data { .. } => panic!("expected an instruction"),
        }
    }

    fn disassemble_prefix(memory: &Memory, n: usize) -> Vec<Line> {
        disassemble(memory).into_iter().take(n).collect()
    }
}
