//! Whole-VM state snapshots, used by the debugger's `save state`/`load
//! state` meta-commands.

use crate::memory::Memory;
use crate::registers::Registers;
use crate::stack::Stack;
use crate::vm::Vm;
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("snapshot I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed snapshot: {0}")]
    Format(#[from] serde_json::Error),

    #[error("snapshot memory has {0} cells, expected 32768")]
    BadMemoryLen(usize),

    #[error("snapshot registers have {0} cells, expected 8")]
    BadRegisterLen(usize),
}

/// The serializable shape of a VM's state. Field order is cosmetic; the
/// deserializer rebuilds `Memory`/`Registers`/`Stack` from plain vectors so
/// the wire format stays a flat, human-inspectable JSON document.
#[derive(serde::Serialize, serde::Deserialize)]
pub struct Snapshot {
    memory: Vec<u16>,
    registers: Vec<u16>,
    stack: Vec<u16>,
    pc: u16,
}

impl Snapshot {
    pub fn capture(vm: &Vm) -> Self {
        Snapshot {
            memory: vm.memory().as_slice().to_vec(),
            registers: vm.registers().as_slice().to_vec(),
            stack: vm.stack().as_slice().to_vec(),
            pc: vm.pc(),
        }
    }

    pub fn into_vm(self) -> Result<Vm, SnapshotError> {
        let memory_len = self.memory.len();
        let memory = Memory::from_slice(&self.memory).ok_or(SnapshotError::BadMemoryLen(memory_len))?;

        let registers_len = self.registers.len();
        let registers =
            Registers::from_slice(&self.registers).ok_or(SnapshotError::BadRegisterLen(registers_len))?;

        let stack = Stack::from_vec(self.stack);

        Ok(Vm::from_parts(memory, registers, stack, self.pc))
    }

    pub fn save(vm: &Vm, path: &Path) -> Result<(), SnapshotError> {
        let file = File::create(path)?;
        serde_json::to_writer_pretty(BufWriter::new(file), &Snapshot::capture(vm))?;
        Ok(())
    }

    pub fn load(path: &Path) -> Result<Vm, SnapshotError> {
        let file = File::open(path)?;
        let snapshot: Snapshot = serde_json::from_reader(BufReader::new(file))?;
        snapshot.into_vm()
    }
}
