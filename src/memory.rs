//! The flat 32768-word memory image.

use crate::error::VmError;
use crate::word::MEMORY_SIZE;

/// Every cell a program can address. Reads and writes outside
/// `[0, MEMORY_SIZE)` are rejected rather than wrapped, since the address
/// space is not circular in this architecture.
#[derive(Clone, serde::Serialize, serde::Deserialize)]
pub struct Memory(#[serde(with = "memory_serde")] Box<[u16; MEMORY_SIZE]>);

impl Memory {
    pub fn new() -> Self {
        Memory(Box::new([0; MEMORY_SIZE]))
    }

    pub fn read(&self, addr: u16) -> Result<u16, VmError> {
        self.0
            .get(addr as usize)
            .copied()
            .ok_or(VmError::InvalidAddress { addr: addr as u32 })
    }

    pub fn write(&mut self, addr: u16, value: u16) -> Result<(), VmError> {
        let cell = self
            .0
            .get_mut(addr as usize)
            .ok_or(VmError::InvalidAddress { addr: addr as u32 })?;
        *cell = value;
        Ok(())
    }

    pub fn as_slice(&self) -> &[u16] {
        self.0.as_slice()
    }

    pub fn from_slice(values: &[u16]) -> Option<Self> {
        if values.len() != MEMORY_SIZE {
            return None;
        }
        let mut cells = [0u16; MEMORY_SIZE];
        cells.copy_from_slice(values);
        Some(Memory(Box::new(cells)))
    }
}

impl Default for Memory {
    fn default() -> Self {
        Self::new()
    }
}

/// `serde` has no blanket impl for `[T; 32768]`, so the fixed array is
/// (de)serialized through a `Vec` borrow/collect.
mod memory_serde {
    use super::MEMORY_SIZE;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    pub fn serialize<S: Serializer>(
        cells: &Box<[u16; MEMORY_SIZE]>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        cells.as_slice().serialize(serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Box<[u16; MEMORY_SIZE]>, D::Error> {
        let values = Vec::<u16>::deserialize(deserializer)?;
        if values.len() != MEMORY_SIZE {
            return Err(serde::de::Error::invalid_length(values.len(), &"32768"));
        }
        let mut cells = [0u16; MEMORY_SIZE];
        cells.copy_from_slice(&values);
        Ok(Box::new(cells))
    }
}
