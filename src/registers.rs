//! The eight general-purpose registers.

use crate::word::{wrap, REGISTER_COUNT};

/// Fixed bank of R0..R7. Every stored value is kept in [0, 32767].
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Registers([u16; REGISTER_COUNT as usize]);

impl Registers {
    pub fn new() -> Self {
        Registers([0; REGISTER_COUNT as usize])
    }

    pub fn get(&self, index: u16) -> u16 {
        self.0[index as usize]
    }

    /// Stores `value` after wrapping it modulo 32768.
    pub fn set(&mut self, index: u16, value: u32) {
        self.0[index as usize] = wrap(value);
    }

    pub fn as_slice(&self) -> &[u16] {
        &self.0
    }

    pub fn from_slice(values: &[u16]) -> Option<Self> {
        if values.len() != REGISTER_COUNT as usize {
            return None;
        }
        let mut regs = [0u16; REGISTER_COUNT as usize];
        regs.copy_from_slice(values);
        Some(Registers(regs))
    }
}

impl Default for Registers {
    fn default() -> Self {
        Self::new()
    }
}
