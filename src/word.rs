//! Word-level constants and the literal/register addressing rule shared by
//! every component that touches raw 16-bit cells.

/// Semantic values are 15-bit: [0, MODULUS).
pub const MODULUS: u32 = 1 << 15;

/// Total addressable memory, in words.
pub const MEMORY_SIZE: usize = 1 << 15;

/// Register references occupy [REGISTER_BASE, REGISTER_BASE + REGISTER_COUNT).
pub const REGISTER_BASE: u16 = 32768;
pub const REGISTER_COUNT: u16 = 8;

/// Any raw word strictly above this is an invalid operand encoding.
pub const MAX_VALID_WORD: u16 = REGISTER_BASE + REGISTER_COUNT - 1;

/// Whether `raw` names register `raw - REGISTER_BASE`.
pub fn is_register(raw: u16) -> bool {
    (REGISTER_BASE..=MAX_VALID_WORD).contains(&raw)
}

/// Whether `raw` is a plain literal value in [0, 32767].
pub fn is_literal(raw: u16) -> bool {
    raw < REGISTER_BASE
}

/// `addr-of`: splits a raw word into (index, is_register). The index is
/// either the literal value itself or the zero-based register number.
pub fn addr_of(raw: u16) -> Option<(u16, bool)> {
    if is_literal(raw) {
        Some((raw, false))
    } else if is_register(raw) {
        Some((raw - REGISTER_BASE, true))
    } else {
        None
    }
}

pub fn wrap(value: u32) -> u16 {
    (value % MODULUS) as u16
}
