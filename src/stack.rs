//! The unbounded data/call stack.

/// A plain LIFO of words. Growth is unbounded; the only distinguished
/// failure is popping an empty stack, which callers decide how to treat
/// (a fatal fault for `pop`, a clean halt for `ret`).
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Stack(Vec<u16>);

impl Stack {
    pub fn new() -> Self {
        Stack(Vec::new())
    }

    pub fn push(&mut self, value: u16) {
        self.0.push(value);
    }

    pub fn pop(&mut self) -> Option<u16> {
        self.0.pop()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[u16] {
        &self.0
    }

    pub fn from_vec(values: Vec<u16>) -> Self {
        Stack(values)
    }
}
