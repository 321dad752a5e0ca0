//! Content-addressed byte stream.
//!
//! A [`SeededStream`] turns a seed string into an unbounded sequence of bytes by
//! reading a SHA-256 digest front to back and replacing it with the hash of itself
//! once it is exhausted. Nothing outside the seed influences the output.

use crate::foundation::math::{Digest32, sha256};

#[derive(Clone, Debug)]
pub struct SeededStream {
    state: Digest32,
    cursor: usize,
}

impl SeededStream {
    pub fn new(seed: &str) -> Self {
        Self {
            state: sha256(seed.as_bytes()),
            cursor: 0,
        }
    }

    pub fn next_byte(&mut self) -> u8 {
        if self.cursor >= self.state.len() {
            self.state = sha256(&self.state);
            self.cursor = 0;
        }
        let b = self.state[self.cursor];
        self.cursor += 1;
        b
    }

    /// `low + (high - low) * byte / 255`, so both ends are reachable.
    pub fn uniform(&mut self, low: f64, high: f64) -> f64 {
        low + (high - low) * (f64::from(self.next_byte()) / 255.0)
    }

    pub fn unit(&mut self) -> f64 {
        self.uniform(0.0, 1.0)
    }

    pub fn choice<'a, T>(&mut self, seq: &'a [T]) -> Option<&'a T> {
        if seq.is_empty() {
            return None;
        }
        let idx = (self.unit() * seq.len() as f64).floor() as usize % seq.len();
        seq.get(idx)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/random/stream.rs"]
mod tests;
