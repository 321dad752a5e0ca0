//! Row normalization: numeric fields mapped to a fixed-length vector in [0,1].

use crate::{data::row::Row, random::stream::SeededStream};

pub const PARAM_COUNT: usize = 12;

/// Twelve values in [0,1], consumed positionally by the shape renderers.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NormalizedRow(pub [f64; PARAM_COUNT]);

impl NormalizedRow {
    pub const X: usize = 0;
    pub const Y: usize = 1;
    pub const SIZE: usize = 2;
    pub const ANGLE: usize = 3;
    pub const WIDTH: usize = 4;
    pub const VIGOR: usize = 5;
    pub const CTRL_X: usize = 6;
    pub const CTRL_Y: usize = 7;
    pub const TURNS: usize = 8;

    /// Normalizes a pre-filtered list of finite values.
    ///
    /// Short lists are padded from a stream seeded with the *unnormalized* list's
    /// debug form (e.g. `[1.0, 5.0]`).
    pub fn from_values(values: &[f64]) -> Self {
        let vals: Vec<f64> = if values.is_empty() {
            vec![0.0]
        } else {
            values.to_vec()
        };

        let lo = vals.iter().copied().fold(f64::INFINITY, f64::min);
        let mut hi = vals.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        if hi == lo {
            hi = lo + 1.0;
        }

        // Halves keep the span finite for values near f64::MAX.
        let span = hi / 2.0 - lo / 2.0;
        let mut norm: Vec<f64> = vals
            .iter()
            .map(|v| {
                if span > 0.0 {
                    (v / 2.0 - lo / 2.0) / span
                } else {
                    0.0
                }
            })
            .collect();
        if norm.len() < PARAM_COUNT {
            let mut stream = SeededStream::new(&format!("{vals:?}"));
            while norm.len() < PARAM_COUNT {
                norm.push(stream.unit());
            }
        }

        let mut out = [0.0; PARAM_COUNT];
        for (slot, v) in out.iter_mut().zip(norm) {
            *slot = if v.is_finite() { v.clamp(0.0, 1.0) } else { 0.0 };
        }
        Self(out)
    }

    pub fn from_row(row: &Row, excluded: &[&str]) -> Self {
        Self::from_values(&numeric_values(row, excluded))
    }

    pub fn get(&self, idx: usize) -> f64 {
        self.0.get(idx).copied().unwrap_or(0.0)
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }
}

/// Finite numeric values of a row, in field order, skipping `excluded` fields.
pub fn numeric_values(row: &Row, excluded: &[&str]) -> Vec<f64> {
    row.fields()
        .filter(|(name, _)| !excluded.contains(name))
        .filter_map(|(_, v)| v.as_finite_f64())
        .collect()
}

#[cfg(test)]
#[path = "../../tests/unit/data/normalize.rs"]
mod tests;
