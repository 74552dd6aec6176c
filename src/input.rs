// Input sources
// Demo sequence policies and fail-fast parsing of caller-supplied text

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::trace::types::{StackOp, Value};

#[derive(Error, Debug)]
pub enum InputError {
    #[error("Demo sequence length must be at least 1")]
    EmptyDemo,

    #[error("Majority share {majority_count} exceeds sequence length {len}")]
    MajorityExceedsLength { majority_count: usize, len: usize },

    #[error("Invalid value '{token}': expected an integer")]
    InvalidValue { token: String },

    #[error("Invalid stack operation '{token}': expected 'push <value>' or 'pop'")]
    InvalidOperation { token: String },

    #[error("No values supplied")]
    Empty,
}

/// Policy for generating a demo array
///
/// Mirrors the visualizer's shuffle button: a handful of copies of one
/// small value, padded with distinct larger values, shuffled. With
/// `majority_count` over half of `len` the demo has a true majority
/// element; lower shares exercise the negative result path.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DemoSequenceConfig {
    /// Total number of elements
    pub len: usize,

    /// How many copies of the majority value to include
    pub majority_count: usize,

    /// Fixed seed for reproducible demos; None draws from entropy
    pub seed: Option<u64>,
}

impl Default for DemoSequenceConfig {
    fn default() -> Self {
        DemoSequenceConfig {
            len: 10,
            majority_count: 6,
            seed: None,
        }
    }
}

/// Generate a shuffled demo sequence according to the policy
///
/// The majority value is drawn from 1..=10 and the filler values from
/// 11..=20, so the two groups never collide.
pub fn generate_demo_sequence(config: &DemoSequenceConfig) -> Result<Vec<Value>, InputError> {
    if config.len == 0 {
        return Err(InputError::EmptyDemo);
    }
    if config.majority_count > config.len {
        return Err(InputError::MajorityExceedsLength {
            majority_count: config.majority_count,
            len: config.len,
        });
    }

    let mut rng = match config.seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_entropy(),
    };

    let majority_value: Value = rng.gen_range(1..=10);
    let other_value: Value = rng.gen_range(11..=20);

    let mut sequence: Vec<Value> = (0..config.len)
        .map(|i| {
            if i < config.majority_count {
                majority_value
            } else {
                other_value
            }
        })
        .collect();
    sequence.shuffle(&mut rng);

    Ok(sequence)
}

/// Parse a comma- or whitespace-separated list of integers
///
/// Fails fast on the first malformed token; no partial output.
pub fn parse_values(input: &str) -> Result<Vec<Value>, InputError> {
    let mut values = Vec::new();

    for token in input.split(|c: char| c == ',' || c.is_whitespace()) {
        let token = token.trim();
        if token.is_empty() {
            continue;
        }
        let value = token.parse::<Value>().map_err(|_| InputError::InvalidValue {
            token: token.to_string(),
        })?;
        values.push(value);
    }

    if values.is_empty() {
        return Err(InputError::Empty);
    }

    Ok(values)
}

/// Parse a comma-separated stack script such as "push 10, push 20, pop"
pub fn parse_stack_script(input: &str) -> Result<Vec<StackOp>, InputError> {
    let mut ops = Vec::new();

    for raw in input.split(',') {
        let token = raw.trim();
        if token.is_empty() {
            continue;
        }

        let mut words = token.split_whitespace();
        match (words.next(), words.next(), words.next()) {
            (Some("pop"), None, _) => ops.push(StackOp::Pop),
            (Some("push"), Some(value), None) => {
                let value = value.parse::<Value>().map_err(|_| InputError::InvalidValue {
                    token: value.to_string(),
                })?;
                ops.push(StackOp::Push { value });
            }
            _ => {
                return Err(InputError::InvalidOperation {
                    token: token.to_string(),
                })
            }
        }
    }

    if ops.is_empty() {
        return Err(InputError::Empty);
    }

    Ok(ops)
}
