//! Engine configuration
//!
//! [`EngineConfig`] is the configuration surface the front end hands to the
//! [`RunController`](crate::engine::controller::RunController). The command
//! line in `main.rs` fills it in; tests build it directly.

use crate::engine::constants::{
    DEFAULT_ARRAY_LENGTH, DEFAULT_SPEED, MAX_ELEMENT_VALUE, MAX_SPEED, MIN_ELEMENT_VALUE,
    MIN_SPEED,
};
use crate::engine::errors::EngineError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    /// Number of elements in each generated array
    pub array_length: usize,
    /// Smallest generated value (inclusive)
    pub min_value: u32,
    /// Largest generated value (inclusive)
    pub max_value: u32,
    /// Initial speed, 1 (slowest) to 100 (fastest)
    pub speed: u8,
    /// Seed for array generation; `None` seeds from the OS
    pub seed: Option<u64>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            array_length: DEFAULT_ARRAY_LENGTH,
            min_value: MIN_ELEMENT_VALUE,
            max_value: MAX_ELEMENT_VALUE,
            speed: DEFAULT_SPEED,
            seed: None,
        }
    }
}

impl EngineConfig {
    pub fn validate(&self) -> Result<(), EngineError> {
        if self.array_length == 0 {
            return Err(EngineError::InvalidConfig(
                "array length must be at least 1".to_string(),
            ));
        }
        if self.min_value > self.max_value {
            return Err(EngineError::InvalidConfig(format!(
                "value range {}..={} is empty",
                self.min_value, self.max_value
            )));
        }
        if !(MIN_SPEED..=MAX_SPEED).contains(&self.speed) {
            return Err(EngineError::InvalidConfig(format!(
                "speed {} is outside {}..={}",
                self.speed, MIN_SPEED, MAX_SPEED
            )));
        }
        Ok(())
    }
}
