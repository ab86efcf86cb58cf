// Constants for the stepping engine

/// Slowest selectable speed
pub const MIN_SPEED: u8 = 1;

/// Fastest selectable speed
pub const MAX_SPEED: u8 = 100;

/// Speed used when nothing else is configured
pub const DEFAULT_SPEED: u8 = 50;

/// Per-step delay is `BASE_DELAY_MS - speed` milliseconds
pub const BASE_DELAY_MS: u64 = 101;

/// Lower bound for the per-step delay
pub const MIN_DELAY_MS: u64 = 1;

/// Fixed pause after binary search replaces the array with its sorted copy
pub const PRESORT_PAUSE_MS: u64 = 500;

/// Number of elements in a freshly generated array
pub const DEFAULT_ARRAY_LENGTH: usize = 20;

/// Smallest value a generated element can take
pub const MIN_ELEMENT_VALUE: u32 = 10;

/// Largest value a generated element can take (inclusive)
pub const MAX_ELEMENT_VALUE: u32 = 309;
