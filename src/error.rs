//! Error types for the simulation core

/// Errors returned by the orchestrator's public entry points
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SimError {
    #[error("Invalid frame delta: {0} (must be finite and within 0..=0.1s)")]
    InvalidDelta(f32),
    #[error("Invalid configuration: {0}")]
    InvalidConfig(#[from] ConfigError),
}

/// Out-of-range tuning values rejected by `GameConfig::validate`
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("Screen size {width}x{height} is too small")]
    ScreenTooSmall { width: f32, height: f32 },
    #[error("{0} must be positive")]
    NonPositive(&'static str),
    #[error("Spawn floor {floor}ms exceeds initial interval {initial}ms")]
    SpawnFloorAboveInterval { floor: u64, initial: u64 },
    #[error("Starting lives must be between 1 and 3, got {0}")]
    StartingLives(u8),
}
