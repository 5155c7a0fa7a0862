use thiserror::Error;

/// Rejected physical configuration. Raised when parameters are built, never per frame.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("arm {arm} length must be positive, got {value}")]
    NonPositiveLength { arm: u8, value: f64 },

    #[error("bob {bob} mass must be positive, got {value}")]
    NonPositiveMass { bob: u8, value: f64 },

    #[error("timestep must be positive, got {0}")]
    NonPositiveTimestep(f64),

    #[error("gravity must be finite, got {0}")]
    NonFiniteGravity(f64),
}
