use thiserror::Error;

/// Configuration errors raised when building a [`crate::Rope`].
///
/// Construction is the only fallible surface of the crate; every physics
/// operation afterwards is a total function over the validated state.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
    #[error("node count must be at least 2, got {0}")]
    NodeCount(usize),

    #[error("node distance must be positive, got {0}")]
    NodeDistance(f32),

    #[error("damping must be within [0, 1], got {0}")]
    Damping(f32),

    #[error("stiffness must be within [0, 0.99], got {0}")]
    Stiffness(f32),

    #[error("iteration count must be at least 1")]
    Iterations,

    #[error("collision stride must be at least 1")]
    CollideEvery,

    #[error("node collision radius must not be negative, got {0}")]
    NodeRadius(f32),

    #[error("collider buffer capacity must be at least 1")]
    ColliderBuffer,

    #[error("link width must be positive, got {0}")]
    LinkWidth(f32),
}
