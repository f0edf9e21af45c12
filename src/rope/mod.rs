//! Rope simulation module
//!
//! This module contains the chain state, the Verlet integrator, the distance
//! constraint pass, orientation derivation, and the tick driver tying them
//! together.

pub mod chain;
pub mod constraint;
pub mod integrator;
pub mod orientation;
pub mod simulation;

pub use chain::{Rope, RopeBuilder, RopeConfig};
pub use constraint::ConstraintSolver;
pub use integrator::Integrator;
pub use orientation::OrientationDeriver;
pub use simulation::{Anchors, RopeSimulation};
