//! # verlet-rope
//!
//! A position-based rope simulation: a Verlet-integrated particle chain held
//! together by iteratively relaxed distance constraints, pushed out of world
//! geometry by penetration queries, and dressed with per-segment link
//! orientations for instanced rendering.
//!
//! ## Features
//! - Verlet integration with implicit velocity (no stored velocity state)
//! - Iterative distance-constraint relaxation with endpoint anchoring
//! - Sphere-overlap penetration resolution against a pluggable backend
//! - Derived look orientations with alternating link twist
//! - Render data production: polyline buffer + per-link transform matrices
//!
//! ## Example
//! ```rust,ignore
//! use verlet_rope::{ObstacleWorld, Rope, RopeSimulation};
//! use glam::Vec3;
//!
//! let rope = Rope::builder()
//!     .node_count(50)
//!     .node_distance(0.2)
//!     .gravity(9.8)
//!     .stiffness(0.8)
//!     .iterations(50)
//!     .build()?;
//!
//! let mut sim = RopeSimulation::new(rope);
//! let mut world = ObstacleWorld::new();
//! world.add_sphere(Vec3::new(0.0, -2.0, 0.0), 0.5);
//!
//! sim.step_frame(Vec3::ZERO);   // unlatched anchor tracks the pointer
//! sim.pin();                    // latch the start anchor
//! sim.step_fixed(&world, 0.02); // one fixed simulation step
//! let data = sim.render_data();
//! ```

pub mod collision;
pub mod error;
pub mod input;
pub mod math;
pub mod render;
pub mod rope;

pub use collision::{
    AabbObstacle, ColliderHandle, ColliderTag, CollisionBackend, CollisionResolver, Obstacle,
    ObstacleWorld, Penetration, SphereObstacle, SphereProbe,
};
pub use error::ConfigError;
pub use input::PointerSource;
pub use math::Transform;
pub use render::{LineVertex, LinkInstance, RopeRenderData};
pub use rope::{Anchors, Rope, RopeBuilder, RopeConfig, RopeSimulation};
