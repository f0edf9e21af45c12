mod backend;
mod obstacle;
mod response;
mod world;

pub use backend::{ColliderHandle, ColliderTag, CollisionBackend, Penetration, SphereProbe};
pub use obstacle::{AabbObstacle, Obstacle, SphereObstacle};
pub use response::CollisionResolver;
pub use world::ObstacleWorld;
