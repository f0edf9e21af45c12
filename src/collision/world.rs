use glam::Vec3;

use super::backend::{ColliderHandle, ColliderTag, CollisionBackend, Penetration, SphereProbe};
use super::obstacle::{AabbObstacle, Obstacle, SphereObstacle};

/// Reference [`CollisionBackend`]: a flat list of tagged obstacles answering
/// overlap and penetration queries by signed distance. Handles are indices
/// into the list and stay valid until the world is mutated.
#[derive(Default, Clone)]
pub struct ObstacleWorld {
    obstacles: Vec<(ColliderTag, Box<dyn Obstacle>)>,
}

impl ObstacleWorld {
    pub fn new() -> Self {
        Self {
            obstacles: Vec::new(),
        }
    }

    pub fn add<T: Obstacle + 'static>(&mut self, obstacle: T) -> ColliderHandle {
        self.add_tagged(ColliderTag::WORLD, obstacle)
    }

    pub fn add_tagged<T: Obstacle + 'static>(
        &mut self,
        tag: ColliderTag,
        obstacle: T,
    ) -> ColliderHandle {
        self.obstacles.push((tag, Box::new(obstacle)));
        ColliderHandle(self.obstacles.len() - 1)
    }

    pub fn add_sphere(&mut self, center: Vec3, radius: f32) -> ColliderHandle {
        self.add(SphereObstacle::new(center, radius))
    }

    pub fn add_box(&mut self, center: Vec3, half_extents: Vec3) -> ColliderHandle {
        self.add(AabbObstacle::from_center_half_extents(center, half_extents))
    }

    pub fn add_aabb(&mut self, min: Vec3, max: Vec3) -> ColliderHandle {
        self.add(AabbObstacle::new(min, max))
    }

    pub fn clear(&mut self) {
        self.obstacles.clear();
    }

    pub fn obstacle(&self, handle: ColliderHandle) -> Option<&dyn Obstacle> {
        self.obstacles.get(handle.0).map(|(_, o)| o.as_ref())
    }

    pub fn obstacle_count(&self) -> usize {
        self.obstacles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.obstacles.is_empty()
    }

    pub fn point_inside_any(&self, point: Vec3) -> bool {
        self.obstacles.iter().any(|(_, o)| o.contains_point(point))
    }
}

impl CollisionBackend for ObstacleWorld {
    fn query_overlaps(
        &self,
        center: Vec3,
        radius: f32,
        exclude: ColliderTag,
        hits: &mut [ColliderHandle],
    ) -> usize {
        let mut count = 0;
        for (i, (tag, obstacle)) in self.obstacles.iter().enumerate() {
            if *tag == exclude {
                continue;
            }
            if obstacle.signed_distance(center) < radius {
                if count == hits.len() {
                    // bounded snapshot: drop the rest
                    break;
                }
                hits[count] = ColliderHandle(i);
                count += 1;
            }
        }
        count
    }

    fn penetration(
        &self,
        probe: &SphereProbe,
        center: Vec3,
        handle: ColliderHandle,
    ) -> Option<Penetration> {
        self.obstacle(handle)?.penetration_sphere(center, probe.radius)
    }
}

impl std::fmt::Debug for ObstacleWorld {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ObstacleWorld")
            .field("obstacle_count", &self.obstacles.len())
            .finish()
    }
}
