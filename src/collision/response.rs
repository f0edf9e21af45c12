use glam::Vec3;

use super::backend::{ColliderHandle, CollisionBackend, SphereProbe};

/// Skin added to the query radius so resting contact keeps reporting an
/// overlap instead of flickering between hit and miss.
const QUERY_SKIN: f32 = 0.01;

/// Push-out penetration resolution for the chain's nodes.
///
/// Owns the shared [`SphereProbe`] and a bounded handle buffer sized at
/// construction, so a resolution pass performs no allocation. This is pure
/// positional correction: previous positions are untouched, which means a
/// resolved penetration shows up as an implied velocity change on the next
/// integration step.
pub struct CollisionResolver {
    probe: SphereProbe,
    buffer: Vec<ColliderHandle>,
}

impl CollisionResolver {
    pub fn new(node_radius: f32, buffer_capacity: usize) -> Self {
        Self {
            probe: SphereProbe::new(node_radius),
            buffer: vec![ColliderHandle::default(); buffer_capacity],
        }
    }

    pub fn probe(&self) -> &SphereProbe {
        &self.probe
    }

    /// One resolution pass over every node.
    ///
    /// Overlaps are applied cumulatively per node, in the order the backend
    /// reports them; each correction feeds into the next penetration query
    /// for the same node. A node with zero overlaps is left untouched.
    pub fn resolve(&mut self, positions: &mut [Vec3], backend: &impl CollisionBackend) {
        for position in positions.iter_mut() {
            let count = backend.query_overlaps(
                *position,
                self.probe.radius + QUERY_SKIN,
                self.probe.tag,
                &mut self.buffer,
            );

            for &handle in &self.buffer[..count] {
                if let Some(hit) = backend.penetration(&self.probe, *position, handle) {
                    *position += hit.direction * hit.depth;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collision::ObstacleWorld;

    #[test]
    fn nodes_are_pushed_out_of_an_obstacle() {
        let mut world = ObstacleWorld::new();
        world.add_sphere(Vec3::ZERO, 0.5);

        let mut resolver = CollisionResolver::new(0.2, 10);
        let mut positions = vec![Vec3::new(0.4, 0.0, 0.0), Vec3::new(3.0, 0.0, 0.0)];
        let untouched = positions[1];

        resolver.resolve(&mut positions, &world);

        assert!((positions[0] - Vec3::ZERO).length() >= 0.5 - 1e-4);
        assert_eq!(positions[1], untouched);
    }

    #[test]
    fn empty_world_changes_nothing() {
        let world = ObstacleWorld::new();
        let mut resolver = CollisionResolver::new(0.2, 10);
        let mut positions = vec![Vec3::new(0.1, -0.3, 0.2), Vec3::new(-1.0, 0.0, 0.0)];
        let before = positions.clone();

        resolver.resolve(&mut positions, &world);

        assert_eq!(positions, before);
    }

    #[test]
    fn overlaps_accumulate_within_a_pass() {
        // two spheres pinching the node from both sides along X; the second
        // correction sees the result of the first
        let mut world = ObstacleWorld::new();
        world.add_sphere(Vec3::new(-0.4, 0.0, 0.0), 0.5);
        world.add_sphere(Vec3::new(0.6, 0.0, 0.0), 0.5);

        let mut resolver = CollisionResolver::new(0.1, 10);
        let mut positions = vec![Vec3::ZERO];

        resolver.resolve(&mut positions, &world);

        assert_ne!(positions[0], Vec3::ZERO);
    }

    #[test]
    fn truncated_buffer_is_tolerated() {
        let mut world = ObstacleWorld::new();
        for i in 0..5 {
            world.add_sphere(Vec3::new(0.1 * i as f32, 0.0, 0.0), 0.3);
        }

        let mut resolver = CollisionResolver::new(0.1, 2);
        let mut positions = vec![Vec3::ZERO];

        // only the first two reported overlaps are processed; no panic, no error
        resolver.resolve(&mut positions, &world);
    }
}
