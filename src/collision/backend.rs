use glam::Vec3;

/// Opaque reference to a collider owned by the backend, valid for the
/// duration of one resolution pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ColliderHandle(pub usize);

/// Coarse collision tag used to exclude a group from overlap queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColliderTag(pub u32);

impl ColliderTag {
    /// Default tag for world geometry.
    pub const WORLD: Self = Self(0);
    /// Tag reserved for the simulation's own query probe.
    pub const PROBE: Self = Self(8);
}

/// Penetration between the probe and one collider: push the probe along
/// `direction` by `depth` to separate the pair.
#[derive(Debug, Clone, Copy)]
pub struct Penetration {
    pub direction: Vec3,
    pub depth: f32,
}

/// The single query shape shared across all node tests. One probe serves the
/// whole chain; no per-node shape is ever allocated.
#[derive(Debug, Clone, Copy)]
pub struct SphereProbe {
    pub radius: f32,
    pub tag: ColliderTag,
}

impl SphereProbe {
    pub fn new(radius: f32) -> Self {
        Self {
            radius,
            tag: ColliderTag::PROBE,
        }
    }
}

/// Synchronous collision queries against world geometry.
///
/// The simulation calls this up to `node_count * iterations / collide_every`
/// times per fixed step and blocks on each call; a slow backend directly
/// lengthens the tick.
pub trait CollisionBackend {
    /// Writes handles of colliders overlapping the sphere into `hits`,
    /// skipping colliders tagged `exclude`, and returns how many were
    /// written. When more colliders overlap than `hits` can hold the excess
    /// is silently dropped; callers treat the result as a bounded snapshot,
    /// never an error.
    fn query_overlaps(
        &self,
        center: Vec3,
        radius: f32,
        exclude: ColliderTag,
        hits: &mut [ColliderHandle],
    ) -> usize;

    /// Penetration of the probe placed at `center` against one reported
    /// collider, or `None` when the pair no longer overlaps.
    fn penetration(
        &self,
        probe: &SphereProbe,
        center: Vec3,
        handle: ColliderHandle,
    ) -> Option<Penetration>;
}
