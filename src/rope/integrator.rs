use glam::Vec3;

/// Semi-implicit Verlet integration over the chain's position arrays.
///
/// Velocity is never stored; it is re-derived each step from the delta
/// between current and previous position, which is why damping has to be
/// reapplied every step rather than accumulated.
pub struct Integrator;

impl Integrator {
    /// Advances every node one step.
    ///
    /// Per node: `velocity = (current - previous) * damping`, previous takes
    /// the old current, and the node moves by `velocity + gravity * dt`.
    /// Nodes never read each other's new state here, so index order does not
    /// matter.
    pub fn step(
        current: &mut [Vec3],
        previous: &mut [Vec3],
        damping: f32,
        gravity: Vec3,
        dt: f32,
    ) {
        debug_assert_eq!(current.len(), previous.len());

        for (pos, prev) in current.iter_mut().zip(previous.iter_mut()) {
            let velocity = (*pos - *prev) * damping;
            *prev = *pos;
            *pos += velocity + gravity * dt;
        }
    }
}
