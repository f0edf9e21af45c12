use super::chain::Rope;
use super::constraint::ConstraintSolver;
use super::integrator::Integrator;
use super::orientation::OrientationDeriver;
use crate::collision::{CollisionBackend, CollisionResolver};
use crate::input::PointerSource;
use crate::render::RopeRenderData;
use glam::Vec3;

/// The two endpoint anchors and their latch state.
///
/// The start anchor is always active. Pin events latch the anchors in fixed
/// order: the first locks the start, the second locks the end; an unlatched
/// anchor tracks the pointer every visual frame, and until the end is locked
/// the chain's last node swings free.
#[derive(Debug, Clone, Copy)]
pub struct Anchors {
    pub start: Vec3,
    pub end: Vec3,
    start_locked: bool,
    end_locked: bool,
}

impl Anchors {
    pub fn new(start: Vec3) -> Self {
        Self {
            start,
            end: start,
            start_locked: false,
            end_locked: false,
        }
    }

    pub fn start_locked(&self) -> bool {
        self.start_locked
    }

    pub fn end_locked(&self) -> bool {
        self.end_locked
    }

    /// Feeds a pointer-derived world point to whichever anchor still tracks
    /// the pointer. Once both are locked this is a no-op.
    pub fn track(&mut self, pointer: Vec3) {
        if !self.start_locked {
            self.start = pointer;
        } else if !self.end_locked {
            self.end = pointer;
        }
    }

    /// Latches the next anchor in order. Returns true if a latch happened.
    pub fn pin(&mut self) -> bool {
        if !self.start_locked {
            self.start_locked = true;
            true
        } else if !self.end_locked {
            self.end_locked = true;
            true
        } else {
            false
        }
    }

    /// End anchor as seen by the constraint pass: present only once locked.
    fn end_clamp(&self) -> Option<Vec3> {
        self.end_locked.then_some(self.end)
    }
}

/// Tick driver owning the rope state and staging the per-step sub-passes.
///
/// Two cadences: [`step_fixed`](Self::step_fixed) advances the physics at a
/// fixed rate, [`step_frame`](Self::step_frame) runs at the visual frame
/// rate and only moves the anchors and refreshes the polyline. The fixed
/// step's sub-stage order is load-bearing: the constraint pass consumes the
/// freshly integrated positions and collision resolution consumes the
/// partially relaxed ones.
pub struct RopeSimulation {
    rope: Rope,
    anchors: Anchors,
    resolver: CollisionResolver,
    render_data: RopeRenderData,
}

impl RopeSimulation {
    pub fn new(rope: Rope) -> Self {
        let config = *rope.config();
        let anchors = Anchors::new(rope.start());
        let resolver = CollisionResolver::new(config.node_radius, config.collider_buffer);
        let render_data = RopeRenderData::new(rope.node_count(), config.link_width);

        Self {
            rope,
            anchors,
            resolver,
            render_data,
        }
    }

    pub fn rope(&self) -> &Rope {
        &self.rope
    }

    pub fn anchors(&self) -> &Anchors {
        &self.anchors
    }

    pub fn render_data(&self) -> &RopeRenderData {
        &self.render_data
    }

    /// Latches the next anchor (start first, then end).
    pub fn pin(&mut self) -> bool {
        let latched = self.anchors.pin();
        if latched {
            log::debug!(
                "anchor latched: start_locked={} end_locked={}",
                self.anchors.start_locked(),
                self.anchors.end_locked()
            );
        }
        latched
    }

    /// Visual-frame update: anchor tracking and polyline refresh. Safe to
    /// call more often than `step_fixed`.
    pub fn step_frame(&mut self, pointer: Vec3) {
        self.anchors.track(pointer);
        self.render_data.refresh_line(self.rope.positions());
    }

    /// Convenience over [`step_frame`](Self::step_frame) sampling a
    /// [`PointerSource`] at the given depth offset.
    pub fn step_frame_from(&mut self, source: &impl PointerSource, depth_offset: f32) {
        self.step_frame(source.pointer_world_point(depth_offset));
    }

    /// One fixed simulation step.
    ///
    /// Integrates, then alternates constraint and collision passes for the
    /// configured iteration count (collision on iterations where
    /// `i % collide_every == 0`), then derives orientations and packs the
    /// render data.
    pub fn step_fixed(&mut self, backend: &impl CollisionBackend, dt: f32) {
        let config = *self.rope.config();

        Integrator::step(
            &mut self.rope.current,
            &mut self.rope.previous,
            config.damping,
            config.gravity_vector(),
            dt,
        );

        for i in 0..config.iterations {
            ConstraintSolver::relax_pass(
                &mut self.rope.current,
                config.node_distance,
                config.stiffness,
                self.anchors.start,
                self.anchors.end_clamp(),
            );

            if i % config.collide_every == 0 {
                self.resolver.resolve(&mut self.rope.current, backend);
            }
        }

        OrientationDeriver::derive(&self.rope.current, &mut self.rope.orientations);

        self.render_data
            .produce(self.rope.positions(), self.rope.orientations());

        log::trace!(
            "fixed step dt={dt}: distance error {:.3e}",
            self.rope.distance_error()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collision::ObstacleWorld;
    use crate::rope::Rope;

    fn small_rope() -> Rope {
        Rope::builder()
            .node_count(5)
            .node_distance(0.2)
            .gravity(0.0)
            .iterations(50)
            .stiffness(0.8)
            .build()
            .unwrap()
    }

    #[test]
    fn anchors_latch_in_fixed_order() {
        let mut anchors = Anchors::new(Vec3::ZERO);

        anchors.track(Vec3::X);
        assert_eq!(anchors.start, Vec3::X);
        assert_eq!(anchors.end, Vec3::ZERO);

        assert!(anchors.pin());
        anchors.track(Vec3::Y);
        assert_eq!(anchors.start, Vec3::X);
        assert_eq!(anchors.end, Vec3::Y);

        assert!(anchors.pin());
        anchors.track(Vec3::Z);
        assert_eq!(anchors.start, Vec3::X);
        assert_eq!(anchors.end, Vec3::Y);

        assert!(!anchors.pin());
    }

    #[test]
    fn start_anchor_pins_node_zero_exactly() {
        let mut sim = RopeSimulation::new(small_rope());
        let world = ObstacleWorld::new();

        let anchor = Vec3::new(0.4, 0.1, -0.2);
        sim.step_frame(anchor);
        sim.pin();
        sim.step_fixed(&world, 0.02);

        assert_eq!(sim.rope().positions()[0], anchor);
    }

    #[test]
    fn end_anchor_pins_last_node_once_locked() {
        let mut sim = RopeSimulation::new(small_rope());
        let world = ObstacleWorld::new();

        sim.step_frame(Vec3::ZERO);
        sim.pin();
        let end = Vec3::new(0.5, -0.1, 0.0);
        sim.step_frame(end);

        // end not yet locked: last node is free
        sim.step_fixed(&world, 0.02);
        sim.pin();
        sim.step_fixed(&world, 0.02);

        let positions = sim.rope().positions();
        assert_eq!(positions[0], Vec3::ZERO);
        assert_eq!(positions[positions.len() - 1], end);
    }

    #[test]
    fn free_end_converges_to_rest_spacing() {
        let mut sim = RopeSimulation::new(small_rope());
        let world = ObstacleWorld::new();

        let anchor = Vec3::new(0.3, 0.2, 0.0);
        sim.step_frame(anchor);
        sim.pin();
        sim.step_fixed(&world, 0.02);

        let d = sim.rope().config().node_distance;
        for w in sim.rope().positions().windows(2) {
            let dist = (w[1] - w[0]).length();
            assert!((dist - d).abs() < 0.01 * d);
        }
    }

    #[test]
    fn render_data_tracks_positions() {
        let mut sim = RopeSimulation::new(small_rope());
        let world = ObstacleWorld::new();

        sim.step_frame(Vec3::new(0.1, 0.0, 0.0));
        sim.pin();
        sim.step_fixed(&world, 0.02);

        assert_eq!(sim.render_data().line_positions(), sim.rope().positions());
        assert_eq!(sim.render_data().instances().len(), sim.rope().node_count());
    }
}
