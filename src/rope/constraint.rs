use glam::Vec3;

/// Iterative distance-constraint relaxation between adjacent nodes.
///
/// One call is a single pass; the tick driver repeats it, which is what
/// propagates a correction along the chain — each pass only resolves
/// immediate neighbours, with the residual error shrinking by roughly
/// `(1 - stiffness)` per traversal.
pub struct ConstraintSolver;

impl ConstraintSolver {
    /// One relaxation pass.
    ///
    /// Clamps node 0 to `start_anchor` (and the last node to `end_anchor`
    /// when one is supplied), then walks adjacent pairs in ascending order,
    /// moving both nodes toward the rest distance by `stiffness` of the
    /// error. A pair already at rest distance is left untouched; with fewer
    /// than two nodes the pass is a no-op.
    pub fn relax_pass(
        positions: &mut [Vec3],
        rest_distance: f32,
        stiffness: f32,
        start_anchor: Vec3,
        end_anchor: Option<Vec3>,
    ) {
        let n = positions.len();
        if n < 2 {
            return;
        }

        positions[0] = start_anchor;
        if let Some(end) = end_anchor {
            positions[n - 1] = end;
        }

        for i in 0..n - 1 {
            let node1 = positions[i];
            let node2 = positions[i + 1];

            let current_distance = (node1 - node2).length();
            let difference = (current_distance - rest_distance).abs();

            // direction is chosen by comparing against the rest distance;
            // at exact rest distance no correction applies
            let direction = if current_distance > rest_distance {
                (node1 - node2).normalize()
            } else if current_distance < rest_distance {
                (node2 - node1).normalize_or_zero()
            } else {
                Vec3::ZERO
            };

            let movement = direction * difference;
            positions[i] -= movement * stiffness;
            positions[i + 1] += movement * stiffness;
        }

        // the pair walk drags the endpoints too; reclamp so anchored nodes
        // leave every pass pinned exactly
        positions[0] = start_anchor;
        if let Some(end) = end_anchor {
            positions[n - 1] = end;
        }
    }
}
