use crate::math::look_rotation;
use glam::{Quat, Vec3};
use std::f32::consts::FRAC_PI_2;

/// Up-hint for the segment look rotations. World right, not world up: the
/// link meshes are authored lying on their side.
const UP_HINT: Vec3 = Vec3::X;

/// Derives a cosmetic look orientation per segment from the relaxed
/// positions. Orientation is never integrated; it is recomputed from scratch
/// every step, except where a segment is degenerate and the previous value
/// is kept.
pub struct OrientationDeriver;

impl OrientationDeriver {
    /// Computes one orientation per segment `(i, i+1)`.
    ///
    /// The rotation targets node `i+1`, except for the final segment which
    /// writes node `i` instead; the free end reads better with that
    /// asymmetry and it is kept on purpose. Even-indexed segments past the
    /// origin get an extra 90 degree twist about the segment axis, giving
    /// the interleaved look of chain links.
    pub fn derive(positions: &[Vec3], orientations: &mut [Quat]) {
        debug_assert_eq!(positions.len(), orientations.len());

        let n = positions.len();
        if n < 2 {
            return;
        }

        for i in 0..n - 1 {
            let segment = positions[i + 1] - positions[i];
            if segment.length_squared() < 1e-12 {
                // coincident nodes: hold last tick's orientation
                continue;
            }

            let target = if i + 1 == n - 1 && i > 0 { i } else { i + 1 };
            let mut rotation = look_rotation(segment, UP_HINT);

            if i % 2 == 0 && i != 0 {
                rotation *= Quat::from_rotation_z(FRAC_PI_2);
            }

            orientations[target] = rotation;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::Transform;

    fn forward_of(q: Quat) -> Vec3 {
        Transform::from_position_rotation(Vec3::ZERO, q).forward()
    }

    #[test]
    fn aligns_forward_with_segment_direction() {
        let positions = vec![
            Vec3::ZERO,
            Vec3::new(0.0, -0.2, 0.0),
            Vec3::new(0.0, -0.4, 0.0),
            Vec3::new(0.0, -0.6, 0.0),
        ];
        let mut orientations = vec![Quat::IDENTITY; 4];

        OrientationDeriver::derive(&positions, &mut orientations);

        let down = Vec3::new(0.0, -1.0, 0.0);
        assert!((forward_of(orientations[1]) - down).length() < 1e-5);
        // final segment writes node 2, twisted; the twist is about the
        // segment axis so forward is unchanged
        assert!((forward_of(orientations[2]) - down).length() < 1e-5);
        // the last node is never targeted on a straight chain
        assert_eq!(orientations[3], Quat::IDENTITY);
    }

    #[test]
    fn zero_length_segment_keeps_previous_orientation() {
        let held = Quat::from_rotation_y(0.7);
        let positions = vec![Vec3::ZERO, Vec3::ZERO, Vec3::new(0.0, -0.2, 0.0)];
        let mut orientations = vec![Quat::IDENTITY, held, Quat::IDENTITY];

        OrientationDeriver::derive(&positions, &mut orientations);

        assert_eq!(orientations[1], held);
    }

    #[test]
    fn final_segment_writes_the_near_node() {
        let positions = vec![
            Vec3::ZERO,
            Vec3::new(0.0, -0.2, 0.0),
            Vec3::new(0.2, -0.2, 0.0),
        ];
        let mut orientations = vec![Quat::IDENTITY; 3];

        OrientationDeriver::derive(&positions, &mut orientations);

        // segment (1,2) points along +X and lands on node 1, overwriting the
        // orientation segment (0,1) gave it; node 2 is never targeted
        assert!((forward_of(orientations[1]) - Vec3::X).length() < 1e-5);
        assert_eq!(orientations[2], Quat::IDENTITY);
    }

    #[test]
    fn even_segments_twist_odd_segments_do_not() {
        let n = 6;
        let positions: Vec<Vec3> = (0..n)
            .map(|i| Vec3::new(0.0, -0.2 * i as f32, 0.0))
            .collect();
        let mut orientations = vec![Quat::IDENTITY; n];

        OrientationDeriver::derive(&positions, &mut orientations);

        // segment 1 (odd) -> node 2 untwisted, segment 2 (even) -> node 3
        // twisted; right axes differ by the 90 degree roll
        let right_untwisted = Transform::from_position_rotation(Vec3::ZERO, orientations[2]).right();
        let right_twisted = Transform::from_position_rotation(Vec3::ZERO, orientations[3]).right();
        assert!(right_untwisted.dot(right_twisted).abs() < 1e-4);
    }

    #[test]
    fn two_nodes_write_only_the_far_node() {
        let positions = vec![Vec3::ZERO, Vec3::new(0.0, -0.2, 0.0)];
        let mut orientations = vec![Quat::IDENTITY; 2];

        OrientationDeriver::derive(&positions, &mut orientations);

        // with a single segment there is no "previous" segment to hand the
        // last node to, so the i+1 target applies
        assert_eq!(orientations[0], Quat::IDENTITY);
        assert_ne!(orientations[1], Quat::IDENTITY);
    }
}
