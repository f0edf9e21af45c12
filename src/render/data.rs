use crate::math::Transform;
use bytemuck::{Pod, Zeroable};
use glam::{Mat4, Quat, Vec3};

/// Polyline vertex, laid out for direct GPU upload.
#[repr(C)]
#[derive(Debug, Clone, Copy, Pod, Zeroable)]
pub struct LineVertex {
    pub position: [f32; 3],
    pub width: f32,
}

/// Per-link instance data for a single instanced draw of the link mesh.
#[repr(C)]
#[derive(Debug, Clone, Copy, Pod, Zeroable)]
pub struct LinkInstance {
    pub model: [[f32; 4]; 4],
}

/// Draw data for one rope: an ordered polyline over the node positions and
/// one TRS matrix per node (translation and orientation, unit scale).
///
/// Buffers are allocated once at the chain's node count and rewritten in
/// place every step.
#[derive(Debug, Clone)]
pub struct RopeRenderData {
    line_positions: Vec<Vec3>,
    instances: Vec<Mat4>,
    line_width: f32,
}

impl RopeRenderData {
    pub fn new(node_count: usize, line_width: f32) -> Self {
        Self {
            line_positions: vec![Vec3::ZERO; node_count],
            instances: vec![Mat4::IDENTITY; node_count],
            line_width,
        }
    }

    /// Rewrites both the polyline and the instance transforms.
    pub fn produce(&mut self, positions: &[Vec3], orientations: &[Quat]) {
        debug_assert_eq!(positions.len(), orientations.len());
        debug_assert_eq!(positions.len(), self.line_positions.len());

        self.line_positions.copy_from_slice(positions);
        for ((m, &position), &rotation) in self
            .instances
            .iter_mut()
            .zip(positions)
            .zip(orientations)
        {
            *m = Transform::from_position_rotation(position, rotation).to_matrix();
        }
    }

    /// Rewrites only the polyline; used on the visual-frame cadence where
    /// orientations have not changed since the last fixed step.
    pub fn refresh_line(&mut self, positions: &[Vec3]) {
        self.line_positions.copy_from_slice(positions);
    }

    pub fn line_positions(&self) -> &[Vec3] {
        &self.line_positions
    }

    pub fn instances(&self) -> &[Mat4] {
        &self.instances
    }

    pub fn line_width(&self) -> f32 {
        self.line_width
    }

    /// Polyline packed as POD vertices.
    pub fn line_vertices(&self) -> Vec<LineVertex> {
        self.line_positions
            .iter()
            .map(|p| LineVertex {
                position: p.to_array(),
                width: self.line_width,
            })
            .collect()
    }

    /// Instance transforms packed as POD column-major matrices.
    pub fn instance_data(&self) -> Vec<LinkInstance> {
        self.instances
            .iter()
            .map(|m| LinkInstance {
                model: m.to_cols_array_2d(),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn produce_packs_positions_and_orientations() {
        let positions = vec![Vec3::ZERO, Vec3::new(0.0, -0.2, 0.0)];
        let orientations = vec![Quat::IDENTITY, Quat::from_rotation_x(1.0)];

        let mut data = RopeRenderData::new(2, 0.1);
        data.produce(&positions, &orientations);

        assert_eq!(data.line_positions(), positions.as_slice());
        let translated = data.instances()[1].transform_point3(Vec3::ZERO);
        assert!((translated - positions[1]).length() < 1e-6);
    }

    #[test]
    fn pod_buffers_cast_to_bytes() {
        let mut data = RopeRenderData::new(3, 0.1);
        data.refresh_line(&[Vec3::X, Vec3::Y, Vec3::Z]);

        let vertices = data.line_vertices();
        let bytes: &[u8] = bytemuck::cast_slice(&vertices);
        assert_eq!(bytes.len(), 3 * std::mem::size_of::<LineVertex>());
        assert_eq!(vertices[0].width, 0.1);

        let instances = data.instance_data();
        let bytes: &[u8] = bytemuck::cast_slice(&instances);
        assert_eq!(bytes.len(), 3 * std::mem::size_of::<LinkInstance>());
    }
}
