use glam::{Mat4, Quat, Vec3};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub position: Vec3,
    pub rotation: Quat,
    pub scale: Vec3,
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Transform {
    pub const IDENTITY: Self = Self {
        position: Vec3::ZERO,
        rotation: Quat::IDENTITY,
        scale: Vec3::ONE,
    };

    pub fn from_position(position: Vec3) -> Self {
        Self {
            position,
            ..Self::IDENTITY
        }
    }

    pub fn from_position_rotation(position: Vec3, rotation: Quat) -> Self {
        Self {
            position,
            rotation,
            scale: Vec3::ONE,
        }
    }

    pub fn to_matrix(&self) -> Mat4 {
        Mat4::from_scale_rotation_translation(self.scale, self.rotation, self.position)
    }

    pub fn forward(&self) -> Vec3 {
        self.rotation * Vec3::NEG_Z
    }

    pub fn up(&self) -> Vec3 {
        self.rotation * Vec3::Y
    }

    pub fn right(&self) -> Vec3 {
        self.rotation * Vec3::X
    }

    pub fn transform_point(&self, point: Vec3) -> Vec3 {
        self.rotation * (point * self.scale) + self.position
    }
}

/// Rotation whose forward axis (-Z) aligns with `forward`, using `up_hint`
/// to fix the roll.
///
/// Falls back to `Vec3::Y` when `forward` runs parallel to the hint, and to
/// identity when `forward` itself is degenerate.
pub fn look_rotation(forward: Vec3, up_hint: Vec3) -> Quat {
    let len = forward.length();
    if len < 1e-6 {
        return Quat::IDENTITY;
    }
    let f = forward / len;

    let mut right = f.cross(up_hint);
    if right.length_squared() < 1e-8 {
        right = f.cross(Vec3::Y);
    }
    if right.length_squared() < 1e-8 {
        return Quat::IDENTITY;
    }
    let right = right.normalize();
    let up = right.cross(f);

    Quat::from_mat4(&Mat4::from_cols(
        right.extend(0.0),
        up.extend(0.0),
        (-f).extend(0.0),
        Vec3::ZERO.extend(1.0),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn look_rotation_aligns_forward_axis() {
        let dir = Vec3::new(0.0, -1.0, 0.0);
        let rot = look_rotation(dir, Vec3::X);
        let t = Transform::from_position_rotation(Vec3::ZERO, rot);
        assert!((t.forward() - dir).length() < 1e-5);
    }

    #[test]
    fn look_rotation_parallel_hint_falls_back() {
        let dir = Vec3::X;
        let rot = look_rotation(dir, Vec3::X);
        let t = Transform::from_position_rotation(Vec3::ZERO, rot);
        assert!((t.forward() - dir).length() < 1e-5);
        assert!(rot.is_normalized());
    }

    #[test]
    fn look_rotation_zero_forward_is_identity() {
        assert_eq!(look_rotation(Vec3::ZERO, Vec3::X), Quat::IDENTITY);
    }

    #[test]
    fn trs_matrix_matches_components() {
        let t = Transform::from_position_rotation(
            Vec3::new(1.0, 2.0, 3.0),
            Quat::from_rotation_y(0.5),
        );
        let m = t.to_matrix();
        let p = m.transform_point3(Vec3::ZERO);
        assert!((p - t.position).length() < 1e-6);
    }
}
