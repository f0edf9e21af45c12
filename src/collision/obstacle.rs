use glam::Vec3;
use std::fmt::Debug;

use super::backend::Penetration;

/// World geometry a rope node can be pushed out of.
///
/// Shapes expose signed-distance queries; sphere penetration is derived from
/// them, so new shapes only implement the distance surface.
pub trait Obstacle: Send + Sync + Debug {
    fn contains_point(&self, point: Vec3) -> bool;
    fn signed_distance(&self, point: Vec3) -> f32;
    fn closest_surface_point(&self, point: Vec3) -> Vec3;
    fn surface_normal(&self, point: Vec3) -> Vec3;
    fn center(&self) -> Vec3;
    fn clone_box(&self) -> Box<dyn Obstacle>;

    /// Penetration of a sphere of `radius` at `center` against this shape,
    /// or `None` when they do not overlap. The returned direction points out
    /// of the shape; depth covers the full overlap even when the sphere
    /// center is inside.
    fn penetration_sphere(&self, center: Vec3, radius: f32) -> Option<Penetration> {
        let sd = self.signed_distance(center);
        if sd >= radius {
            return None;
        }

        let surface = self.closest_surface_point(center);
        let mut direction = self.surface_normal(surface);
        if direction.length_squared() < 1e-8 {
            direction = Vec3::Y;
        }

        Some(Penetration {
            direction,
            depth: radius - sd,
        })
    }
}

impl Clone for Box<dyn Obstacle> {
    fn clone(&self) -> Self {
        self.clone_box()
    }
}

#[derive(Debug, Clone, Copy)]
pub struct SphereObstacle {
    pub center: Vec3,
    pub radius: f32,
}

impl SphereObstacle {
    pub fn new(center: Vec3, radius: f32) -> Self {
        Self { center, radius }
    }
}

impl Obstacle for SphereObstacle {
    fn contains_point(&self, point: Vec3) -> bool {
        (point - self.center).length_squared() <= self.radius * self.radius
    }

    fn signed_distance(&self, point: Vec3) -> f32 {
        (point - self.center).length() - self.radius
    }

    fn closest_surface_point(&self, point: Vec3) -> Vec3 {
        let dir = (point - self.center).normalize_or_zero();
        if dir.length_squared() < 0.0001 {
            return self.center + Vec3::Y * self.radius;
        }
        self.center + dir * self.radius
    }

    fn surface_normal(&self, point: Vec3) -> Vec3 {
        (point - self.center).normalize_or_zero()
    }

    fn center(&self) -> Vec3 {
        self.center
    }

    fn clone_box(&self) -> Box<dyn Obstacle> {
        Box::new(*self)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct AabbObstacle {
    pub min: Vec3,
    pub max: Vec3,
}

impl AabbObstacle {
    pub fn new(min: Vec3, max: Vec3) -> Self {
        Self { min, max }
    }

    pub fn from_center_half_extents(center: Vec3, half_extents: Vec3) -> Self {
        Self {
            min: center - half_extents,
            max: center + half_extents,
        }
    }

    pub fn half_extents(&self) -> Vec3 {
        (self.max - self.min) * 0.5
    }
}

impl Obstacle for AabbObstacle {
    fn contains_point(&self, point: Vec3) -> bool {
        point.x >= self.min.x
            && point.x <= self.max.x
            && point.y >= self.min.y
            && point.y <= self.max.y
            && point.z >= self.min.z
            && point.z <= self.max.z
    }

    fn signed_distance(&self, point: Vec3) -> f32 {
        let p = point - self.center();
        let q = p.abs() - self.half_extents();
        q.max(Vec3::ZERO).length() + q.x.max(q.y.max(q.z)).min(0.0)
    }

    fn closest_surface_point(&self, point: Vec3) -> Vec3 {
        let clamped = point.clamp(self.min, self.max);
        if clamped == point {
            // inside: project onto the nearest face
            let p = point - self.center();
            let distances = self.half_extents() - p.abs();

            let min_dist = distances.x.min(distances.y.min(distances.z));
            let mut result = point;

            if (distances.x - min_dist).abs() < 0.0001 {
                result.x = if p.x > 0.0 { self.max.x } else { self.min.x };
            } else if (distances.y - min_dist).abs() < 0.0001 {
                result.y = if p.y > 0.0 { self.max.y } else { self.min.y };
            } else {
                result.z = if p.z > 0.0 { self.max.z } else { self.min.z };
            }
            result
        } else {
            clamped
        }
    }

    fn surface_normal(&self, point: Vec3) -> Vec3 {
        let p = (point - self.center()) / self.half_extents().max(Vec3::splat(0.0001));

        let abs_p = p.abs();
        if abs_p.x > abs_p.y && abs_p.x > abs_p.z {
            Vec3::X * p.x.signum()
        } else if abs_p.y > abs_p.z {
            Vec3::Y * p.y.signum()
        } else {
            Vec3::Z * p.z.signum()
        }
    }

    fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    fn clone_box(&self) -> Box<dyn Obstacle> {
        Box::new(*self)
    }
}
