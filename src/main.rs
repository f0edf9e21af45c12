use glam::{Quat, Vec3};
use verlet_rope::{ObstacleWorld, PointerSource, Rope, RopeSimulation};

const FIXED_DT: f32 = 0.02;
const FRAME_DT: f32 = 1.0 / 60.0;

/// Headless stand-in for the interactive scene: the pointer orbits a circle
/// in the XY plane at a fixed depth.
struct CirclingPointer {
    center: Vec3,
    radius: f32,
    angular_speed: f32,
    angle: f32,
}

impl CirclingPointer {
    fn new(center: Vec3, radius: f32, angular_speed: f32) -> Self {
        Self {
            center,
            radius,
            angular_speed,
            angle: 0.0,
        }
    }

    fn advance(&mut self, dt: f32) {
        self.angle += dt * self.angular_speed;
    }
}

impl PointerSource for CirclingPointer {
    fn pointer_world_point(&self, depth_offset: f32) -> Vec3 {
        let dir = Quat::from_rotation_z(self.angle) * Vec3::Y;
        self.center + dir * self.radius + Vec3::Z * depth_offset
    }
}

fn main() {
    env_logger::init();

    let rope = match Rope::builder()
        .node_count(50)
        .node_distance(0.2)
        .damping(0.99)
        .gravity(9.8)
        .stiffness(0.8)
        .iterations(50)
        .collide_every(1)
        .node_radius(0.2)
        .build()
    {
        Ok(rope) => rope,
        Err(e) => {
            log::error!("invalid rope configuration: {e}");
            std::process::exit(1);
        }
    };

    let mut world = ObstacleWorld::new();
    world.add_sphere(Vec3::new(0.5, -4.0, 0.0), 1.0);
    world.add_box(Vec3::new(-2.0, -6.0, 0.0), Vec3::new(1.5, 0.4, 1.5));

    let mut sim = RopeSimulation::new(rope);
    let mut pointer = CirclingPointer::new(Vec3::new(0.0, 1.0, 0.0), 1.5, 1.2);

    // latch the start after one orbit second, the end two seconds later
    let pin_times = [1.0_f32, 3.0];
    let mut pins_done = 0;

    let mut accumulator = 0.0_f32;
    let mut elapsed = 0.0_f32;
    let mut next_report = 1.0_f32;

    while elapsed < 10.0 {
        pointer.advance(FRAME_DT);
        sim.step_frame_from(&pointer, 3.0);

        if pins_done < pin_times.len() && elapsed >= pin_times[pins_done] {
            sim.pin();
            pins_done += 1;
        }

        accumulator += FRAME_DT;
        while accumulator >= FIXED_DT {
            sim.step_fixed(&world, FIXED_DT);
            accumulator -= FIXED_DT;
        }

        elapsed += FRAME_DT;
        if elapsed >= next_report {
            let rope = sim.rope();
            let lowest = rope
                .positions()
                .iter()
                .map(|p| p.y)
                .fold(f32::INFINITY, f32::min);
            log::info!(
                "t={next_report:.0}s  start_locked={} end_locked={}  distance_error={:.3e}  lowest_y={lowest:.2}",
                sim.anchors().start_locked(),
                sim.anchors().end_locked(),
                rope.distance_error(),
            );
            next_report += 1.0;
        }
    }

    let data = sim.render_data();
    log::info!(
        "final frame: {} polyline points, {} link instances, width {}",
        data.line_positions().len(),
        data.instances().len(),
        data.line_width()
    );
}
