use crate::error::ConfigError;
use glam::{Quat, Vec3};

/// Immutable per-simulation parameters, validated at build time.
#[derive(Debug, Clone, Copy)]
pub struct RopeConfig {
    /// Number of nodes in the chain, at least 2.
    pub node_count: usize,
    /// Rest distance between adjacent nodes.
    pub node_distance: f32,
    /// Fraction of implied velocity carried into the next step, in [0, 1].
    pub damping: f32,
    /// Gravity magnitude, applied along -Y.
    pub gravity: f32,
    /// Fraction of the distance error corrected per constraint pass, in [0, 0.99].
    pub stiffness: f32,
    /// Constraint iterations per fixed step.
    pub iterations: u32,
    /// Collision resolution runs on iterations where `i % collide_every == 0`.
    pub collide_every: u32,
    /// Radius of the sphere probe used for per-node overlap queries.
    pub node_radius: f32,
    /// Capacity of the overlap query buffer; excess overlaps are truncated.
    pub collider_buffer: usize,
    /// Width handed to the polyline render sink.
    pub link_width: f32,
}

impl Default for RopeConfig {
    fn default() -> Self {
        Self {
            node_count: 50,
            node_distance: 0.2,
            damping: 0.99,
            gravity: 9.8,
            stiffness: 0.8,
            iterations: 50,
            collide_every: 1,
            node_radius: 0.2,
            collider_buffer: 10,
            link_width: 0.1,
        }
    }
}

impl RopeConfig {
    pub fn gravity_vector(&self) -> Vec3 {
        Vec3::new(0.0, -self.gravity, 0.0)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.node_count < 2 {
            return Err(ConfigError::NodeCount(self.node_count));
        }
        if !(self.node_distance > 0.0) {
            return Err(ConfigError::NodeDistance(self.node_distance));
        }
        if !(0.0..=1.0).contains(&self.damping) {
            return Err(ConfigError::Damping(self.damping));
        }
        if !(0.0..=0.99).contains(&self.stiffness) {
            return Err(ConfigError::Stiffness(self.stiffness));
        }
        if self.iterations < 1 {
            return Err(ConfigError::Iterations);
        }
        if self.collide_every < 1 {
            return Err(ConfigError::CollideEvery);
        }
        if !(self.node_radius >= 0.0) {
            return Err(ConfigError::NodeRadius(self.node_radius));
        }
        if self.collider_buffer < 1 {
            return Err(ConfigError::ColliderBuffer);
        }
        if !(self.link_width > 0.0) {
            return Err(ConfigError::LinkWidth(self.link_width));
        }
        Ok(())
    }
}

/// The particle chain: parallel per-node arrays owned as a unit.
///
/// Index 0 is the start of the chain, `node_count - 1` the end. The arrays
/// are allocated once at build time and never resized; only their contents
/// mutate, once per simulation step.
#[derive(Debug, Clone)]
pub struct Rope {
    config: RopeConfig,
    pub(crate) current: Vec<Vec3>,
    pub(crate) previous: Vec<Vec3>,
    pub(crate) orientations: Vec<Quat>,
}

impl Rope {
    pub fn builder() -> RopeBuilder {
        RopeBuilder::new()
    }

    /// Builds a rope hanging as a vertical resting line from `start`,
    /// spaced by the configured node distance.
    pub fn new(config: RopeConfig, start: Vec3) -> Result<Self, ConfigError> {
        config.validate()?;

        let n = config.node_count;
        let mut current = Vec::with_capacity(n);
        let mut position = start;
        for _ in 0..n {
            current.push(position);
            position.y -= config.node_distance;
        }
        let previous = current.clone();
        let orientations = vec![Quat::IDENTITY; n];

        log::debug!(
            "rope built: {} nodes, rest distance {}, {} iterations",
            n,
            config.node_distance,
            config.iterations
        );

        Ok(Self {
            config,
            current,
            previous,
            orientations,
        })
    }

    pub fn config(&self) -> &RopeConfig {
        &self.config
    }

    pub fn node_count(&self) -> usize {
        self.current.len()
    }

    pub fn positions(&self) -> &[Vec3] {
        &self.current
    }

    pub fn previous_positions(&self) -> &[Vec3] {
        &self.previous
    }

    pub fn orientations(&self) -> &[Quat] {
        &self.orientations
    }

    pub fn start(&self) -> Vec3 {
        self.current[0]
    }

    pub fn end(&self) -> Vec3 {
        self.current[self.current.len() - 1]
    }

    /// Total rest length of the chain.
    pub fn rest_length(&self) -> f32 {
        self.config.node_distance * (self.node_count() - 1) as f32
    }

    /// Sum of squared deviations of adjacent distances from the rest distance.
    ///
    /// Decreases monotonically under repeated constraint passes; useful as a
    /// convergence measure.
    pub fn distance_error(&self) -> f32 {
        let d = self.config.node_distance;
        self.current
            .windows(2)
            .map(|w| {
                let err = (w[1] - w[0]).length() - d;
                err * err
            })
            .sum()
    }
}

/// Builder for [`Rope`], defaulting every parameter to [`RopeConfig::default`].
pub struct RopeBuilder {
    config: RopeConfig,
    start: Vec3,
}

impl RopeBuilder {
    pub fn new() -> Self {
        Self {
            config: RopeConfig::default(),
            start: Vec3::ZERO,
        }
    }

    pub fn node_count(mut self, count: usize) -> Self {
        self.config.node_count = count;
        self
    }

    pub fn node_distance(mut self, distance: f32) -> Self {
        self.config.node_distance = distance;
        self
    }

    pub fn damping(mut self, damping: f32) -> Self {
        self.config.damping = damping;
        self
    }

    pub fn gravity(mut self, gravity: f32) -> Self {
        self.config.gravity = gravity;
        self
    }

    pub fn stiffness(mut self, stiffness: f32) -> Self {
        self.config.stiffness = stiffness;
        self
    }

    pub fn iterations(mut self, iterations: u32) -> Self {
        self.config.iterations = iterations;
        self
    }

    pub fn collide_every(mut self, stride: u32) -> Self {
        self.config.collide_every = stride;
        self
    }

    pub fn node_radius(mut self, radius: f32) -> Self {
        self.config.node_radius = radius;
        self
    }

    pub fn collider_buffer(mut self, capacity: usize) -> Self {
        self.config.collider_buffer = capacity;
        self
    }

    pub fn link_width(mut self, width: f32) -> Self {
        self.config.link_width = width;
        self
    }

    pub fn start_at(mut self, start: Vec3) -> Self {
        self.start = start;
        self
    }

    pub fn build(self) -> Result<Rope, ConfigError> {
        Rope::new(self.config, self.start)
    }
}

impl Default for RopeBuilder {
    fn default() -> Self {
        Self::new()
    }
}
