//! # Particle Network
//!
//! The drifting constellation behind the contact section.
//!
//! ```text
//! mount / resize ──> regenerate floor(area / 15000) particles
//!        │
//! every frame:  clear ──> O(n²) links (d < 150) ──> discs ──> move + bounce
//! ```
//!
//! The pairwise pass is quadratic on purpose: at one particle per 15000 px²
//! a full-HD surface holds ~138 particles, so ~9500 pair checks per frame.
//!
//! Resizing throws the whole batch away and regenerates it. Particles visibly
//! "pop" to new positions; that matches the shipped behavior.

use std::sync::Arc;

use bytemuck::{Pod, Zeroable};
use parking_lot::Mutex;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::Deserialize;
use vitrine_core::{EventBus, EventKind, FrameLoop, FrameScheduler, LoopControl, Subscription, Vec2};

use crate::style::Color;
use crate::surface::{Paint, Surface};

/// Tunables for the network.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct NetworkConfig {
    /// Surface area (px²) per particle.
    pub area_per_particle: f32,
    /// Pairs closer than this are linked.
    pub link_distance: f32,
    /// Maximum speed per axis (px per frame).
    pub max_speed: f32,
    /// Smallest particle radius.
    pub radius_min: f32,
    /// Largest particle radius (exclusive).
    pub radius_max: f32,
    /// Link opacity for two coincident particles.
    pub link_alpha: f32,
    /// Particle fill opacity.
    pub particle_alpha: f32,
    /// Link stroke width.
    pub line_width: f32,
    /// Base color for links and particles.
    pub color: Color,
    /// RNG seed for particle batches.
    pub seed: u64,
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            area_per_particle: 15_000.0,
            link_distance: 150.0,
            max_speed: 0.25,
            radius_min: 1.0,
            radius_max: 3.0,
            link_alpha: 0.4,
            particle_alpha: 0.8,
            line_width: 1.0,
            color: Color::ACCENT,
            seed: 0x5EED_CAFE,
        }
    }
}

/// A single drifting point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    /// Position on the surface.
    pub position: Vec2,
    /// Displacement per frame.
    pub velocity: Vec2,
    /// Disc radius.
    pub radius: f32,
}

/// Vertex for GPU line rendering of the links.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, Pod, Zeroable)]
pub struct LinkVertex {
    /// Position (x, y).
    pub position: [f32; 2],
    /// Color (RGBA).
    pub color: [f32; 4],
}

/// The particle field and its physics.
pub struct ParticleNetwork {
    config: NetworkConfig,
    particles: Vec<Particle>,
    width: f32,
    height: f32,
    rng: ChaCha8Rng,
    /// Number of batches generated so far.
    generation: u64,
}

impl ParticleNetwork {
    /// Creates an empty network; call [`resize`](Self::resize) to populate.
    #[must_use]
    pub fn new(config: NetworkConfig) -> Self {
        let rng = ChaCha8Rng::seed_from_u64(config.seed);
        Self {
            config,
            particles: Vec::new(),
            width: 0.0,
            height: 0.0,
            rng,
            generation: 0,
        }
    }

    /// Particle count for a surface: `floor(width * height / area_per_particle)`.
    #[must_use]
    pub fn particle_count_for(&self, width: f32, height: f32) -> usize {
        let area = f64::from(width) * f64::from(height);
        let per = f64::from(self.config.area_per_particle);
        if !area.is_finite() || !per.is_finite() || area <= 0.0 || per <= 0.0 {
            return 0;
        }
        (area / per).floor() as usize
    }

    /// Adopts a new surface size and regenerates the whole batch. Sizes that
    /// are not finite count as zero.
    pub fn resize(&mut self, width: f32, height: f32) {
        let finite = |v: f32| if v.is_finite() { v.max(0.0) } else { 0.0 };
        self.width = finite(width);
        self.height = finite(height);
        self.regenerate();
    }

    fn regenerate(&mut self) {
        let count = self.particle_count_for(self.width, self.height);
        let speed = self.config.max_speed;
        let (radius_min, radius_max) = (self.config.radius_min, self.config.radius_max);

        self.particles.clear();
        self.particles.reserve(count);
        for _ in 0..count {
            let position = Vec2::new(
                self.rng.gen::<f32>() * self.width,
                self.rng.gen::<f32>() * self.height,
            );
            let velocity = Vec2::new(
                (self.rng.gen::<f32>() - 0.5) * 2.0 * speed,
                (self.rng.gen::<f32>() - 0.5) * 2.0 * speed,
            );
            let radius = radius_min + self.rng.gen::<f32>() * (radius_max - radius_min);
            self.particles.push(Particle { position, velocity, radius });
        }
        self.generation += 1;

        tracing::debug!(
            "particle network regenerated: {} particles for {}x{} (batch {})",
            count,
            self.width,
            self.height,
            self.generation
        );
    }

    /// Link opacity for a pair at `distance`, or `None` if they are not linked.
    #[must_use]
    pub fn link_opacity(&self, distance: f32) -> Option<f32> {
        let max = self.config.link_distance;
        if max <= 0.0 || distance >= max {
            return None;
        }
        Some((self.config.link_alpha * (1.0 - distance / max)).max(0.0))
    }

    /// Paints links then particles.
    pub fn draw(&self, paint: &mut dyn Paint) {
        paint.clear(self.width, self.height);

        for (i, a) in self.particles.iter().enumerate() {
            for b in &self.particles[i + 1..] {
                let distance = a.position.distance(b.position);
                if let Some(alpha) = self.link_opacity(distance) {
                    paint.stroke_line(
                        a.position,
                        b.position,
                        self.config.color.with_alpha(alpha),
                        self.config.line_width,
                    );
                }
            }
        }

        let fill = self.config.color.with_alpha(self.config.particle_alpha);
        for particle in &self.particles {
            paint.fill_disc(particle.position, particle.radius, fill);
        }
    }

    /// Advances every particle by its velocity and bounces off the edges.
    ///
    /// Each axis reflects independently; the position is clamped back onto
    /// the surface so it never rests outside `[0, w] x [0, h]`.
    pub fn step(&mut self) {
        let (width, height) = (self.width, self.height);
        for particle in &mut self.particles {
            particle.position += particle.velocity;

            if particle.position.x < 0.0 || particle.position.x > width {
                particle.velocity.x = -particle.velocity.x;
                particle.position.x = particle.position.x.clamp(0.0, width);
            }
            if particle.position.y < 0.0 || particle.position.y > height {
                particle.velocity.y = -particle.velocity.y;
                particle.position.y = particle.position.y.clamp(0.0, height);
            }
        }
    }

    /// One animation frame: draw, then step.
    pub fn frame(&mut self, paint: &mut dyn Paint) {
        self.draw(paint);
        self.step();
    }

    /// Line-list vertices for every current link (two per link).
    #[must_use]
    pub fn link_vertices(&self) -> Vec<LinkVertex> {
        let mut vertices = Vec::new();
        for (i, a) in self.particles.iter().enumerate() {
            for b in &self.particles[i + 1..] {
                if let Some(alpha) = self.link_opacity(a.position.distance(b.position)) {
                    let color = self.config.color.with_alpha(alpha).to_array();
                    vertices.push(LinkVertex { position: a.position.to_array(), color });
                    vertices.push(LinkVertex { position: b.position.to_array(), color });
                }
            }
        }
        vertices
    }

    /// Current particles.
    #[must_use]
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Current surface size.
    #[must_use]
    pub fn size(&self) -> (f32, f32) {
        (self.width, self.height)
    }

    /// Number of batches generated so far.
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Active configuration.
    #[must_use]
    pub fn config(&self) -> &NetworkConfig {
        &self.config
    }
}

/// A mounted particle network: frame loop plus resize listener.
///
/// Dropping it cancels the loop and detaches the listener.
pub struct ParticleNetworkHost {
    network: Arc<Mutex<ParticleNetwork>>,
    frame_loop: FrameLoop,
    _resize: Subscription,
}

impl ParticleNetworkHost {
    /// Mounts the network on `surface`.
    ///
    /// Returns `None` (and draws nothing) if the surface has no paint context.
    #[must_use]
    pub fn mount(
        scheduler: &FrameScheduler,
        bus: &EventBus,
        surface: Arc<Mutex<dyn Surface>>,
        config: NetworkConfig,
    ) -> Option<Self> {
        let (width, height) = {
            let mut surface = surface.lock();
            if surface.context().is_none() {
                tracing::debug!("particle network: surface has no paint context, not mounting");
                return None;
            }
            surface.size()
        };

        let network = Arc::new(Mutex::new(ParticleNetwork::new(config)));
        network.lock().resize(width, height);

        let resize = {
            let network = Arc::clone(&network);
            let surface = Arc::clone(&surface);
            bus.subscribe(EventKind::Resize, move |_| {
                let (width, height) = surface.lock().size();
                network.lock().resize(width, height);
            })
        };

        let frame_loop = {
            let network = Arc::clone(&network);
            FrameLoop::start(scheduler, move |_| {
                let mut surface = surface.lock();
                if let Some(paint) = surface.context() {
                    network.lock().frame(paint);
                }
                LoopControl::Continue
            })
        };

        tracing::info!("particle network mounted on {}x{} surface", width, height);

        Some(Self {
            network,
            frame_loop,
            _resize: resize,
        })
    }

    /// Shared handle to the simulated network.
    #[must_use]
    pub fn network(&self) -> Arc<Mutex<ParticleNetwork>> {
        Arc::clone(&self.network)
    }

    /// Returns true while the frame loop runs.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.frame_loop.is_running()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::CommandBuffer;

    fn network(width: f32, height: f32) -> ParticleNetwork {
        let mut network = ParticleNetwork::new(NetworkConfig::default());
        network.resize(width, height);
        network
    }

    #[test]
    fn test_count_follows_area() {
        let network = network(1920.0, 1080.0);
        assert_eq!(network.particles().len(), 138); // 2_073_600 / 15_000
        assert_eq!(network.particle_count_for(100.0, 100.0), 0);
        assert_eq!(network.particle_count_for(150.0, 100.0), 1);
        assert_eq!(network.particle_count_for(-5.0, 100.0), 0);
        assert_eq!(network.particle_count_for(f32::INFINITY, 100.0), 0);
        assert_eq!(network.particle_count_for(100.0, f32::NAN), 0);
    }

    #[test]
    fn test_resize_to_non_finite_is_empty() {
        let mut network = network(800.0, 600.0);
        network.resize(f32::INFINITY, 600.0);
        assert!(network.particles().is_empty());
        network.step();

        network.resize(800.0, f32::NEG_INFINITY);
        assert!(network.particles().is_empty());

        network.resize(800.0, 600.0);
        assert_eq!(network.particles().len(), 32);
    }

    #[test]
    fn test_spawn_within_bounds_and_speed() {
        let network = network(800.0, 600.0);
        for p in network.particles() {
            assert!((0.0..=800.0).contains(&p.position.x));
            assert!((0.0..=600.0).contains(&p.position.y));
            assert!(p.velocity.x.abs() <= 0.25 && p.velocity.y.abs() <= 0.25);
            assert!(p.radius >= 1.0 && p.radius < 3.0);
        }
    }

    #[test]
    fn test_positions_stay_in_bounds() {
        let mut network = network(300.0, 200.0);
        for _ in 0..5_000 {
            network.step();
            for p in network.particles() {
                assert!((0.0..=300.0).contains(&p.position.x), "x out: {}", p.position.x);
                assert!((0.0..=200.0).contains(&p.position.y), "y out: {}", p.position.y);
            }
        }
    }

    #[test]
    fn test_bounce_flips_velocity() {
        let mut network = network(300.0, 200.0);
        network.particles[0] = Particle {
            position: Vec2::new(299.9, 100.0),
            velocity: Vec2::new(0.25, 0.0),
            radius: 1.0,
        };
        network.step();
        let p = network.particles()[0];
        assert!((p.velocity.x + 0.25).abs() < f32::EPSILON);
        assert!((p.position.x - 300.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_link_opacity() {
        let network = network(10.0, 10.0);
        assert!((network.link_opacity(0.0).unwrap() - 0.4).abs() < 1e-6);
        assert!((network.link_opacity(75.0).unwrap() - 0.2).abs() < 1e-6);
        assert!(network.link_opacity(150.0).is_none());
        assert!(network.link_opacity(200.0).is_none());
    }

    #[test]
    fn test_draw_links_only_close_pairs() {
        let mut network = network(1000.0, 1000.0);
        network.particles = vec![
            Particle { position: Vec2::new(0.0, 0.0), velocity: Vec2::ZERO, radius: 1.0 },
            Particle { position: Vec2::new(100.0, 0.0), velocity: Vec2::ZERO, radius: 1.0 },
            Particle { position: Vec2::new(400.0, 0.0), velocity: Vec2::ZERO, radius: 1.0 },
        ];

        let mut buffer = CommandBuffer::new();
        network.draw(&mut buffer);
        assert_eq!(buffer.line_count(), 1);
        assert_eq!(buffer.disc_count(), 3);
        assert_eq!(network.link_vertices().len(), 2);
    }

    #[test]
    fn test_resize_regenerates_batch() {
        let mut network = network(800.0, 600.0);
        let before = network.particles().to_vec();
        network.resize(800.0, 600.0);
        assert_eq!(network.generation(), 2);
        assert_eq!(network.particles().len(), 32);
        assert_ne!(network.particles(), before.as_slice());

        network.resize(400.0, 300.0);
        assert_eq!(network.particles().len(), 8);
    }

    #[test]
    fn test_same_seed_same_batch() {
        let a = network(640.0, 480.0);
        let b = network(640.0, 480.0);
        assert_eq!(a.particles(), b.particles());
    }
}
