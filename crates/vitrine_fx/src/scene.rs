//! # Floating Scene
//!
//! The hero backdrop: a logo cube and twelve small shapes that spin and bob,
//! all inside a group that leans toward the pointer.
//!
//! ```text
//! camera (0, 0, 7), fov 50
//!   └── follower  (rotation eases toward pointer × 0.15)
//!         ├── logo cube  (spins on y, rocks on x)
//!         └── 12 shapes  (spin on x+y, bob on y)
//! ```
//!
//! The scene only simulates transforms; meshes and lights are the host's
//! business.

use std::sync::Arc;

use parking_lot::Mutex;
use vitrine_core::{lerp, EventBus, EventKind, FrameLoop, FrameScheduler, HostEvent, LoopControl, Subscription, Vec2, Vec3};

use crate::style::Color;

/// Mesh type of a floating shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeKind {
    /// Cube with edge `size`.
    Box,
    /// Sphere with radius `0.6 × size`.
    Sphere,
    /// Torus with radius `0.5 × size`, tube `0.2 × size`.
    Torus,
    /// Octahedron with radius `0.6 × size`.
    Octahedron,
    /// Cone with radius `0.5 × size`, height `size`.
    Cone,
}

impl ShapeKind {
    /// Outer radius of the mesh for a given nominal size.
    #[must_use]
    pub fn radius(self, size: f32) -> f32 {
        match self {
            Self::Box => size * 0.5,
            Self::Sphere | Self::Octahedron => size * 0.6,
            Self::Torus => size * 0.7,
            Self::Cone => size * 0.5,
        }
    }
}

/// Bob amplitude in world units.
const BOB_AMPLITUDE: f32 = 0.3;
/// Spin per frame at speed 1, in radians.
const SPIN_PER_FRAME: f32 = 0.01;
/// How far the group leans per unit of pointer offset.
const FOLLOW_STRENGTH: f32 = 0.15;
/// Per-frame easing factor of the lean.
const FOLLOW_EASE: f32 = 0.05;

/// A spinning, bobbing shape.
#[derive(Debug, Clone, PartialEq)]
pub struct FloatingShape {
    /// Rest position.
    pub base: Vec3,
    /// Current position.
    pub position: Vec3,
    /// Current rotation (radians).
    pub rotation: Vec3,
    /// Material color.
    pub color: Color,
    /// Spin and bob speed multiplier.
    pub speed: f32,
    /// Mesh type.
    pub kind: ShapeKind,
    /// Nominal size.
    pub size: f32,
}

impl FloatingShape {
    /// Creates a shape at rest.
    #[must_use]
    pub fn new(base: [f32; 3], color: Color, speed: f32, kind: ShapeKind, size: f32) -> Self {
        let base = Vec3::from_array(base);
        Self {
            base,
            position: base,
            rotation: Vec3::ZERO,
            color,
            speed,
            kind,
            size,
        }
    }

    /// One frame at `elapsed` seconds since the scene started.
    pub fn update(&mut self, elapsed: f32) {
        self.rotation.x += SPIN_PER_FRAME * self.speed;
        self.rotation.y += SPIN_PER_FRAME * self.speed;
        self.position.y = self.base.y + (elapsed * self.speed).sin() * BOB_AMPLITUDE;
    }
}

/// The textured logo cube.
#[derive(Debug, Clone, PartialEq)]
pub struct LogoCube {
    /// Center.
    pub position: Vec3,
    /// Edge length.
    pub size: f32,
    /// Current rotation (radians).
    pub rotation: Vec3,
}

impl LogoCube {
    fn new() -> Self {
        Self {
            position: Vec3::new(0.0, 1.2, 0.0),
            size: 1.8,
            rotation: Vec3::ZERO,
        }
    }

    /// One frame at `elapsed` seconds since the scene started.
    pub fn update(&mut self, elapsed: f32) {
        self.rotation.y += 0.008;
        self.rotation.x = (elapsed * 0.5).sin() * 0.1;
    }
}

/// Group rotation that eases toward the pointer.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MouseFollower {
    /// Rotation about x (radians).
    pub rotation_x: f32,
    /// Rotation about y (radians).
    pub rotation_y: f32,
}

impl MouseFollower {
    /// Eases toward the pointer, given in normalized device coordinates.
    pub fn update(&mut self, pointer: Vec2) {
        self.rotation_x = lerp(self.rotation_x, pointer.y * FOLLOW_STRENGTH, FOLLOW_EASE);
        self.rotation_y = lerp(self.rotation_y, pointer.x * FOLLOW_STRENGTH, FOLLOW_EASE);
    }
}

/// Perspective camera.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    /// Eye position.
    pub position: Vec3,
    /// Vertical field of view in degrees.
    pub fov: f32,
}

/// The whole backdrop.
#[derive(Debug, Clone)]
pub struct Scene {
    /// Camera.
    pub camera: Camera,
    /// Lean group.
    pub follower: MouseFollower,
    /// Logo cube.
    pub cube: LogoCube,
    /// Floating shapes.
    pub shapes: Vec<FloatingShape>,
    pointer: Vec2,
    viewport: (f32, f32),
    started_at: Option<f64>,
}

impl Scene {
    /// The portfolio hero layout.
    #[must_use]
    pub fn portfolio() -> Self {
        use ShapeKind::{Box, Cone, Octahedron, Sphere, Torus};
        let (o600, o400, o700) = (Color::ORANGE_600, Color::ORANGE_400, Color::ORANGE_700);

        let shapes = vec![
            FloatingShape::new([-4.0, 2.5, -2.0], o600, 0.8, Octahedron, 0.45),
            FloatingShape::new([-3.2, 1.8, -3.0], o400, 1.1, Box, 0.35),
            FloatingShape::new([4.0, 2.2, -2.0], o400, 1.2, Box, 0.45),
            FloatingShape::new([3.5, 2.8, -3.0], o700, 0.7, Sphere, 0.4),
            FloatingShape::new([-4.0, -2.0, -2.0], o700, 0.6, Torus, 0.5),
            FloatingShape::new([-3.0, -2.8, -3.0], o600, 0.9, Sphere, 0.35),
            FloatingShape::new([4.0, -2.5, -2.0], o600, 1.0, Octahedron, 0.4),
            FloatingShape::new([3.0, -1.8, -3.0], o400, 1.3, Cone, 0.4),
            FloatingShape::new([-5.0, 0.0, -3.0], o400, 0.5, Sphere, 0.3),
            FloatingShape::new([5.0, 0.5, -2.5], o700, 0.8, Torus, 0.35),
            FloatingShape::new([0.0, 3.5, -3.0], o600, 0.7, Box, 0.3),
            FloatingShape::new([0.0, -3.5, -3.0], o700, 1.1, Octahedron, 0.35),
        ];

        Self {
            camera: Camera {
                position: Vec3::new(0.0, 0.0, 7.0),
                fov: 50.0,
            },
            follower: MouseFollower::default(),
            cube: LogoCube::new(),
            shapes,
            pointer: Vec2::ZERO,
            viewport: (0.0, 0.0),
            started_at: None,
        }
    }

    /// Sets the canvas size used to normalize pointer positions.
    pub fn set_viewport(&mut self, width: f32, height: f32) {
        self.viewport = (width, height);
    }

    /// Records a pointer position in canvas pixels.
    ///
    /// Stored in device coordinates: x right and y up, both in `[-1, 1]`.
    pub fn set_pointer(&mut self, x: f32, y: f32) {
        let (width, height) = self.viewport;
        if width <= 0.0 || height <= 0.0 {
            return;
        }
        self.pointer = Vec2::new((x / width) * 2.0 - 1.0, -(y / height) * 2.0 + 1.0);
    }

    /// Pointer in device coordinates.
    #[must_use]
    pub fn pointer(&self) -> Vec2 {
        self.pointer
    }

    /// Advances the scene to `now`.
    pub fn frame(&mut self, now: f64) {
        let started_at = *self.started_at.get_or_insert(now);
        let elapsed = (now - started_at) as f32;

        self.follower.update(self.pointer);
        self.cube.update(elapsed);
        for shape in &mut self.shapes {
            shape.update(elapsed);
        }
    }
}

/// A mounted scene: frame loop plus pointer and resize listeners.
pub struct SceneHost {
    scene: Arc<Mutex<Scene>>,
    frame_loop: FrameLoop,
    _subscriptions: Vec<Subscription>,
}

impl SceneHost {
    /// Mounts `scene` on a canvas of the given size.
    #[must_use]
    pub fn mount(scheduler: &FrameScheduler, bus: &EventBus, mut scene: Scene, width: f32, height: f32) -> Self {
        scene.set_viewport(width, height);
        let scene = Arc::new(Mutex::new(scene));

        let pointer = {
            let scene = Arc::clone(&scene);
            bus.subscribe(EventKind::PointerMove, move |event| {
                if let HostEvent::PointerMove { x, y } = *event {
                    scene.lock().set_pointer(x, y);
                }
            })
        };
        let resize = {
            let scene = Arc::clone(&scene);
            bus.subscribe(EventKind::Resize, move |event| {
                if let HostEvent::Resize { width, height } = *event {
                    scene.lock().set_viewport(width, height);
                }
            })
        };

        let frame_loop = {
            let scene = Arc::clone(&scene);
            FrameLoop::start(scheduler, move |now| {
                scene.lock().frame(now);
                LoopControl::Continue
            })
        };

        tracing::debug!("scene mounted with {} shapes", scene.lock().shapes.len());

        Self {
            scene,
            frame_loop,
            _subscriptions: vec![pointer, resize],
        }
    }

    /// Shared handle to the scene.
    #[must_use]
    pub fn scene(&self) -> Arc<Mutex<Scene>> {
        Arc::clone(&self.scene)
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

    #[test]
    fn test_portfolio_layout() {
        let scene = Scene::portfolio();
        assert_eq!(scene.shapes.len(), 12);
        assert_eq!(scene.camera.position, Vec3::new(0.0, 0.0, 7.0));
        assert_eq!(scene.cube.position, Vec3::new(0.0, 1.2, 0.0));
        assert_eq!(scene.shapes.iter().filter(|s| s.kind == ShapeKind::Torus).count(), 2);
    }

    #[test]
    fn test_shape_spins_and_bobs() {
        let mut shape = FloatingShape::new([1.0, 2.0, -3.0], Color::ACCENT, 2.0, ShapeKind::Box, 0.3);
        shape.update(0.0);
        shape.update(std::f32::consts::FRAC_PI_4);

        assert!((shape.rotation.x - 0.04).abs() < 1e-6);
        assert!((shape.rotation.y - 0.04).abs() < 1e-6);
        // sin(pi/4 * 2) = 1
        assert!((shape.position.y - 2.3).abs() < 1e-5);
        assert_eq!(shape.position.x, 1.0);
    }

    #[test]
    fn test_follower_eases_toward_pointer() {
        let mut scene = Scene::portfolio();
        scene.set_viewport(800.0, 600.0);
        scene.set_pointer(800.0, 0.0);
        assert_eq!(scene.pointer(), Vec2::new(1.0, 1.0));

        scene.frame(0.0);
        assert!((scene.follower.rotation_y - 0.0075).abs() < 1e-6);

        for i in 1..400 {
            scene.frame(f64::from(i) / 60.0);
        }
        assert!((scene.follower.rotation_y - 0.15).abs() < 1e-4);
        assert!((scene.follower.rotation_x - 0.15).abs() < 1e-4);
    }

    #[test]
    fn test_host_tracks_pointer() {
        let scheduler = FrameScheduler::new();
        let bus = EventBus::new();
        let host = SceneHost::mount(&scheduler, &bus, Scene::portfolio(), 200.0, 100.0);

        bus.dispatch(&HostEvent::PointerMove { x: 100.0, y: 50.0 });
        assert_eq!(host.scene().lock().pointer(), Vec2::ZERO);

        scheduler.run_frame(0.0);
        scheduler.run_frame(1.0);
        assert!(host.scene().lock().cube.rotation.y > 0.0);

        drop(host);
        assert_eq!(bus.listener_count(EventKind::PointerMove), 0);
        assert_eq!(scheduler.pending(), 0);
    }
}
