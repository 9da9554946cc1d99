use std::f64::consts::TAU;

use glam::Vec3;

use crate::math::{displace, smooth_toward};
use crate::renderer::Camera;
use crate::scene::{PointerState, Scene};
use crate::ui::theme::palette;

/// Added to the mesh's z-rotation every frame, regardless of frame time.
pub const SPIN_PER_FRAME: f64 = 0.001;
/// Fraction of the remaining distance to the pointer target covered per frame.
pub const FOLLOW_RATE: f32 = 0.05;

/// Owns everything the per-frame update touches: the scene, the camera and
/// the latest pointer offset. Event handlers write into it, `tick` advances
/// it, and the renderer reads it.
pub struct AnimationLoop {
    scene: Scene,
    camera: Camera,
    pointer: PointerState,
    surface_size: (u32, u32),
    is_dark: bool,
    frames: u64,
}

impl AnimationLoop {
    pub fn new(width: u32, height: u32) -> Self {
        let mut camera = Camera::default();
        if width > 0 && height > 0 {
            camera.set_aspect(width as f32, height as f32);
        }

        Self {
            scene: Scene::background_mesh(),
            camera,
            pointer: PointerState::default(),
            surface_size: (width, height),
            is_dark: false,
            frames: 0,
        }
    }

    /// Advances the surface to `elapsed` seconds and steps the spin and the
    /// pointer follow by one frame.
    pub fn tick(&mut self, elapsed: f64) {
        let mesh = &mut self.scene.mesh;

        displace(mesh.vertices_mut(), elapsed);
        mesh.mark_dirty();

        let transform = &mut mesh.transform;
        let position = smooth_toward(transform.position.truncate(), self.pointer.target(), FOLLOW_RATE);
        transform.position = Vec3::new(position.x, position.y, transform.position.z);

        self.frames += 1;
        transform.rotation.z = spin_after(self.frames);
    }

    /// Acquires the frame's render target and advances only when one is
    /// available, so every update is paired with exactly one draw.
    pub fn tick_for_frame<T, E>(
        &mut self,
        elapsed: f64,
        acquire: impl FnOnce() -> Result<T, E>,
    ) -> Result<T, E> {
        let target = acquire()?;
        self.tick(elapsed);
        Ok(target)
    }

    pub fn pointer_moved(&mut self, x: f64, y: f64, width: f64, height: f64) {
        self.pointer = PointerState::from_cursor(x, y, width, height);
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        self.camera.set_aspect(width as f32, height as f32);
        self.surface_size = (width, height);
    }

    pub fn apply_theme(&mut self, is_dark: bool) {
        let colors = palette(is_dark);
        self.scene.mesh.color = colors.mesh;
        self.scene.background = colors.background;
        self.is_dark = is_dark;
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    /// Split borrow for the renderer: it reads the camera while consuming
    /// the mesh's dirty flag.
    pub fn render_parts(&mut self) -> (&Camera, &mut Scene) {
        (&self.camera, &mut self.scene)
    }

    pub fn pointer(&self) -> PointerState {
        self.pointer
    }

    pub fn surface_size(&self) -> (u32, u32) {
        self.surface_size
    }

    pub fn is_dark(&self) -> bool {
        self.is_dark
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }
}

/// Z-rotation after `frames` ticks, kept in `[0, 2π)`. Computed in f64 from
/// the frame count so long sessions do not drift.
pub fn spin_after(frames: u64) -> f32 {
    (frames as f64 * SPIN_PER_FRAME).rem_euclid(TAU) as f32
}
