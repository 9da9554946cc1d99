use glam::{Mat4, Vec3};

use crate::math::{TriangleMesh, plane};

pub const PLANE_SIZE: f32 = 20.0;
pub const PLANE_SEGMENTS: u32 = 50;
pub const INITIAL_MESH_COLOR: u32 = 0x1a1a1a;

/// Position and XYZ-order Euler rotation. Scale is always one.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Transform {
    pub position: Vec3,
    pub rotation: Vec3,
}

impl Transform {
    pub fn matrix(&self) -> Mat4 {
        Mat4::from_translation(self.position)
            * Mat4::from_rotation_x(self.rotation.x)
            * Mat4::from_rotation_y(self.rotation.y)
            * Mat4::from_rotation_z(self.rotation.z)
    }
}

pub struct MeshObject {
    geometry: TriangleMesh,
    needs_update: bool,
    pub color: u32,
    pub transform: Transform,
}

impl MeshObject {
    pub fn new(geometry: TriangleMesh, color: u32) -> Self {
        Self {
            geometry,
            needs_update: true,
            color,
            transform: Transform::default(),
        }
    }

    pub fn vertices(&self) -> &[f32] {
        &self.geometry.vertices
    }

    /// Mutable access to the position buffer. The slice length is fixed, so
    /// the vertex count cannot change for the mesh's lifetime.
    pub fn vertices_mut(&mut self) -> &mut [f32] {
        &mut self.geometry.vertices
    }

    pub fn indices(&self) -> &[u32] {
        &self.geometry.indices
    }

    pub fn mark_dirty(&mut self) {
        self.needs_update = true;
    }

    /// Returns whether the vertex buffer changed since the last call.
    pub fn take_dirty(&mut self) -> bool {
        std::mem::take(&mut self.needs_update)
    }
}

pub struct DirectionalLight {
    pub color: u32,
    pub intensity: f32,
    /// Unit vector from the origin toward the light.
    pub direction: Vec3,
}

impl Default for DirectionalLight {
    fn default() -> Self {
        Self {
            color: 0xffffff,
            intensity: 1.0,
            direction: Vec3::new(0.0, 1.0, 1.0).normalize(),
        }
    }
}

pub struct AmbientLight {
    pub color: u32,
    pub intensity: f32,
}

impl Default for AmbientLight {
    fn default() -> Self {
        Self {
            color: 0x404040,
            intensity: 1.0,
        }
    }
}

pub struct Scene {
    pub mesh: MeshObject,
    pub light: DirectionalLight,
    pub ambient: AmbientLight,
    pub background: u32,
}

impl Scene {
    /// The background plane tilted back by 60 degrees, one white
    /// directional light and a dim ambient fill.
    pub fn background_mesh() -> Self {
        let geometry = plane(PLANE_SIZE, PLANE_SIZE, PLANE_SEGMENTS, PLANE_SEGMENTS);
        let mut mesh = MeshObject::new(geometry, INITIAL_MESH_COLOR);
        mesh.transform.rotation.x = -std::f32::consts::FRAC_PI_3;

        Self {
            mesh,
            light: DirectionalLight::default(),
            ambient: AmbientLight::default(),
            background: 0x000000,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn background_mesh_is_tilted() {
        let scene = Scene::background_mesh();
        let t = scene.mesh.transform;
        assert!((t.rotation.x + std::f32::consts::FRAC_PI_3).abs() < 1e-6);
        assert_eq!(t.rotation.z, 0.0);
        assert_eq!(t.position, Vec3::ZERO);
        assert_eq!(scene.mesh.vertices().len(), 3 * 51 * 51);
    }

    #[test]
    fn transform_matrix_without_offsets_is_the_tilt() {
        let t = Transform {
            position: Vec3::ZERO,
            rotation: Vec3::new(-1.0, 0.0, 0.0),
        };
        assert!(t.matrix().abs_diff_eq(Mat4::from_rotation_x(-1.0), 1e-6));
    }

    #[test]
    fn transform_applies_z_spin_before_tilt() {
        let t = Transform {
            position: Vec3::new(1.0, 2.0, 0.0),
            rotation: Vec3::new(-std::f32::consts::FRAC_PI_2, 0.0, std::f32::consts::FRAC_PI_2),
        };
        // +X spins to +Y, the tilt takes +Y to -Z, then the offset applies.
        let p = t.matrix().transform_point3(Vec3::X);
        assert!(p.abs_diff_eq(Vec3::new(1.0, 2.0, -1.0), 1e-5));
    }

    #[test]
    fn dirty_flag_is_consumed_once() {
        let mut mesh = MeshObject::new(plane(1.0, 1.0, 1, 1), 0);
        assert!(mesh.take_dirty());
        assert!(!mesh.take_dirty());
        mesh.mark_dirty();
        assert!(mesh.take_dirty());
    }
}
