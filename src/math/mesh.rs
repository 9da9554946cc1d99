/// Indexed triangle mesh with a flat `[x, y, z, x, y, z, ...]` position buffer.
pub struct TriangleMesh {
    pub vertices: Vec<f32>,
    pub indices: Vec<u32>,
}

/// Flat rectangle in the XY plane, centered on the origin, split into
/// `width_segments * height_segments` cells of two triangles each.
///
/// Vertices run row by row from the top edge (`y = height / 2`) down, each
/// row left to right.
pub fn plane(width: f32, height: f32, width_segments: u32, height_segments: u32) -> TriangleMesh {
    let grid_x = width_segments.max(1) as usize;
    let grid_y = height_segments.max(1) as usize;
    let grid_x1 = grid_x + 1;
    let grid_y1 = grid_y + 1;

    let segment_width = width / grid_x as f32;
    let segment_height = height / grid_y as f32;
    let half_width = width / 2.0;
    let half_height = height / 2.0;

    let mut vertices = Vec::with_capacity(grid_x1 * grid_y1 * 3);
    for iy in 0..grid_y1 {
        let y = iy as f32 * segment_height - half_height;
        for ix in 0..grid_x1 {
            let x = ix as f32 * segment_width - half_width;
            vertices.extend_from_slice(&[x, -y, 0.0]);
        }
    }

    let mut indices = Vec::with_capacity(grid_x * grid_y * 6);
    for iy in 0..grid_y {
        for ix in 0..grid_x {
            let a = (ix + grid_x1 * iy) as u32;
            let b = (ix + grid_x1 * (iy + 1)) as u32;
            let c = (ix + 1 + grid_x1 * (iy + 1)) as u32;
            let d = (ix + 1 + grid_x1 * iy) as u32;

            indices.extend_from_slice(&[a, b, d]);
            indices.extend_from_slice(&[b, c, d]);
        }
    }

    TriangleMesh { vertices, indices }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn background_plane_dimensions() {
        let mesh = plane(20.0, 20.0, 50, 50);
        assert_eq!(mesh.vertices.len() / 3, 51 * 51);
        assert_eq!(mesh.vertices.len(), 3 * 2601);
        assert_eq!(mesh.indices.len(), 50 * 50 * 6);
    }

    #[test]
    fn plane_corners_and_flatness() {
        let mesh = plane(20.0, 20.0, 50, 50);
        assert_eq!(&mesh.vertices[0..3], &[-10.0, 10.0, 0.0]);

        let last = mesh.vertices.len() - 3;
        assert!((mesh.vertices[last] - 10.0).abs() < 1e-4);
        assert!((mesh.vertices[last + 1] + 10.0).abs() < 1e-4);
        assert!(mesh.vertices.chunks(3).all(|v| v[2] == 0.0));
    }

    #[test]
    fn indices_stay_in_range() {
        let mesh = plane(4.0, 2.0, 3, 2);
        let count = (mesh.vertices.len() / 3) as u32;
        assert_eq!(count, 12);
        assert!(mesh.indices.iter().all(|&i| i < count));
        assert_eq!(&mesh.indices[0..6], &[0, 4, 1, 4, 5, 1]);
    }
}
