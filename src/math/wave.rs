use glam::Vec2;

pub const SPATIAL_FREQUENCY: f64 = 0.5;
pub const AMPLITUDE: f64 = 0.5;

/// Surface height at `(x, y)` after `t` seconds. Bounded in `[-1, 1]`.
pub fn height(x: f64, y: f64, t: f64) -> f64 {
    (x * SPATIAL_FREQUENCY + t).sin() * AMPLITUDE + (y * SPATIAL_FREQUENCY + t).cos() * AMPLITUDE
}

/// Rewrites the z-component of every vertex in a flat xyz buffer from its
/// x/y. Nothing else in the buffer is touched.
pub fn displace(vertices: &mut [f32], t: f64) {
    for vertex in vertices.chunks_exact_mut(3) {
        vertex[2] = height(vertex[0] as f64, vertex[1] as f64, t) as f32;
    }
}

/// One step of exponential smoothing of `current` toward `target`.
pub fn smooth_toward(current: Vec2, target: Vec2, rate: f32) -> Vec2 {
    current + (target - current) * rate
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::TAU;

    #[test]
    fn height_matches_formula_and_bounds() {
        let samples: [(f64, f64, f64); 3] = [(0.0, 0.0, 0.0), (-10.0, 10.0, 3.5), (7.2, -4.4, 1234.5)];
        for &(x, y, t) in &samples {
            let expected = (0.5 * x + t).sin() * 0.5 + (0.5 * y + t).cos() * 0.5;
            let h = height(x, y, t);
            assert!((h - expected).abs() < 1e-12);
            assert!((-1.0..=1.0).contains(&h));
        }
        assert!((height(0.0, 0.0, 0.0) - 0.5).abs() < 1e-12);
    }

    #[test]
    fn height_is_periodic_in_time() {
        let samples: [(f64, f64, f64); 2] = [(1.0, 2.0, 0.3), (-9.6, 4.8, 17.0)];
        for &(x, y, t) in &samples {
            assert!((height(x, y, t) - height(x, y, t + TAU)).abs() < 1e-9);
        }
    }

    #[test]
    fn displace_only_writes_z() {
        let mut vertices = vec![1.0, 2.0, 99.0, -3.0, 4.0, -99.0];
        displace(&mut vertices, 0.75);

        assert_eq!(vertices[0], 1.0);
        assert_eq!(vertices[1], 2.0);
        assert_eq!(vertices[3], -3.0);
        assert_eq!(vertices[4], 4.0);
        assert!((vertices[2] as f64 - height(1.0, 2.0, 0.75)).abs() < 1e-6);
        assert!((vertices[5] as f64 - height(-3.0, 4.0, 0.75)).abs() < 1e-6);
    }

    #[test]
    fn displace_does_not_depend_on_previous_frame() {
        let mut a = vec![0.5, -0.5, 0.0];
        let mut b = vec![0.5, -0.5, 42.0];
        displace(&mut a, 2.0);
        displace(&mut b, 1.0);
        displace(&mut b, 2.0);
        assert_eq!(a, b);
    }

    #[test]
    fn smoothing_fixed_point() {
        let p = Vec2::new(0.25, -0.4);
        assert_eq!(smooth_toward(p, p, 0.05), p);
    }

    #[test]
    fn smoothing_converges_geometrically() {
        let target = Vec2::new(0.3, 0.2);
        let mut pos = Vec2::ZERO;
        let mut previous_gap = (target - pos).length();

        for _ in 0..400 {
            pos = smooth_toward(pos, target, 0.05);
            let gap = (target - pos).length();
            assert!(gap <= previous_gap * 0.95 + 1e-6);
            previous_gap = gap;
        }

        assert!((pos - target).length() < 1e-5);
    }
}
