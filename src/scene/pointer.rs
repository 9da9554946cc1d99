use glam::Vec2;

/// Latest pointer offset from the window center, each axis in `[-0.5, 0.5]`.
/// Screen space: `mouse_y` grows downward.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerState {
    pub mouse_x: f32,
    pub mouse_y: f32,
}

impl PointerState {
    pub fn from_cursor(x: f64, y: f64, width: f64, height: f64) -> Self {
        if width <= 0.0 || height <= 0.0 {
            return Self::default();
        }

        Self {
            mouse_x: (x / width - 0.5) as f32,
            mouse_y: (y / height - 0.5) as f32,
        }
    }

    /// Where the mesh drifts toward: y is flipped into world space.
    pub fn target(&self) -> Vec2 {
        Vec2::new(self.mouse_x, -self.mouse_y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn center_is_origin() {
        assert_eq!(
            PointerState::from_cursor(400.0, 300.0, 800.0, 600.0),
            PointerState::default()
        );
    }

    #[test]
    fn corners_map_to_half_offsets() {
        let top_left = PointerState::from_cursor(0.0, 0.0, 800.0, 600.0);
        assert_eq!((top_left.mouse_x, top_left.mouse_y), (-0.5, -0.5));

        let bottom_right = PointerState::from_cursor(800.0, 600.0, 800.0, 600.0);
        assert_eq!((bottom_right.mouse_x, bottom_right.mouse_y), (0.5, 0.5));
        assert_eq!(bottom_right.target(), Vec2::new(0.5, -0.5));
    }

    #[test]
    fn degenerate_window_yields_center() {
        assert_eq!(
            PointerState::from_cursor(10.0, 10.0, 0.0, 0.0),
            PointerState::default()
        );
    }
}
