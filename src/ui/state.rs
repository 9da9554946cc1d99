use std::time::{Duration, Instant};

const FPS_WINDOW: Duration = Duration::from_secs(1);

pub struct UiState {
    pub show_stats: bool,
    pub fps: f32,

    frame_count: u32,
    fps_timer: Instant,
}

impl UiState {
    pub fn new(show_stats: bool, now: Instant) -> Self {
        Self {
            show_stats,
            fps: 0.0,
            frame_count: 0,
            fps_timer: now,
        }
    }

    /// Counts a presented frame; `fps` is refreshed once per second.
    pub fn record_frame(&mut self, now: Instant) {
        self.frame_count += 1;

        let elapsed = now.duration_since(self.fps_timer);
        if elapsed >= FPS_WINDOW {
            self.fps = self.frame_count as f32 / elapsed.as_secs_f32();
            self.frame_count = 0;
            self.fps_timer = now;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fps_updates_after_a_second() {
        let start = Instant::now();
        let mut state = UiState::new(true, start);

        for i in 1..60 {
            state.record_frame(start + Duration::from_millis(i * 16));
        }
        assert_eq!(state.fps, 0.0);

        state.record_frame(start + Duration::from_secs(1));
        assert!((state.fps - 60.0).abs() < 1e-3);
    }
}
