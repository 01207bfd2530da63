//! Frame rate cap
//!
//! Native: sleep for the bulk of the remaining frame time, then spin for the
//! last couple of milliseconds. WASM has no thread::sleep, so it only spins.

use macroquad::time::get_time;

/// Stop sleeping this close to the deadline and spin instead
const SPIN_MARGIN: f64 = 0.002;

#[derive(Debug, Clone, Copy)]
pub struct FrameLimiter {
    target_frame_time: f64,
}

impl FrameLimiter {
    pub fn new(fps: u32) -> Self {
        Self { target_frame_time: 1.0 / fps.max(1) as f64 }
    }

    #[cfg(test)]
    pub fn target_frame_time(&self) -> f64 {
        self.target_frame_time
    }

    /// Seconds left in the frame after `elapsed`, or `None` if the frame ran long
    pub fn remaining(&self, elapsed: f64) -> Option<f64> {
        let left = self.target_frame_time - elapsed;
        (left > 0.0).then_some(left)
    }

    /// Block until a full frame has passed since `frame_start` (a `get_time()` value)
    pub fn wait(&self, frame_start: f64) {
        if self.remaining(get_time() - frame_start).is_none() {
            return;
        }

        #[cfg(not(target_arch = "wasm32"))]
        while get_time() - frame_start + SPIN_MARGIN < self.target_frame_time {
            std::thread::sleep(std::time::Duration::from_millis(1));
        }

        while get_time() - frame_start < self.target_frame_time {
            std::hint::spin_loop();
        }
    }
}
