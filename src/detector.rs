// Hand landmark detection seam.
// A real landmark model plugs in behind `HandDetector`; the demo ships `PointerHand`,
// which fakes one hand from the mouse so the HUD can be driven without a model.
// Visual: a hand skeleton hangs under the cursor; holding LMB curls it into a fist.

use crate::error::Error;
use crate::types::{FrameBuffer, HandLandmarks, Landmark, HAND_LANDMARK_COUNT};

/// Anything that can report hands (as normalized landmarks) for a frame.
pub trait HandDetector {
    fn detect(&mut self, frame: &FrameBuffer) -> Result<Vec<HandLandmarks>, Error>;
}

// Finger directions in screen degrees (clockwise from +x, so 270 points up) and open
// lengths in pixels, thumb -> pinky.
const FINGER_FAN: [(f32, f32); 5] = [(205.0, 90.0), (245.0, 130.0), (270.0, 140.0), (295.0, 130.0), (320.0, 105.0)];
// Length fraction a finger keeps when fully curled.
const CURLED_LENGTH: f32 = 0.12;
// Per-frame easing of openness toward its goal.
const OPEN_EASE: f32 = 0.2;

pub struct PointerHand {
    pointer: Option<(f32, f32)>,
    closing: bool,
    openness: f32, // 1 = fingers spread, 0 = fist
}

impl PointerHand {
    pub fn new() -> Self {
        Self { pointer: None, closing: false, openness: 1.0 }
    }

    /// Feed the latest mouse state; `None` means the pointer left the window.
    pub fn set_pointer(&mut self, pos: Option<(f32, f32)>, pressed: bool) {
        self.pointer = pos;
        self.closing = pressed;
    }

    #[cfg(test)]
    fn openness(&self) -> f32 {
        self.openness
    }

    /// 21 landmarks: palm at the pointer, four evenly spaced joints per finger.
    fn landmarks(&self, px: f32, py: f32, width: usize, height: usize) -> Vec<Landmark> {
        let (w, h) = (width.max(1) as f32, height.max(1) as f32);
        let norm = |x: f32, y: f32| Landmark::new((x / w).clamp(0.0, 1.0), (y / h).clamp(0.0, 1.0));
        let reach = CURLED_LENGTH + (1.0 - CURLED_LENGTH) * self.openness;

        let mut pts = Vec::with_capacity(HAND_LANDMARK_COUNT);
        pts.push(norm(px, py));
        for (deg, len) in FINGER_FAN {
            let (s, c) = deg.to_radians().sin_cos();
            for joint in 1..=4 {
                let d = len * reach * joint as f32 / 4.0;
                pts.push(norm(px + c * d, py + s * d));
            }
        }
        pts
    }
}

impl Default for PointerHand {
    fn default() -> Self {
        Self::new()
    }
}

impl HandDetector for PointerHand {
    fn detect(&mut self, frame: &FrameBuffer) -> Result<Vec<HandLandmarks>, Error> {
        let goal = if self.closing { 0.0 } else { 1.0 };
        self.openness += (goal - self.openness) * OPEN_EASE;

        let Some((x, y)) = self.pointer else {
            return Ok(Vec::new());
        };
        let hand = HandLandmarks::new(self.landmarks(x, y, frame.width, frame.height))?;
        Ok(vec![hand])
    }
}
