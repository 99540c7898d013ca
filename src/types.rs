// Core types shared by the HUD, the raster helpers and the outer loop.

use crate::error::Error;

/// Number of landmarks a detector reports per hand (wrist + 4 joints per finger).
pub const HAND_LANDMARK_COUNT: usize = 21;

/// Normalized coordinates are clamped to ±this many frame sizes before projection,
/// keeping every pixel coordinate far from i32 overflow.
const PROJECTION_LIMIT: f32 = 4.0;

#[derive(Clone)]
pub struct FrameBuffer {
    pub width: usize,      // how wide the frame is on screen (pixels)
    pub height: usize,     // how tall the frame is on screen (pixels)
    pub pixels: Vec<u32>,  // each entry is 0x00RRGGBB for minifb
}

impl FrameBuffer {
    /// A frame filled with one color.
    pub fn filled(width: usize, height: usize, color: u32) -> Self {
        Self { width, height, pixels: vec![color; width * height] }
    }

    /// Read a pixel; `None` outside the frame.
    #[cfg(test)]
    pub(crate) fn get(&self, x: i32, y: i32) -> Option<u32> {
        if x < 0 || y < 0 {
            return None;
        }
        let (x, y) = (x as usize, y as usize);
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.pixels[y * self.width + x])
    }
}

/// Integer pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Point2D {
    pub x: i32,
    pub y: i32,
}

impl Point2D {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// One normalized keypoint; x and y are fractions of the frame size.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Landmark {
    pub x: f32,
    pub y: f32,
}

impl Landmark {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Scale into pixel space, truncating toward zero.
    #[inline]
    pub fn to_pixel(self, width: usize, height: usize) -> Point2D {
        let x = self.x.clamp(-PROJECTION_LIMIT, PROJECTION_LIMIT);
        let y = self.y.clamp(-PROJECTION_LIMIT, PROJECTION_LIMIT);
        Point2D::new((x * width as f32) as i32, (y * height as f32) as i32)
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// Landmarks of one detected hand, ordered the way the detector defines them.
/// Always holds at least `HAND_LANDMARK_COUNT` points.
#[derive(Debug, Clone, PartialEq)]
pub struct HandLandmarks {
    points: Vec<Landmark>,
}

impl HandLandmarks {
    pub fn new(points: Vec<Landmark>) -> Result<Self, Error> {
        if points.len() < HAND_LANDMARK_COUNT {
            return Err(Error::Landmarks { expected: HAND_LANDMARK_COUNT, got: points.len() });
        }
        Ok(Self { points })
    }

    /// Landmark at `index`; `index` must be below `HAND_LANDMARK_COUNT`.
    #[inline]
    pub fn get(&self, index: usize) -> Landmark {
        self.points[index]
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.points.len()
    }
}
