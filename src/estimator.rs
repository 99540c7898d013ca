// Hand geometry and the "energy" signal.
//
// From a detector's landmark set we keep exactly six points: the palm anchor
// (landmark 0) and the five fingertips. The fingertips plus the palm form a
// polygon whose area measures how far the hand is spread; a closed fist gives
// a tiny polygon and therefore high energy, an open hand gives low energy.

use crate::constants::MAX_SPREAD_FRACTION;
use crate::types::{HandLandmarks, Point2D};
use thiserror::Error;

/// Landmark index of the palm/wrist anchor.
pub const PALM_LANDMARK: usize = 0;

/// The five fingertip roles, in the fixed order used for trails and the spread polygon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Finger {
    Thumb,
    Index,
    Middle,
    Ring,
    Pinky,
}

impl Finger {
    pub const ALL: [Finger; 5] = [Finger::Thumb, Finger::Index, Finger::Middle, Finger::Ring, Finger::Pinky];

    /// Detector landmark index of this finger's tip.
    pub const fn tip_landmark(self) -> usize {
        match self {
            Finger::Thumb => 4,
            Finger::Index => 8,
            Finger::Middle => 12,
            Finger::Ring => 16,
            Finger::Pinky => 20,
        }
    }

    /// Position in `Finger::ALL`; also the trail slot.
    pub const fn slot(self) -> usize {
        match self {
            Finger::Thumb => 0,
            Finger::Index => 1,
            Finger::Middle => 2,
            Finger::Ring => 3,
            Finger::Pinky => 4,
        }
    }
}

/// A fingertip in pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fingertip {
    pub finger: Finger,
    pub pos: Point2D,
}

#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum GeometryError {
    #[error("landmark {0} is not a finite coordinate")]
    NonFinite(usize),
    #[error("frame {0}x{1} has no area")]
    EmptyFrame(usize, usize),
    #[error("spread polygon area is not finite")]
    BadArea,
}

/// Everything the HUD needs from one hand in one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct HandGeometry {
    pub palm: Point2D,
    pub tips: [Fingertip; 5],
    /// Target energy in [0,1], or why it could not be computed this frame.
    pub energy_target: Result<f32, GeometryError>,
}

impl HandGeometry {
    /// Project the palm and fingertips into a `width` x `height` frame and estimate energy.
    pub fn from_landmarks(hand: &HandLandmarks, width: usize, height: usize) -> Self {
        let palm = hand.get(PALM_LANDMARK).to_pixel(width, height);
        let tips = Finger::ALL.map(|finger| Fingertip {
            finger,
            pos: hand.get(finger.tip_landmark()).to_pixel(width, height),
        });
        let energy_target = check_finite(hand).and_then(|()| energy_target(&tips, palm, width, height));
        Self { palm, tips, energy_target }
    }
}

fn check_finite(hand: &HandLandmarks) -> Result<(), GeometryError> {
    let used = std::iter::once(PALM_LANDMARK).chain(Finger::ALL.iter().map(|f| f.tip_landmark()));
    for idx in used {
        if !hand.get(idx).is_finite() {
            return Err(GeometryError::NonFinite(idx));
        }
    }
    Ok(())
}

/// `1 - min(area / (w*h*0.08), 1)` over the polygon tips-then-palm.
pub fn energy_target(tips: &[Fingertip; 5], palm: Point2D, width: usize, height: usize) -> Result<f32, GeometryError> {
    let max_area = width as f64 * height as f64 * MAX_SPREAD_FRACTION;
    if max_area <= 0.0 {
        return Err(GeometryError::EmptyFrame(width, height));
    }

    // Order matters for the shoelace sum: fingertips first, palm last.
    let mut poly = [Point2D::default(); 6];
    for (dst, tip) in poly.iter_mut().zip(tips.iter()) {
        *dst = tip.pos;
    }
    poly[5] = palm;

    let area = polygon_area(&poly);
    if !area.is_finite() {
        return Err(GeometryError::BadArea);
    }
    let spread = (area / max_area).min(1.0);
    Ok((1.0 - spread) as f32)
}

/// Unsigned shoelace area of a closed polygon.
pub fn polygon_area(points: &[Point2D]) -> f64 {
    if points.len() < 3 {
        return 0.0;
    }
    let mut twice = 0.0_f64;
    for (i, a) in points.iter().enumerate() {
        let b = points[(i + 1) % points.len()];
        twice += a.x as f64 * b.y as f64 - b.x as f64 * a.y as f64;
    }
    (twice * 0.5).abs()
}
